use crate::client::AccountClient;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::DeviceEvents;

/// Recording URLs for every event, device by device.
pub fn run<C: AccountClient>(client: &C, device_events: &[DeviceEvents]) -> Result<CmdResult> {
    let urls = device_events
        .iter()
        .flat_map(|de| de.events.iter())
        .map(|event| client.recording_url(event.id))
        .collect::<Result<Vec<_>>>()?;

    Ok(CmdResult::default().with_urls(urls))
}
