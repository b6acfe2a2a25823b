use crate::client::AccountClient;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run<C: AccountClient>(client: &C) -> Result<CmdResult> {
    let devices = client.device_groups()?.into_devices();
    tracing::debug!(count = devices.len(), "devices listed");
    Ok(CmdResult::default().with_devices(devices))
}
