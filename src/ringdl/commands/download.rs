use crate::client::{AccountClient, DownloadOutcome};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filename::recording_filename;
use crate::model::{Device, DeviceEvents};
use chrono::TimeZone;
use std::fmt::Display;
use std::path::Path;

/// Receives progress while recordings are downloaded.
pub trait DownloadProgress {
    fn device_started(&mut self, device: &Device, total: usize);

    /// Called before the transfer of the `position`th (1-based) recording.
    fn downloading(&mut self, position: usize, total: usize, filename: &str);

    fn finished(&mut self, _filename: &str, _outcome: DownloadOutcome) {}
}

pub struct NoProgress;

impl DownloadProgress for NoProgress {
    fn device_started(&mut self, _device: &Device, _total: usize) {}
    fn downloading(&mut self, _position: usize, _total: usize, _filename: &str) {}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    pub downloaded: usize,
    pub skipped: usize,
    pub bytes: u64,
}

/// Downloads every recording into `dir`, never overwriting existing files.
///
/// The first failure aborts the run; recordings saved before it stay on disk.
pub fn run<C, Tz>(
    client: &C,
    device_events: &[DeviceEvents],
    dir: &Path,
    tz: &Tz,
    progress: &mut dyn DownloadProgress,
) -> Result<CmdResult>
where
    C: AccountClient,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut summary = DownloadSummary::default();

    for de in device_events {
        let total = de.events.len();
        progress.device_started(&de.device, total);

        for (i, event) in de.events.iter().enumerate() {
            let filename = recording_filename(event, tz);
            progress.downloading(i + 1, total, &filename);

            let outcome = client.download_recording(event.id, &dir.join(&filename), false)?;
            match outcome {
                DownloadOutcome::Downloaded { bytes } => {
                    summary.downloaded += 1;
                    summary.bytes += bytes;
                }
                DownloadOutcome::Skipped => summary.skipped += 1,
            }
            progress.finished(&filename, outcome);
        }
    }

    let mut result = CmdResult::default().with_download(summary);
    result.add_message(CmdMessage::success(format!(
        "Downloaded {} recording(s)",
        summary.downloaded
    )));
    if summary.skipped > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Skipped {} recording(s) already on disk",
            summary.skipped
        )));
    }
    Ok(result)
}
