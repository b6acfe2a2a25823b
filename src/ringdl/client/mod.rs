//! # Account Client Layer
//!
//! Everything that talks to the vendor account lives behind the
//! [`AccountClient`] trait. The rest of the crate (API facade, commands) only
//! sees devices, events, URLs and download outcomes.
//!
//! ## Implementations
//!
//! - [`http::HttpClient`]: the production client, a blocking `reqwest`
//!   session against the Ring account API. Authentication happens when the
//!   client is built, so holding one means holding a live session.
//! - `memory::InMemoryClient` (tests and the `test_utils` feature): canned
//!   devices, events and recordings, with every history request recorded so
//!   pagination can be asserted.
//!
//! ## Download Guard
//!
//! Both implementations open the target file through [`open_target`]. With
//! overwrite disabled the file is created with `create_new`, so an existing
//! recording is never truncated; the download is reported as
//! [`DownloadOutcome::Skipped`] instead.

use crate::error::Result;
use crate::model::{Device, DeviceGroups, Event};
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

pub mod http;
#[cfg(any(test, feature = "test_utils"))]
pub mod memory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    Downloaded { bytes: u64 },
    /// The target already existed and overwriting was not allowed
    Skipped,
}

/// Abstract interface to an authenticated account.
pub trait AccountClient {
    /// Device collections owned by (or shared with) the account
    fn device_groups(&self) -> Result<DeviceGroups>;

    /// One page of history for `device`, newest first.
    ///
    /// `older_than` is the id of the last event of the previous page. An
    /// empty page means there is nothing older.
    fn history(&self, device: &Device, limit: usize, older_than: Option<u64>)
        -> Result<Vec<Event>>;

    /// A time-limited URL for the recording of `event_id`
    fn recording_url(&self, event_id: u64) -> Result<String>;

    /// Write the recording of `event_id` to `path`.
    fn download_recording(
        &self,
        event_id: u64,
        path: &Path,
        overwrite: bool,
    ) -> Result<DownloadOutcome>;
}

/// Opens `path` for writing a recording. Returns `None` when the file exists
/// and `overwrite` is false; the existing file is left untouched.
pub fn open_target(path: &Path, overwrite: bool) -> Result<Option<File>> {
    if overwrite {
        return Ok(Some(File::create(path)?));
    }

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => Ok(Some(file)),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::warn!(path = %path.display(), "file exists, not overwriting");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn open_target_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("video.mp4");
        std::fs::write(&path, b"keep me").unwrap();

        assert!(open_target(&path, false).unwrap().is_none());
        assert_eq!(std::fs::read(&path).unwrap(), b"keep me");
    }

    #[test]
    fn open_target_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("video.mp4");

        let mut file = open_target(&path, false).unwrap().unwrap();
        file.write_all(b"new").unwrap();
        drop(file);

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn open_target_truncates_when_overwriting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("video.mp4");
        std::fs::write(&path, b"old contents").unwrap();

        let mut file = open_target(&path, true).unwrap().unwrap();
        file.write_all(b"new").unwrap();
        drop(file);

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }
}
