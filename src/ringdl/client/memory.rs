use super::{open_target, AccountClient, DownloadOutcome};
use crate::error::{RingError, Result};
use crate::model::{Device, DeviceGroups, Event};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::path::Path;

/// A history request as seen by [`InMemoryClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub device_id: u64,
    pub limit: usize,
    pub older_than: Option<u64>,
}

/// Account client backed by in-memory fixtures.
#[derive(Debug, Default)]
pub struct InMemoryClient {
    groups: DeviceGroups,
    history: HashMap<u64, Vec<Event>>,
    recordings: HashMap<u64, Vec<u8>>,
    broken_recordings: HashSet<u64>,
    requests: RefCell<Vec<HistoryRequest>>,
}

impl InMemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chime(mut self, device: Device) -> Self {
        self.groups.chimes.push(device);
        self
    }

    pub fn with_doorbell(mut self, device: Device) -> Self {
        self.groups.doorbells.push(device);
        self
    }

    pub fn with_stickup_cam(mut self, device: Device) -> Self {
        self.groups.stickup_cams.push(device);
        self
    }

    /// Appends `events` (newest first) to the history of `device_id`.
    pub fn with_events(mut self, device_id: u64, events: Vec<Event>) -> Self {
        self.history.entry(device_id).or_default().extend(events);
        self
    }

    pub fn with_recording(mut self, event_id: u64, bytes: impl Into<Vec<u8>>) -> Self {
        self.recordings.insert(event_id, bytes.into());
        self
    }

    /// Downloads of `event_id` fail with an API error.
    pub fn with_broken_recording(mut self, event_id: u64) -> Self {
        self.broken_recordings.insert(event_id);
        self
    }

    /// Every history request made so far, in order
    pub fn requests(&self) -> Vec<HistoryRequest> {
        self.requests.borrow().clone()
    }
}

impl AccountClient for InMemoryClient {
    fn device_groups(&self) -> Result<DeviceGroups> {
        Ok(self.groups.clone())
    }

    fn history(
        &self,
        device: &Device,
        limit: usize,
        older_than: Option<u64>,
    ) -> Result<Vec<Event>> {
        self.requests.borrow_mut().push(HistoryRequest {
            device_id: device.id,
            limit,
            older_than,
        });

        let events = match self.history.get(&device.id) {
            Some(events) => events,
            None => return Ok(Vec::new()),
        };

        let start = match older_than {
            None => 0,
            Some(cursor) => match events.iter().position(|e| e.id == cursor) {
                Some(pos) => pos + 1,
                None => return Ok(Vec::new()),
            },
        };

        Ok(events.iter().skip(start).take(limit).cloned().collect())
    }

    fn recording_url(&self, event_id: u64) -> Result<String> {
        Ok(format!("memory://recordings/{}.mp4", event_id))
    }

    fn download_recording(
        &self,
        event_id: u64,
        path: &Path,
        overwrite: bool,
    ) -> Result<DownloadOutcome> {
        if self.broken_recordings.contains(&event_id) {
            return Err(RingError::Api {
                status: 404,
                message: format!("recording {} not found", event_id),
            });
        }

        let mut file = match open_target(path, overwrite)? {
            Some(file) => file,
            None => return Ok(DownloadOutcome::Skipped),
        };

        let bytes = self
            .recordings
            .get(&event_id)
            .cloned()
            .unwrap_or_else(|| format!("recording {}", event_id).into_bytes());
        file.write_all(&bytes)?;

        Ok(DownloadOutcome::Downloaded {
            bytes: bytes.len() as u64,
        })
    }
}

// --- Test Fixtures ---

pub mod fixtures {
    use crate::model::{Device, DeviceFamily, Event, EventKind};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    pub fn doorbell(id: u64, name: &str) -> Device {
        let mut device = Device::new(id, name, DeviceFamily::Doorbell);
        device.kind = Some("doorbell_v3".to_string());
        device.firmware = Some("1.9.3".to_string());
        device.address = Some("1 Main St".to_string());
        device.battery_life = Some("87".to_string());
        device.timezone = Some("America/New_York".to_string());
        device.latitude = Some(40.7128);
        device.longitude = Some(-74.006);
        device
    }

    pub fn chime(id: u64, name: &str) -> Device {
        Device::new(id, name, DeviceFamily::Chime)
    }

    pub fn stickup_cam(id: u64, name: &str) -> Device {
        Device::new(id, name, DeviceFamily::StickupCam)
    }

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2017, 5, 24, 23, 32, 11).unwrap()
    }

    pub fn event(id: u64, kind: EventKind) -> Event {
        Event::new(id, epoch() - Duration::minutes(id as i64), kind)
    }

    /// `count` motion events with descending ids starting at `first_id`.
    pub fn events(first_id: u64, count: usize) -> Vec<Event> {
        (0..count as u64)
            .map(|offset| event(first_id - offset, EventKind::Motion))
            .collect()
    }
}
