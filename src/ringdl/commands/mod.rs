use crate::model::{Device, DeviceEvents};

pub mod devices;
pub mod download;
pub mod events;
pub mod history;
pub mod urls;

pub use download::{DownloadProgress, DownloadSummary, NoProgress};
pub use events::{EventReport, EventStats};

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub devices: Vec<Device>,
    pub device_events: Vec<DeviceEvents>,
    pub reports: Vec<EventReport>,
    pub urls: Vec<String>,
    pub download: Option<DownloadSummary>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_devices(mut self, devices: Vec<Device>) -> Self {
        self.devices = devices;
        self
    }

    pub fn with_device_events(mut self, device_events: Vec<DeviceEvents>) -> Self {
        self.device_events = device_events;
        self
    }

    pub fn with_reports(mut self, reports: Vec<EventReport>) -> Self {
        self.reports = reports;
        self
    }

    pub fn with_urls(mut self, urls: Vec<String>) -> Self {
        self.urls = urls;
        self
    }

    pub fn with_download(mut self, summary: DownloadSummary) -> Self {
        self.download = Some(summary);
        self
    }
}
