//! # API Facade
//!
//! `RingApi` is the single entry point the binary uses. It dispatches to the
//! command functions and returns structured `CmdResult`s; it never prints.
//!
//! ## Generic Over AccountClient
//!
//! `RingApi<C: AccountClient>` works with any client:
//! - Production: `RingApi<HttpClient>`
//! - Testing: `RingApi<InMemoryClient>`
//!
//! Tests here only check dispatch. The behaviour itself is tested in the
//! command modules.

use crate::client::AccountClient;
use crate::commands;
use crate::error::Result;
use crate::model::{Device, DeviceEvents};
use chrono::Local;
use std::path::Path;

pub struct RingApi<C: AccountClient> {
    client: C,
    page_size: usize,
}

impl<C: AccountClient> RingApi<C> {
    pub fn new(client: C, page_size: usize) -> Self {
        Self { client, page_size }
    }

    pub fn devices(&self) -> Result<commands::CmdResult> {
        commands::devices::run(&self.client)
    }

    pub fn device_events(&self, devices: &[Device]) -> Result<commands::CmdResult> {
        commands::history::run(&self.client, devices, self.page_size)
    }

    pub fn event_report(&self, device_events: &[DeviceEvents]) -> commands::CmdResult {
        commands::events::run(device_events)
    }

    pub fn recording_urls(&self, device_events: &[DeviceEvents]) -> Result<commands::CmdResult> {
        commands::urls::run(&self.client, device_events)
    }

    /// Downloads every recording into `dir`, naming files in the local timezone.
    pub fn download_all(
        &self,
        device_events: &[DeviceEvents],
        dir: &Path,
        progress: &mut dyn commands::DownloadProgress,
    ) -> Result<commands::CmdResult> {
        commands::download::run(&self.client, device_events, dir, &Local, progress)
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

pub use crate::commands::{
    CmdMessage, CmdResult, DownloadProgress, DownloadSummary, EventReport, EventStats,
    MessageLevel, NoProgress,
};
