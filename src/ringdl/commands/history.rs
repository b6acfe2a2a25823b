//! Cursor-based history paging.
//!
//! [`History`] walks one device's history lazily: each call to `next` asks
//! the client for one page older than the last event it has seen. The walk
//! ends at the first empty page. It is finite only if the API eventually
//! returns one, and it cannot be restarted.

use crate::client::AccountClient;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Device, DeviceEvents, Event};

pub struct History<'a, C: AccountClient> {
    client: &'a C,
    device: &'a Device,
    page_size: usize,
    cursor: Option<u64>,
    done: bool,
}

impl<'a, C: AccountClient> History<'a, C> {
    pub fn new(client: &'a C, device: &'a Device, page_size: usize) -> Self {
        Self {
            client,
            device,
            page_size,
            cursor: None,
            done: false,
        }
    }
}

impl<C: AccountClient> Iterator for History<'_, C> {
    type Item = Result<Vec<Event>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self
            .client
            .history(self.device, self.page_size, self.cursor)
        {
            Ok(page) if page.is_empty() => {
                self.done = true;
                None
            }
            Ok(page) => {
                self.cursor = page.last().map(|e| e.id);
                Some(Ok(page))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Every event of `device`, newest first.
pub fn device_events<C: AccountClient>(
    client: &C,
    device: &Device,
    page_size: usize,
) -> Result<Vec<Event>> {
    let mut events = Vec::new();
    for page in History::new(client, device, page_size) {
        events.extend(page?);
    }
    Ok(events)
}

pub fn run<C: AccountClient>(client: &C, devices: &[Device], page_size: usize) -> Result<CmdResult> {
    let mut all = Vec::with_capacity(devices.len());
    for device in devices {
        let events = device_events(client, device, page_size)?;
        tracing::debug!(device = %device.name, count = events.len(), "history collected");
        all.push(DeviceEvents {
            device: device.clone(),
            events,
        });
    }
    Ok(CmdResult::default().with_device_events(all))
}
