use crate::commands::{CmdMessage, CmdResult};
use crate::model::{DeviceEvents, Event, EventKind};

/// Event counts for one device's history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventStats {
    pub total: usize,
    pub motion: usize,
    pub ding: usize,
    pub on_demand: usize,
}

impl EventStats {
    pub fn tally(events: &[Event]) -> Self {
        events.iter().fold(Self::default(), |mut stats, event| {
            stats.total += 1;
            match event.kind {
                EventKind::Motion => stats.motion += 1,
                EventKind::Ding => stats.ding += 1,
                EventKind::OnDemand => stats.on_demand += 1,
                EventKind::Other(_) => {}
            }
            stats
        })
    }
}

#[derive(Debug, Clone)]
pub struct EventReport {
    pub device_name: String,
    pub stats: EventStats,
    pub events: Vec<Event>,
}

/// Per-device statistics. Totals are per device; the account-wide total is
/// reported once, as a closing message.
pub fn run(device_events: &[DeviceEvents]) -> CmdResult {
    let reports: Vec<EventReport> = device_events
        .iter()
        .map(|de| EventReport {
            device_name: de.device.name.clone(),
            stats: EventStats::tally(&de.events),
            events: de.events.clone(),
        })
        .collect();

    let account_total: usize = reports.iter().map(|r| r.stats.total).sum();

    let mut result = CmdResult::default().with_reports(reports);
    result.add_message(CmdMessage::info(format!(
        "Total videos on account: {}",
        account_total
    )));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::memory::fixtures::{doorbell, event, stickup_cam};

    #[test]
    fn tallies_by_kind() {
        let events = vec![
            event(3, EventKind::Motion),
            event(2, EventKind::Ding),
            event(1, EventKind::Motion),
        ];

        assert_eq!(
            EventStats::tally(&events),
            EventStats {
                total: 3,
                motion: 2,
                ding: 1,
                on_demand: 0,
            }
        );
    }

    #[test]
    fn unknown_kinds_count_towards_total_only() {
        let events = vec![
            event(2, EventKind::OnDemand),
            event(1, EventKind::Other("alarm".into())),
        ];

        let stats = EventStats::tally(&events);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.on_demand, 1);
        assert_eq!(stats.motion + stats.ding, 0);
    }

    #[test]
    fn reports_per_device_and_account_total() {
        let device_events = vec![
            DeviceEvents {
                device: doorbell(1, "Front"),
                events: vec![event(3, EventKind::Motion), event(2, EventKind::Ding)],
            },
            DeviceEvents {
                device: stickup_cam(2, "Garage"),
                events: vec![event(9, EventKind::Motion)],
            },
        ];

        let result = run(&device_events);
        assert_eq!(result.reports.len(), 2);
        assert_eq!(result.reports[0].device_name, "Front");
        assert_eq!(result.reports[0].stats.total, 2);
        assert_eq!(result.reports[1].stats.total, 1);
        assert_eq!(result.messages[0].content, "Total videos on account: 3");
    }
}
