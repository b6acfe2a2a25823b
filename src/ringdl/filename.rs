//! Recording filenames.
//!
//! A recording is saved as `<timestamp>_<event id>.mp4`, the timestamp being
//! the event creation time in the viewer's timezone, e.g.
//! `2017-05-24_19.32.11-04.00_6431256426217437654.mp4`. Spaces become `_` and
//! colons become `.` so the name is valid on every filesystem we write to.

use crate::model::Event;
use chrono::{Local, TimeZone};
use std::fmt::Display;

const EXTENSION: &str = ".mp4";

/// Filename for `event`, with its timestamp rendered in `tz`.
pub fn recording_filename<Tz>(event: &Event, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = event.created_at.with_timezone(tz);
    // Microsecond precision; a fraction only appears when it is non-zero at that precision.
    let pattern = if local.timestamp_subsec_micros() == 0 {
        "%Y-%m-%d %H:%M:%S%:z"
    } else {
        "%Y-%m-%d %H:%M:%S%.6f%:z"
    };
    let name = format!("{}_{}", local.format(pattern), event.id);

    name.replace(' ', "_").replace(':', ".") + EXTENSION
}

/// Filename for `event` in the system's local timezone.
pub fn local_recording_filename(event: &Event) -> String {
    recording_filename(event, &Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventKind;
    use chrono::{FixedOffset, TimeZone, Utc};

    fn event_at(id: u64, rfc3339: &str) -> Event {
        let created_at = chrono::DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc);
        Event::new(id, created_at, EventKind::Motion)
    }

    #[test]
    fn renders_in_the_given_timezone() {
        let event = event_at(6431256426217437654, "2017-05-24T23:32:11Z");
        let edt = FixedOffset::west_opt(4 * 3600).unwrap();

        assert_eq!(
            recording_filename(&event, &edt),
            "2017-05-24_19.32.11-04.00_6431256426217437654.mp4"
        );
    }

    #[test]
    fn includes_fraction_only_when_present() {
        let event = event_at(7, "2020-01-02T03:04:05.25Z");
        let utc = FixedOffset::east_opt(0).unwrap();

        assert_eq!(
            recording_filename(&event, &utc),
            "2020-01-02_03.04.05.250000+00.00_7.mp4"
        );
    }

    #[test]
    fn drops_sub_microsecond_fraction() {
        let created_at = Utc.timestamp_opt(1_500_000_000, 500).unwrap();
        let event = Event::new(8, created_at, EventKind::Ding);
        let utc = FixedOffset::east_opt(0).unwrap();

        assert_eq!(
            recording_filename(&event, &utc),
            "2017-07-14_02.40.00+00.00_8.mp4"
        );
    }

    #[test]
    fn is_deterministic_and_filesystem_safe() {
        let event = event_at(99, "2019-12-31T23:59:59Z");
        let first = local_recording_filename(&event);
        let second = local_recording_filename(&event);

        assert_eq!(first, second);
        assert!(!first.contains(' '));
        assert!(!first.contains(':'));
        assert!(first.ends_with("_99.mp4"));
    }
}
