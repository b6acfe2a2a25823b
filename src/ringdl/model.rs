use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The collection a device was listed under by the account API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceFamily {
    Chime,
    Doorbell,
    StickupCam,
}

impl DeviceFamily {
    /// The collection name the API uses for this family.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceFamily::Chime => "chimes",
            DeviceFamily::Doorbell => "doorbots",
            DeviceFamily::StickupCam => "stickup_cams",
        }
    }

    pub fn has_history(&self) -> bool {
        !matches!(self, DeviceFamily::Chime)
    }
}

impl fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Device {
    pub id: u64,
    pub name: String,
    pub family: DeviceFamily,
    /// Hardware model, e.g. `doorbell_v3`
    pub kind: Option<String>,
    pub firmware: Option<String>,
    pub address: Option<String>,
    pub battery_life: Option<String>,
    pub timezone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Device {
    pub fn new(id: u64, name: impl Into<String>, family: DeviceFamily) -> Self {
        Self {
            id,
            name: name.into(),
            family,
            kind: None,
            firmware: None,
            address: None,
            battery_life: None,
            timezone: None,
            latitude: None,
            longitude: None,
        }
    }
}

/// Device collections as returned by the account, before flattening.
#[derive(Debug, Clone, Default)]
pub struct DeviceGroups {
    pub chimes: Vec<Device>,
    pub doorbells: Vec<Device>,
    pub stickup_cams: Vec<Device>,
}

impl DeviceGroups {
    /// Chimes, then doorbells, then stickup cams. Order inside each group is kept.
    pub fn into_devices(self) -> Vec<Device> {
        let mut devices =
            Vec::with_capacity(self.chimes.len() + self.doorbells.len() + self.stickup_cams.len());
        devices.extend(self.chimes);
        devices.extend(self.doorbells);
        devices.extend(self.stickup_cams);
        devices
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    Motion,
    Ding,
    OnDemand,
    Other(String),
}

impl From<String> for EventKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "motion" => EventKind::Motion,
            "ding" => EventKind::Ding,
            "on_demand" => EventKind::OnDemand,
            _ => EventKind::Other(kind),
        }
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Motion => "motion".to_string(),
            EventKind::Ding => "ding".to_string(),
            EventKind::OnDemand => "on_demand".to_string(),
            EventKind::Other(other) => other,
        }
    }
}

/// A history entry. Fields the API sends beyond the ones modelled here are
/// kept in `extra` so the raw representation survives a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answered: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Event {
    pub fn new(id: u64, created_at: DateTime<Utc>, kind: EventKind) -> Self {
        Self {
            id,
            created_at,
            kind,
            answered: None,
            extra: serde_json::Map::new(),
        }
    }
}

/// A device together with every event gathered for it.
#[derive(Debug, Clone)]
pub struct DeviceEvents {
    pub device: Device,
    pub events: Vec<Event>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_keeps_unknown_values() {
        let event: Event = serde_json::from_str(
            r#"{"id": 42, "created_at": "2017-05-24T23:32:11.000Z", "kind": "alarm"}"#,
        )
        .unwrap();
        assert_eq!(event.kind, EventKind::Other("alarm".into()));

        let raw = serde_json::to_value(&event).unwrap();
        assert_eq!(raw["kind"], "alarm");
    }

    #[test]
    fn event_keeps_extra_fields() {
        let event: Event = serde_json::from_str(
            r#"{
                "id": 6431256426217437654,
                "created_at": "2017-05-24T23:32:11.000Z",
                "kind": "on_demand",
                "answered": true,
                "favorite": false,
                "recording": {"status": "ready"}
            }"#,
        )
        .unwrap();

        assert_eq!(event.id, 6431256426217437654);
        assert_eq!(event.kind, EventKind::OnDemand);
        assert_eq!(event.answered, Some(true));
        assert_eq!(event.extra["recording"]["status"], "ready");

        let raw = serde_json::to_value(&event).unwrap();
        assert_eq!(raw["favorite"], false);
        assert_eq!(raw["kind"], "on_demand");
    }

    #[test]
    fn omitted_fields_stay_omitted() {
        let event: Event = serde_json::from_str(
            r#"{"id": 3, "created_at": "2017-05-24T23:32:11Z", "kind": "ding"}"#,
        )
        .unwrap();
        assert_eq!(event.answered, None);

        let raw = serde_json::to_value(&event).unwrap();
        let keys: Vec<&String> = raw.as_object().unwrap().keys().collect();
        assert!(!keys.iter().any(|k| k.as_str() == "answered"));
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn flattening_keeps_group_order() {
        let groups = DeviceGroups {
            chimes: vec![Device::new(1, "Hall", DeviceFamily::Chime)],
            doorbells: vec![
                Device::new(2, "Front", DeviceFamily::Doorbell),
                Device::new(3, "Back", DeviceFamily::Doorbell),
            ],
            stickup_cams: vec![Device::new(4, "Garage", DeviceFamily::StickupCam)],
        };

        let ids: Vec<u64> = groups.into_devices().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn chimes_have_no_history() {
        assert!(!DeviceFamily::Chime.has_history());
        assert!(DeviceFamily::Doorbell.has_history());
        assert!(DeviceFamily::StickupCam.has_history());
    }
}
