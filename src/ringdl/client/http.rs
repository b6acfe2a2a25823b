//! Blocking HTTP client for the Ring account API

use super::{open_target, AccountClient, DownloadOutcome};
use crate::config::{RingConfig, API_VERSION};
use crate::error::{RingError, Result};
use crate::model::{Device, DeviceFamily, DeviceGroups, Event};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use tracing::{debug, info};

const CLIENT_ID: &str = "ring_official_android";
const OAUTH_SCOPE: &str = "client";
const SESSION_OS: &str = "android";

pub struct HttpClient {
    http: Client,
    config: RingConfig,
    token: String,
}

impl HttpClient {
    /// Authenticates with `username`/`password` and opens an API session.
    pub fn login(config: RingConfig, username: &str, password: &str) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Self::authenticate(http, config, username, password)
    }

    fn authenticate(
        http: Client,
        config: RingConfig,
        username: &str,
        password: &str,
    ) -> Result<Self> {
        let token = request_token(&http, &config, username, password)?;
        let client = Self {
            http,
            config,
            token,
        };
        client.open_session()?;
        info!(api = %client.config.api_url, "session established");

        Ok(client)
    }

    fn open_session(&self) -> Result<()> {
        let hardware_id = uuid::Uuid::new_v4().to_string();
        let api_version = API_VERSION.to_string();
        debug!(%hardware_id, "opening session");

        let response = self
            .http
            .post(session_url(&self.config.api_url))
            .bearer_auth(&self.token)
            .form(&[
                ("device[os]", SESSION_OS),
                ("device[hardware_id]", hardware_id.as_str()),
                ("api_version", api_version.as_str()),
            ])
            .send()?;
        check(response)?;
        Ok(())
    }

    fn get(&self, url: String) -> RequestBuilder {
        debug!(%url, "GET");
        self.http
            .get(url)
            .bearer_auth(&self.token)
            .query(&[("api_version", API_VERSION)])
    }
}

impl AccountClient for HttpClient {
    fn device_groups(&self) -> Result<DeviceGroups> {
        let response = check(self.get(devices_url(&self.config.api_url)).send()?)?;
        let devices: RawDevices = response.json()?;
        Ok(devices.into_groups())
    }

    fn history(
        &self,
        device: &Device,
        limit: usize,
        older_than: Option<u64>,
    ) -> Result<Vec<Event>> {
        if !device.family.has_history() {
            debug!(device = %device.name, "no history for {}", device.family);
            return Ok(Vec::new());
        }

        let mut request = self
            .get(history_url(&self.config.api_url, device.id))
            .query(&[("limit", limit)]);
        if let Some(cursor) = older_than {
            request = request.query(&[("older_than", cursor)]);
        }

        let events: Vec<Event> = check(request.send()?)?.json()?;
        debug!(device = %device.name, ?older_than, count = events.len(), "history page");
        Ok(events)
    }

    fn recording_url(&self, event_id: u64) -> Result<String> {
        #[derive(Deserialize)]
        struct ShareUrl {
            url: String,
        }

        let response = self
            .get(share_url(&self.config.api_url, event_id))
            .query(&[("disable_redirect", "true")])
            .send()?;
        let share: ShareUrl = check(response)?.json()?;
        Ok(share.url)
    }

    fn download_recording(
        &self,
        event_id: u64,
        path: &Path,
        overwrite: bool,
    ) -> Result<DownloadOutcome> {
        // Skip before transferring anything; open_target still guards the race.
        if !overwrite && path.exists() {
            tracing::warn!(path = %path.display(), "file exists, not overwriting");
            return Ok(DownloadOutcome::Skipped);
        }

        let mut response =
            check(self.get(recording_url(&self.config.api_url, event_id)).send()?)?;
        let mut file = match open_target(path, overwrite)? {
            Some(file) => file,
            None => return Ok(DownloadOutcome::Skipped),
        };

        let bytes = response.copy_to(&mut file)?;
        info!(event_id, bytes, path = %path.display(), "recording saved");
        Ok(DownloadOutcome::Downloaded { bytes })
    }
}

fn request_token(
    http: &Client,
    config: &RingConfig,
    username: &str,
    password: &str,
) -> Result<String> {
    #[derive(Serialize)]
    struct TokenRequest<'a> {
        client_id: &'a str,
        grant_type: &'a str,
        scope: &'a str,
        username: &'a str,
        password: &'a str,
    }

    #[derive(Deserialize)]
    struct TokenResponse {
        access_token: String,
    }

    debug!(url = %config.oauth_url, "requesting access token");
    let response = http
        .post(&config.oauth_url)
        .json(&TokenRequest {
            client_id: CLIENT_ID,
            grant_type: "password",
            scope: OAUTH_SCOPE,
            username,
            password,
        })
        .send()?;

    let status = response.status();
    if status.as_u16() == 400 || status.as_u16() == 401 {
        let message = response.text().unwrap_or_default();
        return Err(RingError::Auth(message));
    }

    let token: TokenResponse = check(response)?.json()?;
    Ok(token.access_token)
}

fn check(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let message = response.text().unwrap_or_default();
    Err(RingError::Api { status, message })
}

fn session_url(api_url: &str) -> String {
    format!("{}/clients_api/session", api_url)
}

fn devices_url(api_url: &str) -> String {
    format!("{}/clients_api/ring_devices", api_url)
}

fn history_url(api_url: &str, device_id: u64) -> String {
    format!("{}/clients_api/doorbots/{}/history", api_url, device_id)
}

fn share_url(api_url: &str, event_id: u64) -> String {
    format!("{}/clients_api/dings/{}/share/play", api_url, event_id)
}

fn recording_url(api_url: &str, event_id: u64) -> String {
    format!("{}/clients_api/dings/{}/recording", api_url, event_id)
}

/// Body of `GET /clients_api/ring_devices`
#[derive(Debug, Deserialize)]
struct RawDevices {
    #[serde(default)]
    chimes: Vec<RawDevice>,
    #[serde(default)]
    doorbots: Vec<RawDevice>,
    #[serde(default)]
    authorized_doorbots: Vec<RawDevice>,
    #[serde(default)]
    stickup_cams: Vec<RawDevice>,
}

impl RawDevices {
    fn into_groups(self) -> DeviceGroups {
        let convert = |raw: Vec<RawDevice>, family: DeviceFamily| {
            raw.into_iter()
                .map(|d| d.into_device(family))
                .collect::<Vec<_>>()
        };

        let mut doorbells = convert(self.doorbots, DeviceFamily::Doorbell);
        doorbells.extend(convert(self.authorized_doorbots, DeviceFamily::Doorbell));

        DeviceGroups {
            chimes: convert(self.chimes, DeviceFamily::Chime),
            doorbells,
            stickup_cams: convert(self.stickup_cams, DeviceFamily::StickupCam),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawDevice {
    id: u64,
    #[serde(default)]
    description: String,
    kind: Option<String>,
    firmware_version: Option<String>,
    address: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    battery_life: Option<String>,
    time_zone: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl RawDevice {
    fn into_device(self, family: DeviceFamily) -> Device {
        Device {
            id: self.id,
            name: self.description,
            family,
            kind: self.kind,
            firmware: self.firmware_version,
            address: self.address,
            battery_life: self.battery_life,
            timezone: self.time_zone,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Battery level arrives as `"87"` on some devices and `87` on others.
fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
