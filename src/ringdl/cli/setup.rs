use clap::Parser;
use ringdl::config::{RingConfig, DEFAULT_API_URL, DEFAULT_OAUTH_URL, DEFAULT_PAGE_SIZE};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "ringdl", version)]
#[command(
    about = "List Ring doorbell devices and events, and download their recordings",
    long_about = None
)]
pub struct Cli {
    /// Username for the Ring account (prompted when omitted)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password for the Ring account (prompted when omitted)
    #[arg(short, long)]
    pub password: Option<String>,

    /// List the devices
    #[arg(long)]
    pub devices: bool,

    /// List the device events
    #[arg(long)]
    pub events: bool,

    /// List the recording URLs
    #[arg(long)]
    pub urls: bool,

    /// Download every recording on the account
    #[arg(long)]
    pub download_all: bool,

    /// Directory recordings are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, env = "RINGDL_OAUTH_URL", default_value = DEFAULT_OAUTH_URL, hide = true)]
    pub oauth_url: String,

    #[arg(long, env = "RINGDL_API_URL", default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,

    #[arg(long, env = "RINGDL_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE, hide = true)]
    pub page_size: usize,

    /// Request timeout in seconds
    #[arg(long, env = "RINGDL_TIMEOUT", hide = true)]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Whether any requested output needs the event history.
    pub fn needs_events(&self) -> bool {
        self.events || self.urls || self.download_all
    }

    pub fn config(&self) -> RingConfig {
        RingConfig::default()
            .with_oauth_url(&self.oauth_url)
            .with_api_url(&self.api_url)
            .with_page_size(self.page_size)
            .with_timeout(self.timeout.map(Duration::from_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ringdl").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_default_to_off() {
        let cli = parse(&[]);
        assert!(cli.username.is_none());
        assert!(cli.password.is_none());
        assert!(!cli.devices);
        assert!(!cli.needs_events());
        assert_eq!(cli.output_dir, PathBuf::from("."));
    }

    #[test]
    fn short_and_long_credentials() {
        let cli = parse(&["-u", "me@example.com", "--password", "hunter2"]);
        assert_eq!(cli.username.as_deref(), Some("me@example.com"));
        assert_eq!(cli.password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn any_event_mode_needs_events() {
        assert!(parse(&["--events"]).needs_events());
        assert!(parse(&["--urls"]).needs_events());
        assert!(parse(&["--download-all"]).needs_events());
        assert!(!parse(&["--devices"]).needs_events());
    }

    #[test]
    fn config_overrides() {
        let cli = parse(&[
            "--api-url",
            "http://127.0.0.1:8080/",
            "--page-size",
            "25",
            "--timeout",
            "5",
        ]);
        let config = cli.config();
        assert_eq!(config.api_url, "http://127.0.0.1:8080");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
