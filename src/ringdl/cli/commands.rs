use super::credentials;
use super::print::{
    print_devices, print_download_banner, print_messages, print_reports, print_urls,
    ProgressPrinter,
};
use super::setup::Cli;
use clap::Parser;
use ringdl::api::RingApi;
use ringdl::client::http::HttpClient;
use ringdl::error::Result;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let credentials = credentials::collect(cli.username.clone(), cli.password.clone())?;
    let config = cli.config();
    tracing::debug!(?config, "starting");

    let page_size = config.page_size;
    let client = HttpClient::login(config, &credentials.username, &credentials.password)?;
    let api = RingApi::new(client, page_size);

    let devices = api.devices()?.devices;
    if cli.devices {
        print_devices(&devices);
    }

    if !cli.needs_events() {
        return Ok(());
    }

    let device_events = api.device_events(&devices)?.device_events;

    if cli.events {
        let result = api.event_report(&device_events);
        print_reports(&result.reports);
        print_messages(&result.messages);
    }

    if cli.urls {
        let result = api.recording_urls(&device_events)?;
        print_urls(&result.urls);
    }

    if cli.download_all {
        print_download_banner();
        let result = api.download_all(&device_events, &cli.output_dir, &mut ProgressPrinter)?;
        print_messages(&result.messages);
    }

    Ok(())
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "ringdl=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
