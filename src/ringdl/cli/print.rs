use colored::Colorize;
use ringdl::api::{CmdMessage, DownloadProgress, EventReport, MessageLevel};
use ringdl::client::DownloadOutcome;
use ringdl::model::Device;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn or_unknown<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "unknown".to_string())
}

pub(super) fn print_devices(devices: &[Device]) {
    println!("Number of devices: {}", devices.len());
    for device in devices {
        println!("Device name: {}", device.name.bold());
        println!("Device firmware: {}", or_unknown(&device.firmware));
        println!("Device address: {}", or_unknown(&device.address));
        println!("Device battery life: {}", or_unknown(&device.battery_life));
        println!("Device family: {}", device.family);
        println!("Device timezone: {}", or_unknown(&device.timezone));
        println!("Device latitude: {}", or_unknown(&device.latitude));
        println!("Device longitude: {}\n", or_unknown(&device.longitude));
    }
}

pub(super) fn print_reports(reports: &[EventReport]) {
    for report in reports {
        println!("Device: {}", report.device_name.bold());
        println!("Total videos: {}", report.stats.total);
        println!("Ding triggered: {}", report.stats.ding);
        println!("Motion triggered: {}", report.stats.motion);
        println!("On-Demand triggered: {}\n", report.stats.on_demand);

        if !report.events.is_empty() {
            println!("Events:");
        }
        for event in &report.events {
            match serde_json::to_string(event) {
                Ok(raw) => println!("{}", raw),
                Err(_) => println!("{:?}", event),
            }
        }
        println!();
    }
}

pub(super) fn print_urls(urls: &[String]) {
    for url in urls {
        println!("{}", url);
    }
}

pub(super) fn print_download_banner() {
    println!("\tDownloading all videos linked on your Ring account.");
    println!("\tThis may take some time....\n");
}

/// Prints one line per recording as the download goes.
pub(super) struct ProgressPrinter;

impl DownloadProgress for ProgressPrinter {
    fn device_started(&mut self, device: &Device, total: usize) {
        println!(
            "\tProcessing and downloading the next {} videos from {}",
            total,
            device.name.bold()
        );
    }

    fn downloading(&mut self, position: usize, total: usize, filename: &str) {
        println!("\t{}/{} Downloading {}", position, total, filename);
    }

    fn finished(&mut self, _filename: &str, outcome: DownloadOutcome) {
        if outcome == DownloadOutcome::Skipped {
            println!("\t{}", "already on disk, skipped".dimmed());
        }
    }
}
