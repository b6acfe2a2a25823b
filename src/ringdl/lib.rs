//! # ringdl Architecture
//!
//! ringdl lists the devices on a Ring account, walks each device's event
//! history, and prints or downloads the recordings. The library does the
//! work; the binary only parses flags, prompts for credentials and prints.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Flags, credential prompts, logging setup, printing       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Device flattening, history paging, stats, downloads      │
//! │  - Operates on Rust types, never prints                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client Layer (client/)                                     │
//! │  - Abstract AccountClient trait                             │
//! │  - HttpClient (production), InMemoryClient (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Run Order
//!
//! One run is strictly sequential: authenticate, list devices, then (only if
//! events, URLs or downloads were asked for) page through every device's
//! history, then report. The first error ends the run.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Logic for each step
//! - [`client`]: Account client trait and implementations
//! - [`model`]: `Device`, `Event` and friends
//! - [`filename`]: Recording filenames
//! - [`config`]: Endpoint and transport settings
//! - [`error`]: Error types

pub mod api;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod filename;
pub mod model;
