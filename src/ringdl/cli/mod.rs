//! # CLI Layer
//!
//! The binary's side of ringdl. This is the only place that:
//! - Parses flags and reads the `RINGDL_*` environment
//! - Prompts on the terminal
//! - Installs the tracing subscriber
//! - Writes to stdout
//!
//! ## Structure
//!
//! - `setup`: clap definitions and the config they produce
//! - `credentials`: flag-or-prompt credential collection
//! - `commands`: `run()`, the sequence of API calls
//! - `print`: output formatting

mod commands;
mod credentials;
mod print;
mod setup;

pub use commands::run;
