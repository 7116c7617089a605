//! CLI module for the csvdesc binary

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::{Cli, LogLevel, OutputFormat, parse_args};
pub use error::CliError;

use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber
///
/// An explicit level wins over `RUST_LOG`; with neither, warnings and
/// errors are shown.
pub fn init_logging(level: Option<LogLevel>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level.as_filter()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
