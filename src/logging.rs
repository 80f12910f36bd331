//! Logging setup
//!
//! The TUI owns the terminal, so log records only go to a file. Without a
//! log file no logger is installed and `log` macros are no-ops.

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::File;
use std::path::Path;

/// Install the global logger writing to `log_file`
///
/// Defaults to `info`; `RUST_LOG` overrides the level.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a logger is already set.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("logger already initialized")
}
