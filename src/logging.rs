//! Tracing setup.
//!
//! The terminal is in raw mode on the alternate screen while the game runs,
//! so log lines go to a file. Without `--log-file` no subscriber is installed
//! and events are discarded.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use crate::config::Cli;

/// Install the global subscriber. Returns whether logging is active.
pub fn init(cli: &Cli) -> Result<bool> {
    let Some(path) = cli.log_file.as_ref() else {
        return Ok(false);
    };

    let file = File::create(path)
        .with_context(|| format!("create log file {}", path.display()))?;
    let level = cli.log_level();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(LevelFilter::from_level(level))
        .try_init()
        .context("install tracing subscriber")?;

    info!(%level, path = %path.display(), "logging initialized");
    Ok(true)
}
