//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::Level;

use crate::core::SeedSource;
use crate::types::FRAME_MS;

#[derive(Debug, Clone, Parser)]
#[command(name = "blockfall", version, about = "Falling-block puzzle game for the terminal")]
pub struct Cli {
    #[arg(long, help = "Use this seed for every game instead of the wall clock")]
    pub seed: Option<u32>,

    #[arg(
        long,
        default_value_t = FRAME_MS,
        value_parser = clap::value_parser!(u32).range(1..=1000),
        help = "Milliseconds per frame; gravity counts frames"
    )]
    pub frame_ms: u32,

    #[arg(long, help = "Write logs to this file (the terminal is busy drawing)")]
    pub log_file: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)")]
    pub verbose: u8,
}

impl Cli {
    pub fn seed_source(&self) -> SeedSource {
        self.seed.map_or(SeedSource::Clock, SeedSource::Fixed)
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_ms as u64)
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
