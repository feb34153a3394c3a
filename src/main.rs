//! Blockfall terminal runner.
//!
//! Parses the command line, sets up logging, takes over the terminal and runs
//! the frame loop. The terminal is restored on every exit path.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use blockfall::app;
use blockfall::config::Cli;
use blockfall::core::Game;
use blockfall::logging;
use blockfall::term::{TermFrontend, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli)?;
    info!(?cli, "starting blockfall");

    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut frontend = TermFrontend::new(TerminalRenderer::new(), Viewport::new(width, height));

    if let Err(err) = frontend.terminal_mut().enter() {
        let _ = frontend.terminal_mut().exit();
        return Err(err.context("set up terminal"));
    }

    let mut game = Game::new(cli.seed_source());
    let result = app::run(&mut game, &mut frontend, cli.frame_duration());

    // Always try to restore terminal state.
    let restored = frontend.terminal_mut().exit();
    if let Err(err) = &result {
        error!(error = %err, "frame loop failed");
    }

    result.context("frame loop")?;
    restored.context("restore terminal")
}
