//! Frame loop: poll keys until the frame deadline, step once, draw once.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::{debug, info};

use crate::core::Game;
use crate::input::{InputCollector, KeyResponse};
use crate::term::{TermFrontend, Viewport};

/// Run until the player quits.
///
/// Every iteration lasts one `frame` period: key events are collected until
/// the deadline, then the game advances by exactly one step with the measured
/// delta time and the frame is drawn.
pub fn run<W: Write>(game: &mut Game, frontend: &mut TermFrontend<W>, frame: Duration) -> Result<()> {
    let mut input = InputCollector::new();
    let mut last_step = Instant::now();

    game.draw(frontend)?;

    loop {
        let deadline = last_step + frame;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if input.handle_key(key) == KeyResponse::Quit {
                        info!(
                            score = game.score().score,
                            high_score = game.score().high_score,
                            "quit"
                        );
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "terminal resized");
                    frontend.resize(Viewport::new(width, height));
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let delta = now.duration_since(last_step);
        last_step = now;

        game.update(&input.take(), delta);
        game.draw(frontend)?;
    }
}
