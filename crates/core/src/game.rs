//! Game state machine - title screen, playing, game over
//!
//! ```text
//! TitleScreen --start--> Playing --block-out--> GameOver --start--> TitleScreen
//! ```
//!
//! [`Game::update`] is called once per frame with that frame's input and the
//! elapsed time. Each phase's update returns the next phase. Only `Playing`
//! runs the simulation; the other phases wait for `start`.

use std::time::Duration;

use tracing::info;

use crate::render::Renderer;
use crate::rng::SeedSource;
use crate::scoring::ScoreState;
use crate::session::{Session, StepOutcome};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GamePhase, InputSnapshot};

/// Top-level game: current phase, score and the session being played
#[derive(Debug, Clone)]
pub struct Game {
    phase: GamePhase,
    score: ScoreState,
    /// Present in `Playing` and `GameOver`
    session: Option<Session>,
    seed_source: SeedSource,
    last_delta: Duration,
    games_started: u32,
}

impl Game {
    pub fn new(seed_source: SeedSource) -> Self {
        Self {
            phase: GamePhase::TitleScreen,
            score: ScoreState::new(),
            session: None,
            seed_source,
            last_delta: Duration::ZERO,
            games_started: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Mutable session access for harnesses that prepare a position
    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Frames per second implied by the last update's delta time
    pub fn fps(&self) -> f32 {
        let secs = self.last_delta.as_secs_f32();
        if secs > 0.0 {
            1.0 / secs
        } else {
            0.0
        }
    }

    /// Run one frame and return the phase the game is in afterwards
    pub fn update(&mut self, input: &InputSnapshot, delta: Duration) -> GamePhase {
        self.last_delta = delta;

        let next = match self.phase {
            GamePhase::TitleScreen => self.update_title(input),
            GamePhase::Playing => self.update_playing(input),
            GamePhase::GameOver => self.update_game_over(input),
        };

        if next != self.phase {
            info!(from = self.phase.as_str(), to = next.as_str(), "phase change");
            self.phase = next;
        }
        next
    }

    fn update_title(&mut self, input: &InputSnapshot) -> GamePhase {
        if !input.start {
            return GamePhase::TitleScreen;
        }
        self.start_session();
        GamePhase::Playing
    }

    fn update_playing(&mut self, input: &InputSnapshot) -> GamePhase {
        let Some(session) = self.session.as_mut() else {
            return GamePhase::TitleScreen;
        };

        match session.step(input, &mut self.score) {
            StepOutcome::Continue => GamePhase::Playing,
            StepOutcome::BlockOut => {
                info!(
                    score = self.score.score,
                    lines = self.score.lines,
                    level = self.score.level,
                    high_score = self.score.high_score,
                    "game over"
                );
                GamePhase::GameOver
            }
        }
    }

    fn update_game_over(&mut self, input: &InputSnapshot) -> GamePhase {
        if !input.start {
            return GamePhase::GameOver;
        }
        self.session = None;
        GamePhase::TitleScreen
    }

    /// Reset score (keeping the high score) and begin a fresh session
    fn start_session(&mut self) {
        self.score.reset_for_new_game();
        let seed = self.seed_source.seed();
        self.session = Some(Session::new(seed));
        self.games_started = self.games_started.wrapping_add(1);
        info!(seed, game = self.games_started, "new game");
    }

    /// Borrowed view of the current frame
    pub fn snapshot(&self) -> GameSnapshot<'_> {
        let fps = self.fps();
        match (&self.session, self.phase) {
            (Some(session), GamePhase::Playing | GamePhase::GameOver) => GameSnapshot {
                phase: self.phase,
                field: Some(session.field()),
                active: Some(ActiveSnapshot::from(session.active())),
                score: self.score,
                frames_per_fall_step: session.fall_timer().frames_per_fall_step,
                fps,
            },
            _ => GameSnapshot::title(self.score, fps),
        }
    }

    /// Report the current frame to a renderer
    pub fn draw<R: Renderer>(&self, renderer: &mut R) -> Result<(), R::Error> {
        renderer.draw(&self.snapshot())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(SeedSource::default())
    }
}
