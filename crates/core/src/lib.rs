//! Core game logic - pure, deterministic and testable
//!
//! This crate holds every rule of the game and none of its presentation. It
//! does no I/O: frames are reported through the [`Renderer`] trait, input
//! arrives as an [`InputSnapshot`](types::InputSnapshot) per step.
//!
//! # Module Structure
//!
//! - [`catalog`]: block offsets and colors for the seven piece kinds
//! - [`field`]: the 10x20 grid of locked cells and row collapse
//! - [`piece`]: the falling piece as a value
//! - [`resolver`]: overlap test, locking and line clearing
//! - [`scoring`]: line scores, levels and frame-counted gravity
//! - [`rng`]: seeded uniform piece selection
//! - [`session`]: one game in progress and its per-step update
//! - [`game`]: title / playing / game over state machine
//! - [`snapshot`], [`render`]: what a renderer receives each frame
//!
//! # Rules
//!
//! - Pieces spawn centered on the top row; a blocked spawn ends the game.
//! - Clockwise rotation tries the same column, then one left, then one right.
//!   Counter-clockwise rotation is unchecked.
//! - Gravity counts frames: one row every `frames_per_fall_step` steps,
//!   starting at 48 and losing 2 per level.
//! - A lock scores `[0, 40, 100, 300, 1200][lines] * (level + 1)` plus the
//!   rows the piece was hard dropped.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use blockfall_core::{Game, SeedSource};
//! use blockfall_core::types::{GameAction, GamePhase, InputSnapshot};
//!
//! let mut game = Game::new(SeedSource::Fixed(12345));
//! let frame = Duration::from_millis(16);
//!
//! game.update(&InputSnapshot::with(GameAction::Start), frame);
//! assert_eq!(game.phase(), GamePhase::Playing);
//!
//! // Hard drop onto the empty field scores the rows descended
//! game.update(&InputSnapshot::with(GameAction::HardDrop), frame);
//! assert!(game.score().score > 0);
//! ```

pub mod catalog;
pub mod field;
pub mod game;
pub mod piece;
pub mod render;
pub mod resolver;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use catalog::{color_of, shape_of, BlockOffset, PieceDef, PieceShape};
pub use field::Field;
pub use game::Game;
pub use piece::{ActivePiece, BlockPos};
pub use render::Renderer;
pub use resolver::{clear_full_rows, lock_piece, overlaps, LockOutcome};
pub use rng::{SeedSource, SimpleRng};
pub use scoring::{calculate_line_score, level_for_lines, FallTimer, ScoreEvent, ScoreState};
pub use session::{Session, StepOutcome};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
