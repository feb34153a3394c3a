//! Terminal input.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and folds
//! them into one [`crate::types::InputSnapshot`] per simulation step.

pub mod collector;
pub mod map;

pub use blockfall_types as types;

pub use collector::{InputCollector, KeyResponse};
pub use map::{handle_key_event, should_quit};
