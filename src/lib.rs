//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under `blockfall::{core,input,term,types}` and
//! holds the pieces of the binary that are worth testing on their own:
//! command-line configuration, logging setup and the frame loop.

pub mod app;
pub mod config;
pub mod logging;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
