//! Terminal game renderer.
//!
//! A small, game-oriented rendering layer: snapshots are drawn into a plain
//! framebuffer, which is then flushed to the terminal as a diff against the
//! previous frame. No widget toolkit is involved.
//!
//! - `core` stays deterministic and I/O-free
//! - field cells are 2 columns wide to keep them roughly square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TermFrontend, TerminalRenderer};
