//! Renderer capability - the presentation seam of the core.
//!
//! The core never draws. Once per frame it hands a [`GameSnapshot`] to whatever
//! implements [`Renderer`]: a terminal, a test recorder, a headless counter.

use crate::snapshot::GameSnapshot;

pub trait Renderer {
    /// Error produced by the presentation backend
    type Error;

    /// Present one frame
    fn draw(&mut self, snapshot: &GameSnapshot<'_>) -> Result<(), Self::Error>;
}
