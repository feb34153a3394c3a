//! Read-only view of the game handed to renderers once per frame.

use crate::field::Field;
use crate::piece::{ActivePiece, BlockPos};
use crate::scoring::ScoreState;
use crate::types::{GamePhase, PieceKind, Rgba, BLOCKS_PER_PIECE};

/// The falling piece as a renderer needs it: absolute blocks and a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub color: Rgba,
    pub blocks: [BlockPos; BLOCKS_PER_PIECE],
}

impl From<&ActivePiece> for ActiveSnapshot {
    fn from(value: &ActivePiece) -> Self {
        Self {
            kind: value.kind,
            color: value.color(),
            blocks: value.blocks(),
        }
    }
}

/// Everything drawable about one frame.
///
/// `field` and `active` are `None` on the title screen. Borrowing the field
/// keeps per-frame reporting allocation-free.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot<'a> {
    pub phase: GamePhase,
    pub field: Option<&'a Field>,
    pub active: Option<ActiveSnapshot>,
    pub score: ScoreState,
    pub frames_per_fall_step: i32,
    /// Frames per second derived from the last step's delta time.
    pub fps: f32,
}

impl<'a> GameSnapshot<'a> {
    /// Snapshot of the title screen
    pub fn title(score: ScoreState, fps: f32) -> Self {
        Self {
            phase: GamePhase::TitleScreen,
            field: None,
            active: None,
            score,
            frames_per_fall_step: 0,
            fps,
        }
    }

    /// Whether the field view (grid, piece, score panel) should be drawn
    pub fn shows_field(&self) -> bool {
        matches!(self.phase, GamePhase::Playing | GamePhase::GameOver)
    }
}
