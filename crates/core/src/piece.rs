//! Active piece - the falling piece instance
//!
//! An [`ActivePiece`] is a plain value: kind, rotation and grid position. It is
//! not part of the [`Field`](crate::Field) until it locks. Movement helpers
//! return moved copies so callers can test a candidate before committing it.

use crate::catalog::{color_of, shape_of, PieceShape};
use crate::types::{PieceKind, Rgba, Rotation, BLOCKS_PER_PIECE};

/// Absolute grid coordinates of one block
pub type BlockPos = (i32, i32);

/// Currently falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl ActivePiece {
    pub fn new(kind: PieceKind, rotation: Rotation, x: i32, y: i32) -> Self {
        Self {
            kind,
            rotation,
            x,
            y,
        }
    }

    /// Piece in spawn orientation, centered horizontally on the top row
    pub fn spawn(kind: PieceKind, field_width: u8) -> Self {
        let x = (field_width as i32 - BLOCKS_PER_PIECE as i32) / 2;
        Self::new(kind, Rotation::SPAWN, x, 0)
    }

    /// Block offsets for the current rotation
    pub fn shape(&self) -> &'static PieceShape {
        shape_of(self.kind, self.rotation)
    }

    pub fn color(&self) -> Rgba {
        color_of(self.kind)
    }

    /// Absolute positions of the 4 blocks
    pub fn blocks(&self) -> [BlockPos; BLOCKS_PER_PIECE] {
        self.shape()
            .map(|(dx, dy)| (self.x + dx as i32, self.y + dy as i32))
    }

    /// Copy moved by (dx, dy)
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy with a different rotation at the same position
    pub fn rotated_to(&self, rotation: Rotation) -> Self {
        Self { rotation, ..*self }
    }
}
