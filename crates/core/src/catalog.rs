//! Piece catalog - block offsets and display colors for every piece kind
//!
//! Each kind has four pre-baked rotation states. Offsets are `(x, y)` relative
//! to the piece origin with y growing downward; no rotation math happens at
//! runtime. Rotation indices step down on clockwise input and up on
//! counter-clockwise input (see [`Rotation`]).

use crate::types::{PieceKind, Rgba, Rotation, BLOCKS_PER_PIECE, ROTATION_COUNT};

/// Offset of a single block relative to the piece origin
pub type BlockOffset = (i8, i8);

/// Shape of a piece in one rotation - 4 block offsets from the origin
pub type PieceShape = [BlockOffset; BLOCKS_PER_PIECE];

/// Static definition of one piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDef {
    pub rotations: [PieceShape; ROTATION_COUNT as usize],
    pub color: Rgba,
}

/// Indexed by [`PieceKind::index`].
static CATALOG: [PieceDef; 7] = [
    // I
    PieceDef {
        rotations: [
            [(0, 1), (1, 1), (2, 1), (3, 1)],
            [(2, 0), (2, 1), (2, 2), (2, 3)],
            [(0, 2), (1, 2), (2, 2), (3, 2)],
            [(1, 0), (1, 1), (1, 2), (1, 3)],
        ],
        color: Rgba(0x00ff_ffff),
    },
    // J
    PieceDef {
        rotations: [
            [(0, 0), (0, 1), (1, 1), (2, 1)],
            [(1, 0), (2, 0), (1, 1), (1, 2)],
            [(0, 1), (1, 1), (2, 1), (2, 2)],
            [(1, 0), (1, 1), (0, 2), (1, 2)],
        ],
        color: Rgba(0x0000_ffff),
    },
    // L
    PieceDef {
        rotations: [
            [(2, 0), (0, 1), (1, 1), (2, 1)],
            [(1, 0), (1, 1), (1, 2), (2, 2)],
            [(0, 1), (1, 1), (2, 1), (0, 2)],
            [(0, 0), (1, 0), (1, 1), (1, 2)],
        ],
        color: Rgba(0xffaa_00ff),
    },
    // O: identical in every rotation
    PieceDef {
        rotations: [[(1, 0), (2, 0), (1, 1), (2, 1)]; 4],
        color: Rgba(0xffff_00ff),
    },
    // S
    PieceDef {
        rotations: [
            [(1, 0), (2, 0), (0, 1), (1, 1)],
            [(1, 0), (1, 1), (2, 1), (2, 2)],
            [(1, 1), (2, 1), (0, 2), (1, 2)],
            [(0, 0), (0, 1), (1, 1), (1, 2)],
        ],
        color: Rgba(0x00ff_00ff),
    },
    // T
    PieceDef {
        rotations: [
            [(1, 0), (0, 1), (1, 1), (2, 1)],
            [(1, 0), (1, 1), (2, 1), (1, 2)],
            [(0, 1), (1, 1), (2, 1), (1, 2)],
            [(1, 0), (0, 1), (1, 1), (1, 2)],
        ],
        color: Rgba(0x9900_ffff),
    },
    // Z
    PieceDef {
        rotations: [
            [(0, 0), (1, 0), (1, 1), (2, 1)],
            [(2, 0), (1, 1), (2, 1), (1, 2)],
            [(0, 1), (1, 1), (1, 2), (2, 2)],
            [(1, 0), (0, 1), (1, 1), (0, 2)],
        ],
        color: Rgba(0xff00_00ff),
    },
];

/// Full definition (all rotations plus color) for a piece kind.
pub fn definition(kind: PieceKind) -> &'static PieceDef {
    &CATALOG[kind.index()]
}

/// Get the block offsets for a piece kind and rotation
pub fn shape_of(kind: PieceKind, rotation: Rotation) -> &'static PieceShape {
    &definition(kind).rotations[rotation.index()]
}

/// Display color of a piece kind
pub fn color_of(kind: PieceKind) -> Rgba {
    definition(kind).color
}
