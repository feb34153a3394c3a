//! Collision and placement rules
//!
//! Pure functions over a [`Field`] and an [`ActivePiece`]. Leaving the field
//! counts as an overlap, so one test covers walls, floor, stack and the
//! block-out check at spawn.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::field::Field;
use crate::piece::ActivePiece;

/// Rows removed by one lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockOutcome {
    /// Total number of rows collapsed.
    pub lines_cleared: u32,
    /// Indices of the collapsed rows in scan order (top to bottom). A single
    /// piece spans at most four rows, so only the first four are recorded.
    pub cleared_rows: ArrayVec<usize, 4>,
}

/// Whether any block of `piece` is outside the field or on an occupied cell
pub fn overlaps(piece: &ActivePiece, field: &Field) -> bool {
    piece
        .blocks()
        .iter()
        .any(|&(x, y)| !field.is_free(x, y))
}

/// Write `piece` into the field, then collapse every full row.
///
/// The caller must have checked that `piece` does not overlap.
///
/// # Panics
///
/// Panics if any block of `piece` lies outside the field.
pub fn lock_piece(field: &mut Field, piece: &ActivePiece) -> LockOutcome {
    for (x, y) in piece.blocks() {
        assert!(
            field.contains(x, y),
            "locking {:?} with block ({x}, {y}) outside the field",
            piece.kind
        );
        field.set_cell(x, y, Some(piece.kind));
    }

    clear_full_rows(field)
}

/// Scan rows top to bottom, collapsing each full row in place
///
/// A collapsed row is refilled from the (already scanned, not full) row above,
/// so a single pass finds every full row.
pub fn clear_full_rows(field: &mut Field) -> LockOutcome {
    let mut outcome = LockOutcome::default();

    for y in 0..field.height() as usize {
        if field.is_row_full(y) {
            field.collapse_row(y);
            outcome.lines_cleared += 1;
            let _ = outcome.cleared_rows.try_push(y);
            debug!(row = y, "row cleared");
        }
    }

    outcome
}
