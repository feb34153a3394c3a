//! Playing session - field, active piece and gravity for one game
//!
//! A [`Session`] is created when a game starts and dropped when the next one
//! starts. It owns everything the per-step update mutates except the
//! [`ScoreState`], which outlives sessions so the high score survives.

use tracing::{debug, info, warn};

use crate::field::Field;
use crate::piece::ActivePiece;
use crate::resolver::{lock_piece, overlaps};
use crate::rng::SimpleRng;
use crate::scoring::{FallTimer, ScoreEvent, ScoreState};
use crate::types::InputSnapshot;

/// Horizontal offsets tried by a clockwise rotation, in order.
const CW_KICKS: [i32; 3] = [0, -1, 1];

/// What a step left the session in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Keep playing
    Continue,
    /// A new piece could not be placed; the game is over
    BlockOut,
}

/// State of one game in progress
#[derive(Debug, Clone)]
pub struct Session {
    field: Field,
    active: ActivePiece,
    fall: FallTimer,
    /// Rows descended by hard drop for the current piece
    user_drops: u32,
    rng: SimpleRng,
    seed: u32,
    /// Pieces spawned so far, including the current one
    pieces_spawned: u32,
    last_score_event: Option<ScoreEvent>,
}

impl Session {
    /// Start a game on an empty field and spawn the first piece
    pub fn new(seed: u32) -> Self {
        let field = Field::standard();
        let mut rng = SimpleRng::new(seed);
        let active = ActivePiece::spawn(rng.next_piece(), field.width());
        debug!(kind = ?active.kind, "first piece");

        Self {
            field,
            active,
            fall: FallTimer::new(),
            user_drops: 0,
            rng,
            seed,
            pieces_spawned: 1,
            last_score_event: None,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Mutable field access for harnesses that prepare a position
    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    /// Replace the active piece (used to set up positions)
    pub fn set_active(&mut self, piece: ActivePiece) {
        self.active = piece;
    }

    pub fn fall_timer(&self) -> &FallTimer {
        &self.fall
    }

    pub fn user_drops(&self) -> u32 {
        self.user_drops
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Scoring result of the most recent lock
    pub fn last_score_event(&self) -> Option<ScoreEvent> {
        self.last_score_event
    }

    /// Advance the game by one frame.
    ///
    /// Order: horizontal moves, rotations, gravity, hard drop. `soft_drop` and
    /// `pause` are accepted and ignored.
    pub fn step(&mut self, input: &InputSnapshot, score: &mut ScoreState) -> StepOutcome {
        if input.move_left {
            self.try_shift(-1);
        }
        if input.move_right {
            self.try_shift(1);
        }
        if input.rotate_cw {
            self.rotate_cw();
        }
        if input.rotate_ccw {
            self.rotate_ccw();
        }

        if self.fall.tick() {
            let below = self.active.shifted(0, 1);
            if overlaps(&below, &self.field) {
                if self.lock_and_spawn(score) == StepOutcome::BlockOut {
                    return StepOutcome::BlockOut;
                }
            } else {
                self.active = below;
            }
        }

        if input.hard_drop {
            return self.hard_drop(score);
        }

        StepOutcome::Continue
    }

    /// Move sideways by `dx` if the result does not overlap
    pub fn try_shift(&mut self, dx: i32) -> bool {
        let candidate = self.active.shifted(dx, 0);
        if overlaps(&candidate, &self.field) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Rotate clockwise, trying the unshifted position, then one column left,
    /// then one column right. Returns false if all three overlap.
    pub fn rotate_cw(&mut self) -> bool {
        let rotated = self.active.rotated_to(self.active.rotation.rotate_cw());
        for dx in CW_KICKS {
            let candidate = rotated.shifted(dx, 0);
            if !overlaps(&candidate, &self.field) {
                self.active = candidate;
                return true;
            }
        }
        false
    }

    /// Rotate counter-clockwise without checking for overlap.
    ///
    /// Known defect: unlike [`Session::rotate_cw`] there is no overlap test and
    /// no kick, so the piece can end up inside a wall or the stack. Blocks
    /// inside the stack overwrite it at lock; blocks outside the field end the
    /// game (see [`Session::lock_and_spawn`]).
    pub fn rotate_ccw(&mut self) {
        self.active = self.active.rotated_to(self.active.rotation.rotate_ccw());
    }

    /// Drop to the lowest free row, lock, score and spawn the next piece
    pub fn hard_drop(&mut self, score: &mut ScoreState) -> StepOutcome {
        if !overlaps(&self.active, &self.field) {
            loop {
                let below = self.active.shifted(0, 1);
                if overlaps(&below, &self.field) {
                    break;
                }
                self.active = below;
                self.user_drops += 1;
            }
        }
        self.lock_and_spawn(score)
    }

    /// Lock the active piece where it is, score it, then spawn the next one.
    ///
    /// A piece rotated into the stack by [`Session::rotate_ccw`] overwrites
    /// the cells it covers. One rotated past a wall has blocks with no cell to
    /// write; the game ends as a block-out instead.
    pub fn lock_and_spawn(&mut self, score: &mut ScoreState) -> StepOutcome {
        let field = &self.field;
        if self.active.blocks().iter().any(|&(x, y)| !field.contains(x, y)) {
            warn!(piece = ?self.active, "active piece outside the field at lock");
            return StepOutcome::BlockOut;
        }

        let outcome = lock_piece(&mut self.field, &self.active);
        let event = score.apply_lock(outcome.lines_cleared, self.user_drops, &mut self.fall);
        debug!(
            kind = ?self.active.kind,
            x = self.active.x,
            y = self.active.y,
            lines = event.lines_cleared,
            points = event.total(),
            "piece locked"
        );
        if event.leveled_up() {
            info!(
                level = event.level,
                frames_per_fall_step = self.fall.frames_per_fall_step,
                "level up"
            );
        }
        self.last_score_event = Some(event);

        if self.spawn() {
            StepOutcome::Continue
        } else {
            StepOutcome::BlockOut
        }
    }

    /// Spawn a random piece at the top. Returns false on block-out.
    ///
    /// On block-out the overlapping piece stays active so it can be drawn.
    pub fn spawn(&mut self) -> bool {
        let kind = self.rng.next_piece();
        self.active = ActivePiece::spawn(kind, self.field.width());

        if overlaps(&self.active, &self.field) {
            debug!(kind = ?kind, "spawn blocked");
            return false;
        }

        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        self.fall.reset_countdown();
        self.user_drops = 0;
        debug!(kind = ?kind, "piece spawned");
        true
    }
}
