//! Scoring module - line clear points, level progression and gravity speed
//!
//! Rules:
//! - A lock that clears N lines awards `LINE_SCORES[N] * (level before the clear + 1)`.
//! - The piece's user-drop counter (rows descended by hard drop) is added on every lock.
//! - Level is `total lines / 10`. Each level change removes 2 steps from the fall
//!   interval, never going below 1.
//! - The high score follows the score upward and survives new games.

use crate::types::{
    FALL_STEP_DECREASE_PER_LEVEL, INITIAL_FRAMES_PER_FALL_STEP, LINES_PER_LEVEL, LINE_SCORES,
    MIN_FRAMES_PER_FALL_STEP,
};

/// Lines, level, score and the best score seen in this process.
///
/// Hard-drop rows are scored on every lock, including locks that clear no
/// line, and the high score is refreshed each time. Earlier versions of this
/// game only awarded drop points alongside a line clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreState {
    pub lines: u32,
    pub level: u32,
    pub score: u32,
    pub high_score: u32,
}

/// Result of applying one lock to the [`ScoreState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreEvent {
    pub lines_cleared: u32,
    /// Line clear points (already multiplied by the level factor).
    pub line_points: u32,
    /// Rows descended by hard drop for the locked piece.
    pub drop_points: u32,
    pub previous_level: u32,
    pub level: u32,
}

impl ScoreEvent {
    pub fn total(&self) -> u32 {
        self.line_points.saturating_add(self.drop_points)
    }

    pub fn leveled_up(&self) -> bool {
        self.level != self.previous_level
    }
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero everything except the high score
    pub fn reset_for_new_game(&mut self) {
        *self = Self {
            high_score: self.high_score,
            ..Self::default()
        };
    }

    /// Account for a locked piece.
    ///
    /// Speeds up `fall` when the level changes.
    pub fn apply_lock(
        &mut self,
        lines_cleared: u32,
        user_drops: u32,
        fall: &mut FallTimer,
    ) -> ScoreEvent {
        let previous_level = level_for_lines(self.lines);
        self.lines = self.lines.saturating_add(lines_cleared);
        self.level = level_for_lines(self.lines);

        if self.level != previous_level {
            fall.speed_up();
        }

        let event = ScoreEvent {
            lines_cleared,
            line_points: calculate_line_score(lines_cleared, previous_level),
            drop_points: user_drops,
            previous_level,
            level: self.level,
        };

        self.add_points(event.total());
        event
    }

    /// Add points and raise the high score if needed
    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.high_score = self.high_score.max(self.score);
    }
}

/// Calculate line clear score
/// lines: number of lines cleared (1-4)
/// level: level before the clear (0-based)
pub fn calculate_line_score(lines: u32, level: u32) -> u32 {
    match LINE_SCORES.get(lines as usize) {
        Some(&base) => base.saturating_mul(level.saturating_add(1)),
        None => 0,
    }
}

/// Level reached after clearing `lines` lines in total
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL
}

/// Frame-counted gravity: the piece falls one row every `frames_per_fall_step` steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallTimer {
    pub frames_until_fall: i32,
    pub frames_per_fall_step: i32,
}

impl FallTimer {
    pub fn new() -> Self {
        Self {
            frames_until_fall: INITIAL_FRAMES_PER_FALL_STEP,
            frames_per_fall_step: INITIAL_FRAMES_PER_FALL_STEP,
        }
    }

    /// Count down one step. Returns true when the piece should fall, in which
    /// case the countdown restarts from `frames_per_fall_step`.
    pub fn tick(&mut self) -> bool {
        self.frames_until_fall -= 1;
        if self.frames_until_fall <= 0 {
            self.frames_until_fall = self.frames_per_fall_step;
            return true;
        }
        false
    }

    /// Restart the countdown for a freshly spawned piece.
    ///
    /// Always restarts from the level 0 interval, whatever the current level.
    pub fn reset_countdown(&mut self) {
        self.frames_until_fall = INITIAL_FRAMES_PER_FALL_STEP;
    }

    /// Shorten the fall interval by one level step
    pub fn speed_up(&mut self) {
        self.frames_per_fall_step = (self.frames_per_fall_step - FALL_STEP_DECREASE_PER_LEVEL)
            .max(MIN_FRAMES_PER_FALL_STEP);
    }
}

impl Default for FallTimer {
    fn default() -> Self {
        Self::new()
    }
}
