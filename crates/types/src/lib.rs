//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, so they can
//! be shared by the simulation core, the terminal view and the input mapping.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: x = (width - 4) / 2 = 3, y = 0
//!
//! # Gravity and Scoring Constants
//!
//! Gravity is counted in simulation steps (frames), not milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Default outer-loop cadence (~60 FPS) |
//! | `INITIAL_FRAMES_PER_FALL_STEP` | 48 | Steps per row at level 0 |
//! | `FALL_STEP_DECREASE_PER_LEVEL` | 2 | Steps removed on each level-up |
//! | `MIN_FRAMES_PER_FALL_STEP` | 1 | Fastest possible gravity |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines needed per level |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, InputSnapshot, PieceKind, Rotation, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! // Clockwise steps the rotation index down, wrapping 0 -> 3.
//! assert_eq!(Rotation::SPAWN.rotate_cw().index(), 3);
//!
//! let mut input = InputSnapshot::default();
//! input.press(GameAction::HardDrop);
//! assert!(input.hard_drop);
//!
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//! ```

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: u8 = 10;

/// Field height in cells (20 rows)
pub const FIELD_HEIGHT: u8 = 20;

/// Default outer-loop frame period in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Steps between automatic one-row falls at level 0.
///
/// Also the value the fall countdown is reset to whenever a piece spawns.
pub const INITIAL_FRAMES_PER_FALL_STEP: i32 = 48;

/// Steps removed from the fall interval each time the level changes.
pub const FALL_STEP_DECREASE_PER_LEVEL: i32 = 2;

/// Floor for the fall interval.
pub const MIN_FRAMES_PER_FALL_STEP: i32 = 1;

/// Cleared lines per level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Number of blocks in every piece.
pub const BLOCKS_PER_PIECE: usize = 4;

/// Number of rotation states in every piece.
pub const ROTATION_COUNT: u8 = 4;

/// Line clear scoring table
///
/// Base points for clearing N lines with one lock:
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by (level before the clear + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven piece kinds, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, indexed by [`PieceKind::index`].
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Position of this kind in [`PieceKind::ALL`] and in the piece catalog.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`PieceKind::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Rotation index into a piece's four pre-baked rotation states.
///
/// Always in `0..4`; the constructor reduces modulo 4 so catalog lookups
/// can index without a range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rotation(u8);

impl Rotation {
    /// Orientation every piece spawns in.
    pub const SPAWN: Rotation = Rotation(0);

    pub const fn new(index: u8) -> Self {
        Rotation(index % ROTATION_COUNT)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Clockwise input steps the index down (0 wraps to 3).
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::new(2).rotate_cw(), Rotation::new(1));
    /// assert_eq!(Rotation::new(0).rotate_cw(), Rotation::new(3));
    /// ```
    pub const fn rotate_cw(self) -> Self {
        Rotation((self.0 + ROTATION_COUNT - 1) % ROTATION_COUNT)
    }

    /// Counter-clockwise input steps the index up (3 wraps to 0).
    pub const fn rotate_ccw(self) -> Self {
        Rotation((self.0 + 1) % ROTATION_COUNT)
    }
}

/// 32-bit color packed as `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba(pub u32);

impl Rgba {
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn a(self) -> u8 {
        self.0 as u8
    }
}

/// Fill color of an empty field cell.
pub const EMPTY_CELL_COLOR: Rgba = Rgba(0x2020_20ff);

/// Outline color drawn around every field cell.
pub const GRID_LINE_COLOR: Rgba = Rgba(0x4040_40ff);

/// A cell on the field
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Discrete player intents produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Leave the title screen or the game-over screen
    Start,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate with the three-position kick check
    RotateCw,
    /// Rotate without any overlap check
    RotateCcw,
    /// Drop the piece to the lowest free row and lock it
    HardDrop,
    /// Accepted but has no effect on the simulation
    SoftDrop,
    /// Accepted but has no effect on the simulation
    Pause,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameAction::Start),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "harddrop" => Some(GameAction::HardDrop),
            "softdrop" => Some(GameAction::SoftDrop),
            "pause" => Some(GameAction::Pause),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start => "start",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::HardDrop => "hardDrop",
            GameAction::SoftDrop => "softDrop",
            GameAction::Pause => "pause",
        }
    }
}

/// Input consumed by exactly one simulation step.
///
/// Every flag means "pressed at least once since the previous step".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub start: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub rotate_cw: bool,
    pub rotate_ccw: bool,
    pub hard_drop: bool,
    pub soft_drop: bool,
    pub pause: bool,
}

impl InputSnapshot {
    /// Snapshot with only `action` set.
    pub fn with(action: GameAction) -> Self {
        let mut input = Self::default();
        input.press(action);
        input
    }

    /// Set the flag for `action`.
    pub fn press(&mut self, action: GameAction) {
        match action {
            GameAction::Start => self.start = true,
            GameAction::MoveLeft => self.move_left = true,
            GameAction::MoveRight => self.move_right = true,
            GameAction::RotateCw => self.rotate_cw = true,
            GameAction::RotateCcw => self.rotate_ccw = true,
            GameAction::HardDrop => self.hard_drop = true,
            GameAction::SoftDrop => self.soft_drop = true,
            GameAction::Pause => self.pause = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl FromIterator<GameAction> for InputSnapshot {
    fn from_iter<T: IntoIterator<Item = GameAction>>(iter: T) -> Self {
        let mut input = Self::default();
        for action in iter {
            input.press(action);
        }
        input
    }
}

/// Top-level game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    TitleScreen,
    Playing,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::TitleScreen => "title_screen",
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "game_over",
        }
    }
}
