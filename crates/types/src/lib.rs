//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be
//! used by the headless core logic as well as by the terminal front end.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn anchor**: (3, 0), the top-left corner of a piece's 5x5 mask
//!
//! # Gravity
//!
//! The fall interval starts at 500ms per row on level 1 and shrinks by 50ms
//! per level, floored at 50ms:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 500ms |
//! | 2 | 450ms |
//! | 5 | 300ms |
//! | 9 | 100ms |
//! | 10+ | 50ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.as_str(), "T");
//! assert_eq!(piece.color_index(), 6);
//!
//! assert!(GameAction::HardDrop.is_movement());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of the square occupancy mask every rotation state is drawn in.
pub const MASK_SIZE: usize = 5;

/// Number of occupied cells in every catalog shape.
pub const MINOS_PER_PIECE: usize = 4;

/// Target frame interval in milliseconds (~60 FPS)
pub const FRAME_MS: u32 = 16;

/// Fall interval on level 1
pub const BASE_FALL_MS: u32 = 500;

/// Fall interval reduction per level
pub const FALL_STEP_MS: u32 = 50;

/// Fastest fall interval, reached on level 10
pub const MIN_FALL_MS: u32 = 50;

/// Cleared lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Level of a fresh game
pub const START_LEVEL: u32 = 1;

/// Line clear scoring table
///
/// Base points for clearing N lines at once, indexed by `N - 1`:
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4+ lines: 800 points
///
/// Points are multiplied by the current level.
pub const LINE_SCORES: [u32; 4] = [100, 300, 500, 800];

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven piece kinds, in catalog order.
///
/// Each kind has a distinct shape and color:
/// - **I**: Cyan, straight bar
/// - **J**: Blue
/// - **L**: Orange (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green
/// - **T**: Purple
/// - **Z**: Red (mirror of S)
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
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Number of piece kinds.
    pub const COUNT: usize = 7;

    /// Zero-based position in the catalog.
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Kind at a zero-based catalog position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// One-based color index as stored in exported board grids (0 = empty).
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.color_index(), 1);
    /// assert_eq!(PieceKind::Z.color_index(), 7);
    /// ```
    pub fn color_index(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// Inverse of [`PieceKind::color_index`]; 0 and unknown values map to `None`.
    pub fn from_color_index(value: u8) -> Option<Self> {
        match value {
            0 => None,
            v => Self::from_index(v as usize - 1),
        }
    }

    /// Display color.
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0, 255, 255),
            PieceKind::J => Rgb::new(0, 0, 255),
            PieceKind::L => Rgb::new(255, 165, 0),
            PieceKind::O => Rgb::new(255, 255, 0),
            PieceKind::S => Rgb::new(0, 255, 0),
            PieceKind::T => Rgb::new(128, 0, 128),
            PieceKind::Z => Rgb::new(255, 0, 0),
        }
    }

    /// Uppercase letter, used by the side panel.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Keyboard keys and on-screen buttons both map onto these. Quitting is not
/// an action: the host loop owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Drop piece to the lowest valid row and lock it
    HardDrop,
    /// Advance to the next rotation state
    Rotate,
    /// Toggle pause
    Pause,
    /// Start a new game after game over
    Restart,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }

    /// Whether this action moves the falling piece (ignored unless running).
    pub fn is_movement(&self) -> bool {
        matches!(
            self,
            GameAction::MoveLeft
                | GameAction::MoveRight
                | GameAction::SoftDrop
                | GameAction::HardDrop
                | GameAction::Rotate
        )
    }
}

/// Game lifecycle phase.
///
/// ```text
/// Running <--Pause--> Paused
/// Running --spawn blocked--> GameOver --Restart--> Running
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Running,
    Paused,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::GameOver => "gameOver",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;
