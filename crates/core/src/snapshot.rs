use crate::board::ColorGrid;
use crate::piece::Tetromino;
use crate::types::{Phase, PieceKind, BASE_FALL_MS, BOARD_HEIGHT, BOARD_WIDTH, START_LEVEL};

/// Read-only copy of everything the presentation layer draws in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Color index per cell, 0 = empty.
    pub board: ColorGrid,
    /// The falling piece, present only while the game is running.
    pub active: Option<Tetromino>,
    pub next: PieceKind,
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: PieceKind::I,
            phase: Phase::Running,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            fall_interval_ms: BASE_FALL_MS,
        }
    }
}
