//! Active piece - the falling tetromino and its validated moves
//!
//! A piece is plain data: kind, rotation index and the board position of its
//! 5x5 mask's top-left corner. Its geometry comes from the [`catalog`].
//!
//! Every mutator is atomic. A move or rotation that would leave the piece in an
//! invalid position is rejected and the piece is left exactly as it was.
//!
//! [`catalog`]: crate::catalog

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::catalog::{mask, mask_cells, rotation_count};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, MINOS_PER_PIECE};

/// Column of the mask's left edge for a freshly spawned piece.
pub const SPAWN_X: i8 = BOARD_WIDTH as i8 / 2 - 2;

/// Row of the mask's top edge for a freshly spawned piece.
pub const SPAWN_Y: i8 = 0;

/// Board coordinates covered by a piece.
pub type PieceCells = ArrayVec<(i8, i8), MINOS_PER_PIECE>;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Rotation index, always below the kind's rotation count.
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at the spawn position in its first rotation state
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Occupied board coordinates for the current rotation and position.
    pub fn cells(&self) -> PieceCells {
        mask_cells(mask(self.kind, self.rotation))
            .map(|(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
            .collect()
    }

    /// Check if every cell is inside the walls, above the floor and not on a
    /// locked cell. Cells above the board are only checked against the walls.
    pub fn is_valid(&self, board: &Board) -> bool {
        self.cells().iter().all(|&(x, y)| {
            x >= 0
                && x < BOARD_WIDTH as i8
                && y < BOARD_HEIGHT as i8
                && (y < 0 || !board.is_occupied(x, y))
        })
    }

    /// Translate by (dx, dy) if the result is valid.
    pub fn try_move(&mut self, board: &Board, dx: i8, dy: i8) -> bool {
        let (Some(x), Some(y)) = (self.x.checked_add(dx), self.y.checked_add(dy)) else {
            return false;
        };
        let moved = Self { x, y, ..*self };
        if moved.is_valid(board) {
            *self = moved;
            true
        } else {
            false
        }
    }

    /// Advance to the next rotation state if the result is valid.
    ///
    /// There is no wall kick: a blocked rotation simply fails in place.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let count = rotation_count(self.kind);
        let rotated = Self {
            rotation: (self.rotation % count + 1) % count,
            ..*self
        };
        if rotated.is_valid(board) {
            *self = rotated;
            true
        } else {
            false
        }
    }

    /// Drop to the lowest valid row. Returns the number of rows dropped.
    pub fn hard_drop(&mut self, board: &Board) -> u32 {
        let mut distance = 0;
        while self.try_move(board, 0, 1) {
            distance += 1;
        }
        distance
    }

    /// Check if the piece is resting on something
    pub fn is_grounded(&self, board: &Board) -> bool {
        match self.y.checked_add(1) {
            Some(y) => !Self { y, ..*self }.is_valid(board),
            None => true,
        }
    }
}
