//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the board (y < 0) are open space: pieces may poke into them while spawning.

use arrayvec::ArrayVec;

use crate::piece::Tetromino;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Exported board grid: one color index per cell, 0 = empty.
pub type ColorGrid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether (x, y) blocks a piece.
    ///
    /// Columns outside the board and rows at or below the floor are blocking.
    /// Rows above the board are open.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Indices of all full rows, top to bottom.
    pub fn full_rows(&self) -> ArrayVec<usize, { BOARD_HEIGHT as usize }> {
        (0..BOARD_HEIGHT as usize)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Rows above a removed row move down by one for each removed row below
    /// them, and the top is backfilled with empty rows. Uses a two-pointer
    /// compaction with zero allocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut cleared = 0;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                // This row survives, move it down to the write position
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(None);

        cleared
    }

    /// Write a piece's cells into the board.
    ///
    /// Cells above the board (y < 0) are dropped. Callers only lock pieces
    /// that passed [`Tetromino::is_valid`], so every other cell is in bounds.
    pub fn lock(&mut self, piece: &Tetromino) {
        for (x, y) in piece.cells() {
            if y >= 0 {
                self.set(x, y, Some(piece.kind));
            }
        }
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Export the board as color indices (0 = empty, 1..=7 = catalog kind).
    pub fn write_u8_grid(&self, out: &mut ColorGrid) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, value) in row.iter_mut().enumerate() {
                *value = self.cells[y * width + x].map_or(0, |kind| kind.color_index());
            }
        }
    }

    /// Fill an entire row with one kind, leaving `hole` (if any) empty.
    pub fn fill_row(&mut self, y: i8, kind: PieceKind, hole: Option<i8>) {
        for x in 0..BOARD_WIDTH as i8 {
            let cell = if Some(x) == hole { None } else { Some(kind) };
            self.set(x, y, cell);
        }
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), BOARD_HEIGHT as usize);
        assert!(cells_2d.iter().all(|row| row.len() == BOARD_WIDTH as usize));

        let mut flat = [None; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * BOARD_WIDTH as usize + x] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        let width = BOARD_WIDTH as usize;
        (0..BOARD_HEIGHT as usize)
            .map(|y| {
                let start = y * width;
                let end = start + width;
                self.cells[start..end].to_vec()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
