//! Board tests: bounds, collision queries and row clearing.

use blockfall::core::{Board, Tetromino};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Row `y` as a 10-bit mask, bit 9 = column 0.
fn row_bits(board: &Board, y: i8) -> u16 {
    (0..BOARD_WIDTH as i8).fold(0, |bits, x| {
        (bits << 1) | matches!(board.get(x, y), Some(Some(_))) as u16
    })
}

fn set_row_bits(board: &mut Board, y: i8, bits: u16, kind: PieceKind) {
    for x in 0..BOARD_WIDTH as i8 {
        if bits & (1 << (BOARD_WIDTH as i8 - 1 - x)) != 0 {
            board.set(x, y, Some(kind));
        }
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.filled_count(), 0);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(!board.is_occupied(x, y), "({x}, {y}) should be free");
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));
    assert!(!board.set(10, 0, Some(PieceKind::T)));
    assert!(!board.set(0, -1, Some(PieceKind::T)));
}

#[test]
fn test_is_occupied_edges() {
    let mut board = Board::new();
    board.set(4, 7, Some(PieceKind::O));

    assert!(board.is_occupied(4, 7));
    // Walls and floor block.
    assert!(board.is_occupied(-1, 5));
    assert!(board.is_occupied(BOARD_WIDTH as i8, 5));
    assert!(board.is_occupied(3, BOARD_HEIGHT as i8));
    // Above the top is open, but only between the walls.
    assert!(!board.is_occupied(3, -2));
    assert!(board.is_occupied(-1, -2));
}

#[test]
fn test_full_and_empty_rows() {
    let mut board = Board::new();
    board.fill_row(19, PieceKind::I, None);
    board.fill_row(18, PieceKind::I, Some(0));

    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(18));
    assert_ne!(row_bits(&board, 18), 0);
    assert_eq!(row_bits(&board, 17), 0);
    assert_eq!(board.full_rows().as_slice(), &[19]);
}

#[test]
fn test_clear_without_full_rows_is_noop() {
    let mut board = Board::new();
    board.fill_row(19, PieceKind::L, Some(3));
    board.set(0, 0, Some(PieceKind::S));
    let before = board.clone();

    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_single_bottom_row() {
    let mut board = Board::new();
    board.fill_row(19, PieceKind::I, None);
    board.set(2, 18, Some(PieceKind::T));

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.get(2, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.filled_count(), 1);
    assert_eq!(row_bits(&board, 18), 0);
}

#[test]
fn test_clear_rows_two_and_five() {
    let mut board = Board::new();
    let pattern: [u16; 8] = [
        0b1000000000,
        0b0100000000,
        0, // full
        0b0001000000,
        0b0000100000,
        0, // full
        0b0000001000,
        0b0000000100,
    ];
    for (y, &bits) in pattern.iter().enumerate() {
        set_row_bits(&mut board, y as i8, bits, PieceKind::Z);
    }
    board.fill_row(2, PieceKind::I, None);
    board.fill_row(5, PieceKind::I, None);

    assert_eq!(board.clear_full_rows(), 2);

    assert_eq!(row_bits(&board, 0), 0);
    assert_eq!(row_bits(&board, 1), 0);
    // Former rows 0 and 1 moved down by 2, former rows 3 and 4 by 1.
    assert_eq!(row_bits(&board, 2), pattern[0]);
    assert_eq!(row_bits(&board, 3), pattern[1]);
    assert_eq!(row_bits(&board, 4), pattern[3]);
    assert_eq!(row_bits(&board, 5), pattern[4]);
    // Rows below the lowest cleared row are untouched.
    assert_eq!(row_bits(&board, 6), pattern[6]);
    assert_eq!(row_bits(&board, 7), pattern[7]);
    assert_eq!(board.filled_count(), 6);
}

#[test]
fn test_clear_four_rows_keeps_cells_above() {
    let mut board = Board::new();
    for y in 16..20 {
        board.fill_row(y, PieceKind::I, None);
    }
    board.set(9, 15, Some(PieceKind::J));

    assert_eq!(board.clear_full_rows(), 4);
    assert_eq!(board.get(9, 19), Some(Some(PieceKind::J)));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_u8_grid_export() {
    let mut board = Board::new();
    board.set(0, 19, Some(PieceKind::I));
    board.set(9, 0, Some(PieceKind::Z));

    let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.write_u8_grid(&mut grid);

    assert_eq!(grid[19][0], PieceKind::I.color_index());
    assert_eq!(grid[0][9], PieceKind::Z.color_index());
    assert_eq!(grid[10][5], 0);
}

#[test]
fn test_lock_keeps_only_rows_on_the_board() {
    let mut board = Board::new();
    let piece = Tetromino {
        kind: PieceKind::I,
        rotation: 1,
        x: 0,
        y: -2,
    };
    assert!(piece.is_valid(&board));
    board.lock(&piece);

    // The vertical I spans rows -2..=1 in column 2.
    assert_eq!(board.filled_count(), 2);
    assert_eq!(row_bits(&board, 0), 0b0010000000);
    assert_eq!(row_bits(&board, 1), 0b0010000000);
    assert_eq!(board.get(2, 0), Some(Some(PieceKind::I)));
    assert_eq!(board.get(2, 1), Some(Some(PieceKind::I)));
    assert_eq!(board.get(2, -1), None);
}
