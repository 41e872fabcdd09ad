//! Shape catalog - static rotation states for the seven piece kinds
//!
//! Every rotation state is a 5x5 occupancy mask. A mask row is a 5-bit value
//! read left to right, so `0b01110` occupies columns 1, 2 and 3. The binary
//! literals below read like the shapes they encode.
//!
//! Rotation indices always wrap: asking for state `n` of a kind with `k`
//! states returns state `n % k`.

use crate::types::{PieceKind, MASK_SIZE};

/// One rotation state: `MASK_SIZE` rows of `MASK_SIZE` bits each.
pub type ShapeMask = [u8; MASK_SIZE];

const I_STATES: [ShapeMask; 2] = [
    [0b00000, 0b00000, 0b11110, 0b00000, 0b00000],
    [0b00100, 0b00100, 0b00100, 0b00100, 0b00000],
];

const J_STATES: [ShapeMask; 4] = [
    [0b00000, 0b01000, 0b01110, 0b00000, 0b00000],
    [0b00000, 0b00110, 0b00100, 0b00100, 0b00000],
    [0b00000, 0b00000, 0b01110, 0b00010, 0b00000],
    [0b00000, 0b00100, 0b00100, 0b01100, 0b00000],
];

const L_STATES: [ShapeMask; 4] = [
    [0b00000, 0b00010, 0b01110, 0b00000, 0b00000],
    [0b00000, 0b00100, 0b00100, 0b00110, 0b00000],
    [0b00000, 0b00000, 0b01110, 0b01000, 0b00000],
    [0b00000, 0b01100, 0b00100, 0b00100, 0b00000],
];

const O_STATES: [ShapeMask; 1] = [[0b00000, 0b00000, 0b01100, 0b01100, 0b00000]];

const S_STATES: [ShapeMask; 2] = [
    [0b00000, 0b00000, 0b00110, 0b01100, 0b00000],
    [0b00000, 0b00100, 0b00110, 0b00010, 0b00000],
];

const T_STATES: [ShapeMask; 4] = [
    [0b00000, 0b00100, 0b01110, 0b00000, 0b00000],
    [0b00000, 0b00100, 0b00110, 0b00100, 0b00000],
    [0b00000, 0b00000, 0b01110, 0b00100, 0b00000],
    [0b00000, 0b00100, 0b01100, 0b00100, 0b00000],
];

const Z_STATES: [ShapeMask; 2] = [
    [0b00000, 0b00000, 0b01100, 0b00110, 0b00000],
    [0b00000, 0b00010, 0b00110, 0b00100, 0b00000],
];

/// All rotation states of a kind, in rotation order.
pub fn states(kind: PieceKind) -> &'static [ShapeMask] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::Z => &Z_STATES,
    }
}

/// Number of rotation states (1, 2 or 4).
pub fn rotation_count(kind: PieceKind) -> u8 {
    states(kind).len() as u8
}

/// Mask for a kind and rotation index (index wraps).
pub fn mask(kind: PieceKind, rotation: u8) -> &'static ShapeMask {
    let states = states(kind);
    &states[rotation as usize % states.len()]
}

/// Whether the mask occupies `(col, row)`.
#[inline]
pub fn mask_contains(mask: &ShapeMask, col: usize, row: usize) -> bool {
    col < MASK_SIZE && row < MASK_SIZE && mask[row] & (1 << (MASK_SIZE - 1 - col)) != 0
}

/// Occupied `(col, row)` offsets of a mask, row-major.
pub fn mask_cells(mask: &ShapeMask) -> impl Iterator<Item = (i8, i8)> + '_ {
    (0..MASK_SIZE).flat_map(move |row| {
        (0..MASK_SIZE)
            .filter(move |&col| mask_contains(mask, col, row))
            .map(move |col| (col as i8, row as i8))
    })
}
