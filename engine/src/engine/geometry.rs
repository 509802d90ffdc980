// src/engine/geometry.rs
#![forbid(unsafe_code)]

use crate::engine::constants::MAX_ROTS;
use crate::engine::shapes::{base_cells, Kind};

/// Rotate one cell by a 90°-multiple quadrant:
/// 0: (x, y)   1: (y, -x)   2: (-x, -y)   3: (-y, x)
///
/// Pure and bit-for-bit reproducible; rotated cells may be negative, bounds
/// are the validator's problem.
#[inline]
pub fn rotate_cell(rot: usize, x: i32, y: i32) -> (i32, i32) {
    debug_assert!(rot < MAX_ROTS, "rot out of range: rot={rot}");
    match rot % MAX_ROTS {
        0 => (x, y),
        1 => (y, -x),
        2 => (-x, -y),
        _ => (-y, x),
    }
}

/// All 4 cells of `kind` in rotation quadrant `rot`.
#[inline]
pub fn rotated_cells(kind: Kind, rot: usize) -> [(i32, i32); 4] {
    let base = base_cells(kind);
    let mut out = [(0i32, 0i32); 4];
    for (i, &(dx, dy)) in base.iter().enumerate() {
        out[i] = rotate_cell(rot, dx, dy);
    }
    out
}
