// src/engine/metrics.rs
#![forbid(unsafe_code)]

use crate::engine::constants::{H, W};
use crate::engine::grid::Grid;

#[derive(Clone, Copy, Debug, Default)]
pub struct GridMetrics {
    pub max_h: u32,
    pub agg_h: u32,
    pub occupied: u32,
}

/// Compute stack metrics on the locked grid.
/// Complexity: O(H*W), no allocations.
pub fn compute_grid_metrics(grid: &Grid) -> GridMetrics {
    let heights = column_heights(grid);

    let mut max_h = 0u32;
    let mut agg_h = 0u32;
    for &h in &heights {
        max_h = max_h.max(h);
        agg_h += h;
    }

    GridMetrics {
        max_h,
        agg_h,
        occupied: occupied_cells(grid),
    }
}

/// Total locked cells. Monotonically non-decreasing over an animator's
/// lifetime since rows are never cleared.
pub fn occupied_cells(grid: &Grid) -> u32 {
    let mut n = 0u32;
    for row in grid {
        for &c in row {
            if c != 0 {
                n += 1;
            }
        }
    }
    n
}

/// Locked cells per row, top to bottom.
pub fn row_occupancy(grid: &Grid) -> [u32; H] {
    let mut out = [0u32; H];
    for (r, row) in grid.iter().enumerate() {
        out[r] = row.iter().filter(|&&c| c != 0).count() as u32;
    }
    out
}

fn column_heights(grid: &Grid) -> [u32; W] {
    let mut h = [0u32; W];
    for c in 0..W {
        for r in 0..H {
            if grid[r][c] != 0 {
                h[c] = (H - r) as u32;
                break;
            }
        }
    }
    h
}
