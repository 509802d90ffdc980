// src/engine/spawn.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

use crate::engine::constants::{MAX_ROTS, SPAWN_RETRY_ROWS, SPAWN_X_MARGIN, W};
use crate::engine::grid::{can_place, Grid};
use crate::engine::shapes::Kind;

/// The single descending shape: template, rotation quadrant and anchor cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Active {
    pub kind: Kind,
    pub rot: usize,
    pub x: i32,
    pub y: i32,
}

/// Anchor offsets never exceed ±3, so scanning this anchor range covers every
/// placement whose cells can land inside the walls.
const SCAN_X_MIN: i32 = -3;
const SCAN_X_MAX: i32 = W as i32 + 3;

/// Seeded source of spawn draws and nudge directions.
///
/// RNG lives here (spawn stream responsibility); the resolver itself is a
/// bounded, deterministic-given-seed search.
#[derive(Clone)]
pub struct ShapeStream {
    rng: StdRng,
}

impl ShapeStream {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn draw_kind(&mut self) -> Kind {
        *Kind::all().choose(&mut self.rng).unwrap()
    }

    fn draw_rot(&mut self) -> usize {
        self.rng.gen_range(0..MAX_ROTS)
    }

    fn draw_x(&mut self) -> i32 {
        let lo = SPAWN_X_MARGIN as i32;
        let hi = (W - SPAWN_X_MARGIN - 4) as i32;
        self.rng.gen_range(lo..=hi)
    }

    /// Random horizontal nudge direction: -1 or +1.
    pub fn draw_nudge(&mut self) -> i32 {
        if self.rng.r#gen::<bool>() { 1 } else { -1 }
    }

    /**
     * Spawn resolution with an ordered fallback ladder. Always returns a
     * shape; the animator never stalls when the grid fills up:
     *
     *   1. random draw at the top row
     *   2. same draw one and two rows above the visible top
     *   3. any rotation of the same template, scanning all anchors at the top
     *   4. all templates x anchors x rotations
     *   5. the original draw, unvalidated (best-effort escape hatch: the grid
     *      is allowed to show an overlapping shape rather than lose state)
     */
    pub fn resolve_spawn(&mut self, grid: &Grid) -> Active {
        let kind = self.draw_kind();
        let rot = self.draw_rot();
        let x = self.draw_x();

        if can_place(grid, kind, rot, x, 0) {
            return Active { kind, rot, x, y: 0 };
        }

        for up in 1..=SPAWN_RETRY_ROWS {
            if can_place(grid, kind, rot, x, -up) {
                return Active { kind, rot, x, y: -up };
            }
        }

        for scan_rot in 0..MAX_ROTS {
            for scan_x in SCAN_X_MIN..=SCAN_X_MAX {
                if can_place(grid, kind, scan_rot, scan_x, 0) {
                    return Active {
                        kind,
                        rot: scan_rot,
                        x: scan_x,
                        y: 0,
                    };
                }
            }
        }

        for &scan_kind in Kind::all() {
            for scan_rot in 0..MAX_ROTS {
                for scan_x in SCAN_X_MIN..=SCAN_X_MAX {
                    if can_place(grid, scan_kind, scan_rot, scan_x, 0) {
                        return Active {
                            kind: scan_kind,
                            rot: scan_rot,
                            x: scan_x,
                            y: 0,
                        };
                    }
                }
            }
        }

        // Terminal fallback: accept the original draw without validation.
        Active { kind, rot, x, y: 0 }
    }
}
