// src/engine/snapshot.rs
#![forbid(unsafe_code)]

use crate::engine::animator::Animator;
use crate::engine::constants::{H, W};
use crate::engine::freefall::FreeFallField;
use crate::engine::geometry::rotated_cells;

/// One occupied cell as the renderer sees it. `color_index` is the zero-based
/// template index into the shared color table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CellRecord {
    pub x: i32,
    pub y: i32,
    pub color_index: u8,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleRecord {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub color_index: u8,
    pub scale: f32,
}

/**
 * The per-frame data contract handed to the renderer. A plain value: the
 * renderer reads it and must not (cannot) mutate animator state through it.
 *
 * Every cell record is inside [0, W) x [0, H); active-shape cells above the
 * visible top are withheld until they descend into view.
 */
#[derive(Clone, Debug, Default)]
pub struct SceneSnapshot {
    pub grid_cells: Vec<CellRecord>,
    pub active_cells: Vec<CellRecord>,
    pub particles: Vec<ParticleRecord>,
}

impl SceneSnapshot {
    pub fn capture(animator: &Animator, field: &FreeFallField) -> Self {
        let mut grid_cells = Vec::new();
        for (r, row) in animator.grid.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v != 0 {
                    grid_cells.push(CellRecord {
                        x: c as i32,
                        y: r as i32,
                        color_index: v - 1,
                    });
                }
            }
        }

        let mut active_cells = Vec::new();
        if let Some(a) = animator.active {
            for (dx, dy) in rotated_cells(a.kind, a.rot) {
                let gx = a.x + dx;
                let gy = a.y + dy;
                if gx >= 0 && gx < W as i32 && gy >= 0 && gy < H as i32 {
                    active_cells.push(CellRecord {
                        x: gx,
                        y: gy,
                        color_index: a.kind.color_index(),
                    });
                }
            }
        }

        let particles = field
            .particles()
            .iter()
            .map(|p| ParticleRecord {
                position: p.position,
                rotation: p.rotation,
                color_index: p.kind.color_index(),
                scale: p.scale,
            })
            .collect();

        Self {
            grid_cells,
            active_cells,
            particles,
        }
    }
}
