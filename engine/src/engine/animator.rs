// src/engine/animator.rs
#![forbid(unsafe_code)]

use crate::engine::constants::{H, NUDGE_INTERVAL_S, STEP_INTERVAL_S, W};
use crate::engine::geometry::rotated_cells;
use crate::engine::grid::{can_place, lock_on_grid, Grid};
use crate::engine::metrics::{compute_grid_metrics, GridMetrics};
use crate::engine::spawn::{Active, ShapeStream};

/// What happened during one `advance` call. At most one of `spawned`/`locked`
/// is set per frame: a lock leaves the animator shapeless until the next
/// frame spawns.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdvanceResult {
    pub spawned: bool,
    pub stepped: bool,
    pub locked: bool,
    pub nudged: bool,
}

/**
 * The autonomous grid animator: a persistent occupancy grid plus one
 * descending shape, advanced by elapsed time.
 *
 * Two-timer cooperative state machine, not a physics simulation: the step and
 * nudge decisions compare elapsed wall time against fixed thresholds, so
 * behavior is frame-rate independent. Rows are never cleared once occupied.
 */
#[derive(Clone)]
pub struct Animator {
    pub grid: Grid,
    pub active: Option<Active>,

    stream: ShapeStream,

    last_step_t: f64,
    last_nudge_t: f64,

    pub frames: u64,
    pub spawns: u64,
    pub locks: u64,
    pub nudges: u64,
}

impl Animator {
    pub fn new(seed: u64) -> Self {
        Self {
            grid: [[0u8; W]; H],
            active: None,
            stream: ShapeStream::new(seed),
            last_step_t: 0.0,
            last_nudge_t: 0.0,
            frames: 0,
            spawns: 0,
            locks: 0,
            nudges: 0,
        }
    }

    /// Drive one frame at elapsed time `t` (seconds, monotonically
    /// non-decreasing across calls).
    pub fn advance(&mut self, t: f64) -> AdvanceResult {
        self.frames += 1;
        let mut out = AdvanceResult::default();

        let Some(mut a) = self.active else {
            // No active shape: spawn resolution never fails, so the animator
            // is descending again by the end of the frame.
            let a = self.stream.resolve_spawn(&self.grid);
            self.active = Some(a);
            self.spawns += 1;
            self.last_step_t = t;
            self.last_nudge_t = t;
            out.spawned = true;
            return out;
        };

        // Downward step on the fast timer; a blocked step locks the shape.
        if t - self.last_step_t >= STEP_INTERVAL_S {
            self.last_step_t = t;
            if can_place(&self.grid, a.kind, a.rot, a.x, a.y + 1) {
                a.y += 1;
                self.active = Some(a);
                out.stepped = true;
            } else {
                lock_on_grid(&mut self.grid, a.kind, a.rot, a.x, a.y);
                self.active = None;
                self.locks += 1;
                out.locked = true;
                return out;
            }
        }

        // Horizontal nudge on the slow timer. A failed attempt still consumes
        // the window; the step timer is untouched either way.
        if t - self.last_nudge_t >= NUDGE_INTERVAL_S {
            self.last_nudge_t = t;
            let dir = self.stream.draw_nudge();
            if can_place(&self.grid, a.kind, a.rot, a.x + dir, a.y) {
                a.x += dir;
                self.active = Some(a);
                self.nudges += 1;
                out.nudged = true;
            }
        }

        out
    }

    pub fn metrics(&self) -> GridMetrics {
        compute_grid_metrics(&self.grid)
    }

    pub fn render_ascii(&self) -> String {
        let mut overlay = [[false; W]; H];
        if let Some(a) = self.active {
            for (dx, dy) in rotated_cells(a.kind, a.rot) {
                let gx = a.x + dx;
                let gy = a.y + dy;
                if gx >= 0 && gx < W as i32 && gy >= 0 && gy < H as i32 {
                    overlay[gy as usize][gx as usize] = true;
                }
            }
        }

        let border: String = format!("+{}+\n", "-".repeat(W));
        let mut s = String::new();
        s.push_str(&border);
        for r in 0..H {
            s.push('|');
            for c in 0..W {
                let ch = if overlay[r][c] {
                    'o'
                } else if self.grid[r][c] != 0 {
                    '#'
                } else {
                    ' '
                };
                s.push(ch);
            }
            s.push_str("|\n");
        }
        s.push_str(&border);

        let active_desc = match self.active {
            Some(a) => format!("{}r{}@({},{})", a.kind.glyph(), a.rot, a.x, a.y),
            None => "-".to_string(),
        };
        let m = self.metrics();
        s.push_str(&format!(
            "active={} frames={} spawns={} locks={} nudges={} occupied={} maxH={}\n",
            active_desc, self.frames, self.spawns, self.locks, self.nudges, m.occupied, m.max_h
        ));
        s
    }
}
