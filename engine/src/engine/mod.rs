// engine/src/engine/mod.rs
#![forbid(unsafe_code)]

mod animator;
mod constants;
mod freefall;
mod geometry;
mod grid;
mod metrics;
mod shapes;
mod snapshot;
mod spawn;

/**
 * Curated engine public API.
 *
 * Internal implementation modules remain private; only stable items are re-exported here.
 */
pub use animator::{AdvanceResult, Animator};
pub use constants::{
    H, MAX_ROTS, NUDGE_INTERVAL_S, NUM_KINDS, SPAWN_RETRY_ROWS, SPAWN_X_MARGIN, STEP_INTERVAL_S, W,
};
pub use freefall::{FreeFallField, Particle, FIELD_COUNT, FLOOR_Y};
pub use geometry::{rotate_cell, rotated_cells};
pub use grid::{can_place, lock_on_grid, Grid};
pub use metrics::{compute_grid_metrics, occupied_cells, row_occupancy, GridMetrics};
pub use shapes::{base_cells, Kind};
pub use snapshot::{CellRecord, ParticleRecord, SceneSnapshot};
pub use spawn::{Active, ShapeStream};
