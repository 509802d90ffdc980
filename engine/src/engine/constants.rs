// src/engine/constants.rs
#![forbid(unsafe_code)]

pub const W: usize = 14;
pub const H: usize = 24;

pub const NUM_KINDS: usize = 7;

/// Rotation quadrants (90° multiples). Every kind exposes all 4 slots; the
/// quadrant transform makes redundant ones harmless duplicates.
pub const MAX_ROTS: usize = 4;

/// Simulated seconds between downward steps of the active shape.
pub const STEP_INTERVAL_S: f64 = 0.5;

/// Simulated seconds between horizontal nudge attempts. Independent of the
/// step timer by design.
pub const NUDGE_INTERVAL_S: f64 = 2.5;

/**
 * Spawn X sub-range margin: fresh shapes anchor in
 * [SPAWN_X_MARGIN, W - SPAWN_X_MARGIN - 4] so all base-orientation cells
 * (max extent 4) start inside the walls. Rotated draws can still fail
 * validation and fall back.
 */
pub const SPAWN_X_MARGIN: usize = 2;

/// How many rows above the visible top the spawn resolver retries before
/// scanning (fallback step after the initial placement attempt).
pub const SPAWN_RETRY_ROWS: i32 = 2;
