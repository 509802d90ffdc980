// engine/src/lib.rs
#![forbid(unsafe_code)]

pub mod engine;

// Re-export the bits renderers and the CLI driver need:
pub use engine::{
    AdvanceResult, Animator, CellRecord, FreeFallField, Kind, ParticleRecord, SceneSnapshot,
    ShapeStream, H, MAX_ROTS, NUDGE_INTERVAL_S, STEP_INTERVAL_S, W,
};
