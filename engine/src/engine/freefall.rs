// src/engine/freefall.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

use crate::engine::shapes::Kind;

/// Default particle pool size.
pub const FIELD_COUNT: usize = 15;

/// A particle below this y is recycled on the same frame.
pub const FLOOR_Y: f32 = -30.0;

// Sampling ranges for positions, motion and scale. Initial spawns start high
// above the view; recycled particles re-enter just above it.
const X_SPREAD: f32 = 40.0;
const Z_SPREAD: f32 = 20.0;
const INIT_Y_BASE: f32 = 20.0;
const INIT_Y_RANGE: f32 = 50.0;
const RECYCLE_Y_BASE: f32 = 30.0;
const RECYCLE_Y_RANGE: f32 = 20.0;
const FALL_SPEED_MIN: f32 = 0.05;
const FALL_SPEED_RANGE: f32 = 0.1;
const SPIN_SPREAD: f32 = 0.02;
const SCALE_MIN: f32 = 0.5;
const SCALE_RANGE: f32 = 0.5;

const TAU: f32 = std::f32::consts::TAU;

/// One free-falling decorative shape. Position/rotation are world-space
/// floats; `spin` is added to `rotation` per frame, `fall_speed` subtracted
/// from y per frame.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub kind: Kind,
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub fall_speed: f32,
    pub spin: [f32; 3],
    pub scale: f32,
}

/**
 * Fixed-count pool of independent particles: an unbounded recycling stream
 * with no interaction between particles and none with the grid.
 *
 * Per-frame advance (not time-scaled): the original scene moves particles by
 * fixed per-frame deltas, so this field is frame-driven where the grid
 * animator is clock-driven.
 */
#[derive(Clone)]
pub struct FreeFallField {
    particles: Vec<Particle>,
    rng: StdRng,
    pub recycles: u64,
}

impl FreeFallField {
    pub fn new(seed: u64, count: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count).map(|_| Self::sample_particle(&mut rng)).collect();
        Self {
            particles,
            rng,
            recycles: 0,
        }
    }

    fn sample_particle(rng: &mut StdRng) -> Particle {
        Particle {
            kind: *Kind::all().choose(rng).unwrap(),
            position: [
                (rng.r#gen::<f32>() - 0.5) * X_SPREAD,
                rng.r#gen::<f32>() * INIT_Y_RANGE + INIT_Y_BASE,
                (rng.r#gen::<f32>() - 0.5) * Z_SPREAD,
            ],
            rotation: [
                rng.r#gen::<f32>() * TAU,
                rng.r#gen::<f32>() * TAU,
                rng.r#gen::<f32>() * TAU,
            ],
            fall_speed: FALL_SPEED_MIN + rng.r#gen::<f32>() * FALL_SPEED_RANGE,
            spin: [
                (rng.r#gen::<f32>() - 0.5) * SPIN_SPREAD,
                (rng.r#gen::<f32>() - 0.5) * SPIN_SPREAD,
                (rng.r#gen::<f32>() - 0.5) * SPIN_SPREAD,
            ],
            scale: SCALE_MIN + rng.r#gen::<f32>() * SCALE_RANGE,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance every particle by one frame. A particle crossing the floor is
    /// resampled the same frame: fresh position and template, persisted spin,
    /// fall speed and scale.
    pub fn advance(&mut self) {
        for p in &mut self.particles {
            let new_y = p.position[1] - p.fall_speed;

            if new_y < FLOOR_Y {
                p.position = [
                    (self.rng.r#gen::<f32>() - 0.5) * X_SPREAD,
                    self.rng.r#gen::<f32>() * RECYCLE_Y_RANGE + RECYCLE_Y_BASE,
                    (self.rng.r#gen::<f32>() - 0.5) * Z_SPREAD,
                ];
                p.kind = *Kind::all().choose(&mut self.rng).unwrap();
                self.recycles += 1;
                continue;
            }

            p.position[1] = new_y;
            p.rotation[0] += p.spin[0];
            p.rotation[1] += p.spin[1];
            p.rotation[2] += p.spin[2];
        }
    }
}
