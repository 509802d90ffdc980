// src/playback/stats.rs
#![forbid(unsafe_code)]

use std::time::Instant;

use blockfall_engine::engine::GridMetrics;

#[derive(Clone, Debug)]
pub struct PlaybackStats {
    pub frames_done: u64,

    pub spawns: u64,
    pub locks: u64,
    pub nudges: u64,
    pub steps: u64,

    // stack aggregates (per frame)
    pub sum_max_h: f64,
    pub sum_agg_h: f64,
    pub max_h_worst: u32,
    pub occupied_last: u32,

    // internal
    t0: Instant,
}

impl PlaybackStats {
    pub fn new() -> Self {
        Self {
            frames_done: 0,
            spawns: 0,
            locks: 0,
            nudges: 0,
            steps: 0,
            sum_max_h: 0.0,
            sum_agg_h: 0.0,
            max_h_worst: 0,
            occupied_last: 0,
            t0: Instant::now(),
        }
    }

    /// Call once per frame with that frame's transition flags and metrics.
    pub fn on_frame(
        &mut self,
        spawned: bool,
        stepped: bool,
        locked: bool,
        nudged: bool,
        m: &GridMetrics,
    ) {
        self.frames_done += 1;

        self.spawns += spawned as u64;
        self.steps += stepped as u64;
        self.locks += locked as u64;
        self.nudges += nudged as u64;

        self.sum_max_h += m.max_h as f64;
        self.sum_agg_h += m.agg_h as f64;
        self.max_h_worst = self.max_h_worst.max(m.max_h);
        self.occupied_last = m.occupied;
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.t0.elapsed().as_secs_f64()
    }

    pub fn frames_per_sec(&self) -> f64 {
        let dt = self.elapsed_secs();
        if dt > 0.0 {
            self.frames_done as f64 / dt
        } else {
            0.0
        }
    }

    pub fn avg_max_h(&self) -> f64 {
        if self.frames_done > 0 {
            self.sum_max_h / self.frames_done as f64
        } else {
            0.0
        }
    }

    pub fn avg_agg_h(&self) -> f64 {
        if self.frames_done > 0 {
            self.sum_agg_h / self.frames_done as f64
        } else {
            0.0
        }
    }

    pub fn locks_per_min(&self, sim_elapsed_s: f64) -> f64 {
        if sim_elapsed_s > 0.0 {
            self.locks as f64 * 60.0 / sim_elapsed_s
        } else {
            0.0
        }
    }

    pub fn live_msg(&self, sim_t: f64, recycles: u64) -> String {
        format!(
            "t={:.1}s fps={:.0} spawns={} locks={} nudges={} occ={} maxH={} recyc={}",
            sim_t,
            self.frames_per_sec(),
            self.spawns,
            self.locks,
            self.nudges,
            self.occupied_last,
            self.max_h_worst,
            recycles,
        )
    }

    pub fn final_report(
        &self,
        seed: u64,
        sim_t: f64,
        particles: usize,
        recycles: u64,
    ) -> FinalReport {
        FinalReport {
            seed,
            frames_done: self.frames_done,
            sim_elapsed_s: sim_t,
            elapsed_s: self.elapsed_secs(),
            frames_per_s: self.frames_per_sec(),
            spawns: self.spawns,
            locks: self.locks,
            nudges: self.nudges,
            steps: self.steps,
            locks_per_min: self.locks_per_min(sim_t),
            avg_max_h: self.avg_max_h(),
            avg_agg_h: self.avg_agg_h(),
            max_h_worst: self.max_h_worst,
            occupied: self.occupied_last,
            particles,
            recycles,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FinalReport {
    pub seed: u64,

    pub frames_done: u64,
    pub sim_elapsed_s: f64,
    pub elapsed_s: f64,
    pub frames_per_s: f64,

    pub spawns: u64,
    pub locks: u64,
    pub nudges: u64,
    pub steps: u64,
    pub locks_per_min: f64,

    pub avg_max_h: f64,
    pub avg_agg_h: f64,
    pub max_h_worst: u32,
    pub occupied: u32,

    pub particles: usize,
    pub recycles: u64,
}
