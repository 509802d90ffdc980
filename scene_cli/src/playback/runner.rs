// src/playback/runner.rs
#![forbid(unsafe_code)]

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use blockfall_engine::engine::{Animator, FreeFallField};

use super::sinks::{PlaybackSink, ReportRow};
use super::stats::{FinalReport, PlaybackStats};

/// Fixed internal cadence for progress-bar live message updates.
/// (No CLI knob on purpose.)
const LIVE_EVERY: u64 = 120;

#[derive(Clone, Debug)]
pub struct RunnerConfig {
    // ---------------- core playback ----------------
    /// Total frames to simulate.
    pub frames: u64,
    /// Simulated frames per second; elapsed time per frame is 1/fps.
    pub fps: f64,
    pub seed: u64,

    /// Free-fall particle pool size.
    pub particles: usize,

    // ---------------- output ----------------
    /// 0 = final summary only
    /// 1 = progress bar
    /// 2 = progress bar + periodic table (via sink)
    pub verbosity: u8,

    /// Print a table row every N frames (only used when verbosity == 2).
    /// 0 disables table reporting.
    pub report_every: u64,

    // ---------------- rendering ----------------
    /// If Some(ms): render every frame as ASCII; sleep ms between frames
    /// (0 = no sleep).
    pub render_ms: Option<u64>,
}

pub struct Runner {
    cfg: RunnerConfig,
    sink: Box<dyn PlaybackSink>,
}

impl Runner {
    pub fn new(cfg: RunnerConfig, sink: Box<dyn PlaybackSink>) -> Self {
        Self { cfg, sink }
    }

    pub fn run(&mut self) -> FinalReport {
        let cfg = self.cfg.clone();

        // Progress bar is UI only; runner logic does not depend on it.
        let pb = if cfg.verbosity >= 1 {
            let pb = ProgressBar::new(cfg.frames);
            pb.set_style(
                ProgressStyle::with_template(
                    "{bar:40.cyan/blue} {pos:>9}/{len:<9}  {percent:>3}%  {elapsed_precise}  {msg}",
                )
                .unwrap()
                .progress_chars("=>-"),
            );
            Some(pb)
        } else {
            None
        };

        let mut stats = PlaybackStats::new();

        let mut animator = Animator::new(cfg.seed);
        // Field gets its own derived stream so scene randomness stays
        // independent of the spawn stream.
        let mut field = FreeFallField::new(cfg.seed ^ 0x5EED_F1E1D, cfg.particles);

        let dt = 1.0 / cfg.fps.max(1.0);
        let mut sim_t = 0.0f64;

        for frame in 0..cfg.frames {
            sim_t = frame as f64 * dt;

            let r = animator.advance(sim_t);
            field.advance();

            let m = animator.metrics();
            stats.on_frame(r.spawned, r.stepped, r.locked, r.nudged, &m);

            if let Some(ref pb) = pb {
                pb.inc(1);
            }

            // Rendering (ASCII) every frame when enabled.
            if let Some(ms) = cfg.render_ms {
                let draw = || {
                    println!(
                        "frame={} t={:.2}s spawned={} stepped={} locked={} nudged={}",
                        frame, sim_t, r.spawned, r.stepped, r.locked, r.nudged
                    );
                    print!("{}", animator.render_ascii());
                };
                match pb.as_ref() {
                    Some(pb) => pb.suspend(draw),
                    None => draw(),
                }
                if ms > 0 {
                    std::thread::sleep(Duration::from_millis(ms));
                }
            }

            // ------------------------------------------------------------
            // Periodic table report (verbosity == 2 only).
            // ------------------------------------------------------------
            if cfg.verbosity == 2
                && cfg.report_every > 0
                && stats.frames_done % cfg.report_every == 0
            {
                let row = ReportRow {
                    frame: stats.frames_done,
                    frames_total: cfg.frames,
                    sim_t,
                    fps: stats.frames_per_sec(),

                    spawns: stats.spawns,
                    locks: stats.locks,
                    nudges: stats.nudges,

                    occupied: m.occupied,
                    max_h: m.max_h,
                    avg_max_h: stats.avg_max_h(),
                    avg_agg_h: stats.avg_agg_h(),

                    recycles: field.recycles,
                };
                self.sink.on_report_row(&row, pb.as_ref());
            }

            // Live progress message cadence (fixed internal cadence).
            if cfg.verbosity >= 1 && stats.frames_done % LIVE_EVERY == 0 {
                if let Some(ref pb) = pb {
                    pb.set_message(stats.live_msg(sim_t, field.recycles));
                }
            }
        }

        if let Some(pb) = pb {
            pb.finish_with_message("done");
        }

        stats.final_report(cfg.seed, sim_t, cfg.particles, field.recycles)
    }
}
