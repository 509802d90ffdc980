// src/main.rs
#![forbid(unsafe_code)]

mod playback;

use clap::Parser;

use crate::playback::{NoopSink, PlaybackSink, Runner, RunnerConfig, TableSink};
use blockfall_engine::engine::FIELD_COUNT;

#[derive(Parser, Debug)]
#[command(name = "blockfall_cli")]
struct Args {
    // ---------------- playback sizing ----------------
    /// Total frames to simulate.
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Simulated frames per second (elapsed time per frame is 1/fps).
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// RNG seed for the spawn stream and the free-fall field. If omitted, a
    /// fixed default is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Free-fall particle pool size.
    #[arg(long, default_value_t = FIELD_COUNT)]
    particles: usize,

    // ---------------- visualization ----------------
    /**
     * Render the board as ASCII every frame; value is sleep in ms (e.g. 30).
     * Omit to disable rendering.
     * Examples:
     *   --render 0    (render as fast as possible)
     *   --render 30   (sleep 30ms between frames)
     */
    #[arg(long, value_name = "ms")]
    render: Option<u64>,

    // ---------------- output / reporting ----------------
    /// Verbosity: 0=silent (final summary only), 1=progress bar, 2=progress bar + periodic table.
    #[arg(long, default_value_t = 1)]
    verbosity: u8,

    /// Print a table row every N frames (only used with --verbosity 2).
    #[arg(long, default_value_t = 600)]
    report_every: u64,
}

fn main() {
    let args = Args::parse();

    let cfg = RunnerConfig {
        frames: args.frames,
        fps: args.fps,
        seed: args.seed.unwrap_or(12345),

        particles: args.particles,

        verbosity: args.verbosity,
        report_every: args.report_every,

        render_ms: args.render,
    };

    // Reporting sink:
    // - verbosity 2 => periodic table (unless report_every == 0)
    // - otherwise   => no-op
    let sink: Box<dyn PlaybackSink> = if cfg.verbosity >= 2 && cfg.report_every > 0 {
        // Header cadence is a formatting detail; cadence in *frames* is handled by Runner.
        Box::new(TableSink::new(20))
    } else {
        Box::new(NoopSink)
    };

    let mut runner = Runner::new(cfg, sink);
    let report = runner.run();

    // Final one-line summary (useful for logs / grep).
    println!(
        "DONE: seed={} frames={} sim_t={:.1}s elapsed={:.3}s fps={:.1} spawns={} locks={} nudges={} steps={} locks/min={:.2} occupied={} max_h_worst={} avg_max_h={:.2} avg_agg_h={:.2} particles={} recycles={}",
        report.seed,
        report.frames_done,
        report.sim_elapsed_s,
        report.elapsed_s,
        report.frames_per_s,
        report.spawns,
        report.locks,
        report.nudges,
        report.steps,
        report.locks_per_min,
        report.occupied,
        report.max_h_worst,
        report.avg_max_h,
        report.avg_agg_h,
        report.particles,
        report.recycles,
    );
}
