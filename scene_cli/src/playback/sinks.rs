// src/playback/sinks.rs
#![forbid(unsafe_code)]

use indicatif::ProgressBar;

/// One periodic row printed by the table reporter.
///
/// Keep this as a "transport struct": Runner/Stats compute everything,
/// the sink just formats.
#[derive(Clone, Debug)]
pub struct ReportRow {
    pub frame: u64,
    pub frames_total: u64,
    pub sim_t: f64,
    pub fps: f64,

    pub spawns: u64,
    pub locks: u64,
    pub nudges: u64,

    pub occupied: u32,
    pub max_h: u32,
    pub avg_max_h: f64,
    pub avg_agg_h: f64,

    pub recycles: u64,
}

pub trait PlaybackSink {
    /// Called on periodic cadence with a fully-prepared report row.
    fn on_report_row(&mut self, _row: &ReportRow, _pb: Option<&ProgressBar>) {}
}

/// Default: absolutely minimal overhead.
#[derive(Default)]
pub struct NoopSink;

impl PlaybackSink for NoopSink {}

/// Prints periodic rows to stdout, re-printing the header every N rows.
pub struct TableSink {
    header_every: u64,
    rows_printed: u64,
}

impl TableSink {
    pub fn new(header_every: u64) -> Self {
        Self {
            header_every: header_every.max(1),
            rows_printed: 0,
        }
    }

    fn print_header() {
        println!(
            "{:>12} {:>9} {:>9} {:>8} {:>8} {:>8} {:>8} {:>6} {:>9} {:>9} {:>7}",
            "frame", "sim_t", "fps", "spawns", "locks", "nudges", "occ", "maxH", "avgMaxH", "avgAggH", "recyc",
        );
    }

    fn print_row(r: &ReportRow) {
        println!(
            "{:>6}/{:<5} {:>9.1} {:>9.1} {:>8} {:>8} {:>8} {:>8} {:>6} {:>9.2} {:>9.2} {:>7}",
            r.frame,
            r.frames_total,
            r.sim_t,
            r.fps,
            r.spawns,
            r.locks,
            r.nudges,
            r.occupied,
            r.max_h,
            r.avg_max_h,
            r.avg_agg_h,
            r.recycles,
        );
    }
}

impl PlaybackSink for TableSink {
    fn on_report_row(&mut self, row: &ReportRow, pb: Option<&ProgressBar>) {
        let print = || {
            if self.rows_printed % self.header_every == 0 {
                Self::print_header();
            }
            Self::print_row(row);
        };

        // Print above the live bar instead of through it.
        match pb {
            Some(pb) => pb.suspend(print),
            None => print(),
        }
        self.rows_printed += 1;
    }
}
