//! Daily schedule audit
//!
//! Computes the daily word for a run of dates in parallel and summarizes how
//! evenly the dictionary gets used.

use crate::core::Dictionary;
use crate::selector::{CoverageReport, ScheduledWord, coverage, schedule_with};
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::time::Instant;

/// Result of a schedule audit
#[derive(Debug)]
pub struct ScheduleRun {
    pub schedule: Vec<ScheduledWord>,
    pub coverage: CoverageReport,
}

/// Compute `days` daily words from `start` with a progress bar
#[must_use]
pub fn run_schedule(start: NaiveDate, days: usize, dictionary: &Dictionary) -> ScheduleRun {
    let pb = ProgressBar::new(days as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message("selecting daily words");

    let started = Instant::now();
    let schedule = schedule_with(start, days, dictionary, || pb.inc(1));
    let coverage = coverage(&schedule, dictionary);

    pb.finish_with_message(format!(
        "{} distinct words in {:.2}s",
        coverage.distinct_words,
        started.elapsed().as_secs_f64()
    ));
    info!(
        "schedule audit: {days} days from {start}, {} distinct words",
        coverage.distinct_words
    );

    ScheduleRun { schedule, coverage }
}
