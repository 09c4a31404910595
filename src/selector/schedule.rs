//! Daily word schedule and coverage audit
//!
//! Lists upcoming daily words and checks how evenly the selector spreads
//! over the dictionary for a range of dates.

use super::daily::select_daily_word;
use crate::core::Dictionary;
use chrono::{Days, NaiveDate};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// One scheduled daily word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledWord {
    pub date: NaiveDate,
    pub word: String,
}

/// How a date range maps onto the dictionary
#[derive(Debug, Clone)]
pub struct CoverageReport {
    pub days: usize,
    pub distinct_words: usize,
    pub dictionary_size: usize,
    /// Most frequently scheduled word and its count
    pub most_frequent: Option<(String, usize)>,
    /// Words never scheduled in the range, in dictionary order
    pub never_picked: Vec<String>,
    pub counts: FxHashMap<String, usize>,
}

/// Daily words for `days` consecutive dates starting at `start`
///
/// `on_day` is called once per computed date from worker threads.
pub fn schedule_with<F>(
    start: NaiveDate,
    days: usize,
    dictionary: &Dictionary,
    on_day: F,
) -> Vec<ScheduledWord>
where
    F: Fn() + Sync,
{
    (0..days)
        .into_par_iter()
        .filter_map(|offset| start.checked_add_days(Days::new(offset as u64)))
        .map(|date| {
            let word = select_daily_word(date, dictionary).text().to_string();
            on_day();
            ScheduledWord { date, word }
        })
        .collect()
}

/// Daily words for `days` consecutive dates starting at `start`
#[must_use]
pub fn schedule(start: NaiveDate, days: usize, dictionary: &Dictionary) -> Vec<ScheduledWord> {
    schedule_with(start, days, dictionary, || {})
}

/// Summarize a schedule against its dictionary
#[must_use]
pub fn coverage(schedule: &[ScheduledWord], dictionary: &Dictionary) -> CoverageReport {
    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    for entry in schedule {
        *counts.entry(entry.word.clone()).or_insert(0) += 1;
    }

    let most_frequent = dictionary
        .words()
        .filter_map(|w| counts.get(w.text()).map(|&n| (w.text().to_string(), n)))
        .fold(None, |best: Option<(String, usize)>, (word, n)| match best {
            Some((_, best_n)) if best_n >= n => best,
            _ => Some((word, n)),
        });

    let never_picked = dictionary
        .words()
        .filter(|w| !counts.contains_key(w.text()))
        .map(|w| w.text().to_string())
        .collect();

    CoverageReport {
        days: schedule.len(),
        distinct_words: counts.len(),
        dictionary_size: dictionary.len(),
        most_frequent,
        never_picked,
        counts,
    }
}
