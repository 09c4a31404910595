//! Daily mode statistics

use super::StatsRecord;
use crate::core::MAX_ATTEMPTS;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Persistent record for daily mode
///
/// Serialized as camelCase JSON; fields missing from a stored record take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyStats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub last_played_date: Option<NaiveDate>,
    pub last_guesses: Vec<String>,
    /// Wins keyed by the number of guesses used (1-6)
    pub guess_distribution: BTreeMap<u8, u32>,
}

impl Default for DailyStats {
    fn default() -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            current_streak: 0,
            max_streak: 0,
            last_played_date: None,
            last_guesses: Vec::new(),
            guess_distribution: empty_distribution(),
        }
    }
}

fn empty_distribution() -> BTreeMap<u8, u32> {
    (1..=MAX_ATTEMPTS as u8).map(|n| (n, 0)).collect()
}

impl DailyStats {
    /// Fold one finished game into the record
    ///
    /// A gap of more than one day since the last game breaks the streak before
    /// this result is counted. `rows` are the rendered guess rows of the game.
    #[must_use]
    pub fn record_result(
        &self,
        won: bool,
        attempts_used: usize,
        today: NaiveDate,
        rows: Vec<String>,
    ) -> Self {
        let mut next = self.clone();

        if next.last_played_date != Some(today) {
            if let Some(last) = next.last_played_date
                && (today - last).num_days() > 1
            {
                next.current_streak = 0;
            }
            next.last_guesses.clear();
        }

        next.games_played += 1;
        if won {
            next.games_won += 1;
            next.current_streak += 1;
            next.max_streak = next.max_streak.max(next.current_streak);
            if let Ok(attempts) = u8::try_from(attempts_used)
                && (1..=MAX_ATTEMPTS as u8).contains(&attempts)
            {
                *next.guess_distribution.entry(attempts).or_insert(0) += 1;
            }
        } else {
            next.current_streak = 0;
        }

        next.last_played_date = Some(today);
        next.last_guesses = rows;
        next
    }

    /// Whether today's puzzle is already recorded
    #[must_use]
    pub fn has_played(&self, today: NaiveDate) -> bool {
        self.last_played_date == Some(today)
    }

    /// Rounded share of games won, 0 when nothing was played
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        win_percentage(self.games_won, self.games_played)
    }
}

impl StatsRecord for DailyStats {
    const KEY: &'static str = "brainrodle_stats";

    fn normalize(&mut self) {
        self.games_won = self.games_won.min(self.games_played);
        self.max_streak = self.max_streak.max(self.current_streak);
        for n in 1..=MAX_ATTEMPTS as u8 {
            self.guess_distribution.entry(n).or_insert(0);
        }
    }
}

pub(super) fn win_percentage(won: u32, played: u32) -> u32 {
    if played == 0 {
        0
    } else {
        (f64::from(won) / f64::from(played) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn with_streak(streak: u32, last: NaiveDate) -> DailyStats {
        DailyStats {
            games_played: streak,
            games_won: streak,
            current_streak: streak,
            max_streak: streak,
            last_played_date: Some(last),
            ..DailyStats::default()
        }
    }

    #[test]
    fn first_win_starts_streak() {
        let today = date(2025, 3, 10);
        let stats = DailyStats::default().record_result(true, 3, today, vec!["row".into()]);

        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 1);
        assert_eq!(stats.guess_distribution[&3], 1);
        assert_eq!(stats.last_played_date, Some(today));
        assert_eq!(stats.last_guesses, vec!["row".to_string()]);
    }

    #[test]
    fn win_after_yesterday_extends_streak() {
        let stats =
            with_streak(4, date(2025, 3, 9)).record_result(true, 2, date(2025, 3, 10), vec![]);
        assert_eq!(stats.current_streak, 5);
        assert_eq!(stats.max_streak, 5);
    }

    #[test]
    fn win_after_skipped_days_restarts_streak() {
        let stats =
            with_streak(4, date(2025, 3, 7)).record_result(true, 2, date(2025, 3, 10), vec![]);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 4);
    }

    #[test]
    fn streak_survives_month_boundary() {
        let stats =
            with_streak(2, date(2025, 2, 28)).record_result(true, 1, date(2025, 3, 1), vec![]);
        assert_eq!(stats.current_streak, 3);
    }

    #[test]
    fn loss_resets_streak_only() {
        let stats =
            with_streak(3, date(2025, 3, 9)).record_result(false, 6, date(2025, 3, 10), vec![]);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 3);
        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.guess_distribution.values().sum::<u32>(), 0);
    }

    #[test]
    fn invariants_hold_over_many_games() {
        let mut stats = DailyStats::default();
        let mut day = date(2025, 1, 1);
        for i in 0..50 {
            let won = i % 3 != 0;
            stats = stats.record_result(won, 1 + i % 6, day, vec![]);
            assert!(stats.games_won <= stats.games_played);
            assert!(stats.current_streak <= stats.max_streak);
            day = day.succ_opt().unwrap();
            if i % 7 == 0 {
                day = day.succ_opt().unwrap();
            }
        }
    }

    #[test]
    fn has_played_today() {
        let stats = DailyStats::default().record_result(false, 6, date(2025, 3, 10), vec![]);
        assert!(stats.has_played(date(2025, 3, 10)));
        assert!(!stats.has_played(date(2025, 3, 11)));
    }

    #[test]
    fn win_percentage_rounds() {
        let stats = DailyStats {
            games_played: 3,
            games_won: 2,
            ..DailyStats::default()
        };
        assert_eq!(stats.win_percentage(), 67);
        assert_eq!(DailyStats::default().win_percentage(), 0);
    }

    #[test]
    fn normalize_clamps_invariants() {
        let mut stats = DailyStats {
            games_played: 2,
            games_won: 5,
            current_streak: 4,
            max_streak: 1,
            guess_distribution: BTreeMap::new(),
            ..DailyStats::default()
        };
        stats.normalize();
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.max_streak, 4);
        assert_eq!(stats.guess_distribution.len(), 6);
    }

    #[test]
    fn serializes_to_camel_case() {
        let stats =
            DailyStats::default().record_result(true, 1, date(2025, 3, 10), vec!["R🟩".into()]);
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["gamesPlayed"], 1);
        assert_eq!(json["lastPlayedDate"], "2025-03-10");
        assert_eq!(json["guessDistribution"]["1"], 1);
        assert_eq!(json["lastGuesses"][0], "R🟩");
    }

    #[test]
    fn partial_record_takes_defaults() {
        let stats: DailyStats =
            serde_json::from_str(r#"{"gamesPlayed": 4, "gamesWon": 2, "lastPlayedDate": null}"#)
                .unwrap();
        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.current_streak, 0);
        assert!(stats.last_guesses.is_empty());
        assert_eq!(stats.guess_distribution.len(), 6);
    }
}
