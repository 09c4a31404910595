//! Unlimited mode statistics

use super::StatsRecord;
use super::daily::win_percentage;
use serde::{Deserialize, Serialize};

/// Persistent record for unlimited mode
///
/// No calendar linkage: the streak only depends on the previous game's result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnlimitedStats {
    pub games_played: u32,
    pub games_won: u32,
    pub best_streak: u32,
    pub current_streak: u32,
    pub last_guesses: Vec<String>,
}

impl UnlimitedStats {
    /// Clear the previous game's rows when a new word is dealt
    #[must_use]
    pub fn begin_game(&self) -> Self {
        Self {
            last_guesses: Vec::new(),
            ..self.clone()
        }
    }

    /// Fold one finished game into the record
    #[must_use]
    pub fn record_result(&self, won: bool, rows: Vec<String>) -> Self {
        let mut next = self.clone();
        next.games_played += 1;
        if won {
            next.games_won += 1;
            next.current_streak += 1;
            next.best_streak = next.best_streak.max(next.current_streak);
        } else {
            next.current_streak = 0;
        }
        next.last_guesses = rows;
        next
    }

    /// Rounded share of games won, 0 when nothing was played
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        win_percentage(self.games_won, self.games_played)
    }
}

impl StatsRecord for UnlimitedStats {
    const KEY: &'static str = "brainrodle_unlimited_stats";

    fn normalize(&mut self) {
        self.games_won = self.games_won.min(self.games_played);
        self.best_streak = self.best_streak.max(self.current_streak);
    }
}
