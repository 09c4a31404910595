//! Mode-tagged stats record

use crate::stats::{DailyStats, UnlimitedStats};
use std::collections::BTreeMap;

/// The stats record of whichever mode is being played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeStats {
    Daily(DailyStats),
    Unlimited(UnlimitedStats),
}

impl ModeStats {
    #[must_use]
    pub fn games_played(&self) -> u32 {
        match self {
            Self::Daily(s) => s.games_played,
            Self::Unlimited(s) => s.games_played,
        }
    }

    #[must_use]
    pub fn games_won(&self) -> u32 {
        match self {
            Self::Daily(s) => s.games_won,
            Self::Unlimited(s) => s.games_won,
        }
    }

    #[must_use]
    pub fn current_streak(&self) -> u32 {
        match self {
            Self::Daily(s) => s.current_streak,
            Self::Unlimited(s) => s.current_streak,
        }
    }

    /// Max streak (daily) or best streak (unlimited)
    #[must_use]
    pub fn best_streak(&self) -> u32 {
        match self {
            Self::Daily(s) => s.max_streak,
            Self::Unlimited(s) => s.best_streak,
        }
    }

    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        match self {
            Self::Daily(s) => s.win_percentage(),
            Self::Unlimited(s) => s.win_percentage(),
        }
    }

    #[must_use]
    pub fn last_guesses(&self) -> &[String] {
        match self {
            Self::Daily(s) => &s.last_guesses,
            Self::Unlimited(s) => &s.last_guesses,
        }
    }

    /// Guess distribution; unlimited mode keeps none
    #[must_use]
    pub fn distribution(&self) -> Option<&BTreeMap<u8, u32>> {
        match self {
            Self::Daily(s) => Some(&s.guess_distribution),
            Self::Unlimited(_) => None,
        }
    }
}
