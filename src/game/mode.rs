//! Game modes

use crate::core::Dictionary;
use crate::stats::{DailyStats, StatsRecord, UnlimitedStats};
use crate::wordlists::{daily_dictionary, unlimited_dictionary};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// One word per reference day, shared by all players
    #[default]
    Daily,
    /// A fresh random word every game
    Unlimited,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode {0:?} (expected \"daily\" or \"unlimited\")")]
pub struct ModeError(String);

impl Mode {
    /// Storage key of this mode's stats record
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Daily => DailyStats::KEY,
            Self::Unlimited => UnlimitedStats::KEY,
        }
    }

    /// Embedded dictionary for this mode
    #[must_use]
    pub fn dictionary(self) -> Dictionary {
        match self {
            Self::Daily => daily_dictionary(),
            Self::Unlimited => unlimited_dictionary(),
        }
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" | "d" => Ok(Self::Daily),
            "unlimited" | "u" | "practice" => Ok(Self::Unlimited),
            _ => Err(ModeError(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Daily => "daily",
            Self::Unlimited => "unlimited",
        })
    }
}
