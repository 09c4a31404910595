//! Reference timezone and clock
//!
//! The daily word flips at one moment for everyone: midnight in the reference
//! zone, never the player's local midnight.

use chrono::{DateTime, Datelike, Days, Duration, FixedOffset, NaiveDate, NaiveTime, Offset, Utc};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const HOUR: i32 = 3600;

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant, for tests and replays
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown reference zone {0:?} (expected \"cet\", \"utc\" or \"+HH:MM\")")]
pub struct ZoneError(String);

/// Zone whose calendar date selects the daily word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceZone {
    /// Central European Time with EU summer time (UTC+1 / UTC+2)
    #[default]
    CentralEuropean,
    /// Constant offset from UTC
    Fixed(FixedOffset),
}

impl ReferenceZone {
    /// UTC offset in effect at `instant`
    #[must_use]
    pub fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
        match self {
            Self::Fixed(offset) => *offset,
            Self::CentralEuropean => {
                let hours = if is_eu_summer_time(instant) { 2 } else { 1 };
                FixedOffset::east_opt(hours * HOUR).unwrap_or_else(utc)
            }
        }
    }

    /// Calendar date in this zone at `instant`
    #[must_use]
    pub fn date_at(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset_at(instant)).date_naive()
    }

    /// Time left until the next reference midnight
    #[must_use]
    pub fn time_until_next_day(&self, instant: DateTime<Utc>) -> Duration {
        let Some(local) = self
            .date_at(instant)
            .succ_opt()
            .map(|d| d.and_time(NaiveTime::MIN))
        else {
            return Duration::zero();
        };

        let resolve = |offset: FixedOffset| {
            local.and_utc() - Duration::seconds(i64::from(offset.local_minus_utc()))
        };

        // The offset can change between now and midnight on switch days
        let guess = resolve(self.offset_at(instant));
        let next_midnight = resolve(self.offset_at(guess));

        next_midnight - instant
    }
}

impl FromStr for ReferenceZone {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cet" | "europe/warsaw" => Ok(Self::CentralEuropean),
            "utc" | "z" => Ok(Self::Fixed(utc())),
            other => other
                .parse::<FixedOffset>()
                .map(Self::Fixed)
                .map_err(|_| ZoneError(s.to_string())),
        }
    }
}

impl fmt::Display for ReferenceZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CentralEuropean => f.write_str("cet"),
            Self::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

fn utc() -> FixedOffset {
    Utc.fix()
}

/// EU summer time runs from 01:00 UTC on the last Sunday of March to
/// 01:00 UTC on the last Sunday of October.
fn is_eu_summer_time(instant: DateTime<Utc>) -> bool {
    let year = instant.year();
    let (Some(start), Some(end)) = (last_sunday(year, 3), last_sunday(year, 10)) else {
        return false;
    };
    let switch = NaiveTime::from_hms_opt(1, 0, 0).unwrap_or(NaiveTime::MIN);
    let start = start.and_time(switch).and_utc();
    let end = end.and_time(switch).and_utc();
    instant >= start && instant < end
}

/// Last Sunday of a 31-day month
fn last_sunday(year: i32, month: u32) -> Option<NaiveDate> {
    let last = NaiveDate::from_ymd_opt(year, month, 31)?;
    let back = last.weekday().num_days_from_sunday();
    last.checked_sub_days(Days::new(u64::from(back)))
}

/// Format a countdown as `"{h}h {m}m {s}s"`
#[must_use]
pub fn format_countdown(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);
    format!(
        "{}h {}m {}s",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
