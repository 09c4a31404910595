//! Target word selection
//!
//! Daily mode derives the word from the reference calendar date; unlimited
//! mode draws uniformly at random.

mod clock;
mod daily;
mod prng;
mod schedule;

pub use clock::{Clock, FixedClock, ReferenceZone, SystemClock, ZoneError, format_countdown};
pub use daily::{
    daily_index, date_seed, select_daily_word, select_random_word, select_random_word_with,
};
pub use prng::Lcg64;
pub use schedule::{CoverageReport, ScheduledWord, coverage, schedule, schedule_with};
