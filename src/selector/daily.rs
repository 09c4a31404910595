//! Daily and random word selection

use super::prng::Lcg64;
use crate::core::{Dictionary, Word};
use chrono::{Datelike, NaiveDate};
use log::debug;
use rand::Rng;

/// Integer seed for a calendar date: `yyyymmdd`
///
/// Unlike a plain sum of the components, distinct dates never share a seed.
#[must_use]
pub fn date_seed(date: NaiveDate) -> u64 {
    u64::from(date.year().unsigned_abs()) * 10_000
        + u64::from(date.month()) * 100
        + u64::from(date.day())
}

/// Dictionary index of the daily word for `date`
///
/// `floor(fraction * len)` where the fraction is the first output of an
/// [`Lcg64`] seeded with [`date_seed`].
#[must_use]
pub fn daily_index(date: NaiveDate, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let fraction = Lcg64::new(date_seed(date)).next_fraction();
    ((fraction * len as f64).floor() as usize).min(len - 1)
}

/// The word every player gets on `date`
///
/// Pure: the same date and dictionary always give the same word.
///
/// # Examples
/// ```
/// use brainrodle::selector::select_daily_word;
/// use brainrodle::wordlists::daily_dictionary;
/// use chrono::NaiveDate;
///
/// let dict = daily_dictionary();
/// let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(select_daily_word(date, &dict), select_daily_word(date, &dict));
/// ```
///
/// # Panics
/// Never: dictionaries are non-empty and the index is clamped into range.
#[must_use]
pub fn select_daily_word(date: NaiveDate, dictionary: &Dictionary) -> &Word {
    let index = daily_index(date, dictionary.len());
    debug!("daily word for {date}: index {index} of {}", dictionary.len());
    dictionary
        .get(index)
        .expect("index clamped to a non-empty dictionary")
}

/// Uniformly random word for unlimited mode
#[must_use]
pub fn select_random_word(dictionary: &Dictionary) -> &Word {
    select_random_word_with(dictionary, &mut rand::rng())
}

/// Uniformly random word drawn from the given generator
///
/// # Panics
/// Never: dictionaries are non-empty.
pub fn select_random_word_with<'a, R: Rng + ?Sized>(
    dictionary: &'a Dictionary,
    rng: &mut R,
) -> &'a Word {
    let index = rng.random_range(0..dictionary.len());
    dictionary
        .get(index)
        .expect("index drawn from dictionary range")
}
