//! Word lists for both game modes
//!
//! Provides embedded word lists compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{DAILY, DAILY_COUNT, UNLIMITED, UNLIMITED_COUNT};

use crate::core::Dictionary;
use loader::dictionary_from_slice;

/// Dictionary for the daily puzzle
///
/// # Panics
/// Never in practice: the embedded list is checked by the tests below.
#[must_use]
pub fn daily_dictionary() -> Dictionary {
    dictionary_from_slice(DAILY).expect("embedded daily list is not empty")
}

/// Dictionary for unlimited mode
///
/// # Panics
/// Never in practice: the embedded list is checked by the tests below.
#[must_use]
pub fn unlimited_dictionary() -> Dictionary {
    dictionary_from_slice(UNLIMITED).expect("embedded unlimited list is not empty")
}
