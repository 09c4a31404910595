//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_coverage, print_daily_word, print_schedule, print_stats, print_word_list,
};
