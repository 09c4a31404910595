//! Command implementations

pub mod schedule;
pub mod simple;

pub use schedule::{ScheduleRun, run_schedule};
pub use simple::{run_simple, run_simple_with};
