//! Game engine: the interface frontends call

mod engine;
mod mode;
mod stats;

pub use engine::{Game, Start};
pub use mode::{Mode, ModeError};
pub use stats::ModeStats;
