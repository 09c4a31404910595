//! Persistent play statistics
//!
//! One record per mode, stored as JSON under a mode-specific key.

mod daily;
mod store;
mod unlimited;

pub use daily::DailyStats;
pub use store::{FileStore, KeyValueStore, MemoryStore, StorageError, load_stats, save_stats};
pub use unlimited::UnlimitedStats;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A stats record that lives under a fixed storage key
pub trait StatsRecord: Serialize + DeserializeOwned + Default {
    /// Storage key of this record
    const KEY: &'static str;

    /// Bring a loaded record back within its invariants
    fn normalize(&mut self) {}
}
