//! Local key-value storage for stats records

use super::StatsRecord;
use log::{debug, warn};
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("stats record is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// String values addressed by string keys
pub trait KeyValueStore {
    /// Read a value, `Ok(None)` if the key was never written
    ///
    /// # Errors
    /// Returns [`StorageError`] if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    /// Returns [`StorageError`] if the backing store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// One `<key>.json` file per key in a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        // Write then rename so a crash never leaves a half-written record
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        debug!("saved {key} to {}", path.display());
        Ok(())
    }
}

/// In-process store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load a stats record, falling back to defaults
///
/// A missing, unreadable or corrupt record is never an error for the player:
/// it is logged and replaced by a zeroed record.
pub fn load_stats<R: StatsRecord>(store: &dyn KeyValueStore) -> R {
    let raw = match store.get(R::KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return R::default(),
        Err(e) => {
            warn!("could not read {}: {e}; using empty stats", R::KEY);
            return R::default();
        }
    };

    match serde_json::from_str::<R>(&raw) {
        Ok(mut record) => {
            record.normalize();
            record
        }
        Err(e) => {
            warn!("corrupt {} record: {e}; using empty stats", R::KEY);
            R::default()
        }
    }
}

/// Serialize and store a stats record under its key
///
/// # Errors
/// Returns [`StorageError`] if serialization or the write fails.
pub fn save_stats<R: StatsRecord>(
    store: &mut dyn KeyValueStore,
    record: &R,
) -> Result<(), StorageError> {
    let contents = serde_json::to_string_pretty(record)?;
    store.set(R::KEY, &contents)
}
