//! Configuration for the game binary
//!
//! Read from `config.toml` in the platform config directory (or an explicit
//! path). Every field is optional; a missing file means all defaults.

use crate::selector::{ReferenceZone, ZoneError};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "brainrodle";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Zone(#[from] ZoneError),
    #[error("invalid log level {0:?} (expected off, error, warn, info, debug or trace)")]
    Level(String),
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (off, error, warn, info, debug, trace); `RUST_LOG` wins over it
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for stats records; platform data directory when unset
    pub data_dir: Option<PathBuf>,
}

/// Daily word clock configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Reference zone: "cet", "utc" or a fixed offset like "+02:00"
    pub zone: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            zone: ReferenceZone::default().to_string(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub clock: ClockConfig,
}

impl Config {
    /// Platform config directory for the game
    ///
    /// - Linux: `~/.config/brainrodle`
    /// - macOS: `~/Library/Application Support/brainrodle`
    /// - Windows: `%APPDATA%\brainrodle`
    #[must_use]
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Default config file location
    #[must_use]
    pub fn default_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Parse config from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load config from `path`, or from [`Config::default_path`] when `None`
    ///
    /// An explicit path must exist; the default path may be absent.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        match fs::read_to_string(&path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if !required && e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io { path, source }),
        }
    }

    /// Directory where stats records are stored
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.storage.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        })
    }

    /// Parsed reference zone
    ///
    /// # Errors
    /// Returns an error if the zone string is not recognized
    pub fn zone(&self) -> Result<ReferenceZone, ConfigError> {
        Ok(self.clock.zone.parse()?)
    }

    /// Parsed log level
    ///
    /// # Errors
    /// Returns an error if the level string is not recognized
    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        self.logging
            .level
            .parse()
            .map_err(|_| ConfigError::Level(self.logging.level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.zone().unwrap(), ReferenceZone::CentralEuropean);
        assert_eq!(config.log_level().unwrap(), LevelFilter::Warn);
        assert!(config.data_dir().ends_with(APP_DIR));
    }

    #[test]
    fn from_toml_full() {
        let config = Config::from_toml(
            r#"
[logging]
level = "debug"

[storage]
data_dir = "/tmp/brainrodle-test"

[clock]
zone = "+05:30"
"#,
        )
        .unwrap();

        assert_eq!(config.log_level().unwrap(), LevelFilter::Debug);
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/brainrodle-test"));
        assert!(matches!(config.zone().unwrap(), ReferenceZone::Fixed(_)));
    }

    #[test]
    fn from_toml_partial_keeps_defaults() {
        let config = Config::from_toml("[clock]\nzone = \"utc\"\n").unwrap();
        assert_eq!(config.logging.level, "warn");
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn invalid_values_are_reported() {
        let config = Config::from_toml("[clock]\nzone = \"moon\"\n[logging]\nlevel = \"loud\"").unwrap();
        assert!(matches!(config.zone(), Err(ConfigError::Zone(_))));
        assert!(matches!(config.log_level(), Err(ConfigError::Level(_))));
        assert!(Config::from_toml("[clock\n").is_err());
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
