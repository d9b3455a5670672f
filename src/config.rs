//! Configuration management for the contact book driver.
//!
//! This module loads settings from environment variables, with an optional
//! `.env` file. The library itself never reads the environment; only the
//! binary builds a [`Config`] and passes its values down.

use crate::book::DEFAULT_BATCH_SIZE;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Settings for the contact book driver.
#[derive(Debug, Clone)]
pub struct Config {
    /// Chunk size for batched iteration (default: 1)
    pub batch_size: NonZeroUsize,

    /// Snapshot file that saves are appended to (default: "disk.bin")
    pub snapshot_path: PathBuf,

    /// CSV table written by exports (default: "contacts.csv")
    pub csv_path: PathBuf,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BOOK_BATCH_SIZE`: Batch size for iteration (default: 1)
    /// - `BOOK_SNAPSHOT_PATH`: Snapshot file path (default: "disk.bin")
    /// - `BOOK_CSV_PATH`: CSV export path (default: "contacts.csv")
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let batch_size = Self::parse_env_nonzero("BOOK_BATCH_SIZE", defaults.batch_size)?;
        let snapshot_path = env::var("BOOK_SNAPSHOT_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.snapshot_path);
        let csv_path = env::var("BOOK_CSV_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.csv_path);
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        for (var, path) in [
            ("BOOK_SNAPSHOT_PATH", &snapshot_path),
            ("BOOK_CSV_PATH", &csv_path),
        ] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    var: var.to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
        }

        Ok(Config {
            batch_size,
            snapshot_path,
            csv_path,
            log_level,
        })
    }

    /// Parse an environment variable as a positive integer with a default value.
    fn parse_env_nonzero(var_name: &str, default: NonZeroUsize) -> ConfigResult<NonZeroUsize> {
        match env::var(var_name) {
            Ok(val) => val
                .trim()
                .parse::<NonZeroUsize>()
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a positive number, got: {}", val),
                }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            batch_size: DEFAULT_BATCH_SIZE,
            snapshot_path: PathBuf::from("disk.bin"),
            csv_path: PathBuf::from("contacts.csv"),
            log_level: "info".to_string(),
        }
    }
}
