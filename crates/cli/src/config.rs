//! Runtime configuration from environment variables.
//!
//! | variable                        | default          |
//! |---------------------------------|------------------|
//! | `STOCKROOM_DATA_FILE`           | `inventory.json` |
//! | `STOCKROOM_LOW_STOCK_THRESHOLD` | `5`              |
//! | `STOCKROOM_LOG_FORMAT`          | `text`           |
//!
//! Unparsable values fall back to the default. The fallback is reported as a
//! warning once logging is up, since the log format itself is configured here.

use std::path::PathBuf;

use stockroom_inventory::{DEFAULT_DATA_FILE, DEFAULT_LOW_STOCK_THRESHOLD};
use stockroom_observability::LogFormat;

pub const DATA_FILE_VAR: &str = "STOCKROOM_DATA_FILE";
pub const LOW_STOCK_THRESHOLD_VAR: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";
pub const LOG_FORMAT_VAR: &str = "STOCKROOM_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub low_stock_threshold: i64,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Read the process environment. Returns the config and any fallback warnings.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        if let Some(path) = lookup(DATA_FILE_VAR).filter(|p| !p.trim().is_empty()) {
            config.data_file = PathBuf::from(path);
        }

        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_VAR) {
            match raw.trim().parse::<i64>() {
                Ok(threshold) => config.low_stock_threshold = threshold,
                Err(e) => warnings.push(format!(
                    "{LOW_STOCK_THRESHOLD_VAR}={raw:?} is not an integer ({e}); \
                     using {DEFAULT_LOW_STOCK_THRESHOLD}"
                )),
            }
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(e) => warnings.push(format!("{LOG_FORMAT_VAR}: {e}; using text")),
            }
        }

        (config, warnings)
    }
}
