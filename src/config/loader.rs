use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Shortest autoplay interval accepted; anything faster is unreadable.
const MIN_AUTOPLAY_INTERVAL_MS: u64 = 500;
const MIN_TICK_RATE_MS: u64 = 10;

/// Why `config.toml` could not be turned into a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `<config dir>/parscade/config.toml`, relative to the working
    /// directory when the platform has no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("parscade").join("config.toml")
    }

    /// Directory for durable state and logs.
    pub fn data_dir() -> PathBuf {
        let data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("parscade")
    }

    /// Resolved path of the key/value storage file.
    pub fn storage_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(|| Self::data_dir().join("storage.json"))
    }

    /// Load and validate `path`. A missing file yields the defaults;
    /// fields left out of the file keep theirs.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject timings too fast to read or to redraw.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.autoplay_interval_ms < MIN_AUTOPLAY_INTERVAL_MS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "carousel.autoplay_interval_ms must be at least {} (got {})",
                    MIN_AUTOPLAY_INTERVAL_MS, self.carousel.autoplay_interval_ms
                ),
            });
        }

        if self.ui.tick_rate_ms < MIN_TICK_RATE_MS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.tick_rate_ms must be at least {} (got {})",
                    MIN_TICK_RATE_MS, self.ui.tick_rate_ms
                ),
            });
        }

        Ok(())
    }
}
