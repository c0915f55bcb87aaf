use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{single_char, Config};

const MIN_TICK_RATE_MS: u64 = 10;
const MAX_TICK_RATE_MS: u64 = 5_000;
/// Keys the host handles itself and that cannot be rebound.
const RESERVED_KEYS: [char; 2] = ['q', ' '];

/// Errors that can occur when loading configuration.
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
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/tallyterm/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("tallyterm").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - Missing file: `Config::default()`.
    /// - Otherwise parses TOML and validates; missing keys take defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
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

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Tick rate is within 10..=5000 ms
    /// - Every key binding is a single character
    /// - No character is bound to both actions
    /// - Reserved keys are not rebound
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tick = self.ui.tick_rate_ms;
        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&tick) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.tick_rate_ms must be between {} and {}, got {}",
                    MIN_TICK_RATE_MS, MAX_TICK_RATE_MS, tick
                ),
            });
        }

        let increment = parse_keys("keys.increment", &self.keys.increment)?;
        let decrement = parse_keys("keys.decrement", &self.keys.decrement)?;

        if let Some(ch) = increment.iter().find(|ch| decrement.contains(*ch)) {
            return Err(ConfigError::ValidationError {
                message: format!("Key '{}' is bound to both increment and decrement", ch),
            });
        }

        if let Some(ch) = increment
            .iter()
            .chain(decrement.iter())
            .find(|ch| RESERVED_KEYS.contains(*ch))
        {
            return Err(ConfigError::ValidationError {
                message: format!("Key '{}' is reserved and cannot be rebound", ch),
            });
        }

        Ok(())
    }
}

fn parse_keys(field: &str, keys: &[String]) -> Result<Vec<char>, ConfigError> {
    keys.iter()
        .map(|key| {
            single_char(key).ok_or_else(|| ConfigError::ValidationError {
                message: format!("{} entry '{}' must be a single character", field, key),
            })
        })
        .collect()
}
