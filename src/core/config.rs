//! Configuration file management.
//!
//! Handles reading and validating the optional `.keysplit.toml` file that
//! supplies defaults for the `split` and `combine` commands.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants::{self, MAX_SHARES, MIN_THRESHOLD};
use crate::core::encoding::ShareEncoding;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `.keysplit.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Defaults for splitting secrets.
    #[serde(default)]
    pub split: SplitConfig,
}

/// The `[split]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Number of shares to produce.
    pub parts: usize,
    /// Shares required to recover the secret.
    pub threshold: usize,
    /// Text encoding for shares.
    pub encoding: ShareEncoding,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            parts: 5,
            threshold: 3,
            encoding: ShareEncoding::default(),
        }
    }
}

impl Config {
    /// Path to the configuration file in the current directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load `.keysplit.toml` from the current directory, or the defaults if
    /// there is none.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read, parsed or
    /// validated.
    pub fn discover() -> Result<Self> {
        Ok(Self::find()?.unwrap_or_default())
    }

    /// Load `.keysplit.toml` from the current directory if it exists.
    ///
    /// Unlike [`discover`](Self::discover), callers can tell whether the
    /// values came from a file or are only defaults.
    ///
    /// # Errors
    ///
    /// Same as [`load_from`](Self::load_from).
    pub fn find() -> Result<Option<Self>> {
        let path = Self::config_path();
        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    /// Load and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile`, `ConfigError::Parse` or
    /// `ConfigError::InvalidValue`.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;

        debug!(
            parts = config.split.parts,
            threshold = config.split.threshold,
            encoding = config.split.encoding.name(),
            "config loaded"
        );

        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Checks:
    /// - threshold is at least 2
    /// - parts is not below the threshold
    /// - parts is at most 255
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        let split = &self.split;

        if split.threshold < MIN_THRESHOLD {
            return Err(ConfigError::InvalidValue {
                field: "split.threshold",
                reason: format!("must be at least {}, got {}", MIN_THRESHOLD, split.threshold),
            }
            .into());
        }
        if split.parts < split.threshold {
            return Err(ConfigError::InvalidValue {
                field: "split.parts",
                reason: format!(
                    "must be at least the threshold ({}), got {}",
                    split.threshold, split.parts
                ),
            }
            .into());
        }
        if split.parts > MAX_SHARES {
            return Err(ConfigError::InvalidValue {
                field: "split.parts",
                reason: format!("must be at most {}, got {}", MAX_SHARES, split.parts),
            }
            .into());
        }

        Ok(())
    }
}
