//! Configuration file management.
//!
//! Resolves the data directory and reads the optional `config.toml` inside
//! it. App settings that belong to the vault live in the document instead.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants::{CONFIG_FILE, DATA_DIR, HOME_ENV};
use crate::core::validation::check_region;
use crate::error::{ConfigError, Result};

/// Settings read from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data directory; never serialized
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Region applied when the vault is first initialized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_region: Option<String>,
    /// Log filter used when `BULLPEN_LOG` is unset, e.g. `bullpen=info`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,
}

impl Config {
    /// Data directory: `explicit`, else `$BULLPEN_HOME`, else the platform
    /// data directory joined with `bullpen`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoDataDir` if no platform data directory exists.
    pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = explicit {
            return Ok(dir.to_path_buf());
        }
        if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(home));
        }
        dirs::data_dir()
            .map(|d| d.join(DATA_DIR))
            .ok_or_else(|| ConfigError::NoDataDir.into())
    }

    /// Load `config.toml` from `data_dir`, or defaults when it is absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or validated.
    pub fn load(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let path = data_dir.join(CONFIG_FILE);

        let mut config = if path.exists() {
            debug!(path = %path.display(), "loading config");
            let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
            toml::from_str::<Self>(&contents).map_err(ConfigError::Parse)?
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };
        config.data_dir = data_dir;
        config.validate()?;
        Ok(config)
    }

    /// Write `config.toml` into the data directory, creating it if needed.
    pub fn save(&self) -> Result<()> {
        debug!(path = %self.path().display(), "saving config");
        std::fs::create_dir_all(&self.data_dir)?;
        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(self.path(), contents)?;
        Ok(())
    }

    pub fn path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for blank values.
    pub fn validate(&self) -> Result<()> {
        if let Some(region) = &self.default_region {
            if region.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "default_region",
                    reason: "cannot be empty".to_string(),
                }
                .into());
            }
            check_region(region);
        }
        if self.log.as_deref().is_some_and(|l| l.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "log",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
