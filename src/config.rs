//! Global configuration management
//!
//! User preferences live at `~/.config/rutcheck/config.toml`. Every key is
//! optional and command-line flags take precedence over the file.
//!
//! ```toml
//! [output]
//! json = false
//!
//! [format]
//! style = "dotted"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::FormatStyle;
use crate::paths;

/// Errors raised while reading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("config I/O error at {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("invalid config at {path}: {source}")]
    Parse {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },
}

/// Global rutcheck configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
    /// Formatting preferences
    #[serde(default)]
    pub format: FormatConfig,
}

/// Output preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit JSON unless told otherwise
    #[serde(default)]
    pub json: bool,
}

/// Formatting preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Style used by `rutcheck format`
    #[serde(default)]
    pub style: FormatStyle,
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the global path, falling back to defaults.
    ///
    /// A missing file is normal; an unreadable or malformed one is logged and
    /// ignored.
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        Self::load_from(&path).unwrap_or_else(|err| {
            log::warn!("{err}; using default configuration");
            Self::default()
        })
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
