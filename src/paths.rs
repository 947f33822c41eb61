//! Centralized path definitions for rutcheck
//!
//! ## Layout
//!
//! ```text
//! ~/.config/rutcheck/
//! └── config.toml               # User preferences
//! ```

use std::path::PathBuf;

/// Global config directory, relative to the home directory
const GLOBAL_DIR: &str = ".config/rutcheck";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global rutcheck directory.
///
/// Returns `~/.config/rutcheck/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.config/rutcheck/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
