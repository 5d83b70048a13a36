//! Centralized path definitions for cubesolve
//!
//! ## Config Lookup
//!
//! ```text
//! --config PATH                        # explicit flag wins
//! $CUBESOLVE_CONFIG                    # then the environment
//! ~/.config/cubesolve/config.toml      # then the user config dir
//! ```
//!
//! When none of these exist the built-in defaults are used.

use std::path::{Path, PathBuf};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "CUBESOLVE_CONFIG";

/// Config directory name
const CONFIG_DIR: &str = "cubesolve";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the user config directory.
///
/// Returns `~/.config/cubesolve/` on Linux, the platform equivalent elsewhere.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
}

/// Get the default config file path.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Pick the config file to load, if any.
///
/// An explicit path is returned even if it does not exist so the caller can
/// report it; the environment and default locations are only used when present.
#[must_use]
pub fn resolve_config(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }

    let default = config_file();
    default.exists().then_some(default)
}
