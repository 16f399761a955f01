//! Filesystem location management.
//!
//! This module resolves the application's configuration and data directories
//! following the XDG Base Directory convention, with `$HOME`-relative
//! fallbacks when the XDG variables are unset.

use std::path::PathBuf;

/// Returns the configuration directory for the application.
///
/// Resolves to `$XDG_CONFIG_HOME/daybook`, falling back to
/// `~/.config/daybook`. The configuration file `config.toml` and custom
/// theme files are located within this directory.
#[must_use]
pub fn config_dir() -> PathBuf {
    base_dir("XDG_CONFIG_HOME", ".config").join("daybook")
}

/// Returns the data directory for the application.
///
/// Resolves to `$XDG_DATA_HOME/daybook`, falling back to
/// `~/.local/share/daybook`. The log file `daybook.log` is located within
/// this directory.
#[must_use]
pub fn data_dir() -> PathBuf {
    base_dir("XDG_DATA_HOME", ".local/share").join("daybook")
}

/// Resolves an XDG base directory, preferring the environment variable and
/// falling back to the `$HOME`-relative default.
///
/// A missing `HOME` degrades to a relative path, which keeps the application
/// functional in stripped-down environments.
fn base_dir(xdg_var: &str, home_relative: &str) -> PathBuf {
    if let Some(dir) = std::env::var_os(xdg_var).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }

    std::env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .map_or_else(
            || PathBuf::from(home_relative),
            |home| PathBuf::from(home).join(home_relative),
        )
}
