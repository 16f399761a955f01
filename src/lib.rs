//! Daybook: a terminal journal with timeline browsing and an entry editor.
//!
//! Daybook is a single-screen journaling application that provides:
//! - A chronological timeline of journal entries with live search filtering
//! - A full entry editor with tags, mood, weather, and location fields
//! - Sidebar navigation between timeline, calendar, and search views
//! - A pluggable session provider for authentication state
//! - Structured JSON logging to a rotating file
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shell (main.rs)                           │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Domain Layer  │   │ Session Layer │
//! │ (ui/)         │   │ (domain/)     │   │ (session/)    │
//! │ - Rendering   │   │ - Entry model │   │ - Auth states │
//! │ - Theming     │   │ - Identity    │   │ - Provider    │
//! │ - Components  │   │ - Errors      │   │ - Updates     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │
//! │  - XDG paths (infrastructure/)                      │
//! │  - JSON logging (observability/)                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (entries, identity, errors)
//! - [`session`]: Session provider abstraction and in-process implementation
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Structured JSON logging (internal)
//!
//! # Configuration
//!
//! The application is configured via `~/.config/daybook/config.toml`:
//!
//! ```toml
//! theme = "catppuccin-mocha"
//! # theme_file = "/path/to/custom-theme.toml"
//! trace_level = "info"
//! user_name = "Demo User"
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Startup** (`main.rs`): load configuration, initialize tracing,
//!    create `AppState`, subscribe to the session provider
//! 2. **Event Loop**: drain session updates, poll keyboard input, feed
//!    normalized events into [`handle_event`], execute returned actions
//! 3. **Rendering**: compute a view model from state and draw components
//!
//! # Example
//!
//! ```rust
//! use daybook::{handle_event, initialize, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config);
//!
//! let (should_render, actions) = handle_event(&mut state, Event::Char('j'))?;
//! // Execute actions, re-render if needed...
//! # Ok::<(), daybook::DaybookError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod session;
pub mod ui;

pub use app::{filter_entries, handle_event, Action, AppState, Event, InputMode, SearchFocus, ViewMode};
pub use domain::{DaybookError, JournalEntry, Result};
pub use session::{AuthSubscription, LocalSession, SessionProvider};
pub use ui::Theme;

use serde::Deserialize;

/// Application configuration loaded from the TOML config file.
///
/// Every field is optional; missing values fall back to defaults. A missing
/// or unparsable config file yields `Config::default()` so the application
/// always starts.
///
/// # Example
///
/// ```toml
/// # ~/.config/daybook/config.toml
/// theme = "catppuccin-latte"
/// trace_level = "debug"
/// user_name = "Ada"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`.
    /// Overridden by `RUST_LOG` when set.
    pub trace_level: Option<String>,

    /// Display name for the signed-in user.
    pub user_name: Option<String>,
}

impl Config {
    /// Loads configuration from `config.toml` in the config directory.
    ///
    /// Returns defaults when the file is missing or unparsable; a broken
    /// config must never prevent startup.
    #[must_use]
    pub fn load() -> Self {
        let path = infrastructure::paths::config_dir().join("config.toml");
        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::from_toml(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "invalid config file, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error when the TOML fails to parse or contains fields of
    /// the wrong type.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| DaybookError::Config(e.to_string()))
    }
}

/// Initializes the application with configuration.
///
/// Creates a new `AppState` in the loading auth screen, with the theme
/// resolved from (in order of precedence) `theme_file`, `theme_name`, and the
/// built-in default. Theme resolution failures fall back to the default and
/// are logged, never fatal.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing daybook");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_all_fields() {
        let config = Config::from_toml(
            r#"
            theme = "catppuccin-latte"
            theme_file = "/tmp/theme.toml"
            trace_level = "debug"
            user_name = "Ada"
            "#,
        )
        .unwrap();

        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("/tmp/theme.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.user_name.as_deref(), Some("Ada"));
    }

    #[test]
    fn config_defaults_missing_fields() {
        let config = Config::from_toml("theme = \"catppuccin-mocha\"").unwrap();
        assert!(config.theme_file.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn config_rejects_invalid_toml() {
        assert!(Config::from_toml("theme = [broken").is_err());
    }

    #[test]
    fn initialize_falls_back_to_default_theme() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }
}
