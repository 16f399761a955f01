//! Input and view mode state types for the application.
//!
//! These enums control keybinding interpretation and which screen region is
//! active. They are deliberately closed: every top-level screen the
//! application can show corresponds to exactly one combination of
//! [`InputMode`], [`ViewMode`] and the auth state.

/// Focus state within search mode.
///
/// Determines whether keystrokes edit the search query or navigate the
/// filtered timeline results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the sidebar search box.
    ///
    /// Accepts character input, backspace, and enter (to switch to
    /// Navigating).
    Typing,

    /// User is navigating the filtered timeline.
    ///
    /// Accepts j/k for movement, enter to open a card, and / to return to
    /// Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and which footer help text is
/// displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default timeline navigation mode.
    ///
    /// Available keybindings: j/k (navigate cards), enter (edit card),
    /// n (new entry), / (search), 1/2/3 (switch view), q (quit).
    Browse,

    /// Active search mode with focus state.
    ///
    /// Contains a [`SearchFocus`] variant indicating whether the user is
    /// typing the query or navigating results.
    Search(SearchFocus),

    /// The entry editor owns the keyboard.
    ///
    /// Tab/Shift-Tab move between form fields; Ctrl+S saves; Esc cancels.
    Edit,
}

/// Which top-level screen is active.
///
/// Only [`Timeline`](ViewMode::Timeline) has an implemented view; the other
/// two render "coming soon" placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Chronological card list of entries. The implemented view.
    Timeline,

    /// Calendar placeholder screen.
    Calendar,

    /// Advanced-search placeholder screen.
    Search,
}

impl ViewMode {
    /// Display label used by sidebar navigation and placeholder headings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Timeline => "Timeline",
            Self::Calendar => "Calendar",
            Self::Search => "Search",
        }
    }
}
