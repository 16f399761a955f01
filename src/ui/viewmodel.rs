//! View model types representing renderable UI state.
//!
//! A [`UiViewModel`] is a pure-data snapshot computed from application state;
//! the component renderers consume it without touching `AppState`. Exactly one
//! of the screen-level branches is populated at a time: an auth screen, the
//! editor, a placeholder, or the sidebar+timeline layout.

use crate::app::editor::EditorFocus;

/// Complete renderable UI state.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Full-screen auth branch. When `Some`, everything else except the
    /// footer is suppressed.
    pub auth_screen: Option<AuthScreen>,

    /// Sidebar, present on every authenticated screen.
    pub sidebar: Option<SidebarVm>,

    /// Editor form, present while edit mode is engaged.
    pub editor: Option<EditorVm>,

    /// Windowed timeline cards for the main content area.
    pub cards: Vec<EntryCardVm>,

    /// Index of the selected card within `cards` (not the full list).
    pub selected_card: usize,

    /// "Coming soon" screen for the calendar and advanced-search views.
    pub placeholder: Option<PlaceholderVm>,

    /// Pending notification banner.
    pub notice: Option<NoticeVm>,

    /// Footer keybinding hints.
    pub footer: FooterInfo,
}

/// Which full-screen authentication branch to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScreen {
    /// Session state not yet resolved.
    Loading,
    /// Resolved and signed out; prompts for sign-in.
    SignIn,
}

/// Sidebar display information.
#[derive(Debug, Clone)]
pub struct SidebarVm {
    /// Application title shown at the top.
    pub title: String,
    /// Signed-in user's display name.
    pub user_name: Option<String>,
    /// Navigation entries as `(label, is_active)`.
    pub nav_items: Vec<(String, bool)>,
    /// Current search query text.
    pub search_query: String,
    /// Whether the search box has keyboard focus.
    pub search_active: bool,
    /// Static statistics widget rows as `(label, value)`.
    pub quick_stats: Vec<(String, String)>,
    /// Static recently-used tag chips.
    pub recent_tags: Vec<String>,
    /// Static "on this day" widget text.
    pub on_this_day: String,
    /// Settings item label.
    pub settings_label: String,
}

/// Display information for a single timeline card.
#[derive(Debug, Clone)]
pub struct EntryCardVm {
    /// Day-of-month badge text.
    pub day: String,
    pub title: Option<String>,
    pub is_favorite: bool,
    /// Pre-formatted creation timestamp.
    pub timestamp: String,
    /// Content preview, wrapped and truncated.
    pub body_lines: Vec<String>,
    pub photo_count: usize,
    pub has_voice_note: bool,
    pub tags: Vec<String>,
    pub mood: Option<String>,
    pub weather: Option<String>,
    pub location: Option<String>,
    pub char_count: usize,
    pub is_selected: bool,
    /// Character ranges of search matches within the title.
    pub title_highlights: Vec<(usize, usize)>,
}

/// Editor form display information.
#[derive(Debug, Clone)]
pub struct EditorVm {
    /// "New Entry" or "Edit Entry".
    pub heading: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub tag_input: String,
    /// Selected mood, empty when none.
    pub mood: String,
    /// Selected weather, empty when none.
    pub weather: String,
    pub location: String,
    pub is_favorite: bool,
    pub is_recording: bool,
    pub focus: EditorFocus,
    pub char_count: usize,
    pub can_save: bool,
    /// Save control label, reflecting edit mode and in-flight saves.
    pub save_label: String,
}

/// "Coming soon" screen content.
#[derive(Debug, Clone)]
pub struct PlaceholderVm {
    pub heading: String,
    pub message: String,
}

/// Notification banner content.
#[derive(Debug, Clone)]
pub struct NoticeVm {
    pub text: String,
    pub is_error: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Context-appropriate keybinding hints.
    pub keybindings: String,
}
