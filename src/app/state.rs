//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! application, along with entry filtering, selection management, save/merge
//! semantics, and UI view model generation. It is the single source of truth
//! for all session-lifetime state.
//!
//! # State Components
//!
//! - **Auth**: The three-way authentication state machine
//! - **Entries**: Master in-memory entry list, exclusively owned here
//! - **Filtered Entries**: Subset after applying the search query
//! - **Selection**: Cursor position within the displayed timeline cards
//! - **Editor**: Controlled form state while edit mode is engaged
//! - **Modes**: Input mode and active view
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] transforms a state snapshot into a
//! renderable representation: auth screens, sidebar, windowed timeline cards
//! with search-match highlighting, the editor form, or a placeholder screen.

use crate::app::actions::Notice;
use crate::app::editor::EditorState;
use crate::app::modes::{InputMode, SearchFocus, ViewMode};
use crate::domain::error::Result;
use crate::domain::{sample_entries, AuthState, EntryDraft, JournalEntry};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AuthScreen, EditorVm, EntryCardVm, FooterInfo, NoticeVm, PlaceholderVm, SidebarVm, UiViewModel,
};

/// Hardcoded recently-used tag chips shown in the sidebar.
///
/// Static demonstration data; the sidebar does not derive these from the
/// entry list.
pub const RECENT_TAGS: [&str; 5] = ["family", "work", "travel", "gratitude", "goals"];

/// Rows one timeline card occupies, including its separator line.
const CARD_ROWS: usize = 8;

/// Central application state container.
///
/// Mutated by the event handler in response to user input and session
/// updates. View models are computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Authentication state driving the top-level render branch.
    pub auth: AuthState,

    /// Which top-level screen is active. Forced back to Timeline after a
    /// successful save.
    pub current_view: ViewMode,

    /// Master entry list. Newest saves are prepended; no sorting is applied
    /// anywhere, so render order is exactly storage order.
    pub entries: Vec<JournalEntry>,

    /// Entries matching the current search query.
    ///
    /// Recomputed by `apply_search_filter()` after every relevant change.
    pub filtered_entries: Vec<JournalEntry>,

    /// Zero-based cursor within the displayed timeline cards.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Search query bound to the sidebar search box.
    pub search_query: String,

    /// Editor form state; `Some` exactly while edit mode is engaged.
    pub editor: Option<EditorState>,

    /// Transient notification, cleared on the next user input.
    pub notice: Option<Notice>,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Fixed sample entries substituted when nothing else would display.
    fallback_entries: Vec<JournalEntry>,
}

impl AppState {
    /// Creates a fresh application state in the loading auth screen.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let mut state = Self {
            auth: AuthState::Loading,
            current_view: ViewMode::Timeline,
            entries: Vec::new(),
            filtered_entries: Vec::new(),
            selected_index: 0,
            input_mode: InputMode::Browse,
            search_query: String::new(),
            editor: None,
            notice: None,
            theme,
            fallback_entries: sample_entries(),
        };
        state.apply_search_filter();
        state
    }

    /// The cards the timeline will actually display.
    ///
    /// When the filtered list is empty this substitutes the two fixed sample
    /// entries instead of an empty state — a deliberate quirk carried over
    /// from the original product wiring (see DESIGN.md).
    #[must_use]
    pub fn display_entries(&self) -> &[JournalEntry] {
        if self.filtered_entries.is_empty() {
            &self.fallback_entries
        } else {
            &self.filtered_entries
        }
    }

    /// Returns the currently selected timeline card, if any.
    #[must_use]
    pub fn selected_entry(&self) -> Option<&JournalEntry> {
        self.display_entries().get(self.selected_index)
    }

    /// Moves the card cursor down one position, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.display_entries().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the card cursor up one position, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.display_entries().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Recomputes `filtered_entries` from the master list and search query,
    /// then clamps the selection cursor to the displayed cards.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_entries = self.entries.len(),
            query_len = self.search_query.len(),
        )
        .entered();

        self.filtered_entries = filter_entries(&self.entries, &self.search_query);

        let len = self.display_entries().len();
        if len == 0 {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(len - 1);
        }

        tracing::debug!(
            filtered_count = self.filtered_entries.len(),
            "search filter applied"
        );
    }

    /// Saves a draft into the entry list.
    ///
    /// With an `id` (edit mode) the draft is merged into the matching entry
    /// and `updated_at` stamped; an id with no match leaves the list
    /// unchanged (this happens when a fallback sample card was opened).
    /// Without an id a new entry is constructed — owner taken from the
    /// current session, `"demo"` if none — and prepended.
    ///
    /// # Errors
    ///
    /// Returns an error if entry construction rejects the draft. The caller
    /// maps errors to a failure notice and keeps the editor open for retry.
    pub fn save_entry(&mut self, draft: EntryDraft) -> Result<Notice> {
        match draft.id.clone() {
            Some(id) => {
                if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
                    entry.apply(draft);
                    tracing::info!(entry_id = %id, "entry updated");
                } else {
                    tracing::warn!(entry_id = %id, "editing target not in list; nothing merged");
                }
                Ok(Notice::success("Entry updated successfully"))
            }
            None => {
                let entry = JournalEntry::create(draft, self.auth.user_id())?;
                tracing::info!(entry_id = %entry.id, "entry created");
                self.entries.insert(0, entry);
                Ok(Notice::success("Entry saved successfully"))
            }
        }
    }

    /// Computes a renderable view model from current state and terminal size.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UiViewModel {
        let auth_screen = match &self.auth {
            AuthState::Loading => Some(AuthScreen::Loading),
            AuthState::Unauthenticated => Some(AuthScreen::SignIn),
            AuthState::Authenticated(_) => None,
        };

        if let Some(screen) = auth_screen {
            return UiViewModel {
                auth_screen: Some(screen),
                sidebar: None,
                editor: None,
                cards: Vec::new(),
                selected_card: 0,
                placeholder: None,
                notice: self.compute_notice(),
                footer: self.compute_footer(),
            };
        }

        let editor = self.editor.as_ref().map(|e| Self::compute_editor_vm(e));
        let (cards, selected_card, placeholder) = if editor.is_some() {
            (Vec::new(), 0, None)
        } else {
            match self.current_view {
                ViewMode::Timeline => {
                    let (cards, selected) = self.compute_cards(rows, cols);
                    (cards, selected, None)
                }
                ViewMode::Calendar => (
                    Vec::new(),
                    0,
                    Some(PlaceholderVm {
                        heading: "Calendar View".to_string(),
                        message: "Coming soon...".to_string(),
                    }),
                ),
                ViewMode::Search => (
                    Vec::new(),
                    0,
                    Some(PlaceholderVm {
                        heading: "Advanced Search".to_string(),
                        message: "Coming soon...".to_string(),
                    }),
                ),
            }
        };

        UiViewModel {
            auth_screen: None,
            sidebar: Some(self.compute_sidebar_vm()),
            editor,
            cards,
            selected_card,
            placeholder,
            notice: self.compute_notice(),
            footer: self.compute_footer(),
        }
    }

    /// Builds the windowed card list centered on the selection.
    fn compute_cards(&self, rows: usize, cols: usize) -> (Vec<EntryCardVm>, usize) {
        let display = self.display_entries();
        if display.is_empty() {
            return (Vec::new(), 0);
        }

        // Chrome: header-ish blank, footer and its border.
        let available_rows = rows.saturating_sub(4);
        let visible_count = (available_rows / CARD_ROWS).max(1);

        let mut visible_start = self.selected_index.saturating_sub(visible_count / 2);
        let visible_end = (visible_start + visible_count).min(display.len());
        if visible_end - visible_start < visible_count && display.len() >= visible_count {
            visible_start = visible_end.saturating_sub(visible_count);
        }

        let body_width = cols.saturating_sub(crate::ui::SIDEBAR_COLS + 6).max(20);
        let highlight_query = match self.input_mode {
            InputMode::Search(_) if !self.search_query.is_empty() => {
                Some(self.search_query.as_str())
            }
            _ => None,
        };

        let cards = display[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, entry)| {
                let absolute_idx = visible_start + relative_idx;
                Self::compute_card_vm(
                    entry,
                    absolute_idx == self.selected_index,
                    body_width,
                    highlight_query,
                )
            })
            .collect();

        (cards, self.selected_index.saturating_sub(visible_start))
    }

    /// Display information for a single timeline card.
    fn compute_card_vm(
        entry: &JournalEntry,
        is_selected: bool,
        body_width: usize,
        highlight_query: Option<&str>,
    ) -> EntryCardVm {
        let title_highlights = match (&entry.title, highlight_query) {
            (Some(title), Some(query)) => substring_ranges(title, query),
            _ => Vec::new(),
        };

        EntryCardVm {
            day: entry.created_at.format("%d").to_string(),
            title: entry.title.clone(),
            is_favorite: entry.is_favorite,
            timestamp: entry
                .created_at
                .format("%A, %B %-d, %Y \u{2022} %-I:%M %p")
                .to_string(),
            body_lines: crate::ui::helpers::wrap_truncated(&entry.content, body_width, 3),
            photo_count: entry.photos.len(),
            has_voice_note: entry.voice_recording_url.is_some(),
            tags: entry.tags.clone(),
            mood: entry.mood.clone(),
            weather: entry.weather.clone(),
            location: entry.location.clone(),
            char_count: entry.char_count(),
            is_selected,
            title_highlights,
        }
    }

    /// Sidebar display information: navigation, search box, static widgets.
    fn compute_sidebar_vm(&self) -> SidebarVm {
        let user_name = match &self.auth {
            AuthState::Authenticated(identity) => Some(identity.name.clone()),
            _ => None,
        };

        SidebarVm {
            title: "Daybook".to_string(),
            user_name,
            nav_items: [ViewMode::Timeline, ViewMode::Calendar, ViewMode::Search]
                .iter()
                .map(|view| (view.label().to_string(), *view == self.current_view))
                .collect(),
            search_query: self.search_query.clone(),
            search_active: matches!(self.input_mode, InputMode::Search(SearchFocus::Typing)),
            // Always-zero counters, matching the original's static widgets.
            quick_stats: vec![
                ("Total Entries".to_string(), "0".to_string()),
                ("This Month".to_string(), "0".to_string()),
                ("Streak".to_string(), "0 days".to_string()),
            ],
            recent_tags: RECENT_TAGS.iter().map(|t| (*t).to_string()).collect(),
            on_this_day: "No entries from previous years on this date.".to_string(),
            settings_label: "Settings".to_string(),
        }
    }

    /// Editor form display information.
    fn compute_editor_vm(editor: &EditorState) -> EditorVm {
        EditorVm {
            heading: if editor.is_editing() {
                "Edit Entry".to_string()
            } else {
                "New Entry".to_string()
            },
            title: editor.title.clone(),
            content: editor.content.clone(),
            tags: editor.tags.clone(),
            tag_input: editor.tag_input.clone(),
            mood: editor.mood.clone(),
            weather: editor.weather.clone(),
            location: editor.location.clone(),
            is_favorite: editor.is_favorite,
            is_recording: editor.is_recording,
            focus: editor.focus,
            char_count: editor.content.chars().count(),
            can_save: editor.can_save(),
            save_label: if editor.is_saving {
                "Saving...".to_string()
            } else if editor.is_editing() {
                "Update Entry".to_string()
            } else {
                "Save Entry".to_string()
            },
        }
    }

    fn compute_notice(&self) -> Option<NoticeVm> {
        self.notice.as_ref().map(|notice| NoticeVm {
            text: format!("{}: {}", notice.title, notice.description),
            is_error: notice.variant == crate::app::actions::NoticeVariant::Error,
        })
    }

    /// Context-appropriate keybinding hints for the footer.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (&self.auth, &self.input_mode, self.editor.as_ref()) {
            (AuthState::Loading, ..) => "Loading your journal...".to_string(),
            (AuthState::Unauthenticated, ..) => "Enter: sign in  q: quit".to_string(),
            (_, _, Some(editor)) => {
                let save_hint = if editor.can_save() {
                    "Ctrl+S: save"
                } else {
                    "Ctrl+S: save (needs content)"
                };
                format!(
                    "Tab: next field  {save_hint}  Ctrl+F: favorite  Ctrl+R: voice  Ctrl+O: photo  Esc: cancel"
                )
            }
            (_, InputMode::Search(SearchFocus::Typing), _) => {
                "ESC: exit search  Enter: results  Type to filter".to_string()
            }
            (_, InputMode::Search(SearchFocus::Navigating), _) => {
                "ESC: exit search  /: edit query  j/k: navigate  Enter: open".to_string()
            }
            _ => {
                "j/k: navigate  Enter: open  n: new  /: search  1/2/3: view  q: quit".to_string()
            }
        };
        FooterInfo { keybindings }
    }
}

/// Returns the entries matching `query`, preserving input order.
///
/// A pure function: an entry matches when its title, content, any tag, or
/// location contains the query as a case-insensitive substring. An empty
/// query short-circuits to the input, unfiltered and unreordered.
#[must_use]
pub fn filter_entries(entries: &[JournalEntry], query: &str) -> Vec<JournalEntry> {
    if query.is_empty() {
        return entries.to_vec();
    }

    let query = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            entry
                .title
                .as_ref()
                .is_some_and(|t| t.to_lowercase().contains(&query))
                || entry.content.to_lowercase().contains(&query)
                || entry.tags.iter().any(|t| t.to_lowercase().contains(&query))
                || entry
                    .location
                    .as_ref()
                    .is_some_and(|l| l.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Character-index ranges where `query` occurs in `text`, case-insensitive.
///
/// Used for search-match highlighting on card titles. Comparison is per
/// character with simple lowercasing, which is sufficient for the substring
/// semantics of the filter.
fn substring_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let haystack: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()] == needle[..] {
            ranges.push((i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_ranges_finds_case_insensitive_matches() {
        assert_eq!(substring_ranges("A Beautiful Morning", "morn"), vec![(12, 16)]);
        assert_eq!(substring_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert!(substring_ranges("short", "longer than text").is_empty());
    }

    #[test]
    fn selection_wraps_over_displayed_cards() {
        let mut state = AppState::new(Theme::default());
        // Empty entry list: the two fallback samples are displayed.
        assert_eq!(state.display_entries().len(), 2);

        state.move_selection_down();
        assert_eq!(state.selected_index, 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
        state.move_selection_up();
        assert_eq!(state.selected_index, 1);
    }
}
