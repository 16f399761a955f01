//! Event handling and state transitions.
//!
//! [`handle_event`] is the single entry point for everything that can happen
//! to the application: keyboard input and session-state updates. It mutates
//! [`AppState`] in place and returns whether a re-render is needed plus any
//! side effects for the shell to execute.
//!
//! Keyboard interpretation is mode-dependent: the same key means different
//! things in browse, search, and edit modes, and the auth state gates the
//! whole keymap behind the loading and sign-in screens.

use crate::app::actions::{Action, Notice};
use crate::app::editor::{EditorFocus, EditorState};
use crate::app::modes::{InputMode, SearchFocus, ViewMode};
use crate::app::state::AppState;
use crate::domain::error::Result;
use crate::domain::{AuthState, AuthUpdate};

/// A normalized input event.
///
/// The terminal shell translates backend key events into this alphabet; the
/// handler owns all mode-dependent interpretation.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Char(char),
    Backspace,
    Enter,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Esc,
    /// Ctrl+S: save the entry being edited.
    Save,
    /// Ctrl+F: toggle the favorite flag in the editor.
    Favorite,
    /// Ctrl+R: toggle the voice-recording indicator in the editor.
    Record,
    /// Ctrl+O: request a photo attachment in the editor.
    AttachPhoto,
    /// A session-state update drained from the auth subscription.
    AuthStateChanged(AuthUpdate),
}

/// Processes one event against the application state.
///
/// Returns `(needs_render, actions)`: whether the UI must be redrawn, and
/// side effects for the shell to execute in order.
///
/// # Errors
///
/// State transitions themselves are infallible; the `Result` exists for the
/// save path, where draft validation errors are already mapped to a failure
/// notice internally. Propagated errors therefore indicate a bug rather than
/// bad user input.
pub fn handle_event(state: &mut AppState, event: Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event = ?event).entered();

    if let Event::AuthStateChanged(update) = event {
        state.auth = AuthState::from_update(update);
        tracing::debug!(auth = ?state.auth, "session state applied");
        return Ok((true, Vec::new()));
    }

    // Any user input dismisses a pending notification.
    let mut changed = state.notice.take().is_some();

    let (handled, actions) = match &state.auth {
        AuthState::Loading => handle_loading(&event),
        AuthState::Unauthenticated => handle_sign_in(&event),
        AuthState::Authenticated(_) => match state.input_mode {
            InputMode::Browse => handle_browse(state, &event),
            InputMode::Search(focus) => handle_search(state, focus, &event),
            InputMode::Edit => handle_edit(state, &event)?,
        },
    };

    changed |= handled;
    Ok((changed, actions))
}

/// Loading screen: only quitting is possible.
fn handle_loading(event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::Char('q') => (false, vec![Action::Quit]),
        _ => (false, Vec::new()),
    }
}

/// Sign-in screen: enter delegates to the provider, q quits.
fn handle_sign_in(event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::Enter => (false, vec![Action::Login]),
        Event::Char('q') => (false, vec![Action::Quit]),
        _ => (false, Vec::new()),
    }
}

/// Default timeline navigation keymap.
fn handle_browse(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::Char('j') | Event::Down => {
            state.move_selection_down();
            (true, Vec::new())
        }
        Event::Char('k') | Event::Up => {
            state.move_selection_up();
            (true, Vec::new())
        }
        Event::Enter => {
            open_selected(state);
            (true, Vec::new())
        }
        Event::Char('n') => {
            open_editor(state, None);
            (true, Vec::new())
        }
        Event::Char('/') => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            (true, Vec::new())
        }
        Event::Char('1') => switch_view(state, ViewMode::Timeline),
        Event::Char('2') => switch_view(state, ViewMode::Calendar),
        Event::Char('3') => switch_view(state, ViewMode::Search),
        Event::Char('q') => (false, vec![Action::Quit]),
        _ => (false, Vec::new()),
    }
}

/// Search mode keymap, split by whether the query box or the result list
/// has focus.
fn handle_search(state: &mut AppState, focus: SearchFocus, event: &Event) -> (bool, Vec<Action>) {
    match (focus, event) {
        (SearchFocus::Typing, Event::Char(c)) => {
            state.search_query.push(*c);
            state.apply_search_filter();
            (true, Vec::new())
        }
        (SearchFocus::Typing, Event::Backspace) => {
            state.search_query.pop();
            state.apply_search_filter();
            (true, Vec::new())
        }
        (SearchFocus::Typing, Event::Enter) => {
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            (true, Vec::new())
        }
        (SearchFocus::Navigating, Event::Char('j') | Event::Down) => {
            state.move_selection_down();
            (true, Vec::new())
        }
        (SearchFocus::Navigating, Event::Char('k') | Event::Up) => {
            state.move_selection_up();
            (true, Vec::new())
        }
        (SearchFocus::Navigating, Event::Enter) => {
            open_selected(state);
            (true, Vec::new())
        }
        (SearchFocus::Navigating, Event::Char('/')) => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            (true, Vec::new())
        }
        (_, Event::Esc) => {
            // Leaving search drops the filter so the full timeline returns.
            state.search_query.clear();
            state.apply_search_filter();
            state.input_mode = InputMode::Browse;
            (true, Vec::new())
        }
        _ => (false, Vec::new()),
    }
}

/// Editor keymap; the form owns the keyboard while edit mode is engaged.
fn handle_edit(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let Some(editor) = state.editor.as_mut() else {
        // Mode says Edit but no form exists; recover to browse.
        tracing::warn!("edit mode without editor state; resetting to browse");
        state.input_mode = InputMode::Browse;
        return Ok((true, Vec::new()));
    };

    let result = match event {
        Event::Tab => {
            editor.focus = editor.focus.next();
            (true, Vec::new())
        }
        Event::BackTab => {
            editor.focus = editor.focus.prev();
            (true, Vec::new())
        }
        Event::Save => return save_from_editor(state),
        Event::Esc => {
            // Cancel is pure: the entry list is untouched.
            state.editor = None;
            state.input_mode = InputMode::Browse;
            (true, Vec::new())
        }
        Event::Favorite => {
            editor.toggle_favorite();
            (true, Vec::new())
        }
        Event::Record => {
            editor.toggle_recording();
            (true, Vec::new())
        }
        Event::AttachPhoto => {
            editor.attach_photo();
            (false, Vec::new())
        }
        Event::Enter => match editor.focus {
            EditorFocus::Tags => (editor.add_tag(), Vec::new()),
            EditorFocus::Content => {
                editor.insert_char('\n');
                (true, Vec::new())
            }
            _ => {
                editor.focus = editor.focus.next();
                (true, Vec::new())
            }
        },
        Event::Left => cycle_selection(editor, false),
        Event::Right => cycle_selection(editor, true),
        Event::Char(c) => {
            editor.insert_char(*c);
            (true, Vec::new())
        }
        Event::Backspace => {
            editor.backspace();
            (true, Vec::new())
        }
        _ => (false, Vec::new()),
    };
    Ok(result)
}

/// Left/Right step the mood and weather selection fields.
fn cycle_selection(editor: &mut EditorState, forward: bool) -> (bool, Vec<Action>) {
    match editor.focus {
        EditorFocus::Mood => {
            editor.cycle_mood(forward);
            (true, Vec::new())
        }
        EditorFocus::Weather => {
            editor.cycle_weather(forward);
            (true, Vec::new())
        }
        _ => (false, Vec::new()),
    }
}

/// The save flow.
///
/// A draft that fails validation (blank content, save in flight) is a silent
/// no-op with the editor left open. A valid draft is committed; success
/// closes the editor, forces the timeline view, and surfaces a success
/// notice. A commit failure keeps the editor open for retry behind an error
/// notice.
fn save_from_editor(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    let Some(editor) = state.editor.as_mut() else {
        return Ok((false, Vec::new()));
    };
    let Some(draft) = editor.build_draft() else {
        tracing::debug!("save ignored: draft not buildable");
        return Ok((false, Vec::new()));
    };
    editor.is_saving = true;

    match state.save_entry(draft) {
        Ok(notice) => {
            state.editor = None;
            state.input_mode = InputMode::Browse;
            state.current_view = ViewMode::Timeline;
            state.apply_search_filter();
            Ok((true, vec![Action::Notify(notice)]))
        }
        Err(err) => {
            tracing::error!(error = %err, "saving entry failed");
            if let Some(editor) = state.editor.as_mut() {
                editor.is_saving = false;
            }
            Ok((
                true,
                vec![Action::Notify(Notice::error("Failed to save entry"))],
            ))
        }
    }
}

/// Opens the editor seeded from the selected timeline card.
fn open_selected(state: &mut AppState) {
    let entry = state.selected_entry().cloned();
    open_editor(state, entry);
}

fn open_editor(state: &mut AppState, entry: Option<crate::domain::JournalEntry>) {
    tracing::debug!(editing = entry.is_some(), "opening editor");
    state.editor = Some(EditorState::new(entry));
    state.input_mode = InputMode::Edit;
}

fn switch_view(state: &mut AppState, view: ViewMode) -> (bool, Vec<Action>) {
    state.current_view = view;
    state.selected_index = 0;
    (true, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::NoticeVariant;
    use crate::domain::Identity;
    use crate::ui::theme::Theme;

    fn authenticated_state() -> AppState {
        let mut state = AppState::new(Theme::default());
        state.auth = AuthState::Authenticated(Identity {
            id: "demo".to_string(),
            name: "Demo User".to_string(),
        });
        state
    }

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn auth_update_replaces_auth_state() {
        let mut state = AppState::new(Theme::default());
        assert_eq!(state.auth, AuthState::Loading);

        let (changed, actions) = handle_event(
            &mut state,
            Event::AuthStateChanged(AuthUpdate {
                user: None,
                is_loading: false,
            }),
        )
        .unwrap();
        assert!(changed);
        assert!(actions.is_empty());
        assert_eq!(state.auth, AuthState::Unauthenticated);
    }

    #[test]
    fn sign_in_screen_delegates_to_provider() {
        let mut state = AppState::new(Theme::default());
        state.auth = AuthState::Unauthenticated;

        let (_, actions) = handle_event(&mut state, Event::Enter).unwrap();
        assert_eq!(actions, vec![Action::Login]);
    }

    #[test]
    fn saving_new_entry_prepends_and_returns_to_timeline() {
        let mut state = authenticated_state();
        state.current_view = ViewMode::Calendar;

        handle_event(&mut state, Event::Char('n')).unwrap();
        type_str(&mut state, "First journal entry");
        let (changed, actions) = handle_event(&mut state, Event::Save).unwrap();

        assert!(changed);
        assert!(state.editor.is_none());
        assert_eq!(state.input_mode, InputMode::Browse);
        assert_eq!(state.current_view, ViewMode::Timeline);
        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.entries[0].content, "First journal entry");
        assert_eq!(state.entries[0].user_id, "demo");
        match &actions[..] {
            [Action::Notify(notice)] => assert_eq!(notice.variant, NoticeVariant::Success),
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[test]
    fn blank_content_save_is_a_no_op_with_editor_open() {
        let mut state = authenticated_state();
        handle_event(&mut state, Event::Char('n')).unwrap();
        type_str(&mut state, "   ");

        let (_, actions) = handle_event(&mut state, Event::Save).unwrap();
        assert!(actions.is_empty());
        assert!(state.editor.is_some());
        assert_eq!(state.input_mode, InputMode::Edit);
        assert!(state.entries.is_empty());
    }

    #[test]
    fn cancel_leaves_entry_list_untouched() {
        let mut state = authenticated_state();
        handle_event(&mut state, Event::Char('n')).unwrap();
        type_str(&mut state, "draft text never saved");
        handle_event(&mut state, Event::Esc).unwrap();

        assert!(state.editor.is_none());
        assert_eq!(state.input_mode, InputMode::Browse);
        assert!(state.entries.is_empty());
    }

    #[test]
    fn search_typing_filters_live() {
        let mut state = authenticated_state();
        handle_event(&mut state, Event::Char('n')).unwrap();
        type_str(&mut state, "walked by the river");
        handle_event(&mut state, Event::Save).unwrap();
        handle_event(&mut state, Event::Char('n')).unwrap();
        type_str(&mut state, "stayed home all day");
        handle_event(&mut state, Event::Save).unwrap();

        handle_event(&mut state, Event::Char('/')).unwrap();
        type_str(&mut state, "river");
        assert_eq!(state.filtered_entries.len(), 1);
        assert_eq!(state.filtered_entries[0].content, "walked by the river");

        // Esc drops the filter entirely.
        handle_event(&mut state, Event::Esc).unwrap();
        assert_eq!(state.input_mode, InputMode::Browse);
        assert!(state.search_query.is_empty());
        assert_eq!(state.filtered_entries.len(), 2);
    }

    #[test]
    fn editing_selected_entry_merges_in_place() {
        let mut state = authenticated_state();
        handle_event(&mut state, Event::Char('n')).unwrap();
        type_str(&mut state, "original body");
        handle_event(&mut state, Event::Save).unwrap();
        let created_at = state.entries[0].created_at;

        handle_event(&mut state, Event::Enter).unwrap();
        type_str(&mut state, " plus more");
        handle_event(&mut state, Event::Save).unwrap();

        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.entries[0].content, "original body plus more");
        assert_eq!(state.entries[0].created_at, created_at);
        assert!(state.entries[0].updated_at >= created_at);
    }

    #[test]
    fn notice_clears_on_next_input() {
        let mut state = authenticated_state();
        state.notice = Some(Notice::success("saved"));

        let (changed, _) = handle_event(&mut state, Event::Char('j')).unwrap();
        assert!(changed);
        assert!(state.notice.is_none());
    }

    #[test]
    fn view_switch_resets_selection() {
        let mut state = authenticated_state();
        state.move_selection_down();
        assert_eq!(state.selected_index, 1);

        handle_event(&mut state, Event::Char('2')).unwrap();
        assert_eq!(state.current_view, ViewMode::Calendar);
        assert_eq!(state.selected_index, 0);
    }
}
