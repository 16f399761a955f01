//! Terminal shell and entry point.
//!
//! This module provides the thin integration layer between the Daybook
//! library and the terminal: raw-mode setup, the event loop, key translation,
//! and action execution. All journaling logic lives in the library layer.
//!
//! # Lifecycle
//!
//! 1. **Startup**: load config, initialize tracing, create `AppState`,
//!    subscribe to the session provider
//! 2. **Terminal Setup**: raw mode, alternate screen, hidden cursor
//! 3. **Event Loop**: drain session updates, poll keyboard input, feed
//!    normalized events into `handle_event`, execute returned actions
//! 4. **Shutdown**: restore the terminal even on error paths
//!
//! # Event Mapping
//!
//! Terminal key events are translated to library events:
//!
//! - `Ctrl+S` → `Event::Save`
//! - `Ctrl+F` → `Event::Favorite`
//! - `Ctrl+R` → `Event::Record`
//! - `Ctrl+O` → `Event::AttachPhoto`
//! - Plain characters, arrows, Tab/Shift-Tab, Enter, Backspace, Esc map
//!   one-to-one; mode-dependent interpretation happens in the library
//!
//! # Keybindings
//!
//! In browse mode:
//! - `j`/`k`/arrows: Navigate cards
//! - `Enter`: Open selected entry in the editor
//! - `n`: New entry
//! - `/`: Search
//! - `1`/`2`/`3`: Switch view
//! - `q`: Quit
//!
//! In the editor:
//! - `Tab`/`Shift-Tab`: Move between fields
//! - `Ctrl+S`: Save
//! - `Esc`: Cancel

#![allow(clippy::multiple_crate_versions)]

use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{cursor, execute};

use daybook::{
    handle_event, Action, AppState, AuthSubscription, Config, Event, LocalSession, Result,
    SessionProvider,
};

/// Keyboard poll interval; also bounds session-update latency.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    let config = Config::load();
    daybook::observability::init_tracing(&config);

    let span = tracing::debug_span!("startup");
    let _guard = span.entered();

    tracing::debug!(config = ?config, "configuration loaded");
    let mut state = daybook::initialize(&config);

    let provider = LocalSession::new(config.user_name.as_deref().unwrap_or("Demo User"));
    let subscription = provider.on_auth_state_changed();
    tracing::debug!("session subscription established");
    drop(_guard);

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut state, &provider, &subscription);

    // Terminal restoration must happen on every exit path.
    let _ = execute!(stdout(), cursor::Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();

    if let Err(e) = &result {
        tracing::error!(error = %e, "exited with error");
    }
    result
}

/// The event loop.
///
/// Alternates between draining pending session updates and polling for
/// keyboard input, re-rendering only when an event reported a state change.
/// Returns when a handled event produces [`Action::Quit`].
fn run(
    state: &mut AppState,
    provider: &dyn SessionProvider,
    subscription: &AuthSubscription,
) -> Result<()> {
    let (mut cols, mut rows) = terminal::size()?;
    let mut dirty = true;

    loop {
        while let Some(update) = subscription.try_next() {
            let (changed, actions) = handle_event(state, Event::AuthStateChanged(update))?;
            dirty |= changed || !actions.is_empty();
            if execute_actions(state, provider, actions)? {
                return Ok(());
            }
        }

        if dirty {
            draw(state, rows as usize, cols as usize)?;
            dirty = false;
        }

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(app_event) = map_key_event(&key) {
                        let (changed, actions) = handle_event(state, app_event)?;
                        // Actions can mutate state too (notices), so they
                        // force a redraw even when the handler reported none.
                        dirty |= changed || !actions.is_empty();
                        if execute_actions(state, provider, actions)? {
                            return Ok(());
                        }
                    }
                }
                TermEvent::Resize(new_cols, new_rows) => {
                    cols = new_cols;
                    rows = new_rows;
                    dirty = true;
                }
                _ => {}
            }
        }
    }
}

/// Clears the screen, renders the current state, and flushes.
fn draw(state: &AppState, rows: usize, cols: usize) -> Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All))?;
    daybook::ui::render(state, rows, cols);
    out.flush()?;
    Ok(())
}

/// Translates a terminal key event into a library event.
///
/// Control-modified keys map to editor commands; everything else passes
/// through for mode-dependent interpretation in the library.
fn map_key_event(key: &KeyEvent) -> Option<Event> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') => Some(Event::Save),
            KeyCode::Char('f') => Some(Event::Favorite),
            KeyCode::Char('r') => Some(Event::Record),
            KeyCode::Char('o') => Some(Event::AttachPhoto),
            _ => None,
        };
    }

    Some(match key.code {
        KeyCode::Char(c) => Event::Char(c),
        KeyCode::Backspace => Event::Backspace,
        KeyCode::Enter => Event::Enter,
        KeyCode::Tab => Event::Tab,
        KeyCode::BackTab => Event::BackTab,
        KeyCode::Up => Event::Up,
        KeyCode::Down => Event::Down,
        KeyCode::Left => Event::Left,
        KeyCode::Right => Event::Right,
        KeyCode::Esc => Event::Esc,
        _ => return None,
    })
}

/// Executes the actions returned from event handling.
///
/// Returns `true` when the loop should terminate.
///
/// A failed login is logged and surfaced as an error notice; the session
/// subscription remains the only path by which auth state actually changes.
fn execute_actions(
    state: &mut AppState,
    provider: &dyn SessionProvider,
    actions: Vec<Action>,
) -> Result<bool> {
    for action in actions {
        tracing::debug!(action = ?action, "executing action");
        match action {
            Action::Quit => return Ok(true),
            Action::Login => {
                if let Err(e) = provider.login() {
                    tracing::error!(error = %e, "login failed");
                    state.notice = Some(daybook::app::Notice::error("Sign-in failed"));
                }
            }
            Action::Notify(notice) => {
                state.notice = Some(notice);
            }
        }
    }
    Ok(false)
}
