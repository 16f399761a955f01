//! Application core: state, event handling, and editor form logic.
//!
//! This layer is deliberately free of terminal I/O. The shell feeds
//! normalized [`Event`]s into [`handle_event`], which mutates [`AppState`]
//! and emits [`Action`]s for the shell to execute. Rendering consumes view
//! models computed from state snapshots.
//!
//! # Organization
//!
//! - [`state`]: `AppState`, filtering, save semantics, view model computation
//! - [`handler`]: mode-dependent event interpretation
//! - [`editor`]: the controlled entry form
//! - [`modes`]: input/view mode enums
//! - [`actions`]: side-effect commands and notifications

pub mod actions;
pub mod editor;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::{Action, Notice, NoticeVariant};
pub use editor::{EditorFocus, EditorState};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus, ViewMode};
pub use state::{filter_entries, AppState};
