//! Domain layer for the Daybook application.
//!
//! This module contains the core domain types and business rules, independent
//! of terminal or session-provider concerns. It follows the same layering as
//! the rest of the crate: the application layer mutates these types, the UI
//! layer only reads them.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entry`]: Journal entry model, drafts and sample data
//! - [`identity`]: User identity and the authentication state machine

pub mod entry;
pub mod error;
pub mod identity;

pub use entry::{sample_entries, EntryDraft, JournalEntry, MOODS, WEATHER_OPTIONS};
pub use error::{DaybookError, Result};
pub use identity::{AuthState, AuthUpdate, Identity, FALLBACK_USER_ID};
