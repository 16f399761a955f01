//! Actions representing side effects to be executed by the terminal shell.
//!
//! The event handler returns a `Vec<Action>` after processing each event;
//! the shell executes them in sequence. Actions are the boundary between the
//! pure state transitions in [`handle_event`](crate::app::handle_event) and
//! effectful operations: talking to the session provider, surfacing
//! notifications, and terminating the process.

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeVariant {
    Success,
    Error,
}

/// A transient toast-style notification.
///
/// Fire-and-forget: the shell stores it for rendering and the next user
/// input clears it. No acknowledgment flows back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    /// A success notice.
    #[must_use]
    pub fn success(description: &str) -> Self {
        Self {
            title: "Success".to_string(),
            description: description.to_string(),
            variant: NoticeVariant::Success,
        }
    }

    /// An error notice.
    #[must_use]
    pub fn error(description: &str) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.to_string(),
            variant: NoticeVariant::Error,
        }
    }
}

/// Commands representing side effects to be executed by the terminal shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Terminates the event loop and restores the terminal.
    Quit,

    /// Delegates to the session provider's sign-in flow.
    ///
    /// The result is observed only through the auth subscription.
    Login,

    /// Surfaces a transient notification in the UI.
    Notify(Notice),
}
