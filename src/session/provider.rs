//! Session provider abstraction.
//!
//! This module defines the [`SessionProvider`] trait that abstracts over the
//! external authentication backend. The provider is constructed once in `main`
//! and injected into the terminal shell, so tests can substitute a fake that
//! pushes scripted [`AuthUpdate`]s.
//!
//! # Design Philosophy
//!
//! The trait is minimal and mirrors the hosted-SDK surface the application
//! actually consumes: an auth-state subscription and a login trigger. Nothing
//! else about the backend (token refresh, profiles, storage) is modeled here.

use std::sync::mpsc::{Receiver, TryRecvError};

use crate::domain::error::Result;
use crate::domain::AuthUpdate;

/// Abstraction over the external authentication/session backend.
///
/// # Implementations
///
/// - [`LocalSession`](crate::session::LocalSession): in-process stand-in used
///   by the binary (no network backend is in scope)
/// - Channel-backed fakes in the test suite
pub trait SessionProvider {
    /// Subscribes to session-state changes.
    ///
    /// The returned subscription yields every subsequent [`AuthUpdate`],
    /// starting with a snapshot of the current state. Dropping the
    /// subscription unsubscribes.
    fn on_auth_state_changed(&self) -> AuthSubscription;

    /// Triggers the provider's out-of-band sign-in flow.
    ///
    /// The outcome is observed only through the auth subscription; no value
    /// is returned to the caller beyond delivery success.
    ///
    /// # Errors
    ///
    /// Returns an error if the sign-in request cannot be delivered.
    fn login(&self) -> Result<()>;
}

/// Handle for an active auth-state subscription.
///
/// Wraps the receiving end of the update channel. Updates are drained
/// non-blockingly by the event loop between input polls; dropping the handle
/// closes the channel, which the provider treats as an unsubscribe.
pub struct AuthSubscription {
    rx: Receiver<AuthUpdate>,
}

impl AuthSubscription {
    /// Wraps a raw receiver. Used by providers and test fakes.
    #[must_use]
    pub fn new(rx: Receiver<AuthUpdate>) -> Self {
        Self { rx }
    }

    /// Returns the next pending update without blocking.
    ///
    /// Returns `None` when no update is queued or the provider side has shut
    /// down; a disconnect simply ends the update stream.
    pub fn try_next(&self) -> Option<AuthUpdate> {
        match self.rx.try_recv() {
            Ok(update) => Some(update),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}
