//! In-process session provider.
//!
//! [`LocalSession`] stands in for the hosted auth SDK: it resolves the initial
//! loading window immediately and flips to an authenticated session when the
//! sign-in action fires. The identity it hands out comes from configuration,
//! with a generated id per process run.

use std::sync::mpsc::{channel, Sender};
use std::sync::Mutex;

use crate::domain::error::{DaybookError, Result};
use crate::domain::{AuthUpdate, Identity};
use crate::session::provider::{AuthSubscription, SessionProvider};

/// Session provider backed by in-process state only.
///
/// Subscribers receive a `loading` snapshot followed by the resolved session
/// (signed out until [`login`](SessionProvider::login) is called). All
/// subscribers observe the same state; closed subscriptions are pruned on the
/// next broadcast.
pub struct LocalSession {
    identity: Identity,
    signed_in: Mutex<bool>,
    subscribers: Mutex<Vec<Sender<AuthUpdate>>>,
}

impl LocalSession {
    /// Creates a provider that will sign in as `user_name`.
    #[must_use]
    pub fn new(user_name: &str) -> Self {
        Self {
            identity: Identity {
                id: uuid::Uuid::new_v4().to_string(),
                name: user_name.to_string(),
            },
            signed_in: Mutex::new(false),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Current session snapshot with `is_loading` cleared.
    fn snapshot(&self, signed_in: bool) -> AuthUpdate {
        AuthUpdate {
            user: signed_in.then(|| self.identity.clone()),
            is_loading: false,
        }
    }

    /// Sends an update to every live subscriber, dropping closed channels.
    fn broadcast(&self, update: &AuthUpdate) {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        subscribers.retain(|tx| tx.send(update.clone()).is_ok());
        tracing::debug!(
            subscriber_count = subscribers.len(),
            signed_in = update.user.is_some(),
            "auth state broadcast"
        );
    }
}

impl SessionProvider for LocalSession {
    fn on_auth_state_changed(&self) -> AuthSubscription {
        let (tx, rx) = channel();

        let signed_in = *self
            .signed_in
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        // Initial snapshot pair: the loading window, then the resolved session.
        let _ = tx.send(AuthUpdate {
            user: None,
            is_loading: true,
        });
        let _ = tx.send(self.snapshot(signed_in));

        self.subscribers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(tx);

        AuthSubscription::new(rx)
    }

    fn login(&self) -> Result<()> {
        let mut signed_in = self
            .signed_in
            .lock()
            .map_err(|_| DaybookError::Session("session state lock poisoned".to_string()))?;
        *signed_in = true;
        drop(signed_in);

        tracing::info!(user = %self.identity.name, "local session signed in");
        self.broadcast(&self.snapshot(true));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_yields_loading_then_signed_out() {
        let provider = LocalSession::new("Ada");
        let subscription = provider.on_auth_state_changed();

        let first = subscription.try_next().unwrap();
        assert!(first.is_loading);

        let second = subscription.try_next().unwrap();
        assert!(!second.is_loading);
        assert!(second.user.is_none());

        assert!(subscription.try_next().is_none());
    }

    #[test]
    fn login_broadcasts_authenticated_update() {
        let provider = LocalSession::new("Ada");
        let subscription = provider.on_auth_state_changed();
        // Drain the initial snapshot pair.
        subscription.try_next();
        subscription.try_next();

        provider.login().unwrap();

        let update = subscription.try_next().unwrap();
        let user = update.user.unwrap();
        assert_eq!(user.name, "Ada");
        assert!(!update.is_loading);
    }

    #[test]
    fn late_subscriber_sees_signed_in_snapshot() {
        let provider = LocalSession::new("Ada");
        provider.login().unwrap();

        let subscription = provider.on_auth_state_changed();
        subscription.try_next(); // loading
        let resolved = subscription.try_next().unwrap();
        assert!(resolved.user.is_some());
    }
}
