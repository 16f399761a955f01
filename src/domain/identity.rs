//! Identity and authentication state types.
//!
//! The session provider reports raw [`AuthUpdate`] payloads (`user` +
//! `is_loading`, mirroring the hosted SDK callback shape); the application
//! folds each update into the explicit [`AuthState`] machine that drives the
//! three top-level render branches (loading spinner, sign-in prompt, main
//! layout).

use serde::{Deserialize, Serialize};

/// Owner identity attached to entries when the user is unauthenticated.
///
/// The original client fell back to this placeholder when the session object
/// leaked through as null; the behavior is kept so saves never fail on a
/// missing session.
pub const FALLBACK_USER_ID: &str = "demo";

/// An authenticated user as reported by the session provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque user identifier, stored on entries as `user_id`.
    pub id: String,
    /// Display name shown in the sidebar.
    pub name: String,
}

/// Top-level authentication state machine.
///
/// Exactly one variant is active at a time and each maps to one render
/// branch. `Loading` and `Unauthenticated` are blocking screens: no other
/// application state is reachable from them except quitting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    /// The provider has not yet reported a session. Renders a spinner.
    #[default]
    Loading,
    /// No signed-in user. Renders the sign-in prompt.
    Unauthenticated,
    /// A user is signed in. Renders the journal.
    Authenticated(Identity),
}

impl AuthState {
    /// Folds a provider update into an auth state.
    ///
    /// Both fields of the update are applied atomically: a loading update
    /// always wins over any user payload it carries, matching the provider
    /// contract that `is_loading` gates the rest of the snapshot.
    #[must_use]
    pub fn from_update(update: AuthUpdate) -> Self {
        if update.is_loading {
            Self::Loading
        } else {
            match update.user {
                Some(identity) => Self::Authenticated(identity),
                None => Self::Unauthenticated,
            }
        }
    }

    /// The user id to stamp on newly created entries.
    ///
    /// Falls back to [`FALLBACK_USER_ID`] outside the authenticated state.
    #[must_use]
    pub fn user_id(&self) -> &str {
        match self {
            Self::Authenticated(identity) => &identity.id,
            _ => FALLBACK_USER_ID,
        }
    }
}

/// Session snapshot delivered by the provider subscription.
///
/// Mirrors the hosted SDK's auth-state callback payload: the current user (if
/// any) plus a loading flag for the initial resolution window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUpdate {
    pub user: Option<Identity>,
    pub is_loading: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_flag_wins_over_user_payload() {
        let state = AuthState::from_update(AuthUpdate {
            user: Some(Identity {
                id: "u1".to_string(),
                name: "Ada".to_string(),
            }),
            is_loading: true,
        });
        assert_eq!(state, AuthState::Loading);
    }

    #[test]
    fn user_id_falls_back_to_demo() {
        assert_eq!(AuthState::Unauthenticated.user_id(), FALLBACK_USER_ID);
        assert_eq!(AuthState::Loading.user_id(), FALLBACK_USER_ID);

        let state = AuthState::Authenticated(Identity {
            id: "u1".to_string(),
            name: "Ada".to_string(),
        });
        assert_eq!(state.user_id(), "u1");
    }
}
