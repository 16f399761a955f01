//! Authentication/session provider layer.
//!
//! The application never talks to an auth backend directly: it consumes the
//! [`SessionProvider`] trait, injected by `main`. Updates flow over a channel
//! drained by the event loop, keeping the one asynchronous boundary of the
//! application (session-state changes) out of the state machine itself.
//!
//! # Organization
//!
//! - [`provider`]: The `SessionProvider` trait and subscription handle
//! - [`local`]: In-process provider used by the binary

pub mod local;
pub mod provider;

pub use local::LocalSession;
pub use provider::{AuthSubscription, SessionProvider};
