//! The session store: sole owner of the authentication state.
//!
//! Every other part of the app holds a read-only view; mutation happens
//! only through the named transitions below. `succeed` and `sign_out`
//! perform their durable-storage writes inline, so persistence is part of
//! the transition contract rather than a hidden hook: by the time a caller
//! observes the new state, storage already agrees with it.
//!
//! There are no timer- or expiry-driven transitions. A restored session is
//! trusted as-is until the user signs out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{TokenPair, UserProfile};
use crate::util::storage;

/// Where the session machine currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// No submission made and nobody signed in.
    #[default]
    Idle,
    /// A login/signup call is in flight.
    Pending,
    /// A user is signed in; `user` is populated.
    Authenticated,
    /// The last submission was rejected; `error` carries the message.
    Failed,
}

/// Process-wide authentication state.
///
/// Invariant: `user` is `Some` iff `status == Authenticated`, and `error`
/// is `Some` only while `status == Failed`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub status: SessionStatus,
    pub user: Option<UserProfile>,
    pub error: Option<String>,
}

impl SessionState {
    /// Rebuild the session from durable storage at startup. An unreadable
    /// snapshot is discarded rather than propagated; the user just signs
    /// in again.
    pub fn restore() -> Self {
        let Some(raw) = storage::get(storage::SESSION_SNAPSHOT) else {
            return Self::default();
        };
        match serde_json::from_str::<UserProfile>(&raw) {
            Ok(user) => Self {
                status: SessionStatus::Authenticated,
                user: Some(user),
                error: None,
            },
            Err(err) => {
                leptos::logging::warn!("discarding unreadable session snapshot: {err}");
                storage::remove(storage::SESSION_SNAPSHOT);
                Self::default()
            }
        }
    }

    /// A submission began. Re-entrant from any state; clears a stale error
    /// and any previously signed-in user so the invariant holds even when
    /// entered from `Authenticated`.
    pub fn start(&mut self) {
        self.status = SessionStatus::Pending;
        self.user = None;
        self.error = None;
    }

    /// A submission succeeded: record the profile and persist the token
    /// pair plus the session snapshot.
    pub fn succeed(&mut self, user: UserProfile, tokens: &TokenPair) {
        storage::set(storage::ACCESS_TOKEN, &tokens.access);
        storage::set(storage::REFRESH_TOKEN, &tokens.refresh);
        match serde_json::to_string(&user) {
            Ok(raw) => storage::set(storage::SESSION_SNAPSHOT, &raw),
            Err(err) => leptos::logging::warn!("failed to persist session snapshot: {err}"),
        }
        self.status = SessionStatus::Authenticated;
        self.user = Some(user);
        self.error = None;
    }

    /// A submission was rejected. Last write wins on repeated failures.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = SessionStatus::Failed;
        self.user = None;
        self.error = Some(message.into());
    }

    /// Explicit sign-out: clear everything, including the persisted tokens
    /// and snapshot. The remote logout call is the caller's business and
    /// its outcome never blocks this.
    pub fn sign_out(&mut self) {
        storage::remove(storage::ACCESS_TOKEN);
        storage::remove(storage::REFRESH_TOKEN);
        storage::remove(storage::SESSION_SNAPSHOT);
        *self = Self::default();
    }

    pub const fn is_authenticated(&self) -> bool {
        matches!(self.status, SessionStatus::Authenticated)
    }

    pub const fn is_pending(&self) -> bool {
        matches!(self.status, SessionStatus::Pending)
    }
}
