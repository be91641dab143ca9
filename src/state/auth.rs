//! Auth-session state machine for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and pages read this state from context; only the flows in
//! `state::actions` write it, and every write goes through [`reduce`] so the
//! login/logout lifecycle stays a pure transition function.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state: the current user plus transition bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    /// Canonical profile of the signed-in user, if any.
    pub user: Option<User>,
    /// True during the startup session check and while a credential-mutating
    /// call is in flight.
    pub loading: bool,
    /// Login or register returned a token but the follow-up profile fetch
    /// failed: the server-side session is likely valid with no profile yet.
    pub profile_pending: bool,
}

impl AuthState {
    /// State at application mount: checking whether a session already exists.
    pub fn initial() -> Self {
        Self {
            user: None,
            loading: true,
            profile_pending: false,
        }
    }

    /// Derived, never stored: authenticated iff a user record is present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// State transitions, consumed exclusively by [`reduce`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    /// Toggle the in-flight flag around credential-mutating calls.
    SetLoading(bool),
    /// A profile fetch settled: `Some` on success, `None` on failure.
    SetUser(Option<User>),
    /// Credentials were accepted but the follow-up profile fetch failed.
    SetSessionPending,
    /// Explicit sign-out; resets to the anonymous state.
    Logout,
}

/// Pure transition function over [`AuthState`].
pub fn reduce(state: AuthState, action: AuthAction) -> AuthState {
    match action {
        AuthAction::SetLoading(loading) => AuthState { loading, ..state },
        AuthAction::SetUser(user) => AuthState {
            user,
            loading: false,
            profile_pending: false,
        },
        AuthAction::SetSessionPending => AuthState {
            loading: false,
            profile_pending: true,
            ..state
        },
        AuthAction::Logout => AuthState {
            user: None,
            loading: false,
            profile_pending: false,
        },
    }
}
