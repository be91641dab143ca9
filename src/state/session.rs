//! Fixed-key cache of the current session's profile.
//!
//! DESIGN
//! ======
//! Holds the latest profile fetched from `GET /auth/profile` so components
//! can read it without issuing a request. One well-known key; cleared
//! wholesale on logout.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;

use crate::net::types::User;

/// Cache key for the current session's profile entry.
pub const CURRENT_SESSION_KEY: &str = "auth:me";

/// Keyed profile cache shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionCache {
    entries: HashMap<String, User>,
}

impl SessionCache {
    /// Cached profile for the current session, if one was fetched.
    pub fn current_profile(&self) -> Option<&User> {
        self.entries.get(CURRENT_SESSION_KEY)
    }

    /// Record the latest canonical profile under the session key.
    pub fn store_profile(&mut self, user: User) {
        self.entries.insert(CURRENT_SESSION_KEY.to_owned(), user);
    }

    /// Drop every cached entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
