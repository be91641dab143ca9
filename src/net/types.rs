//! Wire DTOs for the auth API boundary.
//!
//! DESIGN
//! ======
//! Field names follow the server's camelCase JSON so serde round-trips stay
//! lossless. Timestamps stay ISO 8601 strings: the client only displays
//! them, so there is no reason to parse into a date type.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `GET /auth/profile`.
///
/// Immutable from the client's perspective; replaced wholesale on every
/// successful profile fetch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Login name, shown in the home page greeting.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Avatar image URL, if the user has one.
    pub avatar_url: Option<String>,
    /// Role label (e.g. `"user"`, `"admin"`).
    pub role: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 last-update timestamp.
    pub updated_at: String,
    /// External identity reference when the account came from GitHub OAuth.
    pub github_id: Option<String>,
}

/// Credentials for `POST /auth/login`. Transient; used once per submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// Credentials for `POST /auth/register`. Transient; used once per submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCredentials {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Response of the login, register, and refresh endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Opaque access token; presence signals a live server-side session.
    pub access_token: String,
    /// Embedded user record, when the server includes one.
    #[serde(default)]
    pub user: Option<User>,
    /// Optional status message.
    #[serde(default)]
    pub message: Option<String>,
}
