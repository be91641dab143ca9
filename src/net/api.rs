//! REST client for the auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always with
//! credentials (cookies) included and JSON headers attached.
//! Server-side (SSR): stubs returning `ApiError` since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and undecodable bodies all collapse
//! into a single [`ApiError`] carrying a display message, so callers never
//! inspect raw transport errors. Non-2xx responses prefer the server's JSON
//! `message` field; everything else gets a generic status message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

use super::types::{AuthResponse, LoginCredentials, RegisterCredentials, User};
#[cfg(any(test, feature = "hydrate"))]
use crate::config;

#[cfg(feature = "hydrate")]
use gloo_net::http::{Method, RequestBuilder, Response};

/// The one client-visible request failure kind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable description, shown inline by the login/register forms.
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Error body shape the server uses for non-2xx responses.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
fn join_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint_url(path: &str) -> String {
    join_url(config::api_url(), path)
}

#[cfg(any(test, feature = "hydrate"))]
fn http_error_message(status: u16) -> String {
    format!("HTTP error {status}")
}

/// Server-supplied `message` from an error body, or the generic status
/// message when the body is empty or not the expected JSON shape.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| http_error_message(status))
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::new("not available on the server")
}

/// The request primitive: every API call goes through here so cookies, JSON
/// headers, dev logging, and error normalization are applied uniformly.
/// No retries, no deduplication.
#[cfg(feature = "hydrate")]
async fn perform(method: Method, path: &str, body: Option<&serde_json::Value>) -> Result<Response, ApiError> {
    let url = endpoint_url(path);
    if config::is_dev() {
        log::debug!("api request: {method:?} {url}");
    }

    let builder = RequestBuilder::new(&url)
        .method(method)
        .credentials(web_sys::RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .header("X-Requested-With", "XMLHttpRequest")
        .header("Cache-Control", "no-cache");
    let request = match body {
        Some(json) => builder.json(json).map_err(|e| ApiError::new(e.to_string()))?,
        None => builder.build().map_err(|e| ApiError::new(e.to_string()))?,
    };

    let response = request.send().await.map_err(|e| ApiError::new(e.to_string()))?;
    if config::is_dev() {
        log::debug!("api response: {} for {url}", response.status());
    }

    if !response.ok() {
        let body_text = response.text().await.unwrap_or_default();
        return Err(ApiError::new(error_message(response.status(), &body_text)));
    }
    Ok(response)
}

#[cfg(feature = "hydrate")]
async fn request_json<T: serde::de::DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<T, ApiError> {
    let response = perform(method, path, body).await?;
    response.json::<T>().await.map_err(|e| ApiError::new(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn to_body<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::new(e.to_string()))
}

/// Sign in via `POST /auth/login`.
///
/// # Errors
///
/// Fails with the server-supplied message on rejection, or a transport or
/// decode message otherwise.
pub async fn login(credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = to_body(credentials)?;
        request_json(Method::POST, "/auth/login", Some(&body)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(unavailable())
    }
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Same failure modes as [`login`].
pub async fn register(credentials: &RegisterCredentials) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = to_body(credentials)?;
        request_json(Method::POST, "/auth/register", Some(&body)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(unavailable())
    }
}

/// End the server-side session via `POST /auth/logout` (empty response).
///
/// # Errors
///
/// Fails on transport errors or a non-2xx status.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        perform(Method::POST, "/auth/logout", None).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Fetch the canonical current-user record via `GET /auth/profile`.
///
/// Used both for the startup session check and after credential submission.
///
/// # Errors
///
/// Fails when no valid session exists or the response cannot be decoded.
pub async fn check_auth() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Method::GET, "/auth/profile", None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Renew the session's access token via `POST /auth/refresh`.
///
/// # Errors
///
/// Same failure modes as [`login`].
pub async fn refresh_token() -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(Method::POST, "/auth/refresh", None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}
