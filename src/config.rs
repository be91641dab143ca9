//! Compile-time environment configuration.
//!
//! DESIGN
//! ======
//! The deployment knobs (API origin, branding, dev flag) are resolved with
//! `option_env!` at build time so the shipped bundle carries no runtime
//! config fetch. Unset or blank variables fall back to development defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_APP_NAME: &str = "Boltchat";

/// Base URL of the auth API, without a trailing slash.
pub fn api_url() -> &'static str {
    or_default(option_env!("BOLTCHAT_API_URL"), DEFAULT_API_URL)
}

/// Human-facing application name used in titles and headers.
pub fn app_name() -> &'static str {
    or_default(option_env!("BOLTCHAT_APP_NAME"), DEFAULT_APP_NAME)
}

/// Application version surfaced in the home page footer.
pub fn app_version() -> &'static str {
    or_default(option_env!("BOLTCHAT_APP_VERSION"), env!("CARGO_PKG_VERSION"))
}

/// Whether this is a development build; gates request/response debug logging.
pub fn is_dev() -> bool {
    cfg!(debug_assertions)
}

fn or_default(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default,
    }
}
