//! # boltchat
//!
//! Leptos + WASM single-page client for the Boltchat API: a login form, a
//! registration form, a session-aware home page, and a client-side
//! authentication store over the cookie-based REST endpoints.
//!
//! Browser-only behavior (network, cookies, console logging) lives behind
//! the `hydrate` feature; the `ssr` feature builds the same component tree
//! for server rendering with inert stubs.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic reporting, set up logging, hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if config::is_dev() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    let _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(app::App);
}
