//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` holds the session state machine, `session` the fixed-key profile
//! cache, and `actions` the async flows that are the only writers of either.
//! Pages and components read both through Leptos context signals.

pub mod actions;
pub mod auth;
pub mod session;
