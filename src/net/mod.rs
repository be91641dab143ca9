//! Networking modules for the auth REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the request primitive and the auth endpoints; `types` defines
//! the wire schema shared with the server.

pub mod api;
pub mod types;
