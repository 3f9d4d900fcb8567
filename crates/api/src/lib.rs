//! Vowdesk HTTP API.
//!
//! Exposes the router builder and supporting modules so integration
//! tests can drive the exact production middleware stack.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
