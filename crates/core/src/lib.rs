//! Shared domain primitives for the Vowdesk backend.
//!
//! - [`types`] -- ID and timestamp aliases used across crates.
//! - [`roles`] -- access-tier and descriptive team-role enums.
//! - [`error`] -- the closed domain error taxonomy.

pub mod error;
pub mod roles;
pub mod types;
