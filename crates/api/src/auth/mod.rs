//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- session token issuance and verification (the token codec).
//! - [`cookie`] -- session cookie construction and clearing.

pub mod cookie;
pub mod jwt;
pub mod password;
