//! Request middleware: session extraction, role gating, and the edge gatekeeper.

pub mod auth;
pub mod gatekeeper;
pub mod rbac;

pub use auth::StudioSession;
pub use rbac::RequireAdmin;
