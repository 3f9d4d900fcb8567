use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: vowdesk_db::DbPool,
    /// Server configuration (read-only after startup; holds the signing
    /// secret consumed by the token codec).
    pub config: Arc<ServerConfig>,
}
