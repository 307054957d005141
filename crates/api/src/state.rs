use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: wikifarm_db::DbPool,
    /// Server configuration (hosting domain, result budget, token secret).
    pub config: Arc<ServerConfig>,
}
