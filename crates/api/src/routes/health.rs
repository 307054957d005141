//! Liveness and readiness of the directory service.
//!
//! Healthy means both directory tables answer queries, not merely that a
//! connection can be opened.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the directory is readable, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Wikis not marked deleted; absent when the directory is unreadable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_wikis: Option<i64>,
    pub hosting_domain: String,
}

/// GET /health
async fn directory_status(State(state): State<AppState>) -> Json<HealthResponse> {
    let live_wikis = match wikifarm_db::directory_health(&state.pool).await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Wiki directory is not readable");
            None
        }
    };

    Json(HealthResponse {
        status: if live_wikis.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy: live_wikis.is_some(),
        live_wikis,
        hosting_domain: state.config.hosting_domain.clone(),
    })
}

/// Health routes, mounted at the root rather than under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(directory_status))
}
