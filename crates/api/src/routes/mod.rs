pub mod health;
pub mod list_wikis;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /query/listwikis                 listing or count (GET)
/// /query/listwikis/paraminfo       parameter description (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/query/listwikis", list_wikis::router())
}

/// Mount the legacy `api.php` entry point (root-level, NOT under `/api/v1`).
pub fn legacy_router() -> Router<AppState> {
    Router::new().route("/api.php", get(handlers::list_wikis::api_php))
}
