//! Route definitions for the wiki listing.

use axum::routing::get;
use axum::Router;

use crate::handlers::list_wikis;
use crate::state::AppState;

/// Routes mounted at `/api/v1/query/listwikis`.
///
/// ```text
/// GET /              -> list_wikis
/// GET /paraminfo     -> paraminfo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_wikis::list_wikis))
        .route("/paraminfo", get(list_wikis::paraminfo))
}
