//! Handlers for the wiki directory listing.
//!
//! The listing is read-only: it never writes to `wiki_list` or
//! `wiki_settings`. Private wikis are hidden from non-staff callers, and
//! pages that stop early carry a `continue.swstart` cursor.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use wikifarm_core::caller::Caller;
use wikifarm_core::listing::{run_query, ListOptions, Listing, ResultBudget};
use wikifarm_core::query::{
    ListWikisParams, ListWikisQuery, DEFAULT_LIMIT, LIMIT_MAX_KEYWORD, MAX_LIMIT, MAX_LIMIT_HIGH,
};
use wikifarm_core::timestamp::format_cursor;
use wikifarm_core::wiki::VALID_WIKI_TYPES;
use wikifarm_db::directory::PgWikiDirectory;

use crate::error::{AppError, AppResult};
use crate::middleware::caller::CallerIdentity;
use crate::query::{ApiPhpParams, ListWikisQueryParams};
use crate::response::{Continuation, DataResponse, ListingResponse, WikiCount};
use crate::state::AppState;

/// The only `action` served by `api.php`.
const ACTION_QUERY: &str = "query";
/// The only `list` module served by `api.php`.
const LIST_LISTWIKIS: &str = "listwikis";

/// GET /api/v1/query/listwikis
pub async fn list_wikis(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Query(params): Query<ListWikisQueryParams>,
) -> AppResult<Response> {
    execute(&state, &caller, params.into()).await
}

/// GET /api.php?action=query&list=listwikis
pub async fn api_php(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Query(params): Query<ApiPhpParams>,
) -> AppResult<Response> {
    if params.action.as_deref() != Some(ACTION_QUERY) {
        return Err(AppError::BadRequest(format!(
            "Unrecognized value for parameter 'action': only '{ACTION_QUERY}' is supported"
        )));
    }
    if params.list.as_deref() != Some(LIST_LISTWIKIS) {
        return Err(AppError::BadRequest(format!(
            "Unrecognized value for parameter 'list': only '{LIST_LISTWIKIS}' is supported"
        )));
    }

    execute(&state, &caller, params.listing.into()).await
}

async fn execute(
    state: &AppState,
    caller: &Caller,
    params: ListWikisParams,
) -> AppResult<Response> {
    let query = ListWikisQuery::from_params(&params, caller, chrono::Utc::now())?;
    if !query.ignored.is_empty() {
        tracing::debug!(ignored = ?query.ignored, "Ignoring unparseable listing parameters");
    }
    tracing::debug!(
        dir = query.dir.as_str(),
        limit = query.limit,
        count_only = query.count_only,
        staff = caller.is_staff(),
        "Running listwikis query"
    );

    let directory = PgWikiDirectory::new(state.pool.clone());
    let options = ListOptions {
        caller,
        hosting_domain: &state.config.hosting_domain,
    };
    let mut budget = ResultBudget::new(state.config.max_result_size);

    let listing = run_query(&directory, &query, options, &mut budget).await?;

    let response = match listing {
        Listing::Count(count) => {
            tracing::debug!(count, "Counted wikis");
            Json(DataResponse {
                data: WikiCount { count },
            })
            .into_response()
        }
        Listing::Page(page) => {
            tracing::debug!(
                returned = page.records.len(),
                truncated = page.continue_from.is_some(),
                bytes = budget.used(),
                "Listed wikis"
            );
            let continuation = page.continue_from.map(|ts| Continuation {
                swstart: format_cursor(&ts),
            });
            Json(ListingResponse::new(page.records, continuation)).into_response()
        }
    };

    Ok(response)
}

/// GET /api/v1/query/listwikis/paraminfo
///
/// Self-description of the listing parameters and a few example requests.
pub async fn paraminfo() -> Json<DataResponse<serde_json::Value>> {
    Json(DataResponse {
        data: json!({
            "name": LIST_LISTWIKIS,
            "prefix": "sw",
            "readonly": true,
            "description": "Get a list of wikis on the farm",
            "parameters": [
                { "name": "swwid", "type": "integer", "description": "Wiki id to list. Overrides swfrom and swto" },
                { "name": "swdeleted", "type": "boolean", "description": "Include deleted wikis" },
                { "name": "swfrom", "type": "integer", "description": "Lowest wiki id to list" },
                { "name": "swto", "type": "integer", "description": "Highest wiki id to list" },
                { "name": "swcountonly", "type": "integer", "description": "Return only the number of matching wikis" },
                { "name": "swlang", "type": "string", "description": "Only list wikis in this language" },
                {
                    "name": "swlimit",
                    "type": "limit",
                    "default": DEFAULT_LIMIT,
                    "min": 1,
                    "max": MAX_LIMIT,
                    "highmax": MAX_LIMIT_HIGH,
                    "keyword": LIMIT_MAX_KEYWORD,
                    "description": "How many wikis to return"
                },
                { "name": "swstart", "type": "timestamp", "description": "Timestamp to start listing from" },
                { "name": "swend", "type": "timestamp", "description": "Timestamp to stop listing at" },
                {
                    "name": "swdir",
                    "type": ["newer", "older"],
                    "default": "older",
                    "description": "Which direction swstart and swend are read in"
                }
            ],
            "wikitypes": VALID_WIKI_TYPES,
            "examples": [
                "api.php?action=query&list=listwikis",
                "api.php?action=query&list=listwikis&swcountonly=1",
                "api.php?action=query&list=listwikis&swlang=fi",
                "api.php?action=query&list=listwikis&swwid=177"
            ]
        }),
    })
}
