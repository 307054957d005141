//! Shared response envelope types for API handlers.
//!
//! Responses use a `{ "data": ... }` envelope. Listing pages that were cut
//! short add a sibling `continue` object carrying the resume cursor.

use indexmap::IndexMap;
use serde::Serialize;
use wikifarm_core::wiki::WikiRecord;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Body of a count-mode response.
#[derive(Debug, Serialize)]
pub struct WikiCount {
    pub count: i64,
}

/// Resume point for a truncated listing.
///
/// Sending `swstart` back with the same filters yields the next page.
#[derive(Debug, Serialize)]
pub struct Continuation {
    pub swstart: String,
}

/// A listing page: records keyed by wiki id, in ascending id order.
#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub data: IndexMap<String, WikiRecord>,
    #[serde(rename = "continue", skip_serializing_if = "Option::is_none")]
    pub continuation: Option<Continuation>,
}

impl ListingResponse {
    pub fn new(records: Vec<WikiRecord>, continuation: Option<Continuation>) -> Self {
        let data = records
            .into_iter()
            .map(|record| (record.id.to_string(), record))
            .collect();
        Self { data, continuation }
    }
}
