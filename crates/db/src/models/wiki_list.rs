//! `wiki_list` row model.

use sqlx::FromRow;
use wikifarm_core::types::{DbId, Timestamp};
use wikifarm_core::wiki::WikiRow;

/// The columns of a `wiki_list` row the listing reads.
#[derive(Debug, Clone, FromRow)]
pub struct WikiListEntry {
    pub wl_id: DbId,
    pub wl_timestamp: Timestamp,
}

impl From<WikiListEntry> for WikiRow {
    fn from(entry: WikiListEntry) -> Self {
        WikiRow {
            id: entry.wl_id,
            created_at: entry.wl_timestamp,
        }
    }
}
