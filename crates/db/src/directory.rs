//! PostgreSQL-backed [`WikiDirectory`].

use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
use wikifarm_core::directory::WikiDirectory;
use wikifarm_core::query::WikiFilter;
use wikifarm_core::types::DbId;
use wikifarm_core::wiki::{WikiRow, WikiSetting};

use crate::repositories::wiki_list_repo::SCAN_CHUNK_SIZE;
use crate::repositories::{WikiListRepo, WikiSettingRepo};
use crate::DbPool;

/// Wiki directory served from the `wiki_list` / `wiki_settings` tables.
///
/// Scans read `wiki_list` in keyset chunks, so settings lookups made while
/// consuming a scan never wait on a connection the scan itself is holding.
#[derive(Clone)]
pub struct PgWikiDirectory {
    pool: DbPool,
    scan_chunk: i64,
}

impl PgWikiDirectory {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            scan_chunk: SCAN_CHUNK_SIZE,
        }
    }

    /// Override the number of rows fetched per scan query.
    pub fn with_scan_chunk(mut self, rows: i64) -> Self {
        self.scan_chunk = rows.max(1);
        self
    }
}

#[async_trait]
impl WikiDirectory for PgWikiDirectory {
    type Error = sqlx::Error;

    async fn count(&self, filter: &WikiFilter, cap: i64) -> Result<i64, sqlx::Error> {
        tracing::debug!(?filter, cap, "Counting wikis");
        WikiListRepo::count(&self.pool, filter, cap).await
    }

    fn scan<'a>(&'a self, filter: &'a WikiFilter) -> BoxStream<'a, Result<WikiRow, sqlx::Error>> {
        tracing::debug!(?filter, chunk = self.scan_chunk, "Scanning wikis");
        WikiListRepo::scan(&self.pool, filter, self.scan_chunk)
            .map_ok(WikiRow::from)
            .boxed()
    }

    async fn setting(
        &self,
        wiki_id: DbId,
        setting: WikiSetting,
    ) -> Result<Option<String>, sqlx::Error> {
        WikiSettingRepo::get(&self.pool, wiki_id, setting.key()).await
    }
}
