//! Repository for the `wiki_list` directory table.
//!
//! Count and scan share one predicate set. Every optional filter is bound as
//! a nullable parameter, so a `NULL` bind disables its clause:
//!
//! ```text
//! $1 include deleted    $2 wiki id         $3 id lower bound   $4 id upper bound
//! $5 language code      $6 language key    $7 ts lower bound   $8 ts upper bound
//! ```
//!
//! The listing scan is keyset-paginated on `wl_id`: each chunk is fetched in
//! full and its connection returned to the pool before the next one is read.

use futures::stream::{self, BoxStream};
use futures::{StreamExt, TryStreamExt};
use sqlx::PgPool;
use wikifarm_core::query::WikiFilter;
use wikifarm_core::types::DbId;
use wikifarm_core::wiki::WikiSetting;

use crate::models::wiki_list::WikiListEntry;

macro_rules! filter_clause {
    () => {
        "($1::BOOL OR wl_deleted = FALSE) \
         AND ($2::BIGINT IS NULL OR wl_id = $2) \
         AND ($3::BIGINT IS NULL OR wl_id >= $3) \
         AND ($4::BIGINT IS NULL OR wl_id <= $4) \
         AND ($5::TEXT IS NULL OR EXISTS ( \
             SELECT 1 FROM wiki_settings \
             WHERE ws_wiki = wl_id AND ws_setting = $6 AND ws_value = $5)) \
         AND ($7::TIMESTAMPTZ IS NULL OR wl_timestamp >= $7) \
         AND ($8::TIMESTAMPTZ IS NULL OR wl_timestamp <= $8)"
    };
}

/// Default number of rows per scan chunk.
pub const SCAN_CHUNK_SIZE: i64 = 100;

/// One keyset chunk of the listing scan. `$9` is the last id already read,
/// `$10` the chunk size. Always ascending by id, whatever the scan direction.
const SCAN_SQL: &str = concat!(
    "SELECT wl_id, wl_timestamp FROM wiki_list WHERE ",
    filter_clause!(),
    " AND ($9::BIGINT IS NULL OR wl_id > $9) ORDER BY wl_id ASC LIMIT $10"
);

/// Count query. `$9` caps the aggregate's row count, which is always one.
const COUNT_SQL: &str = concat!(
    "SELECT COUNT(*) FROM wiki_list WHERE ",
    filter_clause!(),
    " LIMIT $9"
);

/// Provides read access to the wiki directory.
pub struct WikiListRepo;

impl WikiListRepo {
    /// Count wikis matching `filter`.
    pub async fn count(pool: &PgPool, filter: &WikiFilter, cap: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(COUNT_SQL)
            .bind(filter.include_deleted)
            .bind(filter.wiki_id)
            .bind(filter.from)
            .bind(filter.to)
            .bind(filter.lang.as_deref())
            .bind(WikiSetting::LanguageCode.key())
            .bind(filter.timestamps.lower)
            .bind(filter.timestamps.upper)
            .bind(cap)
            .fetch_one(pool)
            .await
    }

    /// Number of wikis not marked deleted.
    pub async fn count_live(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM wiki_list WHERE wl_deleted = FALSE")
            .fetch_one(pool)
            .await
    }

    /// Fetch up to `chunk_size` wikis matching `filter` with ids above `after`.
    pub async fn scan_chunk(
        pool: &PgPool,
        filter: &WikiFilter,
        after: Option<DbId>,
        chunk_size: i64,
    ) -> Result<Vec<WikiListEntry>, sqlx::Error> {
        sqlx::query_as::<_, WikiListEntry>(SCAN_SQL)
            .bind(filter.include_deleted)
            .bind(filter.wiki_id)
            .bind(filter.from)
            .bind(filter.to)
            .bind(filter.lang.as_deref())
            .bind(WikiSetting::LanguageCode.key())
            .bind(filter.timestamps.lower)
            .bind(filter.timestamps.upper)
            .bind(after)
            .bind(chunk_size)
            .fetch_all(pool)
            .await
    }

    /// Stream wikis matching `filter` in ascending id order, `chunk_size`
    /// rows per query.
    ///
    /// No connection is held while the consumer works on yielded rows.
    pub fn scan<'a>(
        pool: &'a PgPool,
        filter: &'a WikiFilter,
        chunk_size: i64,
    ) -> BoxStream<'a, Result<WikiListEntry, sqlx::Error>> {
        let chunk_size = chunk_size.max(1);
        // `None` once the last chunk came back short.
        let start: Option<Option<DbId>> = Some(None);

        stream::try_unfold(start, move |cursor| async move {
            let Some(after) = cursor else {
                return Ok::<_, sqlx::Error>(None);
            };
            let rows = Self::scan_chunk(pool, filter, after, chunk_size).await?;
            let next = if (rows.len() as i64) < chunk_size {
                None
            } else {
                rows.last().map(|row| Some(row.wl_id))
            };
            Ok(Some((stream::iter(rows.into_iter().map(Ok)), next)))
        })
        .try_flatten()
        .boxed()
    }
}
