//! Repository seam between the listing engine and wiki storage.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::query::WikiFilter;
use crate::types::DbId;
use crate::wiki::{WikiRow, WikiSetting};

/// Read access to the wiki directory and its per-wiki settings.
///
/// `scan` yields matching rows in ascending id order. Consumers call
/// `setting` between rows, so a scan must not hold a connection that those
/// lookups would wait on. Dropping the stream early must release whatever
/// backs it.
#[async_trait]
pub trait WikiDirectory: Send + Sync {
    type Error: Send;

    /// Count rows matching `filter`. `cap` is applied as a row limit on the
    /// aggregate query.
    async fn count(&self, filter: &WikiFilter, cap: i64) -> Result<i64, Self::Error>;

    /// Stream rows matching `filter`, ordered by ascending id.
    fn scan<'a>(&'a self, filter: &'a WikiFilter) -> BoxStream<'a, Result<WikiRow, Self::Error>>;

    /// Look up one setting for one wiki.
    async fn setting(
        &self,
        wiki_id: DbId,
        setting: WikiSetting,
    ) -> Result<Option<String>, Self::Error>;
}
