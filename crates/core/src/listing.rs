//! The `listwikis` engine: count mode and paginated listing mode.
//!
//! Listing walks the directory in ascending id order, drops private wikis for
//! non-staff callers before they are counted, and stops at the first row past
//! the page limit or the first record the result budget refuses. In both
//! cases that row's creation timestamp becomes the continuation cursor.

use futures::StreamExt;
use serde::Serialize;

use crate::caller::Caller;
use crate::directory::WikiDirectory;
use crate::query::ListWikisQuery;
use crate::types::Timestamp;
use crate::wiki::{is_private, wiki_url, WikiRecord, WikiRow, WikiSetting};

/// Default response size budget in bytes (8 MiB).
pub const DEFAULT_MAX_RESULT_SIZE: usize = 8 * 1024 * 1024;

// ---------------------------------------------------------------------------
// Result budget
// ---------------------------------------------------------------------------

/// Byte budget for a single response.
///
/// Each accepted item is charged its serialized JSON size.
#[derive(Debug, Clone)]
pub struct ResultBudget {
    max_bytes: usize,
    used: usize,
}

impl ResultBudget {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes, used: 0 }
    }

    pub fn used(&self) -> usize {
        self.used
    }

    /// Charge `item` against the budget. Returns `false`, leaving the budget
    /// untouched, if it does not fit.
    pub fn try_add<T: Serialize>(&mut self, item: &T) -> bool {
        let Ok(encoded) = serde_json::to_vec(item) else {
            return false;
        };
        let next = self.used + encoded.len();
        if next > self.max_bytes {
            return false;
        }
        self.used = next;
        true
    }
}

impl Default for ResultBudget {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESULT_SIZE)
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// One page of visible wikis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WikiPage {
    /// Records in ascending id order.
    pub records: Vec<WikiRecord>,
    /// Creation timestamp of the first row that did not make the page.
    pub continue_from: Option<Timestamp>,
}

/// Outcome of a `listwikis` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Count(i64),
    Page(WikiPage),
}

/// Per-request rendering options.
#[derive(Debug, Clone, Copy)]
pub struct ListOptions<'a> {
    pub caller: &'a Caller,
    /// Domain appended to each wiki's subdomain when building its URL.
    pub hosting_domain: &'a str,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Run a validated query in whichever mode it asks for.
pub async fn run_query<D: WikiDirectory>(
    directory: &D,
    query: &ListWikisQuery,
    options: ListOptions<'_>,
    budget: &mut ResultBudget,
) -> Result<Listing, D::Error> {
    if query.count_only {
        count_wikis(directory, query).await.map(Listing::Count)
    } else {
        list_wikis(directory, query, options, budget)
            .await
            .map(Listing::Page)
    }
}

/// Count matching wikis.
pub async fn count_wikis<D: WikiDirectory>(
    directory: &D,
    query: &ListWikisQuery,
) -> Result<i64, D::Error> {
    directory.count(&query.filter, query.count_cap()).await
}

/// Produce one page of wikis visible to the caller.
pub async fn list_wikis<D: WikiDirectory>(
    directory: &D,
    query: &ListWikisQuery,
    options: ListOptions<'_>,
    budget: &mut ResultBudget,
) -> Result<WikiPage, D::Error> {
    let is_staff = options.caller.is_staff();
    let mut page = WikiPage::default();
    let mut visible: i64 = 0;

    let mut rows = directory.scan(&query.filter);
    while let Some(row) = rows.next().await {
        let row = row?;
        let wiki_type = directory.setting(row.id, WikiSetting::WikiType).await?;

        // Hidden rows do not count toward the page.
        if is_private(wiki_type.as_deref()) && !is_staff {
            continue;
        }

        visible += 1;
        if visible > query.limit {
            page.continue_from = Some(row.created_at);
            break;
        }

        let record = resolve_record(directory, &row, wiki_type, is_staff, options).await?;
        if !budget.try_add(&record) {
            page.continue_from = Some(row.created_at);
            break;
        }
        page.records.push(record);
    }

    Ok(page)
}

async fn resolve_record<D: WikiDirectory>(
    directory: &D,
    row: &WikiRow,
    wiki_type: Option<String>,
    is_staff: bool,
    options: ListOptions<'_>,
) -> Result<WikiRecord, D::Error> {
    let lang = directory.setting(row.id, WikiSetting::LanguageCode).await?;
    let url = directory
        .setting(row.id, WikiSetting::FullSubdomain)
        .await?
        .map(|sub| wiki_url(&sub, options.hosting_domain));
    let sitename = directory.setting(row.id, WikiSetting::Sitename).await?;
    let description = directory.setting(row.id, WikiSetting::Description).await?;
    let category = directory.setting(row.id, WikiSetting::Category).await?;

    Ok(WikiRecord {
        id: row.id,
        lang,
        url,
        sitename,
        description,
        category,
        creationtimestamp: row.created_at,
        wiki_type: is_staff.then_some(wiki_type),
    })
}
