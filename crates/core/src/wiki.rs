//! Wiki directory entries, settings keys, and the listing record shape.

use serde::Serialize;

use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Wiki types
// ---------------------------------------------------------------------------

pub const WIKI_TYPE_PUBLIC: &str = "public";
pub const WIKI_TYPE_PRIVATE: &str = "private";
pub const WIKI_TYPE_SCHOOL: &str = "school";

/// All wiki types the provisioning side writes.
pub const VALID_WIKI_TYPES: &[&str] = &[WIKI_TYPE_PUBLIC, WIKI_TYPE_PRIVATE, WIKI_TYPE_SCHOOL];

/// Whether a stored wiki type hides the wiki from non-staff callers.
///
/// A missing type is treated as visible.
pub fn is_private(wiki_type: Option<&str>) -> bool {
    wiki_type == Some(WIKI_TYPE_PRIVATE)
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Per-wiki settings stored as key/value rows in `wiki_settings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WikiSetting {
    LanguageCode,
    Sitename,
    Description,
    Category,
    FullSubdomain,
    WikiType,
}

impl WikiSetting {
    /// The `ws_setting` column value for this setting.
    pub const fn key(self) -> &'static str {
        match self {
            Self::LanguageCode => "wgLanguageCode",
            Self::Sitename => "wgSitename",
            Self::Description => "wgWikiDescription",
            Self::Category => "wgWikiCategory",
            Self::FullSubdomain => "wgFullSubdomain",
            Self::WikiType => "wgWikiType",
        }
    }
}

// ---------------------------------------------------------------------------
// Rows and records
// ---------------------------------------------------------------------------

/// One `wiki_list` row as scanned by the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiRow {
    pub id: DbId,
    pub created_at: Timestamp,
}

/// A wiki as emitted in a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WikiRecord {
    pub id: DbId,
    pub lang: Option<String>,
    pub url: Option<String>,
    pub sitename: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub creationtimestamp: Timestamp,
    /// Only populated for staff callers; the inner value may still be null.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub wiki_type: Option<Option<String>>,
}

/// Public URL of a wiki given its full subdomain.
pub fn wiki_url(full_subdomain: &str, hosting_domain: &str) -> String {
    format!("http://{full_subdomain}.{hosting_domain}/")
}
