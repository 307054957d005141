//! Query string types for the listing endpoints.
//!
//! Parameters keep the `sw` prefix used by the farm's query API. Every value
//! arrives as a string; interpretation (ranges, keywords, fallbacks) happens
//! in [`wikifarm_core::query::ListWikisQuery::from_params`].

use serde::Deserialize;
use wikifarm_core::query::ListWikisParams;

/// `sw`-prefixed listing parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ListWikisQueryParams {
    pub swwid: Option<String>,
    pub swdeleted: Option<String>,
    pub swfrom: Option<String>,
    pub swto: Option<String>,
    pub swcountonly: Option<String>,
    pub swlang: Option<String>,
    pub swlimit: Option<String>,
    pub swstart: Option<String>,
    pub swend: Option<String>,
    pub swdir: Option<String>,
}

impl From<ListWikisQueryParams> for ListWikisParams {
    fn from(q: ListWikisQueryParams) -> Self {
        ListWikisParams {
            wid: q.swwid,
            deleted: q.swdeleted,
            from: q.swfrom,
            to: q.swto,
            countonly: q.swcountonly,
            lang: q.swlang,
            limit: q.swlimit,
            start: q.swstart,
            end: q.swend,
            dir: q.swdir,
        }
    }
}

/// Parameters accepted by the legacy `api.php` entry point.
///
/// Only `action=query&list=listwikis` is served; the listing parameters are
/// read from the same query string.
#[derive(Debug, Deserialize)]
pub struct ApiPhpParams {
    pub action: Option<String>,
    pub list: Option<String>,
    #[serde(flatten)]
    pub listing: ListWikisQueryParams,
}
