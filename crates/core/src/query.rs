//! Normalization of `listwikis` request parameters into a [`ListWikisQuery`].
//!
//! Parameters arrive as raw strings. Malformed numeric filters are treated as
//! absent rather than rejected; the only hard failure is an unknown language
//! code, which aborts before any row is read.

use crate::caller::Caller;
use crate::error::CoreError;
use crate::language::validate_language;
use crate::timestamp::parse_timestamp;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Page size when `limit` is absent or unparseable.
pub const DEFAULT_LIMIT: i64 = 100;

/// Maximum page size for ordinary callers.
pub const MAX_LIMIT: i64 = 500;

/// Maximum page size for callers in a high-limit group.
pub const MAX_LIMIT_HIGH: i64 = 5000;

/// Literal `limit` value that selects the caller's maximum.
pub const LIMIT_MAX_KEYWORD: &str = "max";

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Raw request parameters, unprefixed.
#[derive(Debug, Clone, Default)]
pub struct ListWikisParams {
    pub wid: Option<String>,
    pub deleted: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub countonly: Option<String>,
    pub lang: Option<String>,
    pub limit: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub dir: Option<String>,
}

/// Scan direction for the timestamp range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Older,
    Newer,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Older => "older",
            Self::Newer => "newer",
        }
    }

    /// Parse `older` / `newer`; anything else falls back to `older`.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("newer") => Self::Newer,
            _ => Self::Older,
        }
    }
}

/// Inclusive bounds on `wl_timestamp`. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimestampRange {
    pub lower: Option<Timestamp>,
    pub upper: Option<Timestamp>,
}

impl TimestampRange {
    /// Orient `start`/`end` by direction: `newer` scans forward from `start`,
    /// `older` scans backward from `start`.
    pub fn oriented(dir: Direction, start: Option<Timestamp>, end: Option<Timestamp>) -> Self {
        match dir {
            Direction::Newer => Self {
                lower: start,
                upper: end,
            },
            Direction::Older => Self {
                lower: end,
                upper: start,
            },
        }
    }

    pub fn contains(&self, ts: &Timestamp) -> bool {
        self.lower.is_none_or(|lower| *ts >= lower) && self.upper.is_none_or(|upper| *ts <= upper)
    }
}

/// Row predicates shared by count and listing mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WikiFilter {
    pub include_deleted: bool,
    pub wiki_id: Option<DbId>,
    pub from: Option<DbId>,
    pub to: Option<DbId>,
    pub lang: Option<String>,
    pub timestamps: TimestampRange,
}

/// A validated `listwikis` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListWikisQuery {
    pub filter: WikiFilter,
    pub count_only: bool,
    pub limit: i64,
    pub dir: Direction,
    /// Names of parameters that were supplied but could not be used.
    pub ignored: Vec<&'static str>,
}

impl ListWikisQuery {
    /// Build a query from raw parameters for the given caller.
    ///
    /// `now` resolves the `now` timestamp keyword.
    pub fn from_params(
        params: &ListWikisParams,
        caller: &Caller,
        now: Timestamp,
    ) -> Result<Self, CoreError> {
        let mut ignored = Vec::new();

        let lang = non_empty(params.lang.as_deref()).map(str::to_string);
        if let Some(ref code) = lang {
            validate_language(code)?;
        }

        let wiki_id = parse_id(params.wid.as_deref(), "wid", &mut ignored).filter(|id| *id != 0);

        // A specific wiki id overrides the id range entirely.
        let (from, to) = if wiki_id.is_some() {
            (None, None)
        } else {
            (
                parse_positive_id(params.from.as_deref(), "from", &mut ignored),
                parse_positive_id(params.to.as_deref(), "to", &mut ignored),
            )
        };

        let dir = Direction::parse_or_default(params.dir.as_deref());
        let start = parse_time(params.start.as_deref(), now, "start", &mut ignored);
        let end = parse_time(params.end.as_deref(), now, "end", &mut ignored);

        let count_only = non_empty(params.countonly.as_deref())
            .and_then(|v| v.parse::<i64>().ok())
            .is_some_and(|v| v >= 1);

        let limit = resolve_limit(params.limit.as_deref(), caller);

        Ok(Self {
            filter: WikiFilter {
                include_deleted: params.deleted.is_some(),
                wiki_id,
                from,
                to,
                lang,
                timestamps: TimestampRange::oriented(dir, start, end),
            },
            count_only,
            limit,
            dir,
            ignored,
        })
    }

    /// Row cap applied to the count query. It has no effect on an aggregate.
    pub fn count_cap(&self) -> i64 {
        self.limit + 1
    }
}

/// Maximum page size available to `caller`.
pub fn max_limit_for(caller: &Caller) -> i64 {
    if caller.has_high_limits() {
        MAX_LIMIT_HIGH
    } else {
        MAX_LIMIT
    }
}

/// Resolve the `limit` parameter: `max` keyword, clamp to `[1, max]`,
/// default on absent or unparseable input.
pub fn resolve_limit(raw: Option<&str>, caller: &Caller) -> i64 {
    let max = max_limit_for(caller);
    match non_empty(raw) {
        Some(LIMIT_MAX_KEYWORD) => max,
        Some(v) => v.parse::<i64>().unwrap_or(DEFAULT_LIMIT).clamp(1, max),
        None => DEFAULT_LIMIT.min(max),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_id(raw: Option<&str>, name: &'static str, ignored: &mut Vec<&'static str>) -> Option<DbId> {
    let value = non_empty(raw)?;
    match value.parse::<DbId>() {
        Ok(id) => Some(id),
        Err(_) => {
            ignored.push(name);
            None
        }
    }
}

fn parse_positive_id(
    raw: Option<&str>,
    name: &'static str,
    ignored: &mut Vec<&'static str>,
) -> Option<DbId> {
    match parse_id(raw, name, ignored) {
        Some(id) if id > 0 => Some(id),
        Some(_) => {
            ignored.push(name);
            None
        }
        None => None,
    }
}

fn parse_time(
    raw: Option<&str>,
    now: Timestamp,
    name: &'static str,
    ignored: &mut Vec<&'static str>,
) -> Option<Timestamp> {
    let value = non_empty(raw)?;
    let parsed = parse_timestamp(value, now);
    if parsed.is_none() {
        ignored.push(name);
    }
    parsed
}
