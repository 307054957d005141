//! Timestamp parsing for range parameters and continuation cursors.
//!
//! Accepted inputs: `now`, RFC 3339 / ISO 8601, MediaWiki's 14-digit
//! `YYYYMMDDHHMMSS`, the database form `YYYY-MM-DD HH:MM:SS`, and Unix
//! seconds. All values are interpreted as UTC.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

use crate::types::Timestamp;

const MEDIAWIKI_FORMAT: &str = "%Y%m%d%H%M%S";
const DATABASE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a user-supplied timestamp. Returns `None` if no format matches.
pub fn parse_timestamp(raw: &str, now: Timestamp) -> Option<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.eq_ignore_ascii_case("now") {
        return Some(now);
    }

    if raw.bytes().all(|b| b.is_ascii_digit()) {
        if raw.len() == 14 {
            return NaiveDateTime::parse_from_str(raw, MEDIAWIKI_FORMAT)
                .ok()
                .map(|dt| dt.and_utc());
        }
        return raw
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, DATABASE_FORMAT)
        .ok()
        .map(|dt| dt.and_utc())
}

/// Render a timestamp as a continuation cursor: RFC 3339 in UTC with a `Z`
/// suffix. Sub-second digits are kept when present so the cursor always
/// parses back to the exact row timestamp.
pub fn format_cursor(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
