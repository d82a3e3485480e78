//! Permissive date parsing
//!
//! The `DateFormat` criterion and the datetime getter accept "anything
//! that looks like a calendar date": RFC 3339, ISO-like date-times with a
//! space or `T` separator, date-only forms, and a couple of locale-agnostic
//! textual forms. Parsing is whole-string (no trailing garbage) after
//! trimming surrounding whitespace; date-only input resolves to midnight.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-time formats accepted by [`parse_permissive`], tried in order.
pub const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Date-only formats accepted by [`parse_permissive`].
pub const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d.%m.%Y",
    "%Y%m%d",
    "%d %B %Y",
    "%B %d, %Y",
];

/// Parse a date or date-time from any of the accepted formats.
pub fn parse_permissive(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.naive_utc());
    }
    parse_with_formats(input, DATETIME_FORMATS)
        .or_else(|| parse_date_with_formats(input, DATE_FORMATS))
}

/// Parse a date-time against a caller-supplied format table.
pub fn parse_with_formats(input: &str, formats: &[&str]) -> Option<NaiveDateTime> {
    formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
}

/// Parse a date-only value against a caller-supplied format table,
/// resolving to midnight.
pub fn parse_date_with_formats(input: &str, formats: &[&str]) -> Option<NaiveDateTime> {
    formats.iter().find_map(|format| {
        NaiveDate::parse_from_str(input, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })
}
