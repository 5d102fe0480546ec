//! Calendar period keys and lenient date parsing.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A year-month bucket on the shared time axis.
///
/// Formats as `YYYY-MM` (zero-padded, 1-based month), so lexicographic order
/// of the formatted key matches the derived `Ord`, which is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PeriodKey {
    pub year: i32,
    pub month: u32,
}

impl PeriodKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Bucket for a calendar date. Day-of-month is irrelevant.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Parse an ISO-8601 date or datetime string into a naive calendar date.
///
/// Source payloads mix bare dates (`2025-01-05`) with full timestamps
/// (`2025-01-05T14:30:00`); both resolve to the same calendar day. No
/// timezone normalization is applied beyond what the value itself encodes.
/// Returns `None` for anything unparseable.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    // Timestamps with a trailing offset (e.g. `...+02:00` or `...Z`) keep
    // their encoded calendar day.
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    None
}
