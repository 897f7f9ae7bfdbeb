//! Entry date parsing and long-form display.

use chrono::NaiveDate;

/// Storage format of entry keys.
const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Long-form display, e.g. `Wednesday, July 23, 2025`.
const LONG_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Parse an entry key as a calendar date.
///
/// Only the strict `yyyy-mm-dd` form is accepted, so every valid key sorts
/// lexicographically in date order.
pub fn parse_entry_date(date: &str) -> Option<NaiveDate> {
    if date.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(date, ENTRY_DATE_FORMAT).ok()
}

/// Format an entry key as a long-form date.
///
/// The key is treated as a plain calendar date (midnight UTC), so there is no
/// local-timezone day shift. Keys that are not valid dates are returned as-is.
pub fn format_long_date(date: &str) -> String {
    match parse_entry_date(date) {
        Some(d) => d.format(LONG_DATE_FORMAT).to_string(),
        None => date.to_string(),
    }
}
