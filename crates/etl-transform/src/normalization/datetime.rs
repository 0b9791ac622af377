//! Date standardization to `YYYY-MM-DD`.
//!
//! Raw sources mix ISO, US, and European day-first layouts. Dates are
//! text-typed columns, so an unparseable value is left untouched rather than
//! rejected here.

use chrono::NaiveDate;

/// Accepted input layouts, tried in this order. First successful parse wins.
pub const DATE_INPUT_FORMATS: [&str; 4] = [
    "%Y-%m-%d", // 2022-03-15
    "%m/%d/%Y", // US: 03/15/2022
    "%d-%m-%Y", // 15-03-2022
    "%d/%m/%Y", // European: 15/03/2022
];

/// Canonical output layout.
pub const DATE_OUTPUT_FORMAT: &str = "%Y-%m-%d";

/// Parse `value` with the first matching input layout.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Format a date in the canonical layout.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_OUTPUT_FORMAT).to_string()
}

/// Normalize a date to `YYYY-MM-DD`, or return the input unchanged.
pub fn normalize_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => format_date(date),
        None => value.to_string(),
    }
}
