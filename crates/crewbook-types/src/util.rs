use chrono::{Local, NaiveDate};

/// Format a date the way every date column is stored: zero-padded ISO-8601
/// (`YYYY-MM-DD`), so lexicographic comparison matches calendar order.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a stored date column; `None` for null or unparseable text.
pub fn parse_iso_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
}

/// Local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Trim a required text field; `None` when nothing but whitespace is left.
pub fn required_text(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Trim an optional text field, collapsing blank input to `None` (stored as NULL).
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value.and_then(required_text).map(str::to_string)
}
