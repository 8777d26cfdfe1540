//! Date parsing and display formatting.

use std::fmt::Write;

use chrono::{Datelike, NaiveDate};

use super::period::{DATE_FORMAT, today};

/// Default long-form display pattern, e.g. `2024年03月05日`.
pub const DEFAULT_DISPLAY_FORMAT: &str = "%Y年%m月%d日";

/// Parses a strict ISO `yyyy-MM-dd` date.
///
/// # Example
///
/// ```
/// use attendance_payroll::calendar::parse_iso_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_iso_date("2024-03-05"), NaiveDate::from_ymd_opt(2024, 3, 5));
/// assert_eq!(parse_iso_date("2024-3-5"), None);
/// assert_eq!(parse_iso_date("2023-02-29"), None);
/// ```
pub fn parse_iso_date(iso_date: &str) -> Option<NaiveDate> {
    let bytes = iso_date.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(iso_date, DATE_FORMAT).ok()
}

fn render(date: NaiveDate, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

/// Formats an ISO date with a `chrono` strftime pattern.
///
/// Returns `iso_date` unchanged if it does not parse. A pattern that is
/// malformed or asks for fields a date does not have (hours, time zones) is
/// replaced by [`DEFAULT_DISPLAY_FORMAT`].
pub fn format_display_date_with(iso_date: &str, pattern: &str) -> String {
    let Some(date) = parse_iso_date(iso_date) else {
        return iso_date.to_string();
    };
    render(date, pattern).unwrap_or_else(|| date.format(DEFAULT_DISPLAY_FORMAT).to_string())
}

/// Formats an ISO date in long form (`2024年03月05日`).
///
/// Returns the input unchanged if it is not a valid `yyyy-MM-dd` date.
///
/// # Example
///
/// ```
/// use attendance_payroll::calendar::format_display_date;
///
/// assert_eq!(format_display_date("2024-03-05"), "2024年03月05日");
/// assert_eq!(format_display_date("not a date"), "not a date");
/// ```
pub fn format_display_date(iso_date: &str) -> String {
    format_display_date_with(iso_date, DEFAULT_DISPLAY_FORMAT)
}

/// Splits an ISO date into `(year, zero_based_month, day)`, relative to `today`.
pub fn parse_date_at(iso_date: &str, today: NaiveDate) -> (i32, u32, u32) {
    let date = parse_iso_date(iso_date).unwrap_or(today);
    (date.year(), date.month0(), date.day())
}

/// Splits an ISO date into `(year, zero_based_month, day)`.
///
/// Falls back to today's components when the input does not parse.
///
/// # Example
///
/// ```
/// use attendance_payroll::calendar::parse_date;
///
/// assert_eq!(parse_date("2024-12-31"), (2024, 11, 31));
/// ```
pub fn parse_date(iso_date: &str) -> (i32, u32, u32) {
    parse_date_at(iso_date, today())
}

/// Builds an ISO date from calendar-widget components (zero-based month).
///
/// Returns `None` when the components do not name a real day.
pub fn format_date(year: i32, zero_based_month: u32, day: u32) -> Option<String> {
    NaiveDate::from_ymd_opt(year, zero_based_month.checked_add(1)?, day)
        .map(|date| date.format(DATE_FORMAT).to_string())
}

/// Today's date as `yyyy-MM-dd`.
pub fn current_date() -> String {
    today().format(DATE_FORMAT).to_string()
}
