//! Month bounds and period parsing.
//!
//! A period is a `yyyy-MM` string naming one calendar month. Every public
//! function here is total: malformed input is replaced by the current month
//! (or a fixed default) instead of producing an error.
//!
//! Each fallback-bearing function has an `_at` sibling taking `today`
//! explicitly; the plain version passes the local date.

use chrono::{Datelike, Local, NaiveDate};

/// `chrono` pattern for ISO calendar dates (`yyyy-MM-dd`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `chrono` pattern for periods (`yyyy-MM`).
pub const PERIOD_FORMAT: &str = "%Y-%m";

/// Value returned by [`days_in_month`] when the month cannot be resolved.
pub const FALLBACK_DAYS_IN_MONTH: u32 = 30;

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a strict `yyyy-MM` period into `(year, month)` with a 1-based month.
///
/// Returns `None` for anything else, including full dates and unpadded months.
///
/// # Example
///
/// ```
/// use attendance_payroll::calendar::parse_period;
///
/// assert_eq!(parse_period("2024-02"), Some((2024, 2)));
/// assert_eq!(parse_period("2024-13"), None);
/// assert_eq!(parse_period("2024-2"), None);
/// assert_eq!(parse_period("bad-input"), None);
/// ```
pub fn parse_period(period: &str) -> Option<(i32, u32)> {
    let (year, month) = period.split_once('-')?;
    if !is_digits(year, 4) || !is_digits(month, 2) {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)?;
    Some((year, month))
}

/// Parses a strict four-digit year.
pub fn parse_year(year: &str) -> Option<i32> {
    if !is_digits(year, 4) {
        return None;
    }
    year.parse().ok()
}

/// Returns the first and last day of a month, or `None` if it does not exist.
pub fn month_bounds_of(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
    Some((first, last))
}

fn current_month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    month_bounds_of(today.year(), today.month())
        .unwrap_or_else(|| (today.with_day(1).unwrap_or(today), today))
}

/// Resolves a period to its inclusive date bounds, relative to `today`.
///
/// An unparseable period resolves to the month containing `today`.
pub fn month_bounds_at(period: &str, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    parse_period(period)
        .and_then(|(year, month)| month_bounds_of(year, month))
        .unwrap_or_else(|| current_month_bounds(today))
}

/// Resolves a period to its inclusive date bounds.
///
/// # Example
///
/// ```
/// use attendance_payroll::calendar::month_bounds;
/// use chrono::NaiveDate;
///
/// let (start, end) = month_bounds("2023-02");
/// assert_eq!(start, NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
/// assert_eq!(end, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
/// ```
pub fn month_bounds(period: &str) -> (NaiveDate, NaiveDate) {
    month_bounds_at(period, today())
}

/// First day of the period as `yyyy-MM-01`, relative to `today`.
pub fn month_start_at(period: &str, today: NaiveDate) -> String {
    month_bounds_at(period, today).0.format(DATE_FORMAT).to_string()
}

/// First day of the period as `yyyy-MM-01`.
///
/// Falls back to the current month when `period` is not a valid `yyyy-MM`.
///
/// # Example
///
/// ```
/// use attendance_payroll::calendar::month_start;
///
/// assert_eq!(month_start("2024-07"), "2024-07-01");
/// ```
pub fn month_start(period: &str) -> String {
    month_start_at(period, today())
}

/// Last day of the period as `yyyy-MM-dd`, relative to `today`.
pub fn month_end_at(period: &str, today: NaiveDate) -> String {
    month_bounds_at(period, today).1.format(DATE_FORMAT).to_string()
}

/// Last day of the period as `yyyy-MM-dd`, accounting for leap years.
///
/// Falls back to the current month when `period` is not a valid `yyyy-MM`.
///
/// # Example
///
/// ```
/// use attendance_payroll::calendar::month_end;
///
/// assert_eq!(month_end("2024-02"), "2024-02-29");
/// assert_eq!(month_end("2023-02"), "2023-02-28");
/// ```
pub fn month_end(period: &str) -> String {
    month_end_at(period, today())
}

/// Number of days in a month addressed by a zero-based month index.
///
/// Returns [`FALLBACK_DAYS_IN_MONTH`] when the month index is out of range.
///
/// # Arguments
///
/// * `year` - The calendar year
/// * `zero_based_month` - `0` for January through `11` for December
///
/// # Example
///
/// ```
/// use attendance_payroll::calendar::days_in_month;
///
/// assert_eq!(days_in_month(2024, 1), 29);
/// assert_eq!(days_in_month(2024, 11), 31);
/// assert_eq!(days_in_month(2024, 12), 30);
/// assert_eq!(days_in_month(2024, -1), 30);
/// ```
pub fn days_in_month(year: i32, zero_based_month: i32) -> u32 {
    u32::try_from(zero_based_month)
        .ok()
        .and_then(|month| month_bounds_of(year, month + 1))
        .map(|(_, last)| last.day())
        .unwrap_or(FALLBACK_DAYS_IN_MONTH)
}

/// The period containing `today`.
pub fn current_month_at(today: NaiveDate) -> String {
    today.format(PERIOD_FORMAT).to_string()
}

/// The current period as `yyyy-MM`.
pub fn current_month() -> String {
    current_month_at(today())
}

/// The twelve periods of a year, January first.
pub fn months_of_year(year: i32) -> [String; 12] {
    std::array::from_fn(|index| format!("{:04}-{:02}", year, index + 1))
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
