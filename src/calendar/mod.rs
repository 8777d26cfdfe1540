//! Calendar helpers feeding range queries and display.
//!
//! All functions are total: they substitute a documented default rather than
//! return an error.

mod display;
mod period;

pub use display::{
    DEFAULT_DISPLAY_FORMAT, current_date, format_date, format_display_date,
    format_display_date_with, parse_date, parse_date_at, parse_iso_date,
};
pub use period::{
    DATE_FORMAT, FALLBACK_DAYS_IN_MONTH, PERIOD_FORMAT, current_month, current_month_at,
    days_in_month, month_bounds, month_bounds_at, month_bounds_of, month_end, month_end_at,
    month_start, month_start_at, months_of_year, parse_period, parse_year,
};

pub(crate) use period::today;
