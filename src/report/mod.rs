//! Export payloads for attendance sheets and salary summaries.
//!
//! Reports are plain serializable values. Writing them to a spreadsheet is
//! left to the caller; [`Report::suggested_file_name`] and [`Report::to_json`]
//! support that hand-off.

mod attendance;
mod export;
mod rows;
mod summary;

pub use attendance::{MonthlyReport, YearlyReport};
pub use export::{Report, SPREADSHEET_EXTENSION};
pub use rows::{AttendanceRow, MonthRow};
pub use summary::{SalarySummaryReport, SummaryRow};
