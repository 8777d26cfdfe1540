//! Monthly, yearly and cross-worker pay aggregation.
//!
//! [`PayrollService`] reads workers and attendance from a [`RecordStore`]
//! and reduces them with [`crate::calculation::compute_salary`].
//!
//! [`RecordStore`]: crate::store::RecordStore

mod service;
mod statistics;
mod yearly;

pub use service::{MonthlyAttendance, PayrollService};
pub use statistics::{MonthlyStatistics, WorkerStatistics};
pub use yearly::YearlyAttendance;
