//! The query surface the payroll engine reads from.

use chrono::NaiveDate;

use crate::error::StoreResult;
use crate::models::{AttendanceRecord, Worker, WorkerId};

/// Read access to workers and their attendance.
///
/// Implementations own persistence. The engine only needs these lookups and
/// relies on two guarantees: at most one record exists per worker and date,
/// and range queries are inclusive on both ends and sorted by ascending date.
pub trait RecordStore: Send + Sync {
    /// Returns the worker's record for one day, if any.
    fn get_by_worker_and_date(
        &self,
        worker_id: WorkerId,
        date: NaiveDate,
    ) -> StoreResult<Option<AttendanceRecord>>;

    /// Returns the worker's records in `[start, end]`, ascending by date.
    fn get_by_worker_and_date_range(
        &self,
        worker_id: WorkerId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<AttendanceRecord>>;

    /// Returns every worker's records in `[start, end]`, ascending by date.
    fn get_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<AttendanceRecord>>;

    /// Looks up a worker by id.
    fn get_worker_by_id(&self, id: WorkerId) -> StoreResult<Option<Worker>>;

    /// Returns all workers ordered by name.
    fn get_all_workers(&self) -> StoreResult<Vec<Worker>>;
}
