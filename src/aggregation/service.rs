//! Payroll service and single-month loading.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::compute_salary;
use crate::calendar::month_bounds;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, SalaryResult, Worker, WorkerId};
use crate::store::RecordStore;

/// One worker's attendance and pay for a calendar month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAttendance {
    /// Records in the month, ascending by date.
    pub records: Vec<AttendanceRecord>,
    /// Pay computed from `records` at the worker's current wage.
    pub salary: SalaryResult,
}

/// Aggregates attendance into monthly and yearly pay.
///
/// The service holds no state besides the store handle. Wages are read from
/// the store on every call, so editing a worker's wage changes what every
/// later load reports for past months as well.
pub struct PayrollService<S> {
    store: Arc<S>,
}

impl<S> Clone for PayrollService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: RecordStore> PayrollService<S> {
    /// Creates a service reading from `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub(super) fn resolve_worker(&self, worker_id: WorkerId) -> EngineResult<Worker> {
        self.store
            .get_worker_by_id(worker_id)?
            .ok_or(EngineError::WorkerNotFound { worker_id })
    }

    pub(super) fn month_records(
        &self,
        worker_id: WorkerId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        Ok(self
            .store
            .get_by_worker_and_date_range(worker_id, start, end)?)
    }

    /// Loads a worker's records for `period` (`yyyy-MM`) and computes their pay.
    ///
    /// An unparseable period falls back to the current month.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::WorkerNotFound`] if the worker does not exist and
    /// [`EngineError::Store`] if a store query fails.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use attendance_payroll::aggregation::PayrollService;
    /// use attendance_payroll::models::{AttendanceRecord, Worker};
    /// use attendance_payroll::store::MemoryStore;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let store = Arc::new(MemoryStore::new());
    /// let id = store
    ///     .insert_worker(Worker::new("Zhang Wei", Decimal::new(200, 0), Decimal::new(25, 0)))
    ///     .unwrap();
    /// let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
    /// store
    ///     .upsert_attendance(AttendanceRecord::new(id, day, true, true, Decimal::new(2, 0)))
    ///     .unwrap();
    ///
    /// let service = PayrollService::new(store);
    /// let month = service.load_month(id, "2024-03").unwrap();
    /// assert_eq!(month.records.len(), 1);
    /// assert_eq!(month.salary.total_salary, Decimal::new(250, 0));
    /// ```
    pub fn load_month(&self, worker_id: WorkerId, period: &str) -> EngineResult<MonthlyAttendance> {
        let run_id = Uuid::new_v4();
        let (start, end) = month_bounds(period);
        info!(run_id = %run_id, worker_id, period, "Loading monthly attendance");

        let worker = self.resolve_worker(worker_id)?;
        let records = self.month_records(worker_id, start, end)?;
        let salary = compute_salary(&worker.wage(), &records);

        debug!(
            run_id = %run_id,
            worker_id,
            %start,
            %end,
            records = records.len(),
            total_salary = %salary.total_salary,
            "Monthly attendance loaded"
        );

        Ok(MonthlyAttendance { records, salary })
    }
}
