//! Cross-worker statistics for one month.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::calculation::compute_salary;
use crate::calendar::{PERIOD_FORMAT, month_bounds};
use crate::error::EngineResult;
use crate::models::{AttendanceRecord, SalaryResult, Worker, WorkerId};
use crate::store::RecordStore;

use super::PayrollService;

/// One worker's line in the monthly statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerStatistics {
    /// The worker as stored when the statistics were built.
    pub worker: Worker,
    /// The worker's records in the month, ascending by date.
    pub records: Vec<AttendanceRecord>,
    /// The worker's pay for the month.
    pub salary: SalaryResult,
}

/// Pay for every worker in one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStatistics {
    /// The month, `yyyy-MM`.
    pub period: String,
    /// One row per worker, highest total first, ties broken by name.
    pub workers: Vec<WorkerStatistics>,
}

impl MonthlyStatistics {
    /// Sum of every worker's total salary.
    pub fn grand_total(&self) -> Decimal {
        self.workers.iter().map(|row| row.salary.total_salary).sum()
    }

    /// Rows for workers with at least one record.
    pub fn active(&self) -> impl Iterator<Item = &WorkerStatistics> {
        self.workers.iter().filter(|row| !row.records.is_empty())
    }
}

impl<S: RecordStore> PayrollService<S> {
    /// Builds pay statistics for every worker in `period` (`yyyy-MM`).
    ///
    /// Workers without records still get a zero row. Records belonging to
    /// workers missing from the roster are ignored.
    pub fn monthly_statistics(&self, period: &str) -> EngineResult<MonthlyStatistics> {
        let run_id = Uuid::new_v4();
        let (start, end) = month_bounds(period);
        let period = start.format(PERIOD_FORMAT).to_string();
        info!(run_id = %run_id, period = %period, "Building monthly statistics");

        let mut by_worker: BTreeMap<WorkerId, Vec<AttendanceRecord>> = BTreeMap::new();
        for record in self.store().get_by_date_range(start, end)? {
            by_worker.entry(record.worker_id).or_default().push(record);
        }

        let mut workers: Vec<WorkerStatistics> = self
            .store()
            .get_all_workers()?
            .into_iter()
            .map(|worker| {
                let records = by_worker.remove(&worker.id).unwrap_or_default();
                let salary = compute_salary(&worker.wage(), &records);
                WorkerStatistics {
                    worker,
                    records,
                    salary,
                }
            })
            .collect();

        workers.sort_by(|a, b| {
            b.salary
                .total_salary
                .cmp(&a.salary.total_salary)
                .then_with(|| a.worker.name.cmp(&b.worker.name))
        });

        let statistics = MonthlyStatistics { period, workers };
        info!(
            run_id = %run_id,
            workers = statistics.workers.len(),
            orphaned_workers = by_worker.len(),
            grand_total = %statistics.grand_total(),
            "Monthly statistics built"
        );
        Ok(statistics)
    }
}
