//! Yearly aggregation, one calendar month at a time.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_salary;
use crate::calendar::{month_bounds_of, parse_year, today};
use crate::error::EngineResult;
use crate::models::{AttendanceRecord, SalaryResult, WorkerId};
use crate::store::RecordStore;

use super::PayrollService;

/// A worker's attendance and pay for each month of a year that has records.
///
/// Both maps are keyed by `yyyy-MM` and share the same key set. Months
/// without records, or whose query failed, are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearlyAttendance {
    /// Records per month, ascending by date within each month.
    pub records_by_month: BTreeMap<String, Vec<AttendanceRecord>>,
    /// Pay per month.
    pub salary_by_month: BTreeMap<String, SalaryResult>,
}

impl YearlyAttendance {
    /// Sums every present month into one result.
    pub fn totals(&self) -> SalaryResult {
        self.salary_by_month.values().sum()
    }

    /// Months with records, chronologically.
    pub fn months(&self) -> impl Iterator<Item = &str> {
        self.salary_by_month.keys().map(String::as_str)
    }

    /// Returns `true` if no month of the year has records.
    pub fn is_empty(&self) -> bool {
        self.salary_by_month.is_empty()
    }
}

impl<S: RecordStore> PayrollService<S> {
    /// Loads a worker's attendance for each month of `year` (`yyyy`).
    ///
    /// The worker and wage are resolved once. Each month is queried on its
    /// own; a month whose query fails is logged and skipped while the others
    /// are still returned. An unparseable year falls back to the current year.
    ///
    /// # Errors
    ///
    /// Fails only if the worker cannot be resolved.
    pub fn load_year(&self, worker_id: WorkerId, year: &str) -> EngineResult<YearlyAttendance> {
        let run_id = Uuid::new_v4();
        let year = parse_year(year).unwrap_or_else(|| today().year());
        info!(run_id = %run_id, worker_id, year, "Loading yearly attendance");

        let wage = self.resolve_worker(worker_id)?.wage();
        let mut yearly = YearlyAttendance::default();

        for month in 1..=12 {
            let Some((start, end)) = month_bounds_of(year, month) else {
                continue;
            };
            let key = format!("{year:04}-{month:02}");

            let records = match self.month_records(worker_id, start, end) {
                Ok(records) => records,
                Err(error) => {
                    warn!(
                        run_id = %run_id,
                        worker_id,
                        month = %key,
                        error = %error,
                        "Skipping month after failed query"
                    );
                    continue;
                }
            };
            if records.is_empty() {
                continue;
            }

            yearly
                .salary_by_month
                .insert(key.clone(), compute_salary(&wage, &records));
            yearly.records_by_month.insert(key, records);
        }

        info!(
            run_id = %run_id,
            worker_id,
            months = yearly.salary_by_month.len(),
            "Yearly attendance loaded"
        );
        Ok(yearly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EngineError, StoreError, StoreResult};
    use crate::models::Worker;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::Arc;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn create_test_store() -> (MemoryStore, WorkerId) {
        let store = MemoryStore::new();
        let worker_id = store
            .insert_worker(Worker::new("Zhang Wei", dec("200"), dec("25")))
            .unwrap();
        for (day, ot) in [("2024-03-04", "2"), ("2024-03-05", "0"), ("2024-07-15", "1.5")] {
            store
                .upsert_attendance(AttendanceRecord::new(worker_id, date(day), true, true, dec(ot)))
                .unwrap();
        }
        (store, worker_id)
    }

    /// Fails range queries that start in one chosen month.
    struct FailingMonthStore {
        inner: MemoryStore,
        failing_month: u32,
    }

    impl RecordStore for FailingMonthStore {
        fn get_by_worker_and_date(
            &self,
            worker_id: WorkerId,
            date: NaiveDate,
        ) -> StoreResult<Option<AttendanceRecord>> {
            self.inner.get_by_worker_and_date(worker_id, date)
        }

        fn get_by_worker_and_date_range(
            &self,
            worker_id: WorkerId,
            start: NaiveDate,
            end: NaiveDate,
        ) -> StoreResult<Vec<AttendanceRecord>> {
            if start.month() == self.failing_month {
                return Err(StoreError::Unavailable {
                    message: "disk read failed".into(),
                });
            }
            self.inner.get_by_worker_and_date_range(worker_id, start, end)
        }

        fn get_by_date_range(
            &self,
            start: NaiveDate,
            end: NaiveDate,
        ) -> StoreResult<Vec<AttendanceRecord>> {
            self.inner.get_by_date_range(start, end)
        }

        fn get_worker_by_id(&self, id: WorkerId) -> StoreResult<Option<Worker>> {
            self.inner.get_worker_by_id(id)
        }

        fn get_all_workers(&self) -> StoreResult<Vec<Worker>> {
            self.inner.get_all_workers()
        }
    }

    #[test]
    fn test_only_months_with_records_are_present() {
        let (store, worker_id) = create_test_store();
        let service = PayrollService::new(Arc::new(store));

        let yearly = service.load_year(worker_id, "2024").unwrap();

        let months: Vec<&str> = yearly.months().collect();
        assert_eq!(months, vec!["2024-03", "2024-07"]);
        let record_months: Vec<&String> = yearly.records_by_month.keys().collect();
        assert_eq!(record_months, vec!["2024-03", "2024-07"]);
        assert_eq!(yearly.records_by_month["2024-03"].len(), 2);
        assert_eq!(yearly.salary_by_month["2024-07"].total_salary, dec("237.5"));
    }

    #[test]
    fn test_totals_fold_all_months() {
        let (store, worker_id) = create_test_store();
        let service = PayrollService::new(Arc::new(store));

        let totals = service.load_year(worker_id, "2024").unwrap().totals();

        assert_eq!(totals.full_days, 3);
        assert_eq!(totals.half_days, 0);
        assert_eq!(totals.overtime_hours, dec("3.5"));
        assert_eq!(totals.total_salary, dec("687.5"));
    }

    #[test]
    fn test_other_year_is_empty() {
        let (store, worker_id) = create_test_store();
        let service = PayrollService::new(Arc::new(store));

        let yearly = service.load_year(worker_id, "2023").unwrap();
        assert!(yearly.is_empty());
        assert_eq!(yearly.totals(), SalaryResult::default());
    }

    #[test]
    fn test_failed_month_is_skipped() {
        let (inner, worker_id) = create_test_store();
        let service = PayrollService::new(Arc::new(FailingMonthStore {
            inner,
            failing_month: 3,
        }));

        let yearly = service.load_year(worker_id, "2024").unwrap();

        let months: Vec<&str> = yearly.months().collect();
        assert_eq!(months, vec!["2024-07"]);
        assert!(!yearly.records_by_month.contains_key("2024-03"));
    }

    #[test]
    fn test_unknown_worker_fails() {
        let (store, _) = create_test_store();
        let service = PayrollService::new(Arc::new(store));

        assert_eq!(
            service.load_year(99, "2024"),
            Err(EngineError::WorkerNotFound { worker_id: 99 })
        );
    }
}
