//! Per-worker attendance reports.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregation::YearlyAttendance;
use crate::calendar::{parse_year, today};
use crate::config::Settings;
use crate::models::{AttendanceRecord, SalaryResult, WageConfig, Worker, WorkerId};

use super::export::{Report, file_name};
use super::rows::{AttendanceRow, MonthRow};

const ATTENDANCE_PREFIX: &str = "考勤";

/// A worker's attendance sheet for one month.
///
/// # Example
///
/// ```
/// use attendance_payroll::config::Settings;
/// use attendance_payroll::models::{SalaryResult, Worker};
/// use attendance_payroll::report::{MonthlyReport, Report};
/// use rust_decimal::Decimal;
///
/// let worker = Worker::new("张伟", Decimal::new(200, 0), Decimal::new(25, 0));
/// let report = MonthlyReport::build(&worker, "2024-03", &[], &SalaryResult::default(), &Settings::default());
/// assert_eq!(report.suggested_file_name(), "考勤_张伟_2024-03.xlsx");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was built.
    pub generated_at: DateTime<Utc>,
    /// The worker's id.
    pub worker_id: WorkerId,
    /// The worker's name.
    pub worker_name: String,
    /// The month, `yyyy-MM`.
    pub period: String,
    /// Wage standard applied.
    pub wage: WageConfig,
    /// Month totals.
    pub salary: SalaryResult,
    /// `salary.total_salary` rendered with the display settings.
    pub total_display: String,
    /// One row per record, in record order.
    pub rows: Vec<AttendanceRow>,
}

impl MonthlyReport {
    /// Builds the sheet from a month's records and their computed salary.
    pub fn build(
        worker: &Worker,
        period: &str,
        records: &[AttendanceRecord],
        salary: &SalaryResult,
        settings: &Settings,
    ) -> Self {
        let wage = worker.wage();
        Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            worker_id: worker.id,
            worker_name: worker.name.clone(),
            period: period.to_string(),
            wage,
            salary: *salary,
            total_display: settings.format_amount(salary.total_salary),
            rows: records
                .iter()
                .map(|record| AttendanceRow::from_record(&wage, record, settings))
                .collect(),
        }
    }
}

impl Report for MonthlyReport {
    fn suggested_file_name(&self) -> String {
        file_name(&[ATTENDANCE_PREFIX, self.worker_name.as_str(), self.period.as_str()])
    }
}

/// A worker's attendance summary for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was built.
    pub generated_at: DateTime<Utc>,
    /// The worker's id.
    pub worker_id: WorkerId,
    /// The worker's name.
    pub worker_name: String,
    /// The year, `yyyy`.
    pub year: String,
    /// Wage standard applied.
    pub wage: WageConfig,
    /// Totals across every present month.
    pub totals: SalaryResult,
    /// `totals.total_salary` rendered with the display settings.
    pub total_display: String,
    /// One row per month with records, chronologically.
    pub months: Vec<MonthRow>,
    /// Every record of the year, chronologically.
    pub rows: Vec<AttendanceRow>,
}

impl YearlyReport {
    /// Builds the summary from a loaded year.
    ///
    /// An unparseable `year` resolves to the current year, matching
    /// [`PayrollService::load_year`](crate::aggregation::PayrollService::load_year).
    pub fn build(worker: &Worker, year: &str, yearly: &YearlyAttendance, settings: &Settings) -> Self {
        let year = parse_year(year).unwrap_or_else(|| today().year());
        let wage = worker.wage();
        let totals = yearly.totals();
        Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            worker_id: worker.id,
            worker_name: worker.name.clone(),
            year: format!("{year:04}"),
            wage,
            totals,
            total_display: settings.format_amount(totals.total_salary),
            months: yearly
                .salary_by_month
                .iter()
                .map(|(period, salary)| MonthRow::new(period, salary))
                .collect(),
            rows: yearly
                .records_by_month
                .values()
                .flatten()
                .map(|record| AttendanceRow::from_record(&wage, record, settings))
                .collect(),
        }
    }
}

impl Report for YearlyReport {
    fn suggested_file_name(&self) -> String {
        file_name(&[ATTENDANCE_PREFIX, self.worker_name.as_str(), self.year.as_str()])
    }
}
