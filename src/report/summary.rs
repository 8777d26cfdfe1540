//! Cross-worker salary summary.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregation::{MonthlyStatistics, WorkerStatistics};
use crate::models::WorkerId;

use super::export::{Report, file_name};

/// One worker's line in the salary summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// The worker's id.
    pub worker_id: WorkerId,
    /// The worker's name.
    pub name: String,
    /// Full days worked.
    pub full_days: u32,
    /// Half days worked.
    pub half_days: u32,
    /// Overtime hours.
    pub overtime_hours: Decimal,
    /// Full-day rate.
    pub daily_wage: Decimal,
    /// Rate per overtime hour.
    pub overtime_hourly_wage: Decimal,
    /// Pay for the month.
    pub total_salary: Decimal,
    /// The worker's note.
    pub remark: String,
}

impl From<&WorkerStatistics> for SummaryRow {
    fn from(row: &WorkerStatistics) -> Self {
        Self {
            worker_id: row.worker.id,
            name: row.worker.name.clone(),
            full_days: row.salary.full_days,
            half_days: row.salary.half_days,
            overtime_hours: row.salary.overtime_hours,
            daily_wage: row.worker.daily_wage,
            overtime_hourly_wage: row.worker.overtime_hourly_wage,
            total_salary: row.salary.total_salary,
            remark: row.worker.remark.clone(),
        }
    }
}

/// Salaries of every worker for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalarySummaryReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was built.
    pub generated_at: DateTime<Utc>,
    /// The month, `yyyy-MM`.
    pub period: String,
    /// Rows in statistics order, highest total first.
    pub rows: Vec<SummaryRow>,
    /// Sum of every row's total.
    pub grand_total: Decimal,
}

impl SalarySummaryReport {
    /// Builds the summary from monthly statistics.
    pub fn build(period: &str, statistics: &MonthlyStatistics) -> Self {
        Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            period: period.to_string(),
            rows: statistics.workers.iter().map(SummaryRow::from).collect(),
            grand_total: statistics.grand_total(),
        }
    }
}

impl Report for SalarySummaryReport {
    fn suggested_file_name(&self) -> String {
        file_name(&["工资汇总", self.period.as_str()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SalaryResult, Worker};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_row(id: WorkerId, name: &str, total: &str) -> WorkerStatistics {
        let mut worker = Worker::new(name, dec("200"), dec("25"));
        worker.id = id;
        WorkerStatistics {
            worker,
            records: Vec::new(),
            salary: SalaryResult {
                full_days: 1,
                half_days: 0,
                overtime_hours: Decimal::ZERO,
                total_salary: dec(total),
            },
        }
    }

    #[test]
    fn test_build_keeps_statistics_order() {
        let statistics = MonthlyStatistics {
            period: "2024-03".to_string(),
            workers: vec![create_test_row(2, "Li", "400"), create_test_row(1, "Chen", "200")],
        };

        let report = SalarySummaryReport::build("2024-03", &statistics);

        assert_eq!(report.rows[0].name, "Li");
        assert_eq!(report.rows[1].worker_id, 1);
        assert_eq!(report.rows[0].daily_wage, dec("200"));
        assert_eq!(report.grand_total, dec("600"));
        assert_eq!(report.suggested_file_name(), "工资汇总_2024-03.xlsx");
    }

    #[test]
    fn test_empty_summary() {
        let statistics = MonthlyStatistics {
            period: "2024-03".to_string(),
            workers: Vec::new(),
        };
        let report = SalarySummaryReport::build("2024-03", &statistics);
        assert!(report.rows.is_empty());
        assert_eq!(report.grand_total, Decimal::ZERO);
        assert!(report.to_json().unwrap().contains("\"rows\": []"));
    }
}
