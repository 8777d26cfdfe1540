//! Table rows shared by the report payloads.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::daily_pay_breakdown;
use crate::config::Settings;
use crate::models::{AttendanceRecord, Presence, SalaryResult, WageConfig};

/// One attendance day as shown in a report table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRow {
    /// The attendance day.
    pub date: NaiveDate,
    /// The day rendered with the display pattern.
    pub display_date: String,
    /// Present in the morning.
    pub morning: bool,
    /// Present in the afternoon.
    pub afternoon: bool,
    /// Full, half or absent.
    pub presence: Presence,
    /// Overtime hours.
    pub overtime_hours: Decimal,
    /// Free-text note.
    pub remark: String,
    /// Pay for this day alone.
    pub daily_pay: Decimal,
}

impl AttendanceRow {
    pub(crate) fn from_record(
        wage: &WageConfig,
        record: &AttendanceRecord,
        settings: &Settings,
    ) -> Self {
        let pay = daily_pay_breakdown(wage, record);
        Self {
            date: record.date,
            display_date: settings.format_date(record.date),
            morning: record.morning,
            afternoon: record.afternoon,
            presence: pay.presence,
            overtime_hours: record.overtime_hours,
            remark: record.remark.clone(),
            daily_pay: pay.total,
        }
    }
}

/// One month's totals in a yearly report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRow {
    /// The month, `yyyy-MM`.
    pub period: String,
    /// Full days worked.
    pub full_days: u32,
    /// Half days worked.
    pub half_days: u32,
    /// Overtime hours.
    pub overtime_hours: Decimal,
    /// Pay for the month.
    pub total_salary: Decimal,
}

impl MonthRow {
    pub(crate) fn new(period: &str, salary: &SalaryResult) -> Self {
        Self {
            period: period.to_string(),
            full_days: salary.full_days,
            half_days: salary.half_days,
            overtime_hours: salary.overtime_hours,
            total_salary: salary.total_salary,
        }
    }
}
