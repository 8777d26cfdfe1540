//! Salary reduction over a list of attendance records.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{AttendanceRecord, Presence, SalaryResult, WageConfig};

use super::daily_pay::presence_pay;

/// Reduces attendance records and a wage configuration into a salary summary.
///
/// Records are counted as full days (both halves present) or half days
/// (exactly one half present); records with neither contribute only their
/// overtime. Overtime hours are summed across every record.
///
/// `total_salary = full_days * daily_wage + half_days * daily_wage / 2
///     + overtime_hours * overtime_hourly_wage`
///
/// The reduction is order independent and does not deduplicate: the store
/// guarantees at most one record per worker and date. Inputs are not
/// validated, so negative wages yield a negative total.
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::compute_salary;
/// use attendance_payroll::models::{AttendanceRecord, WageConfig};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let wage = WageConfig::new(Decimal::new(200, 0), Decimal::new(25, 0));
/// let records = vec![
///     AttendanceRecord::new(1, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), true, true, Decimal::new(2, 0)),
///     AttendanceRecord::new(1, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(), true, false, Decimal::ZERO),
/// ];
///
/// let result = compute_salary(&wage, &records);
/// assert_eq!(result.full_days, 1);
/// assert_eq!(result.half_days, 1);
/// assert_eq!(result.overtime_hours, Decimal::new(2, 0));
/// assert_eq!(result.total_salary, Decimal::new(350, 0));
/// ```
pub fn compute_salary(wage: &WageConfig, records: &[AttendanceRecord]) -> SalaryResult {
    let mut full_days: u32 = 0;
    let mut half_days: u32 = 0;
    let mut overtime_hours = Decimal::ZERO;

    for record in records {
        match record.presence() {
            Presence::Full => full_days += 1,
            Presence::Half => half_days += 1,
            Presence::Absent => {}
        }
        overtime_hours += record.overtime_hours;
    }

    let total_salary = Decimal::from(full_days) * presence_pay(wage, Presence::Full)
        + Decimal::from(half_days) * presence_pay(wage, Presence::Half)
        + overtime_hours * wage.overtime_hourly_wage;

    debug!(
        records = records.len(),
        full_days,
        half_days,
        overtime_hours = %overtime_hours,
        total_salary = %total_salary,
        "Computed salary"
    );

    SalaryResult {
        full_days,
        half_days,
        overtime_hours,
        total_salary,
    }
}
