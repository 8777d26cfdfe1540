//! Single-day pay calculation.
//!
//! This module prices one attendance record on its own: the presence-based
//! day pay plus overtime. [`compute_salary`](super::compute_salary) applies the
//! same rule to a whole list, and the two must agree to the cent.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, Presence, WageConfig};

/// The pay for one attendance record, split into its components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPay {
    /// How much of the day the record counts for.
    pub presence: Presence,
    /// Pay for presence: the daily wage, half of it, or zero.
    pub base_pay: Decimal,
    /// Overtime hours times the overtime hourly wage.
    pub overtime_pay: Decimal,
    /// `base_pay + overtime_pay`.
    pub total: Decimal,
}

/// Pay owed for a given presence, excluding overtime.
pub fn presence_pay(wage: &WageConfig, presence: Presence) -> Decimal {
    match presence {
        Presence::Full => wage.daily_wage,
        Presence::Half => wage.half_day_wage(),
        Presence::Absent => Decimal::ZERO,
    }
}

/// Prices a single attendance record and keeps the breakdown.
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::daily_pay_breakdown;
/// use attendance_payroll::models::{AttendanceRecord, Presence, WageConfig};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let wage = WageConfig::new(Decimal::new(200, 0), Decimal::new(25, 0));
/// let record = AttendanceRecord::new(
///     1,
///     NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
///     true,
///     false,
///     Decimal::new(2, 0),
/// );
///
/// let pay = daily_pay_breakdown(&wage, &record);
/// assert_eq!(pay.presence, Presence::Half);
/// assert_eq!(pay.base_pay, Decimal::new(100, 0));
/// assert_eq!(pay.overtime_pay, Decimal::new(50, 0));
/// assert_eq!(pay.total, Decimal::new(150, 0));
/// ```
pub fn daily_pay_breakdown(wage: &WageConfig, record: &AttendanceRecord) -> DailyPay {
    let presence = record.presence();
    let base_pay = presence_pay(wage, presence);
    let overtime_pay = record.overtime_hours * wage.overtime_hourly_wage;

    DailyPay {
        presence,
        base_pay,
        overtime_pay,
        total: base_pay + overtime_pay,
    }
}

/// Computes the pay for a single attendance record.
///
/// The daily wage if present all day, half of it if present for exactly one
/// half, nothing otherwise; plus overtime hours at the overtime rate, which
/// accrue whether or not the worker was present.
///
/// # Arguments
///
/// * `wage` - The worker's current wage configuration
/// * `record` - The record to price
///
/// # Example
///
/// ```
/// use attendance_payroll::calculation::compute_daily_salary;
/// use attendance_payroll::models::{AttendanceRecord, WageConfig};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let wage = WageConfig::new(Decimal::new(200, 0), Decimal::new(25, 0));
/// let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
///
/// let full = AttendanceRecord::new(1, date, true, true, Decimal::ZERO);
/// assert_eq!(compute_daily_salary(&wage, &full), Decimal::new(200, 0));
///
/// let overtime_only = AttendanceRecord::new(1, date, false, false, Decimal::new(3, 0));
/// assert_eq!(compute_daily_salary(&wage, &overtime_only), Decimal::new(75, 0));
/// ```
pub fn compute_daily_salary(wage: &WageConfig, record: &AttendanceRecord) -> Decimal {
    daily_pay_breakdown(wage, record).total
}
