//! Salary summary produced by the calculation engine.
//!
//! A [`SalaryResult`] is never stored. It is recomputed from a record list and
//! a wage configuration whenever it is needed and discarded afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Day counts, overtime, and pay for a set of attendance records.
///
/// Results add together field by field, which is how yearly totals are built
/// from monthly ones.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::SalaryResult;
/// use rust_decimal::Decimal;
///
/// let march = SalaryResult {
///     full_days: 20,
///     half_days: 1,
///     overtime_hours: Decimal::new(4, 0),
///     total_salary: Decimal::new(4200, 0),
/// };
/// let july = SalaryResult {
///     full_days: 18,
///     half_days: 2,
///     overtime_hours: Decimal::ZERO,
///     total_salary: Decimal::new(3800, 0),
/// };
///
/// let year: SalaryResult = [march, july].into_iter().sum();
/// assert_eq!(year.full_days, 38);
/// assert_eq!(year.total_salary, Decimal::new(8000, 0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResult {
    /// Records with both morning and afternoon presence.
    pub full_days: u32,
    /// Records with exactly one of morning or afternoon presence.
    pub half_days: u32,
    /// Sum of overtime hours across all records.
    pub overtime_hours: Decimal,
    /// Computed pay.
    pub total_salary: Decimal,
}

impl SalaryResult {
    /// Returns true when no day was worked and nothing is owed.
    pub fn is_empty(&self) -> bool {
        self.full_days == 0
            && self.half_days == 0
            && self.overtime_hours.is_zero()
            && self.total_salary.is_zero()
    }

    /// Worked days with half days counted as 0.5.
    pub fn equivalent_days(&self) -> Decimal {
        Decimal::from(self.full_days) + Decimal::from(self.half_days) / Decimal::TWO
    }
}

impl Add for SalaryResult {
    type Output = SalaryResult;

    fn add(mut self, rhs: SalaryResult) -> SalaryResult {
        self += rhs;
        self
    }
}

impl AddAssign for SalaryResult {
    fn add_assign(&mut self, rhs: SalaryResult) {
        self.full_days += rhs.full_days;
        self.half_days += rhs.half_days;
        self.overtime_hours += rhs.overtime_hours;
        self.total_salary += rhs.total_salary;
    }
}

impl Sum for SalaryResult {
    fn sum<I: Iterator<Item = SalaryResult>>(iter: I) -> Self {
        iter.fold(SalaryResult::default(), Add::add)
    }
}

impl<'a> Sum<&'a SalaryResult> for SalaryResult {
    fn sum<I: Iterator<Item = &'a SalaryResult>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn result(full: u32, half: u32, overtime: &str, total: &str) -> SalaryResult {
        SalaryResult {
            full_days: full,
            half_days: half,
            overtime_hours: dec(overtime),
            total_salary: dec(total),
        }
    }

    #[test]
    fn test_default_is_all_zero() {
        let zero = SalaryResult::default();
        assert_eq!(zero.full_days, 0);
        assert_eq!(zero.half_days, 0);
        assert_eq!(zero.overtime_hours, Decimal::ZERO);
        assert_eq!(zero.total_salary, Decimal::ZERO);
        assert!(zero.is_empty());
    }

    #[test]
    fn test_add_sums_every_field() {
        let sum = result(1, 2, "1.5", "350") + result(3, 0, "2.25", "600");
        assert_eq!(sum, result(4, 2, "3.75", "950"));
    }

    #[test]
    fn test_sum_over_references() {
        let months = vec![result(1, 0, "0", "200"), result(0, 1, "2", "150")];
        let total: SalaryResult = months.iter().sum();
        assert_eq!(total, result(1, 1, "2", "350"));
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: SalaryResult = Vec::<SalaryResult>::new().into_iter().sum();
        assert!(total.is_empty());
    }

    #[test]
    fn test_equivalent_days_counts_halves() {
        assert_eq!(result(3, 3, "0", "0").equivalent_days(), dec("4.5"));
    }

    #[test]
    fn test_overtime_only_is_not_empty() {
        assert!(!result(0, 0, "1", "0").is_empty());
    }

    #[test]
    fn test_serialize_uses_string_decimals() {
        let json = serde_json::to_string(&result(1, 1, "2", "350")).unwrap();
        assert!(json.contains("\"full_days\":1"));
        assert!(json.contains("\"total_salary\":\"350\""));
    }
}
