//! Worker model and wage configuration.
//!
//! A [`Worker`] owns its wage parameters. The salary engine only ever reads
//! them, through the [`WageConfig`] snapshot returned by [`Worker::wage`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Identifier of a worker row. `0` means "not yet assigned".
pub type WorkerId = i64;

/// The wage parameters the salary engine reads.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::WageConfig;
/// use rust_decimal::Decimal;
///
/// let wage = WageConfig::new(Decimal::new(200, 0), Decimal::new(25, 0));
/// assert_eq!(wage.half_day_wage(), Decimal::new(100, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageConfig {
    /// Pay for one full day (morning and afternoon).
    pub daily_wage: Decimal,
    /// Pay per overtime hour.
    pub overtime_hourly_wage: Decimal,
}

impl WageConfig {
    /// Creates a wage configuration from a daily and an overtime hourly rate.
    pub fn new(daily_wage: Decimal, overtime_hourly_wage: Decimal) -> Self {
        Self {
            daily_wage,
            overtime_hourly_wage,
        }
    }

    /// Pay for a half day: exactly half the daily wage.
    pub fn half_day_wage(&self) -> Decimal {
        self.daily_wage / Decimal::TWO
    }
}

/// Represents a worker whose attendance is tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique identifier, stable once assigned by the store.
    #[serde(default)]
    pub id: WorkerId,
    /// Display name.
    pub name: String,
    /// Full-day rate.
    pub daily_wage: Decimal,
    /// Rate per overtime hour.
    #[serde(default)]
    pub overtime_hourly_wage: Decimal,
    /// Free-text note.
    #[serde(default)]
    pub remark: String,
}

impl Worker {
    /// Creates an unsaved worker (id `0`) with an empty remark.
    pub fn new(
        name: impl Into<String>,
        daily_wage: Decimal,
        overtime_hourly_wage: Decimal,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            daily_wage,
            overtime_hourly_wage,
            remark: String::new(),
        }
    }

    /// Returns the wage parameters as they are right now.
    ///
    /// Nothing is snapshotted per record: editing the worker changes every
    /// salary computed afterwards, past months included.
    pub fn wage(&self) -> WageConfig {
        WageConfig::new(self.daily_wage, self.overtime_hourly_wage)
    }

    /// Checks the rules the input form enforces before a worker is saved.
    ///
    /// The salary engine never calls this; it computes with whatever it is
    /// given.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_payroll::models::Worker;
    /// use rust_decimal::Decimal;
    ///
    /// let blank = Worker::new("  ", Decimal::new(200, 0), Decimal::ZERO);
    /// assert!(blank.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidWorker {
                field: "name".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        if self.daily_wage <= Decimal::ZERO {
            return Err(EngineError::InvalidWorker {
                field: "daily_wage".to_string(),
                message: format!("must be greater than 0, got {}", self.daily_wage),
            });
        }
        if self.overtime_hourly_wage < Decimal::ZERO {
            return Err(EngineError::InvalidWorker {
                field: "overtime_hourly_wage".to_string(),
                message: format!("cannot be negative, got {}", self.overtime_hourly_wage),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_worker() -> Worker {
        Worker {
            id: 1,
            name: "Zhang Wei".to_string(),
            daily_wage: dec("200"),
            overtime_hourly_wage: dec("25"),
            remark: String::new(),
        }
    }

    #[test]
    fn test_wage_reads_current_rates() {
        let mut worker = create_test_worker();
        assert_eq!(worker.wage(), WageConfig::new(dec("200"), dec("25")));

        worker.daily_wage = dec("240");
        assert_eq!(worker.wage().daily_wage, dec("240"));
    }

    #[test]
    fn test_half_day_wage_is_exact_for_odd_amounts() {
        let wage = WageConfig::new(dec("215.5"), Decimal::ZERO);
        assert_eq!(wage.half_day_wage(), dec("107.75"));
    }

    #[test]
    fn test_validate_accepts_valid_worker() {
        assert!(create_test_worker().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut worker = create_test_worker();
        worker.name = "   ".to_string();

        match worker.validate() {
            Err(EngineError::InvalidWorker { field, .. }) => assert_eq!(field, "name"),
            other => panic!("Expected InvalidWorker error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_zero_daily_wage() {
        let mut worker = create_test_worker();
        worker.daily_wage = Decimal::ZERO;

        match worker.validate() {
            Err(EngineError::InvalidWorker { field, .. }) => assert_eq!(field, "daily_wage"),
            other => panic!("Expected InvalidWorker error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_allows_zero_overtime_rate() {
        let mut worker = create_test_worker();
        worker.overtime_hourly_wage = Decimal::ZERO;
        assert!(worker.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_overtime_rate() {
        let mut worker = create_test_worker();
        worker.overtime_hourly_wage = dec("-1");
        assert!(worker.validate().is_err());
    }

    #[test]
    fn test_deserialize_worker_with_defaults() {
        let json = r#"{
            "name": "Li Na",
            "daily_wage": "180.50"
        }"#;

        let worker: Worker = serde_json::from_str(json).unwrap();
        assert_eq!(worker.id, 0);
        assert_eq!(worker.daily_wage, dec("180.50"));
        assert_eq!(worker.overtime_hourly_wage, Decimal::ZERO);
        assert!(worker.remark.is_empty());
    }
}
