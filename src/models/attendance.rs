//! Attendance record model.
//!
//! One [`AttendanceRecord`] describes a single worker's single day: whether
//! they were present in the morning and in the afternoon, and how many
//! overtime hours they logged.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::WorkerId;
use crate::error::{EngineError, EngineResult};

/// Identifier of an attendance row. `0` means "not yet assigned".
pub type RecordId = i64;

/// How much of the day a record counts for.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::Presence;
///
/// assert_eq!(Presence::from_flags(true, true), Presence::Full);
/// assert_eq!(Presence::from_flags(false, true), Presence::Half);
/// assert_eq!(Presence::from_flags(false, false), Presence::Absent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// Present both morning and afternoon.
    Full,
    /// Present for exactly one of morning or afternoon.
    Half,
    /// Present for neither half.
    Absent,
}

impl Presence {
    /// Classifies a pair of morning/afternoon flags.
    pub fn from_flags(morning: bool, afternoon: bool) -> Self {
        match (morning, afternoon) {
            (true, true) => Presence::Full,
            (true, false) | (false, true) => Presence::Half,
            (false, false) => Presence::Absent,
        }
    }
}

impl std::fmt::Display for Presence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Presence::Full => write!(f, "Full day"),
            Presence::Half => write!(f, "Half day"),
            Presence::Absent => write!(f, "Absent"),
        }
    }
}

/// A single day of attendance for one worker.
///
/// At most one record exists per `(worker_id, date)`; the store enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier.
    #[serde(default)]
    pub id: RecordId,
    /// The worker this record belongs to.
    pub worker_id: WorkerId,
    /// The calendar day, serialized as `yyyy-MM-dd`.
    pub date: NaiveDate,
    /// Present in the morning.
    #[serde(default)]
    pub morning: bool,
    /// Present in the afternoon.
    #[serde(default)]
    pub afternoon: bool,
    /// Overtime hours, logged independently of presence.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Free-text note.
    #[serde(default)]
    pub remark: String,
}

impl AttendanceRecord {
    /// Creates an unsaved record (id `0`) with no remark.
    pub fn new(
        worker_id: WorkerId,
        date: NaiveDate,
        morning: bool,
        afternoon: bool,
        overtime_hours: Decimal,
    ) -> Self {
        Self {
            id: 0,
            worker_id,
            date,
            morning,
            afternoon,
            overtime_hours,
            remark: String::new(),
        }
    }

    /// Returns how much of the day this record counts for.
    pub fn presence(&self) -> Presence {
        Presence::from_flags(self.morning, self.afternoon)
    }

    /// Checks the rules the entry form enforces before a record is saved.
    pub fn validate(&self) -> EngineResult<()> {
        if self.overtime_hours < Decimal::ZERO {
            return Err(EngineError::InvalidAttendance {
                record_id: self.id,
                date: self.date,
                message: format!(
                    "overtime hours cannot be negative, got {}",
                    self.overtime_hours
                ),
            });
        }
        Ok(())
    }
}

/// Parses free-form overtime input, treating anything unparseable as zero hours.
///
/// # Example
///
/// ```
/// use attendance_payroll::models::parse_overtime_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_overtime_hours("2.5"), Decimal::new(25, 1));
/// assert_eq!(parse_overtime_hours(""), Decimal::ZERO);
/// assert_eq!(parse_overtime_hours("two"), Decimal::ZERO);
/// ```
pub fn parse_overtime_hours(input: &str) -> Decimal {
    Decimal::from_str(input.trim()).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_presence_full_day() {
        let record = AttendanceRecord::new(1, date("2024-03-04"), true, true, Decimal::ZERO);
        assert_eq!(record.presence(), Presence::Full);
    }

    #[test]
    fn test_presence_half_day_either_side() {
        let morning = AttendanceRecord::new(1, date("2024-03-04"), true, false, Decimal::ZERO);
        let afternoon = AttendanceRecord::new(1, date("2024-03-05"), false, true, Decimal::ZERO);
        assert_eq!(morning.presence(), Presence::Half);
        assert_eq!(afternoon.presence(), Presence::Half);
    }

    #[test]
    fn test_presence_absent() {
        let record = AttendanceRecord::new(1, date("2024-03-04"), false, false, dec("3"));
        assert_eq!(record.presence(), Presence::Absent);
    }

    #[test]
    fn test_validate_rejects_negative_overtime() {
        let record = AttendanceRecord::new(1, date("2024-03-04"), true, true, dec("-0.5"));
        assert!(matches!(
            record.validate(),
            Err(EngineError::InvalidAttendance { .. })
        ));
    }

    #[test]
    fn test_parse_overtime_hours_trims_whitespace() {
        assert_eq!(parse_overtime_hours(" 1.5 "), dec("1.5"));
    }

    #[test]
    fn test_deserialize_record_uses_iso_date() {
        let json = r#"{
            "worker_id": 3,
            "date": "2024-02-29",
            "morning": true,
            "overtime_hours": "1.5"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.date, date("2024-02-29"));
        assert!(record.morning);
        assert!(!record.afternoon);
        assert_eq!(record.overtime_hours, dec("1.5"));
        assert_eq!(record.presence(), Presence::Half);
    }

    #[test]
    fn test_serialize_record_date_format() {
        let record = AttendanceRecord::new(3, date("2024-07-01"), true, true, Decimal::ZERO);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"date\":\"2024-07-01\""));
    }
}
