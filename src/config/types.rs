//! Configuration types deserialized from YAML.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::calendar::{DATE_FORMAT, DEFAULT_DISPLAY_FORMAT, format_display_date_with};
use crate::models::{AttendanceRecord, Worker};

fn default_date_format() -> String {
    DEFAULT_DISPLAY_FORMAT.to_string()
}

fn default_currency_symbol() -> String {
    "¥".to_string()
}

fn default_decimal_places() -> u32 {
    2
}

/// How dates and amounts are rendered for people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// chrono pattern for display dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Prefix for money amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Fraction digits shown for money amounts.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            currency_symbol: default_currency_symbol(),
            decimal_places: default_decimal_places(),
        }
    }
}

/// Contents of `settings.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Display preferences.
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Settings {
    /// Renders a money amount, e.g. `¥350.00`.
    ///
    /// Amounts are rounded half away from zero to `decimal_places`. A negative
    /// sign goes before the symbol (`-¥12.50`).
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_payroll::config::Settings;
    /// use rust_decimal::Decimal;
    ///
    /// let settings = Settings::default();
    /// assert_eq!(settings.format_amount(Decimal::new(350, 0)), "¥350.00");
    /// ```
    pub fn format_amount(&self, amount: Decimal) -> String {
        let places = self.display.decimal_places;
        let rounded = amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!(
            "{}{}{:.*}",
            sign,
            self.display.currency_symbol,
            places as usize,
            rounded.abs()
        )
    }

    /// Renders a date with the configured display pattern.
    pub fn format_date(&self, date: NaiveDate) -> String {
        let iso = date.format(DATE_FORMAT).to_string();
        format_display_date_with(&iso, &self.display.date_format)
    }
}

/// Contents of `workers.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterConfig {
    /// Workers to seed. Ids are kept so attendance files can refer to them.
    #[serde(default)]
    pub workers: Vec<Worker>,
}

/// Contents of one file under `attendance/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceSheet {
    /// Attendance rows for any workers and dates.
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_settings_defaults_when_section_missing() {
        let settings: Settings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.display.currency_symbol, "¥");
        assert_eq!(settings.display.decimal_places, 2);
    }

    #[test]
    fn test_partial_display_section_keeps_other_defaults() {
        let settings: Settings =
            serde_yaml::from_str("display:\n  currency_symbol: \"$\"\n").unwrap();
        assert_eq!(settings.display.currency_symbol, "$");
        assert_eq!(settings.display.date_format, DEFAULT_DISPLAY_FORMAT);
    }

    #[test]
    fn test_format_amount_pads_and_rounds() {
        let settings = Settings::default();
        assert_eq!(settings.format_amount(dec("350")), "¥350.00");
        assert_eq!(settings.format_amount(dec("237.5")), "¥237.50");
        assert_eq!(settings.format_amount(dec("0.125")), "¥0.13");
    }

    #[test]
    fn test_format_amount_sign_precedes_symbol() {
        let settings = Settings::default();
        assert_eq!(settings.format_amount(dec("-12.5")), "-¥12.50");
        assert_eq!(settings.format_amount(dec("-0.001")), "¥0.00");
    }

    #[test]
    fn test_format_amount_without_fraction() {
        let mut settings = Settings::default();
        settings.display.decimal_places = 0;
        settings.display.currency_symbol = "$".to_string();
        assert_eq!(settings.format_amount(dec("99.5")), "$100");
    }

    #[test]
    fn test_format_date_uses_pattern() {
        let mut settings = Settings::default();
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(settings.format_date(date), "2024年03月04日");

        settings.display.date_format = "%d/%m/%Y".to_string();
        assert_eq!(settings.format_date(date), "04/03/2024");
    }

    #[test]
    fn test_format_date_with_time_pattern_falls_back() {
        let mut settings = Settings::default();
        settings.display.date_format = "%Y-%m-%d %H".to_string();
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(settings.format_date(date), "2024年03月04日");
    }

    #[test]
    fn test_attendance_sheet_defaults() {
        let yaml = "records:\n  - worker_id: 1\n    date: \"2024-03-04\"\n    morning: true\n";
        let sheet: AttendanceSheet = serde_yaml::from_str(yaml).unwrap();
        let record = &sheet.records[0];
        assert!(record.morning);
        assert!(!record.afternoon);
        assert_eq!(record.overtime_hours, Decimal::ZERO);
    }
}
