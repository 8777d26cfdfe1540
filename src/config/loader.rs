//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading display
//! settings, a worker roster and attendance sheets from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Worker};
use crate::store::MemoryStore;

use super::types::{AttendanceSheet, RosterConfig, Settings};

/// Loads settings and seed data from a configuration directory.
///
/// # Directory Structure
///
/// ```text
/// config/sample/
/// ├── settings.yaml        # Display settings
/// ├── workers.yaml         # Worker roster
/// └── attendance/
///     └── 2024-03.yaml     # Attendance rows, any file name
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_payroll::config::ConfigLoader;
/// use attendance_payroll::store::MemoryStore;
///
/// let loader = ConfigLoader::load("./config/sample").unwrap();
/// let store = MemoryStore::new();
/// loader.seed(&store).unwrap();
/// println!("Currency: {}", loader.settings().display.currency_symbol);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: Settings,
    workers: Vec<Worker>,
    attendance: Vec<AttendanceRecord>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `settings.yaml`, `workers.yaml` or `attendance/` is missing
    /// - Any file contains invalid YAML or misses a required field
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<Settings>(&path.join("settings.yaml"))?;
        let roster = Self::load_yaml::<RosterConfig>(&path.join("workers.yaml"))?;
        let attendance = Self::load_attendance(&path.join("attendance"))?;

        info!(
            path = %path.display(),
            workers = roster.workers.len(),
            records = attendance.len(),
            "Loaded configuration"
        );

        Ok(Self {
            settings,
            workers: roster.workers,
            attendance,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every `.yaml` sheet in the attendance directory, in file name order.
    fn load_attendance(dir: &Path) -> EngineResult<Vec<AttendanceRecord>> {
        let dir_str = dir.display().to_string();

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut sheets = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                sheets.push(path);
            }
        }
        sheets.sort();

        let mut records = Vec::new();
        for sheet in &sheets {
            records.extend(Self::load_yaml::<AttendanceSheet>(sheet)?.records);
        }
        Ok(records)
    }

    /// Returns the display settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the roster as loaded.
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Returns every attendance row as loaded.
    pub fn attendance(&self) -> &[AttendanceRecord] {
        &self.attendance
    }

    /// Inserts the roster and attendance into `store`.
    ///
    /// Workers keep their configured ids. Rows for the same worker and date
    /// replace each other, so the last sheet wins.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Store`] if an attendance row references a
    /// worker missing from the roster.
    pub fn seed(&self, store: &MemoryStore) -> EngineResult<()> {
        for worker in &self.workers {
            store.insert_worker(worker.clone())?;
        }
        for record in &self.attendance {
            store.upsert_attendance(record.clone())?;
        }
        info!(
            workers = self.workers.len(),
            records = self.attendance.len(),
            "Seeded record store"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/sample"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.settings().display.currency_symbol, "¥");
        assert_eq!(loader.workers().len(), 3);
        assert!(!loader.attendance().is_empty());
    }

    #[test]
    fn test_roster_fields() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let zhang = loader
            .workers()
            .iter()
            .find(|worker| worker.id == 1)
            .unwrap();

        assert_eq!(zhang.name, "张伟");
        assert_eq!(zhang.daily_wage, dec("200"));
        assert_eq!(zhang.overtime_hourly_wage, dec("25"));
    }

    #[test]
    fn test_seed_populates_store() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let store = MemoryStore::new();
        loader.seed(&store).unwrap();

        assert_eq!(store.get_all_workers().unwrap().len(), 3);
        let record = store
            .get_by_worker_and_date(1, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap())
            .unwrap()
            .unwrap();
        assert!(record.morning && record.afternoon);
        assert_eq!(record.overtime_hours, dec("2"));
    }

    #[test]
    fn test_missing_directory_returns_not_found() {
        let result = ConfigLoader::load("./config/does-not-exist");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_seed_with_unknown_worker_fails() {
        let loader = ConfigLoader {
            settings: Settings::default(),
            workers: Vec::new(),
            attendance: vec![AttendanceRecord::new(
                7,
                NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
                true,
                true,
                Decimal::ZERO,
            )],
        };
        let result = loader.seed(&MemoryStore::new());
        assert!(matches!(result, Err(EngineError::Store(_))));
    }
}
