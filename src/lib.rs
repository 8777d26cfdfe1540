//! Attendance payroll engine for daily-wage workers.
//!
//! This crate aggregates half-day attendance and overtime into monthly and
//! yearly pay, builds cross-worker salary statistics, and prepares export
//! payloads. Storage sits behind the [`store::RecordStore`] trait.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use attendance_payroll::aggregation::PayrollService;
//! use attendance_payroll::models::{AttendanceRecord, Worker};
//! use attendance_payroll::store::MemoryStore;
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! let store = Arc::new(MemoryStore::new());
//! let id = store
//!     .insert_worker(Worker::new("Zhang Wei", Decimal::new(200, 0), Decimal::new(25, 0)))
//!     .unwrap();
//! store
//!     .upsert_attendance(AttendanceRecord::new(
//!         id,
//!         NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
//!         true,
//!         false,
//!         Decimal::ZERO,
//!     ))
//!     .unwrap();
//!
//! let service = PayrollService::new(store);
//! let month = service.load_month(id, "2024-03").unwrap();
//! assert_eq!(month.salary.half_days, 1);
//! assert_eq!(month.salary.total_salary, Decimal::new(100, 0));
//! ```

#![warn(missing_docs)]

pub mod aggregation;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod store;
