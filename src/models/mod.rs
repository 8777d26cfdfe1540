//! Core data models for the attendance payroll engine.
//!
//! This module contains the worker, attendance, and salary types shared by
//! the store, the calculation engine, and the aggregator.

mod attendance;
mod salary_result;
mod worker;

pub use attendance::{AttendanceRecord, Presence, RecordId, parse_overtime_hours};
pub use salary_result::SalaryResult;
pub use worker::{WageConfig, Worker, WorkerId};
