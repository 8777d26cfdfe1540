//! Error types for the attendance payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Date parsing never shows up here: the calendar utilities recover locally
//! with a fallback value instead of failing.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{RecordId, WorkerId};

/// Errors raised by a record store implementation.
///
/// # Example
///
/// ```
/// use attendance_payroll::error::StoreError;
///
/// let error = StoreError::Unavailable {
///     message: "database is locked".to_string(),
/// };
/// assert_eq!(error.to_string(), "Record store unavailable: database is locked");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing storage could not be reached or read.
    #[error("Record store unavailable: {message}")]
    Unavailable {
        /// A description of the failure.
        message: String,
    },

    /// A write would break a store constraint (unknown worker, duplicate key).
    #[error("Record store conflict: {message}")]
    Conflict {
        /// A description of the violated constraint.
        message: String,
    },

    /// An update or delete targeted a row that does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// The kind of row ("worker" or "attendance").
        entity: &'static str,
        /// The missing row id.
        id: i64,
    },
}

/// A type alias for Results that return StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

/// The main error type for the attendance payroll engine.
///
/// # Example
///
/// ```
/// use attendance_payroll::error::EngineError;
///
/// let error = EngineError::WorkerNotFound { worker_id: 7 };
/// assert_eq!(error.to_string(), "Worker not found: 7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The requested worker does not exist in the store.
    #[error("Worker not found: {worker_id}")]
    WorkerNotFound {
        /// The id that was looked up.
        worker_id: WorkerId,
    },

    /// A store query failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A worker failed input validation.
    #[error("Invalid worker field '{field}': {message}")]
    InvalidWorker {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An attendance record failed input validation.
    #[error("Invalid attendance record {record_id} on {date}: {message}")]
    InvalidAttendance {
        /// The id of the offending record.
        record_id: RecordId,
        /// The attendance date.
        date: NaiveDate,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A report could not be serialized for export.
    #[error("Failed to serialize report: {message}")]
    Serialization {
        /// The serializer's message.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
