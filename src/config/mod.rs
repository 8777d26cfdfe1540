//! Configuration loading for the attendance payroll engine.
//!
//! This module loads display settings, a worker roster and attendance sheets
//! from YAML files, and can seed a [`MemoryStore`](crate::store::MemoryStore)
//! with them.
//!
//! # Example
//!
//! ```no_run
//! use attendance_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/sample").unwrap();
//! println!("Loaded {} workers", config.workers().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AttendanceSheet, DisplaySettings, RosterConfig, Settings};
