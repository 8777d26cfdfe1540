//! Hand-off of built reports to a file writer.

use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// Extension used for suggested report file names.
pub const SPREADSHEET_EXTENSION: &str = "xlsx";

/// A report payload ready to be written out by a spreadsheet exporter.
pub trait Report: Serialize {
    /// File name a writer should default to.
    fn suggested_file_name(&self) -> String;

    /// Serializes the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Serialization`] if serialization fails.
    fn to_json(&self) -> EngineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| EngineError::Serialization {
            message: e.to_string(),
        })
    }
}

/// Joins name parts with `_` and appends the spreadsheet extension.
///
/// Path separators inside parts are replaced so the result stays one file.
pub(crate) fn file_name(parts: &[&str]) -> String {
    let stem = parts
        .iter()
        .map(|part| part.replace(['/', '\\'], "_"))
        .collect::<Vec<_>>()
        .join("_");
    format!("{stem}.{SPREADSHEET_EXTENSION}")
}
