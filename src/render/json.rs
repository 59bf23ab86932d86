//! JSON renderer implementation.

use crate::error::Result;
use crate::report::Report;
use crate::xlsx::SharedStrings;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Convert a report to JSON.
pub fn to_json(report: &Report, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Compact => serde_json::to_string(report)?,
        JsonFormat::Pretty => serde_json::to_string_pretty(report)?,
    };
    Ok(json)
}

/// Convert a shared string table to a JSON array of strings.
pub fn shared_strings_to_json(strings: &SharedStrings, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Compact => serde_json::to_string(strings)?,
        JsonFormat::Pretty => serde_json::to_string_pretty(strings)?,
    };
    Ok(json)
}
