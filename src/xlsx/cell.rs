//! Cell model and display-text resolution.

use serde::Serialize;

use super::shared_strings::SharedStrings;

/// How a cell's raw value is to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellType {
    /// `t="s"`: the value is an index into the shared string table
    SharedString,
    /// `t="inlineStr"`: the text lives in the cell's own runs
    InlineString,
    /// Numbers, booleans, errors, formula strings and untyped text
    Literal,
    /// No type attribute and no value
    Empty,
}

impl CellType {
    /// Classify a cell from its `t` attribute and raw value.
    pub fn from_attr(type_attr: &str, raw_value: &str) -> Self {
        match type_attr {
            "s" => CellType::SharedString,
            "inlineStr" => CellType::InlineString,
            "" if raw_value.is_empty() => CellType::Empty,
            _ => CellType::Literal,
        }
    }
}

/// A cell as read from the worksheet, before resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawCell {
    /// `r` attribute (e.g. "B3"), if present
    pub reference: Option<String>,
    /// `t` attribute verbatim, empty when absent
    pub type_attr: String,
    /// Text of the `<v>` child
    pub raw_value: String,
    /// Text of each `<t>` under the cell in document order; `None` for an empty `<t/>`
    pub inline_runs: Vec<Option<String>>,
}

impl RawCell {
    /// Interpreted cell type.
    pub fn cell_type(&self) -> CellType {
        CellType::from_attr(&self.type_attr, &self.raw_value)
    }

    /// Resolve this cell against a shared string table.
    pub fn resolve(&self, shared_strings: &SharedStrings) -> String {
        resolve(
            self.cell_type(),
            &self.raw_value,
            &self.inline_runs,
            shared_strings,
        )
    }
}

/// Resolve a cell to the text a spreadsheet would display.
///
/// Never fails: a shared-string index outside the table yields an empty
/// string, and a shared-string cell whose value is not a digit string falls
/// through to its raw value.
pub fn resolve(
    cell_type: CellType,
    raw_value: &str,
    inline_runs: &[Option<String>],
    shared_strings: &SharedStrings,
) -> String {
    match cell_type {
        CellType::SharedString if is_index(raw_value) => {
            // Too many digits for usize is just another out-of-range index
            let value = raw_value
                .parse::<usize>()
                .ok()
                .and_then(|idx| shared_strings.get(idx));
            if value.is_none() {
                log::trace!(
                    "shared string index {} outside table of {}",
                    raw_value,
                    shared_strings.len()
                );
            }
            value.unwrap_or_default().to_string()
        }
        CellType::InlineString => inline_runs
            .iter()
            .map(|run| run.as_deref().unwrap_or_default())
            .collect(),
        _ => raw_value.to_string(),
    }
}

/// Only ASCII digits count. Other Unicode decimal digits (e.g. `"٣"`) are
/// treated as a literal value, since workbook writers never emit them here.
fn is_index(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Whether resolved text counts as data (non-blank after trimming).
pub fn has_content(text: &str) -> bool {
    !text.trim().is_empty()
}
