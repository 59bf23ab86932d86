//! Report data model.

use serde::Serialize;

use crate::xlsx::SheetInfo;

/// A diagnostic report over one workbook.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    /// Archive listing, shared strings and the leading data rows
    Overview(Overview),
    /// Cell-by-cell view of the leading rows plus a data row census
    Detailed(Detailed),
}

/// A report part that may have failed to load on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section<T> {
    Loaded(T),
    Failed(String),
}

impl<T> Section<T> {
    /// The loaded value, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Section::Loaded(value) => Some(value),
            Section::Failed(_) => None,
        }
    }
}

impl<T> From<crate::Result<T>> for Section<T> {
    fn from(result: crate::Result<T>) -> Self {
        match result {
            Ok(value) => Section::Loaded(value),
            Err(e) => {
                log::warn!("report section failed: {}", e);
                Section::Failed(e.to_string())
            }
        }
    }
}

/// A shared string with its table index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedString {
    pub index: usize,
    pub value: String,
}

/// A non-blank value at a 1-based column position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnValue {
    pub column: usize,
    pub value: String,
}

/// A row with at least one non-blank value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataRow {
    /// 1-based position of the row in the sheet
    pub position: usize,
    /// Non-blank values only
    pub columns: Vec<ColumnValue>,
}

/// Overview report.
#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    /// Label of the inspected file
    pub source: String,
    /// Archive entries
    pub files: Vec<String>,
    /// Total size of the shared string table
    pub shared_string_total: usize,
    /// Listed shared strings
    pub shared_strings: Vec<IndexedString>,
    /// Set when the shared string table could not be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_strings_error: Option<String>,
    pub sheet: Section<OverviewSheet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewSheet {
    pub info: SheetInfo,
    pub total_rows: usize,
    pub data_rows: Vec<DataRow>,
}

/// Detailed report.
#[derive(Debug, Clone, Serialize)]
pub struct Detailed {
    pub source: String,
    pub shared_string_total: usize,
    pub shared_strings: Vec<IndexedString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_strings_error: Option<String>,
    pub sheet: Section<DetailedSheet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedSheet {
    pub info: SheetInfo,
    pub total_rows: usize,
    /// Leading rows, every cell shown
    pub rows: Vec<RowDetail>,
    /// Data rows in the whole sheet
    pub data_row_total: usize,
    /// Leading data rows
    pub samples: Vec<DataRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowDetail {
    pub position: usize,
    pub cells: Vec<CellDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellDetail {
    /// `r` attribute, empty when absent
    pub reference: String,
    /// `t` attribute, empty when absent
    pub type_attr: String,
    /// Resolved display text
    pub value: String,
}
