//! Report construction from an inspector.

use crate::xlsx::{has_content, Row, SharedStrings, XlsxInspector};

use super::model::{
    CellDetail, ColumnValue, DataRow, Detailed, DetailedSheet, IndexedString, Overview,
    OverviewSheet, RowDetail, Section,
};
use super::options::{cap, InspectOptions};

/// Build the overview report.
///
/// Rows are scanned in order and scanning stops once `max_data_rows` data
/// rows have been collected.
pub fn build_overview(
    inspector: &XlsxInspector,
    source: impl Into<String>,
    options: &InspectOptions,
) -> Overview {
    let shared = inspector.shared_strings();

    let sheet = inspector.first_sheet_rows().map(|rows| {
        let limit = cap(rows.len(), options.max_data_rows);
        let data_rows = rows
            .iter()
            .filter_map(|row| data_row(row, shared))
            .take(limit)
            .collect();

        OverviewSheet {
            info: inspector.first_sheet().clone(),
            total_rows: rows.len(),
            data_rows,
        }
    });

    Overview {
        source: source.into(),
        files: inspector.files(),
        shared_string_total: shared.len(),
        shared_strings: indexed_strings(shared, options.max_shared_strings),
        shared_strings_error: inspector.shared_strings_error().map(String::from),
        sheet: Section::from(sheet),
    }
}

/// Build the detailed report.
pub fn build_detailed(
    inspector: &XlsxInspector,
    source: impl Into<String>,
    options: &InspectOptions,
) -> Detailed {
    let shared = inspector.shared_strings();

    let sheet = inspector.first_sheet_rows().map(|rows| {
        let detail_count = cap(rows.len(), options.max_detail_rows);
        let detail_rows = rows[..detail_count]
            .iter()
            .map(|row| row_detail(row, shared))
            .collect();

        let all_data: Vec<DataRow> = rows.iter().filter_map(|row| data_row(row, shared)).collect();
        let data_row_total = all_data.len();
        let samples = all_data
            .into_iter()
            .take(cap(data_row_total, options.max_sample_rows))
            .collect();

        DetailedSheet {
            info: inspector.first_sheet().clone(),
            total_rows: rows.len(),
            rows: detail_rows,
            data_row_total,
            samples,
        }
    });

    Detailed {
        source: source.into(),
        shared_string_total: shared.len(),
        shared_strings: indexed_strings(shared, options.max_shared_strings),
        shared_strings_error: inspector.shared_strings_error().map(String::from),
        sheet: Section::from(sheet),
    }
}

/// Shared strings with their indices, up to `limit`.
pub fn indexed_strings(shared: &SharedStrings, limit: Option<usize>) -> Vec<IndexedString> {
    shared
        .iter()
        .take(cap(shared.len(), limit))
        .enumerate()
        .map(|(index, value)| IndexedString {
            index,
            value: value.to_string(),
        })
        .collect()
}

/// The row's non-blank values, or `None` when every cell is blank.
fn data_row(row: &Row, shared: &SharedStrings) -> Option<DataRow> {
    let columns: Vec<ColumnValue> = row
        .cells
        .iter()
        .enumerate()
        .filter_map(|(i, cell)| {
            let value = cell.resolve(shared);
            has_content(&value).then(|| ColumnValue {
                column: i + 1,
                value,
            })
        })
        .collect();

    if columns.is_empty() {
        None
    } else {
        Some(DataRow {
            position: row.position,
            columns,
        })
    }
}

fn row_detail(row: &Row, shared: &SharedStrings) -> RowDetail {
    RowDetail {
        position: row.position,
        cells: row
            .cells
            .iter()
            .map(|cell| CellDetail {
                reference: cell.reference.clone().unwrap_or_default(),
                type_attr: cell.type_attr.clone(),
                value: cell.resolve(shared),
            })
            .collect(),
    }
}
