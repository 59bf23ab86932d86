//! Diagnostic reports over a workbook.
//!
//! Two reports are available. The overview lists the archive entries, the
//! whole shared string table and the first data rows of the first sheet.
//! The detailed report shows the leading rows cell by cell and counts the
//! data rows of the sheet.
//!
//! A missing or malformed worksheet does not abort a report: the sheet
//! section records the error message instead.
//!
//! # Example
//!
//! ```no_run
//! use xlsxpeek::report::{build_overview, InspectOptions};
//! use xlsxpeek::xlsx::XlsxInspector;
//!
//! let inspector = XlsxInspector::open("trades.xlsx")?;
//! let overview = build_overview(&inspector, "trades.xlsx", &InspectOptions::default());
//! println!("{} shared strings", overview.shared_string_total);
//! # Ok::<(), xlsxpeek::Error>(())
//! ```

mod builder;
mod model;
mod options;

pub use builder::{build_detailed, build_overview, indexed_strings};
pub use model::{
    CellDetail, ColumnValue, DataRow, Detailed, DetailedSheet, IndexedString, Overview,
    OverviewSheet, Report, RowDetail, Section,
};
pub use options::InspectOptions;
