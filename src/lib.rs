//! # xlsxpeek
//!
//! Diagnostic inspection of XLSX workbooks.
//!
//! This library opens an XLSX archive, builds its shared string table,
//! scans the first worksheet and resolves every cell to the text a
//! spreadsheet would display. Two diagnostic reports are built on top.
//!
//! ## Quick Start
//!
//! ```no_run
//! use xlsxpeek::{resolve, CellType, SharedStrings};
//!
//! let strings: SharedStrings = ["a", "b", "c"].into_iter().collect();
//! assert_eq!(resolve(CellType::SharedString, "2", &[], &strings), "c");
//! assert_eq!(resolve(CellType::SharedString, "99", &[], &strings), "");
//!
//! // Whole-file reports
//! let report = xlsxpeek::overview("trades.xlsx", &Default::default())?;
//! let text = xlsxpeek::render::to_text(&report, &Default::default())?;
//! println!("{}", text);
//! # Ok::<(), xlsxpeek::Error>(())
//! ```

pub mod container;
pub mod detect;
pub mod error;
pub mod render;
pub mod report;
pub mod xlsx;

// Re-exports
pub use container::{Relationship, Relationships, XlsxContainer};
pub use detect::{detect_package_from_bytes, detect_package_from_path, PackageKind};
pub use error::{Error, Result};
pub use report::{InspectOptions, Report};
pub use xlsx::{resolve, CellType, RawCell, Row, SharedStrings, XlsxInspector};

use std::path::Path;

/// Open a file for inspection after checking it is a workbook.
///
/// # Example
///
/// ```no_run
/// let inspector = xlsxpeek::open_workbook("trades.xlsx")?;
/// println!("{} shared strings", inspector.shared_strings().len());
/// # Ok::<(), xlsxpeek::Error>(())
/// ```
pub fn open_workbook(path: impl AsRef<Path>) -> Result<XlsxInspector> {
    let path = path.as_ref();
    detect::ensure_workbook(detect_package_from_path(path)?)?;
    XlsxInspector::open(path)
}

/// Open workbook bytes for inspection after checking they are a workbook.
pub fn open_workbook_bytes(data: Vec<u8>) -> Result<XlsxInspector> {
    detect::ensure_workbook(detect_package_from_bytes(&data)?)?;
    XlsxInspector::from_bytes(data)
}

/// Build the overview report for a file.
pub fn overview(path: impl AsRef<Path>, options: &InspectOptions) -> Result<Report> {
    let path = path.as_ref();
    let inspector = open_workbook(path)?;
    Ok(Report::Overview(report::build_overview(
        &inspector,
        path.display().to_string(),
        options,
    )))
}

/// Build the detailed report for a file.
pub fn detailed(path: impl AsRef<Path>, options: &InspectOptions) -> Result<Report> {
    let path = path.as_ref();
    let inspector = open_workbook(path)?;
    Ok(Report::Detailed(report::build_detailed(
        &inspector,
        path.display().to_string(),
        options,
    )))
}
