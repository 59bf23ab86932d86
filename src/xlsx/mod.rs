//! XLSX (Excel) workbook reading.
//!
//! This module reads the shared string table and the first worksheet of a
//! Microsoft Excel workbook in the Office Open XML (.xlsx) format, and
//! resolves cells to their display text.
//!
//! # Example
//!
//! ```no_run
//! use xlsxpeek::xlsx::XlsxInspector;
//!
//! let inspector = XlsxInspector::open("trades.xlsx")?;
//!
//! for row in inspector.first_sheet_rows()? {
//!     let values: Vec<String> = row.cells.iter().map(|c| inspector.resolve(c)).collect();
//!     println!("{}: {:?}", row.position, values);
//! }
//! # Ok::<(), xlsxpeek::Error>(())
//! ```

mod cell;
mod inspector;
mod shared_strings;
mod sheet;

pub use cell::{has_content, resolve, CellType, RawCell};
pub use inspector::{SheetInfo, XlsxInspector};
pub use shared_strings::SharedStrings;
pub use sheet::{parse_rows, Row};
