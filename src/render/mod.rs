//! Output rendering for reports.
//!
//! Reports render to plain text (English or Russian labels) or JSON.
//!
//! # Example
//!
//! ```no_run
//! use xlsxpeek::render::{to_json, to_text, JsonFormat, Language, RenderOptions};
//!
//! let report = xlsxpeek::overview("trades.xlsx", &Default::default())?;
//!
//! let options = RenderOptions::new().with_language(Language::Russian);
//! println!("{}", to_text(&report, &options)?);
//! println!("{}", to_json(&report, JsonFormat::Pretty)?);
//! # Ok::<(), xlsxpeek::Error>(())
//! ```

mod json;
mod labels;
mod options;
mod text;

pub use json::{shared_strings_to_json, to_json, JsonFormat};
pub use labels::Language;
pub use options::RenderOptions;
pub use text::{
    format_value, render_files, render_shared_strings, render_string_table, to_text,
    truncate_to_width,
};
