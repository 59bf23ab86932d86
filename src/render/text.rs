//! Plain text renderer implementation.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::error::Result;
use crate::report::{
    DataRow, Detailed, DetailedSheet, IndexedString, Overview, OverviewSheet, Report, Section,
};

use super::options::RenderOptions;

/// Convert a report to plain text.
pub fn to_text(report: &Report, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();
    match report {
        Report::Overview(overview) => render_overview(&mut output, overview, options),
        Report::Detailed(detailed) => render_detailed(&mut output, detailed, options),
    }
    Ok(output)
}

/// Render an archive entry listing.
pub fn render_files(files: &[String], options: &RenderOptions) -> String {
    let mut output = String::new();
    line(&mut output, 0, options, options.language.files_in_archive());
    for file in files {
        line(&mut output, 1, options, file);
    }
    output
}

/// Render a shared string listing.
pub fn render_shared_strings(strings: &[IndexedString], options: &RenderOptions) -> String {
    let mut output = String::new();
    for entry in strings {
        let text = format!("{}: {}", entry.index, format_value(&entry.value, options));
        line(&mut output, 1, options, &text);
    }
    output
}

/// Render a shared string listing under its heading.
pub fn render_string_table(
    total: usize,
    strings: &[IndexedString],
    options: &RenderOptions,
) -> String {
    let mut output = String::new();
    line(
        &mut output,
        0,
        options,
        &options.language.shared_strings_heading(total),
    );
    output.push_str(&render_shared_strings(strings, options));
    output
}

fn render_overview(output: &mut String, overview: &Overview, options: &RenderOptions) {
    let lang = options.language;

    line(output, 0, options, &lang.analyzing(&overview.source));
    output.push('\n');
    output.push_str(&render_files(&overview.files, options));
    output.push('\n');

    match &overview.shared_strings_error {
        Some(error) => line(output, 0, options, &lang.shared_strings_error(error)),
        None => output.push_str(&render_string_table(
            overview.shared_string_total,
            &overview.shared_strings,
            options,
        )),
    }
    output.push('\n');

    match &overview.sheet {
        Section::Loaded(sheet) => render_overview_sheet(output, sheet, options),
        Section::Failed(error) => line(output, 0, options, &lang.sheet_error(error)),
    }
}

fn render_overview_sheet(output: &mut String, sheet: &OverviewSheet, options: &RenderOptions) {
    let lang = options.language;
    let sheet_label = sheet.info.name.as_deref().unwrap_or(&sheet.info.path);

    line(output, 0, options, &lang.sheet_data(sheet_label));
    line(output, 0, options, &lang.total_rows(sheet.total_rows));

    for row in &sheet.data_rows {
        output.push('\n');
        line(output, 0, options, &lang.data_row_heading(row.position));
        render_columns(output, row, options, |column| lang.cell_value(column));
    }

    if sheet.data_rows.is_empty() {
        line(output, 0, options, lang.no_data_rows());
    }
}

fn render_detailed(output: &mut String, detailed: &Detailed, options: &RenderOptions) {
    let lang = options.language;

    line(output, 0, options, &lang.detailed_title(&detailed.source));
    output.push('\n');
    if let Some(error) = &detailed.shared_strings_error {
        line(output, 0, options, &lang.shared_strings_error(error));
    } else {
        line(
            output,
            0,
            options,
            &lang.shared_string_total(detailed.shared_string_total),
        );
        line(
            output,
            0,
            options,
            &lang.first_strings(detailed.shared_strings.len()),
        );
        output.push_str(&render_shared_strings(&detailed.shared_strings, options));
    }
    output.push('\n');

    match &detailed.sheet {
        Section::Loaded(sheet) => render_detailed_sheet(output, sheet, options),
        Section::Failed(error) => line(output, 0, options, &lang.sheet_error(error)),
    }
}

fn render_detailed_sheet(output: &mut String, sheet: &DetailedSheet, options: &RenderOptions) {
    let lang = options.language;

    line(output, 0, options, &lang.total_rows(sheet.total_rows));
    output.push('\n');
    line(output, 0, options, &lang.first_rows_title(sheet.rows.len()));

    for row in &sheet.rows {
        output.push('\n');
        line(output, 0, options, &lang.row_heading(row.position));
        line(output, 1, options, &lang.cell_count(row.cells.len()));
        for cell in &row.cells {
            let text = format!(
                "{}: type={}, value={}",
                lang.cell_detail(&cell.reference),
                cell.type_attr,
                format_value(&cell.value, options)
            );
            line(output, 2, options, &text);
        }
    }

    output.push('\n');
    line(output, 0, options, lang.data_search_title());
    for (i, row) in sheet.samples.iter().enumerate() {
        output.push('\n');
        line(output, 0, options, &lang.sample_heading(i + 1, row.position));
        render_columns(output, row, options, |column| lang.column_value(column));
    }

    output.push('\n');
    line(output, 0, options, &lang.data_row_total(sheet.data_row_total));
}

fn render_columns(
    output: &mut String,
    row: &DataRow,
    options: &RenderOptions,
    label: impl Fn(usize) -> String,
) {
    for column in &row.columns {
        let text = format!(
            "{}: {}",
            label(column.column),
            format_value(&column.value, options)
        );
        line(output, 1, options, &text);
    }
}

fn line(output: &mut String, depth: usize, options: &RenderOptions, text: &str) {
    output.push_str(&" ".repeat(depth * options.indent));
    output.push_str(text);
    output.push('\n');
}

/// Format a cell value for display.
pub fn format_value(value: &str, options: &RenderOptions) -> String {
    let value = match options.max_value_width {
        Some(width) => truncate_to_width(value, width),
        None => value.to_string(),
    };
    if options.quote_values {
        format!("{:?}", value)
    } else {
        value
    }
}

/// Cut a string to at most `width` terminal columns, marking the cut with `…`.
pub fn truncate_to_width(value: &str, width: usize) -> String {
    if value.width() <= width {
        return value.to_string();
    }

    let budget = width.saturating_sub(1);
    let mut used = 0;
    let mut result = String::new();
    for c in value.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        result.push(c);
    }
    result.push('…');
    result
}
