//! Worksheet row scanning.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use serde::Serialize;

use super::cell::RawCell;

/// A worksheet row with its raw cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Row {
    /// 1-based position among the `<row>` elements of the sheet
    pub position: usize,
    /// `r` attribute (the spreadsheet row number), if present
    pub number: Option<u32>,
    /// Cells in document order
    pub cells: Vec<RawCell>,
}

/// Parse every `<row>` of a worksheet in document order.
///
/// Rows without cells are kept so positions match the sheet XML. Text runs
/// are collected from any `<t>` below a cell, which covers both `<is><t>`
/// and rich `<is><r><t>` inline strings.
pub fn parse_rows(xml: &str) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    let mut reader = quick_xml::Reader::from_str(xml);

    let mut buf = Vec::new();
    let mut current_row: Option<Row> = None;
    let mut current_cell: Option<RawCell> = None;
    let mut in_value = false;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"row" => {
                    current_row = Some(start_row(e, rows.len() + 1));
                }
                b"c" if current_row.is_some() => {
                    current_cell = Some(start_cell(e));
                }
                b"v" if current_cell.is_some() => in_value = true,
                b"t" => {
                    if let Some(cell) = current_cell.as_mut() {
                        cell.inline_runs.push(Some(String::new()));
                        in_text = true;
                    }
                }
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"row" => rows.push(start_row(e, rows.len() + 1)),
                b"c" => {
                    if let Some(row) = current_row.as_mut() {
                        row.cells.push(start_cell(e));
                    }
                }
                b"t" => {
                    if let Some(cell) = current_cell.as_mut() {
                        cell.inline_runs.push(None);
                    }
                }
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_value || in_text => {
                let text = e.unescape().map_err(|e| Error::XmlParse(e.to_string()))?;
                append_text(current_cell.as_mut(), &text, in_value);
            }
            Ok(Event::CData(ref e)) if in_value || in_text => {
                append_text(current_cell.as_mut(), &String::from_utf8_lossy(e), in_value);
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"row" => {
                    if let Some(row) = current_row.take() {
                        rows.push(row);
                    }
                }
                b"c" => {
                    if let (Some(cell), Some(row)) = (current_cell.take(), current_row.as_mut()) {
                        row.cells.push(cell);
                    }
                    in_value = false;
                    in_text = false;
                }
                b"v" => in_value = false,
                b"t" => in_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    log::debug!("scanned {} worksheet rows", rows.len());
    Ok(rows)
}

fn start_row(e: &BytesStart<'_>, position: usize) -> Row {
    let number = e
        .attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == b"r")
        .and_then(|attr| String::from_utf8_lossy(&attr.value).parse().ok());

    Row {
        position,
        number,
        cells: Vec::new(),
    }
}

fn start_cell(e: &BytesStart<'_>) -> RawCell {
    let mut cell = RawCell::default();
    for attr in e.attributes().flatten() {
        match attr.key.as_ref() {
            b"r" => cell.reference = Some(String::from_utf8_lossy(&attr.value).to_string()),
            b"t" => cell.type_attr = String::from_utf8_lossy(&attr.value).to_string(),
            _ => {}
        }
    }
    cell
}

fn append_text(cell: Option<&mut RawCell>, text: &str, in_value: bool) {
    let Some(cell) = cell else {
        return;
    };
    if in_value {
        cell.raw_value.push_str(text);
    } else if let Some(Some(run)) = cell.inline_runs.last_mut() {
        run.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xlsx::cell::CellType;

    const SHEET: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <sheetData>
    <row r="1" spans="1:3">
      <c r="A1" t="s"><v>0</v></c>
      <c r="B1" t="inlineStr"><is><r><t>Hello</t></r><r><t xml:space="preserve"> </t></r><r><t>World</t></r></is></c>
      <c r="C1"><v>42.5</v></c>
    </row>
    <row r="2"/>
    <row r="4">
      <c r="A4" s="1"/>
      <c r="B4" t="str"><f>A1&amp;"x"</f><v>Tx</v></c>
    </row>
  </sheetData>
</worksheet>"#;

    #[test]
    fn test_parse_rows() {
        let rows = parse_rows(SHEET).unwrap();
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[0].number, Some(1));
        assert_eq!(rows[0].cells.len(), 3);

        let a1 = &rows[0].cells[0];
        assert_eq!(a1.reference.as_deref(), Some("A1"));
        assert_eq!(a1.cell_type(), CellType::SharedString);
        assert_eq!(a1.raw_value, "0");

        let b1 = &rows[0].cells[1];
        assert_eq!(b1.cell_type(), CellType::InlineString);
        assert_eq!(
            b1.inline_runs,
            vec![
                Some("Hello".to_string()),
                Some(" ".to_string()),
                Some("World".to_string())
            ]
        );

        assert_eq!(rows[0].cells[2].raw_value, "42.5");
        assert_eq!(rows[0].cells[2].cell_type(), CellType::Literal);
    }

    #[test]
    fn test_empty_rows_and_cells() {
        let rows = parse_rows(SHEET).unwrap();

        assert_eq!(rows[1].position, 2);
        assert!(rows[1].cells.is_empty());

        assert_eq!(rows[2].position, 3);
        assert_eq!(rows[2].number, Some(4));
        assert_eq!(rows[2].cells[0].cell_type(), CellType::Empty);
    }

    #[test]
    fn test_formula_text_is_not_value() {
        let rows = parse_rows(SHEET).unwrap();
        let b4 = &rows[2].cells[1];
        assert_eq!(b4.type_attr, "str");
        assert_eq!(b4.raw_value, "Tx");
        assert!(b4.inline_runs.is_empty());
    }

    #[test]
    fn test_empty_inline_run() {
        let xml = r#"<worksheet><sheetData><row><c t="inlineStr"><is><t/></is></c></row></sheetData></worksheet>"#;
        let rows = parse_rows(xml).unwrap();
        assert_eq!(rows[0].number, None);
        assert_eq!(rows[0].cells[0].inline_runs, vec![None]);
    }

    #[test]
    fn test_malformed_sheet() {
        let err = parse_rows("<worksheet><sheetData><row></sheetData>").unwrap_err();
        assert!(matches!(err, Error::XmlParse(_)));
    }
}
