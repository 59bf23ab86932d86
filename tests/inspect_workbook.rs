//! End-to-end inspection of synthetic workbooks built in memory.
//!
//! Run with: cargo test --test inspect_workbook

use std::io::{Cursor, Write};
use xlsxpeek::report::{build_detailed, build_overview, InspectOptions, Section};
use xlsxpeek::xlsx::XlsxInspector;
use xlsxpeek::{Error, Report};
use zip::write::SimpleFileOptions;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
</Types>"#;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets>
    <sheet name="History" sheetId="1" r:id="rId2"/>
    <sheet name="Other" sheetId="2" r:id="rId1"/>
  </sheets>
</workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet2.xml"/>
</Relationships>"#;

const SHARED_STRINGS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="4" uniqueCount="4">
  <si><t>Ticket</t></si>
  <si><t>Symbol</t></si>
  <si><r><t>Open</t></r><r><t xml:space="preserve"> Price</t></r></si>
  <si><t>EURUSD</t></si>
</sst>"#;

/// Row 1 is blank, row 2 is the header, rows 3-4 hold trades.
const HISTORY_SHEET: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <sheetData>
    <row r="1"><c r="A1" s="2"/><c r="B1" t="s"><v>99</v></c></row>
    <row r="2">
      <c r="A2" t="s"><v>0</v></c>
      <c r="B2" t="s"><v>1</v></c>
      <c r="C2" t="s"><v>2</v></c>
    </row>
    <row r="3">
      <c r="A3"><v>1001</v></c>
      <c r="B3" t="s"><v>3</v></c>
      <c r="C3"><v>1.0842</v></c>
    </row>
    <row r="4">
      <c r="A4"><v>1002</v></c>
      <c r="B4" t="inlineStr"><is><r><t>GBP</t></r><r><t>USD</t></r></is></c>
      <c r="C4"><v>1.2710</v></c>
    </row>
  </sheetData>
</worksheet>"#;

const OTHER_SHEET: &str = r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <sheetData><row r="1"><c r="A1"><v>not the first sheet</v></c></row></sheetData>
</worksheet>"#;

fn build_xlsx(entries: &[(&str, &str)]) -> Vec<u8> {
    build_xlsx_with(entries, zip::CompressionMethod::Deflated)
}

fn build_xlsx_with(entries: &[(&str, &str)], method: zip::CompressionMethod) -> Vec<u8> {
    let mut buffer = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(Cursor::new(&mut buffer));
        let options = SimpleFileOptions::default().compression_method(method);
        for (name, body) in entries {
            zip.start_file(*name, options).unwrap();
            zip.write_all(body.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }
    buffer
}

/// Overwrite the compression method of `name` in its local and central headers.
fn set_compression_method(data: &mut [u8], name: &str, method: u16) {
    let headers: [(&[u8], usize, usize); 2] = [
        // local file header: method at 8, name at 30
        (b"PK\x03\x04", 8, 30),
        // central directory header: method at 10, name at 46
        (b"PK\x01\x02", 10, 46),
    ];
    for (signature, method_offset, name_offset) in headers {
        let start = (0..data.len() - 4)
            .filter(|&i| &data[i..i + 4] == signature)
            .find(|&i| {
                data.get(i + name_offset..)
                    .is_some_and(|rest| rest.starts_with(name.as_bytes()))
            })
            .unwrap();
        data[start + method_offset..start + method_offset + 2]
            .copy_from_slice(&method.to_le_bytes());
    }
}

fn trade_history() -> Vec<u8> {
    build_xlsx(&[
        ("[Content_Types].xml", CONTENT_TYPES),
        ("xl/workbook.xml", WORKBOOK),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
        ("xl/sharedStrings.xml", SHARED_STRINGS),
        ("xl/worksheets/sheet1.xml", OTHER_SHEET),
        ("xl/worksheets/sheet2.xml", HISTORY_SHEET),
    ])
}

#[test]
fn test_first_sheet_follows_workbook_order() {
    let inspector = XlsxInspector::from_bytes(trade_history()).unwrap();
    let sheet = inspector.first_sheet();
    assert_eq!(sheet.name.as_deref(), Some("History"));
    assert_eq!(sheet.path, "xl/worksheets/sheet2.xml");
}

#[test]
fn test_resolves_every_cell_kind() {
    let inspector = XlsxInspector::from_bytes(trade_history()).unwrap();
    assert_eq!(inspector.shared_strings().get(2), Some("Open Price"));

    let rows = inspector.first_sheet_rows().unwrap();
    let values: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.cells.iter().map(|c| inspector.resolve(c)).collect())
        .collect();

    assert_eq!(values[0], vec!["", ""]);
    assert_eq!(values[1], vec!["Ticket", "Symbol", "Open Price"]);
    assert_eq!(values[2], vec!["1001", "EURUSD", "1.0842"]);
    assert_eq!(values[3], vec!["1002", "GBPUSD", "1.2710"]);
}

#[test]
fn test_overview_report() {
    let inspector = XlsxInspector::from_bytes(trade_history()).unwrap();
    let overview = build_overview(&inspector, "history.xlsx", &InspectOptions::default());

    assert_eq!(overview.files.len(), 6);
    assert_eq!(overview.shared_string_total, 4);
    assert_eq!(overview.shared_strings.len(), 4);

    let sheet = overview.sheet.loaded().unwrap();
    assert_eq!(sheet.total_rows, 4);
    let positions: Vec<usize> = sheet.data_rows.iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![2, 3, 4]);
    assert_eq!(sheet.data_rows[1].columns[1].value, "EURUSD");
}

#[test]
fn test_overview_stops_after_data_row_limit() {
    let inspector = XlsxInspector::from_bytes(trade_history()).unwrap();
    let options = InspectOptions::default().with_max_data_rows(Some(2));
    let overview = build_overview(&inspector, "history.xlsx", &options);

    let sheet = overview.sheet.loaded().unwrap();
    assert_eq!(sheet.data_rows.len(), 2);
    assert_eq!(sheet.data_rows[1].position, 3);
}

#[test]
fn test_detailed_report() {
    let inspector = XlsxInspector::from_bytes(trade_history()).unwrap();
    let options = InspectOptions::detailed()
        .with_max_shared_strings(Some(2))
        .with_max_detail_rows(Some(2))
        .with_max_sample_rows(Some(1));
    let detailed = build_detailed(&inspector, "history.xlsx", &options);

    assert_eq!(detailed.shared_string_total, 4);
    assert_eq!(detailed.shared_strings.len(), 2);

    let sheet = detailed.sheet.loaded().unwrap();
    assert_eq!(sheet.rows.len(), 2);
    assert_eq!(sheet.rows[0].cells[1].reference, "B1");
    assert_eq!(sheet.rows[0].cells[1].type_attr, "s");
    assert_eq!(sheet.rows[0].cells[1].value, "");
    assert_eq!(sheet.data_row_total, 3);
    assert_eq!(sheet.samples.len(), 1);
    assert_eq!(sheet.samples[0].position, 2);
}

#[test]
fn test_fallback_to_sheet1_and_missing_shared_strings() {
    let data = build_xlsx(&[
        ("[Content_Types].xml", CONTENT_TYPES),
        ("xl/worksheets/sheet1.xml", HISTORY_SHEET),
    ]);
    let inspector = XlsxInspector::from_bytes(data).unwrap();

    assert_eq!(inspector.first_sheet().path, "xl/worksheets/sheet1.xml");
    assert_eq!(inspector.first_sheet().name, None);
    assert!(inspector.shared_strings().is_empty());

    let rows = inspector.first_sheet_rows().unwrap();
    // Every shared string index is now out of range
    assert_eq!(inspector.resolve(&rows[1].cells[0]), "");
    assert_eq!(inspector.resolve(&rows[2].cells[0]), "1001");
}

#[test]
fn test_missing_sheet_is_reported_not_fatal() {
    let data = build_xlsx(&[
        ("[Content_Types].xml", CONTENT_TYPES),
        ("xl/sharedStrings.xml", SHARED_STRINGS),
    ]);
    let inspector = XlsxInspector::from_bytes(data).unwrap();
    let overview = build_overview(&inspector, "broken.xlsx", &InspectOptions::default());

    assert_eq!(overview.shared_string_total, 4);
    assert_eq!(
        overview.sheet,
        Section::Failed("Missing component: xl/worksheets/sheet1.xml".to_string())
    );
}

#[test]
fn test_malformed_shared_strings_are_reported() {
    let data = build_xlsx(&[
        ("[Content_Types].xml", CONTENT_TYPES),
        ("xl/sharedStrings.xml", "<sst><si><t>a</si></sst>"),
        ("xl/worksheets/sheet1.xml", HISTORY_SHEET),
    ]);
    let inspector = XlsxInspector::from_bytes(data).unwrap();
    assert!(inspector.shared_strings().is_empty());
    let error = inspector.shared_strings_error().unwrap();
    assert!(error.starts_with("XML parse error:"));

    let overview = build_overview(&inspector, "broken.xlsx", &InspectOptions::default());
    assert_eq!(overview.files.len(), 3);
    assert_eq!(overview.shared_string_total, 0);
    assert_eq!(overview.shared_strings_error.as_deref(), Some(error));
    // Literal cells still come through
    let sheet = overview.sheet.loaded().unwrap();
    assert_eq!(sheet.data_rows[0].position, 3);
    assert_eq!(sheet.data_rows[0].columns[0].value, "1001");

    let detailed = build_detailed(&inspector, "broken.xlsx", &InspectOptions::detailed());
    assert_eq!(detailed.shared_strings_error.as_deref(), Some(error));
    assert!(detailed.sheet.loaded().is_some());
}

#[test]
fn test_malformed_shared_strings_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.xlsx");
    let data = build_xlsx(&[
        ("[Content_Types].xml", CONTENT_TYPES),
        ("xl/sharedStrings.xml", "<sst><si><t>a</si></sst>"),
        ("xl/worksheets/sheet1.xml", HISTORY_SHEET),
    ]);
    std::fs::write(&path, data).unwrap();

    let report = xlsxpeek::overview(&path, &InspectOptions::default()).unwrap();
    let text = xlsxpeek::render::to_text(&report, &Default::default()).unwrap();
    assert!(text.contains("Files in XLSX:\n  [Content_Types].xml\n"));
    assert!(text.contains("Error reading shared strings: XML parse error:"));
    assert!(text.contains("Row 3 (has data):\n  Cell 1: \"1001\""));
}

#[test]
fn test_unreadable_shared_strings_are_not_treated_as_absent() {
    let mut data = build_xlsx_with(
        &[
            ("[Content_Types].xml", CONTENT_TYPES),
            ("xl/sharedStrings.xml", SHARED_STRINGS),
            ("xl/worksheets/sheet1.xml", HISTORY_SHEET),
        ],
        zip::CompressionMethod::Stored,
    );
    set_compression_method(&mut data, "xl/sharedStrings.xml", 1);

    let inspector = XlsxInspector::from_bytes(data).unwrap();
    let error = inspector.shared_strings_error().unwrap();
    assert!(error.starts_with("ZIP archive error:"));

    let overview = build_overview(&inspector, "shrunk.xlsx", &InspectOptions::default());
    assert_eq!(overview.shared_strings_error.as_deref(), Some(error));
}

#[test]
fn test_open_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.xlsx");
    std::fs::write(&path, trade_history()).unwrap();

    let report = xlsxpeek::overview(&path, &InspectOptions::default()).unwrap();
    let text = xlsxpeek::render::to_text(&report, &Default::default()).unwrap();
    assert!(text.contains("Sheet data (History):"));
    assert!(text.contains("Row 3 (has data):\n  Cell 1: \"1001\"\n  Cell 2: \"EURUSD\""));

    let report = xlsxpeek::detailed(&path, &InspectOptions::detailed()).unwrap();
    assert!(matches!(report, Report::Detailed(_)));
}

#[test]
fn test_rejects_non_workbook_packages() {
    let docx = build_xlsx(&[(
        "[Content_Types].xml",
        r#"<Types><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#,
    )]);
    let err = xlsxpeek::open_workbook_bytes(docx).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));

    let err = xlsxpeek::open_workbook_bytes(b"not a zip".to_vec()).unwrap_err();
    assert!(matches!(err, Error::UnknownFormat));
}
