//! Workbook inspector: shared strings plus the first worksheet.

use crate::container::XlsxContainer;
use crate::error::{Error, Result};
use quick_xml::events::Event;
use serde::Serialize;
use std::path::Path;

use super::cell::RawCell;
use super::shared_strings::SharedStrings;
use super::sheet::{parse_rows, Row};

const WORKBOOK_PATH: &str = "xl/workbook.xml";
const SHARED_STRINGS_PATH: &str = "xl/sharedStrings.xml";
const FALLBACK_SHEET_PATH: &str = "xl/worksheets/sheet1.xml";

/// Location of a worksheet inside the package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetInfo {
    /// Sheet name from workbook.xml, if it could be read
    pub name: Option<String>,
    /// Archive entry holding the worksheet XML
    pub path: String,
}

/// Inspector over one XLSX archive.
pub struct XlsxInspector {
    container: XlsxContainer,
    shared_strings: SharedStrings,
    shared_strings_error: Option<String>,
    first_sheet: SheetInfo,
}

impl XlsxInspector {
    /// Open an XLSX file for inspection.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let container = XlsxContainer::open(path)?;
        Self::from_container(container)
    }

    /// Create an inspector from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = XlsxContainer::from_bytes(data)?;
        Self::from_container(container)
    }

    /// Create an inspector from a container.
    ///
    /// An absent shared string table is treated as empty. A table that is
    /// present but unreadable is also replaced by an empty one, and the
    /// failure is kept in [`shared_strings_error`](Self::shared_strings_error).
    pub fn from_container(container: XlsxContainer) -> Result<Self> {
        let (shared_strings, shared_strings_error) = match Self::load_shared_strings(&container) {
            Ok(table) => (table, None),
            Err(e) => {
                log::warn!("could not read {}: {}", SHARED_STRINGS_PATH, e);
                (SharedStrings::default(), Some(e.to_string()))
            }
        };

        let first_sheet = Self::locate_first_sheet(&container);

        Ok(Self {
            container,
            shared_strings,
            shared_strings_error,
            first_sheet,
        })
    }

    fn load_shared_strings(container: &XlsxContainer) -> Result<SharedStrings> {
        match container.read_xml(SHARED_STRINGS_PATH) {
            Ok(xml) => SharedStrings::parse(&xml),
            Err(Error::MissingComponent(_)) => {
                log::warn!("{} not found, using an empty table", SHARED_STRINGS_PATH);
                Ok(SharedStrings::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Find the first worksheet through workbook.xml and its relationships.
    fn locate_first_sheet(container: &XlsxContainer) -> SheetInfo {
        let (name, rel_id) = match container.read_xml(WORKBOOK_PATH) {
            Ok(xml) => match first_sheet_entry(&xml) {
                Ok(Some((name, rel_id))) => (Some(name).filter(|n| !n.is_empty()), rel_id),
                Ok(None) => (None, None),
                Err(e) => {
                    log::warn!("could not read sheet list: {}", e);
                    (None, None)
                }
            },
            Err(_) => (None, None),
        };

        let target = rel_id.and_then(|id| {
            container
                .read_relationships(WORKBOOK_PATH)
                .ok()
                .and_then(|rels| rels.get(&id).map(|rel| rel.target.clone()))
        });

        let path = match target {
            Some(target) => XlsxContainer::resolve_path(WORKBOOK_PATH, &target),
            None => {
                log::warn!(
                    "first sheet not resolvable from {}, falling back to {}",
                    WORKBOOK_PATH,
                    FALLBACK_SHEET_PATH
                );
                FALLBACK_SHEET_PATH.to_string()
            }
        };

        log::debug!("first worksheet is {}", path);
        SheetInfo { name, path }
    }

    /// Archive entries in archive order.
    pub fn files(&self) -> Vec<String> {
        self.container.list_files()
    }

    /// The shared string table.
    pub fn shared_strings(&self) -> &SharedStrings {
        &self.shared_strings
    }

    /// Why the shared string table could not be read, if it could not.
    pub fn shared_strings_error(&self) -> Option<&str> {
        self.shared_strings_error.as_deref()
    }

    /// The first worksheet's location.
    pub fn first_sheet(&self) -> &SheetInfo {
        &self.first_sheet
    }

    /// Read and scan the first worksheet.
    pub fn first_sheet_rows(&self) -> Result<Vec<Row>> {
        let xml = self.container.read_xml(&self.first_sheet.path)?;
        parse_rows(&xml)
    }

    /// Resolve a cell against this workbook's shared strings.
    pub fn resolve(&self, cell: &RawCell) -> String {
        cell.resolve(&self.shared_strings)
    }

    /// Get a reference to the container.
    pub fn container(&self) -> &XlsxContainer {
        &self.container
    }
}

impl std::fmt::Debug for XlsxInspector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XlsxInspector")
            .field("shared_strings", &self.shared_strings.len())
            .field("shared_strings_error", &self.shared_strings_error)
            .field("first_sheet", &self.first_sheet)
            .finish()
    }
}

/// Name and relationship id of the first `<sheet>` in workbook.xml.
fn first_sheet_entry(xml: &str) -> Result<Option<(String, Option<String>)>> {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(e)) | Ok(Event::Start(e)) if e.local_name().as_ref() == b"sheet" => {
                let mut name = String::new();
                let mut rel_id = None;

                for attr in e.attributes().flatten() {
                    let key = attr.key;
                    if key.as_ref() == b"name" {
                        name = String::from_utf8_lossy(&attr.value).to_string();
                    } else if key.local_name().as_ref() == b"id" && key.prefix().is_some() {
                        rel_id = Some(String::from_utf8_lossy(&attr.value).to_string());
                    }
                }

                return Ok(Some((name, rel_id)));
            }
            Ok(Event::Eof) => return Ok(None),
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }
}
