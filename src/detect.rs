//! Package detection: is this archive a spreadsheet?

use crate::container::decode_xml_bytes;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Content type for the XLSX workbook part (regular and macro-enabled).
const XLSX_CONTENT_TYPES: [&str; 2] = [
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml",
    "application/vnd.ms-excel.sheet.macroEnabled.main+xml",
];

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";

const PPTX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";

/// Kind of Office Open XML package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    /// Excel workbook (.xlsx, .xlsm)
    Workbook,
    /// Word document (.docx)
    Document,
    /// PowerPoint presentation (.pptx)
    Presentation,
}

impl PackageKind {
    /// Returns a human-readable name for this package kind.
    pub fn name(&self) -> &'static str {
        match self {
            PackageKind::Workbook => "Excel Workbook",
            PackageKind::Document => "Word Document",
            PackageKind::Presentation => "PowerPoint Presentation",
        }
    }
}

impl std::fmt::Display for PackageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Detect the package kind from a file path.
pub fn detect_package_from_path(path: impl AsRef<Path>) -> Result<PackageKind> {
    let file = File::open(path.as_ref())?;
    detect_package_from_reader(BufReader::new(file))
}

/// Detect the package kind from a byte slice.
pub fn detect_package_from_bytes(data: &[u8]) -> Result<PackageKind> {
    if !is_zip_file(data) {
        return Err(Error::UnknownFormat);
    }
    detect_package_from_reader(std::io::Cursor::new(data))
}

/// Detect the package kind from a reader.
///
/// Inspects `[Content_Types].xml`, falling back to the top-level folder
/// layout when the content types do not name a main part.
pub fn detect_package_from_reader<R: Read + Seek>(reader: R) -> Result<PackageKind> {
    let mut archive = zip::ZipArchive::new(reader)?;

    let content_types = match archive.by_name("[Content_Types].xml") {
        Ok(mut file) => {
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes)?;
            decode_xml_bytes(&bytes)?
        }
        Err(_) => {
            return Err(Error::MissingComponent("[Content_Types].xml".to_string()));
        }
    };

    if XLSX_CONTENT_TYPES.iter().any(|ct| content_types.contains(ct)) {
        Ok(PackageKind::Workbook)
    } else if content_types.contains(DOCX_CONTENT_TYPE) {
        Ok(PackageKind::Document)
    } else if content_types.contains(PPTX_CONTENT_TYPE) {
        Ok(PackageKind::Presentation)
    } else {
        detect_by_folder_structure(&archive)
    }
}

fn detect_by_folder_structure<R: Read + Seek>(archive: &zip::ZipArchive<R>) -> Result<PackageKind> {
    let has = |prefix: &str| archive.file_names().any(|n| n.starts_with(prefix));

    match (has("xl/"), has("word/"), has("ppt/")) {
        (true, false, false) => Ok(PackageKind::Workbook),
        (false, true, false) => Ok(PackageKind::Document),
        (false, false, true) => Ok(PackageKind::Presentation),
        _ => Err(Error::UnknownFormat),
    }
}

/// Fail unless the package is a workbook.
pub fn ensure_workbook(kind: PackageKind) -> Result<()> {
    match kind {
        PackageKind::Workbook => Ok(()),
        other => Err(Error::UnsupportedFormat(other.to_string())),
    }
}

/// Check if data starts with ZIP magic bytes.
pub fn is_zip_file(data: &[u8]) -> bool {
    data.len() >= 4 && data[..4] == ZIP_MAGIC
}
