//! Metadata extraction for MRC/CCP4 electron density maps.
//!
//! Maps deposited through EMDataBank carry the EMDB accession in one of the
//! ten 80-byte text labels that follow the fixed header. The header does not
//! declare its byte order, so the label count is recovered heuristically:
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 220    | 4    | Number of labels in use (`i32`, either endianness) |
//! | 224    | 800  | Ten 80-byte text labels |

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::debug;

use crate::core::dataset::Dataset;
use crate::core::location::{DatabaseLocation, FileLocation};
use crate::core::result::{ExtractionResult, ResultBuilder};
use crate::core::types::DatasetKind;
use crate::parsing::patterns::EMDB_LABEL_REGEX;
use crate::parsing::pdb::ParseError;

/// Byte offset of the label count field
pub const LABEL_COUNT_OFFSET: u64 = 220;

/// Size of one text label
pub const LABEL_SIZE: usize = 80;

/// Label storage capacity of the format
pub const MAX_LABELS: i32 = 10;

/// Description used when nothing better is known about the map
pub const DENSITY_MAP_DETAILS: &str = "Electron microscopy density map";

/// Release information for an EMDB entry, supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryInfo {
    /// Map release date
    pub version: Option<String>,
    /// Human-readable entry title
    pub title: Option<String>,
}

/// Source of descriptive text for an EMDB accession.
///
/// Extraction never performs network access itself; callers that want richer
/// descriptions pass an implementation that does.
pub trait EntryInfoSource {
    /// Look up `accession`, returning None if nothing is available
    fn entry_info(&self, accession: &str) -> Option<EntryInfo>;
}

/// Offline source that never has any information
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl EntryInfoSource for NoLookup {
    fn entry_info(&self, _accession: &str) -> Option<EntryInfo> {
        None
    }
}

/// Decode the label count without knowing the file's byte order.
///
/// Real label counts are tiny (at most [`MAX_LABELS`]), and reading a small
/// value with the wrong byte order always yields a much larger (or negative)
/// one, so the smaller of the two interpretations is taken. This is a
/// policy, not endianness detection.
#[must_use]
pub fn label_count(raw: [u8; 4]) -> i32 {
    i32::from_be_bytes(raw).min(i32::from_le_bytes(raw))
}

/// Strip trailing whitespace and NUL padding from a label
fn trim_label(label: &[u8]) -> &[u8] {
    let end = label
        .iter()
        .rposition(|&b| !b.is_ascii_whitespace() && b != 0)
        .map_or(0, |i| i + 1);
    &label[..end]
}

/// Scan the labels of an MRC stream for an embedded EMDB accession.
///
/// Returns None if no label carries one, or if the stream is too short or
/// cannot be read.
pub fn scan_emdb_accession_from<R: Read + Seek>(mut reader: R) -> Option<String> {
    reader.seek(SeekFrom::Start(LABEL_COUNT_OFFSET)).ok()?;

    let mut raw = [0u8; 4];
    reader.read_exact(&mut raw).ok()?;

    let count = label_count(raw).clamp(0, MAX_LABELS);
    debug!(count, "Scanning MRC labels");

    let mut label = [0u8; LABEL_SIZE];
    for _ in 0..count {
        reader.read_exact(&mut label).ok()?;
        if let Some(code) = EMDB_LABEL_REGEX
            .captures(trim_label(&label))
            .and_then(|c| c.get(1))
        {
            return Some(String::from_utf8_lossy(code.as_bytes()).into_owned());
        }
    }

    None
}

/// Scan an MRC file for an embedded EMDB accession.
///
/// Any I/O problem, including a missing file, is reported as "not found".
#[must_use]
pub fn scan_emdb_accession(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    scan_emdb_accession_from(BufReader::new(file))
}

/// Parse an MRC file into a density-map dataset
///
/// The dataset points at the EMDB entry when the labels name one, and at the
/// local file otherwise. `info` is consulted only for an EMDB entry; when it
/// has nothing, a generic description is used.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened.
pub fn parse_file(path: &Path, info: &dyn EntryInfoSource) -> Result<ExtractionResult, ParseError> {
    let accession = {
        let file = File::open(path)?;
        scan_emdb_accession_from(BufReader::new(file))
    };

    let mut builder = ResultBuilder::new();
    let dataset = match accession {
        Some(accession) => {
            let EntryInfo { version, title } = info.entry_info(&accession).unwrap_or_default();
            let details = title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DENSITY_MAP_DETAILS.to_string());
            Dataset::new(
                DatasetKind::DensityMap,
                DatabaseLocation::emdb(accession)
                    .with_version(version)
                    .with_details(Some(details)),
            )
        }
        None => Dataset::new(
            DatasetKind::DensityMap,
            FileLocation::local(path).with_details(Some(DENSITY_MAP_DETAILS.to_string())),
        ),
    };
    builder.set_root(dataset);

    Ok(builder.build())
}
