//! Metadata extraction for PDB-format structure files.
//!
//! The same nominal format is written with several incompatible header
//! conventions. The first line decides which one applies:
//!
//! | First line starts with | Dialect |
//! |------------------------|---------|
//! | `HEADER` | Official PDB entry |
//! | `EXPDTA    DERIVED FROM PDB:` | Local edit of a PDB entry |
//! | `EXPDTA    DERIVED FROM COMPARATIVE MODEL, DOI:` | Local edit of a published model |
//! | `EXPDTA    THEORETICAL MODEL, MODELLER` | MODELLER comparative model |
//! | `REMARK  99  Chain ID :` | Phyre2 comparative model |
//! | anything else | Unknown, treated as a comparative model by default |
//!
//! Only the header is read: everything from the first `ATOM` or `HETATM`
//! record onwards is ignored.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::core::dataset::{Dataset, GraphError};
use crate::core::helix::HelixRecord;
use crate::core::location::{DatabaseLocation, FileLocation, Repository};
use crate::core::result::{ExtractionResult, ResultBuilder};
use crate::core::types::{DatasetKind, SoftwareVersion};
use crate::parsing::patterns::DEPOSITION_DATE_REGEX;
use crate::parsing::templates::recover_templates;
use crate::utils::columns::{columns, field, field_from};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {record} record at line {line}: {message}")]
    InvalidRecord {
        record: &'static str,
        line: usize,
        message: String,
    },

    #[error("Template '{0}' is not a PDB code and has no TEMPLATE PATH remark")]
    UnresolvedTemplate(String),

    #[error("Invalid provenance graph: {0}")]
    Graph(#[from] GraphError),
}

/// Records that start the coordinate section
pub const COORDINATE_RECORDS: [&str; 2] = ["ATOM", "HETATM"];

pub const LOCAL_MODEL_DETAILS: &str = "Starting model structure";
pub const REMOTE_MODEL_DETAILS: &str = "Starting comparative model structure";

const DERIVED_FROM_PDB_PREFIX: &str = "EXPDTA    DERIVED FROM PDB:";
const DERIVED_FROM_MODEL_PREFIX: &str = "EXPDTA    DERIVED FROM COMPARATIVE MODEL, DOI:";
const MODELLER_PREFIX: &str = "EXPDTA    THEORETICAL MODEL, MODELLER";
const PHYRE2_PREFIX: &str = "REMARK  99  Chain ID :";

/// Header convention of a PDB-format file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// File distributed by the PDB itself
    OfficialPdb,
    /// Locally modified copy of a PDB entry
    DerivedFromPdb,
    /// Locally modified copy of a comparative model published under a DOI
    DerivedFromModel,
    /// Comparative model written by MODELLER
    Modeller,
    /// Comparative model written by Phyre2
    Phyre2,
    /// No recognized header
    Unknown,
}

impl Dialect {
    /// Classify a file from its first line. First matching prefix wins.
    #[must_use]
    pub fn classify(first_line: &str) -> Self {
        if first_line.starts_with("HEADER") {
            Self::OfficialPdb
        } else if first_line.starts_with(DERIVED_FROM_PDB_PREFIX) {
            Self::DerivedFromPdb
        } else if first_line.starts_with(DERIVED_FROM_MODEL_PREFIX) {
            Self::DerivedFromModel
        } else if first_line.starts_with(MODELLER_PREFIX) {
            Self::Modeller
        } else if first_line.starts_with(PHYRE2_PREFIX) {
            Self::Phyre2
        } else {
            Self::Unknown
        }
    }

    #[must_use]
    #[allow(clippy::trivially_copy_pass_by_ref)] // Idiomatic method signature
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OfficialPdb => "Official PDB entry",
            Self::DerivedFromPdb => "Derived from PDB entry",
            Self::DerivedFromModel => "Derived from comparative model",
            Self::Modeller => "MODELLER comparative model",
            Self::Phyre2 => "Phyre2 comparative model",
            Self::Unknown => "Unknown",
        }
    }
}

/// How to treat a file whose header matches no known dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownDialectPolicy {
    /// Assume a comparative model and look for template remarks
    #[default]
    ComparativeModel,
    /// Assume a local experimental structure
    ExperimentalStructure,
}

/// Options controlling structure-file extraction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub unknown_dialect: UnknownDialectPolicy,
}

/// The header region of a PDB file: the first line plus every following line
/// up to, but not including, the first coordinate record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLines {
    source: PathBuf,
    lines: Vec<String>,
}

fn is_coordinate_record(line: &str) -> bool {
    COORDINATE_RECORDS.iter().any(|r| line.starts_with(r))
}

impl HeaderLines {
    /// Read the header region from `reader`.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if reading fails.
    pub fn read<R: BufRead>(mut reader: R, source: &Path) -> Result<Self, ParseError> {
        let mut lines = Vec::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            if is_coordinate_record(line) {
                break;
            }
            lines.push(line.to_string());
        }

        Ok(Self {
            source: source.to_path_buf(),
            lines,
        })
    }

    /// Build from in-memory header text, as if read from `source`
    #[must_use]
    pub fn from_text(text: &str, source: &Path) -> Self {
        let lines = text
            .lines()
            .take_while(|line| !is_coordinate_record(line))
            .map(str::to_string)
            .collect();
        Self {
            source: source.to_path_buf(),
            lines,
        }
    }

    /// The path this header was read from
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// First line of the file, empty if the file is empty
    #[must_use]
    pub fn first_line(&self) -> &str {
        self.lines.first().map_or("", String::as_str)
    }

    /// Every header line, including the first
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Header lines after the first
    #[must_use]
    pub fn rest(&self) -> &[String] {
        self.lines.get(1..).unwrap_or_default()
    }

    /// Concatenated `TITLE` text, None if there is none.
    ///
    /// Continuation lines carry their own leading space in column 11, so the
    /// pieces are joined as-is.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        let title: String = self
            .rest()
            .iter()
            .filter(|line| line.starts_with("TITLE"))
            .map(|line| columns(line, 10, line.len()).trim_end())
            .collect();
        (!title.is_empty()).then_some(title)
    }
}

/// Parse a PDB file with default options
///
/// # Errors
///
/// See [`parse_file_with_options`].
pub fn parse_file(path: &Path) -> Result<ExtractionResult, ParseError> {
    parse_file_with_options(path, ParseOptions::default())
}

/// Parse a PDB file and extract its provenance
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read,
/// `ParseError::InvalidRecord` if a record needed for extraction is
/// malformed, or `ParseError::UnresolvedTemplate` if a comparative model
/// names a template that cannot be located.
pub fn parse_file_with_options(
    path: &Path,
    options: ParseOptions,
) -> Result<ExtractionResult, ParseError> {
    let header = {
        let file = File::open(path)?;
        HeaderLines::read(BufReader::new(file), path)?
    };
    parse_header(&header, options)
}

/// Parse header text that was read from `source`
///
/// `source` is used for the local file location and to resolve relative
/// paths in template remarks; it is never opened.
///
/// # Errors
///
/// See [`parse_file_with_options`].
pub fn parse_header_text(
    text: &str,
    source: &Path,
    options: ParseOptions,
) -> Result<ExtractionResult, ParseError> {
    parse_header(&HeaderLines::from_text(text, source), options)
}

/// Classify the header and run the matching extractor
///
/// # Errors
///
/// See [`parse_file_with_options`].
pub fn parse_header(
    header: &HeaderLines,
    options: ParseOptions,
) -> Result<ExtractionResult, ParseError> {
    let dialect = Dialect::classify(header.first_line());
    debug!(
        source = %header.source().display(),
        dialect = dialect.display_name(),
        "Classified PDB header"
    );

    let builder = ResultBuilder::new();
    let builder = match dialect {
        Dialect::OfficialPdb => extract_official(header, builder)?,
        Dialect::DerivedFromPdb => extract_derived_from_pdb(header, builder)?,
        Dialect::DerivedFromModel => extract_derived_from_model(header, builder)?,
        Dialect::Modeller => extract_modeller(header, builder)?,
        Dialect::Phyre2 => extract_phyre2(header, builder)?,
        Dialect::Unknown => extract_unknown(header, builder, options.unknown_dialect)?,
    };

    Ok(builder.build())
}

/// Local copy of the input file, described by its title if it has one
fn local_file(header: &HeaderLines, details: Option<String>) -> FileLocation {
    FileLocation::local(header.source()).with_details(details)
}

/// Deposition date of an official `HEADER` record.
///
/// The date belongs in columns 51-59. If those columns do not hold a date,
/// a date one column either side is accepted instead; otherwise whatever
/// the standard columns hold is returned.
fn deposition_date(first: &str) -> Option<String> {
    let standard = field(first, 50, 59);
    let is_date = DEPOSITION_DATE_REGEX
        .find(standard)
        .is_some_and(|m| m.as_str().len() == standard.len());
    if is_date {
        return Some(standard.to_string());
    }

    DEPOSITION_DATE_REGEX
        .find(columns(first, 49, 60))
        .map(|m| m.as_str().to_string())
        .or_else(|| (!standard.is_empty()).then(|| standard.to_string()))
}

fn extract_official(
    header: &HeaderLines,
    mut builder: ResultBuilder,
) -> Result<ResultBuilder, ParseError> {
    let first = header.first_line();
    let version = deposition_date(first);
    // ID code in columns 63-66, read wider so lines shifted by a column parse
    let accession = field(first, 59, 66).to_string();

    let mut helices = Vec::new();
    for (index, line) in header.rest().iter().enumerate() {
        if line.starts_with("HELIX") {
            let helix = HelixRecord::parse(line).map_err(|what| ParseError::InvalidRecord {
                record: "HELIX",
                line: index + 2,
                message: format!("{what} is not an integer"),
            })?;
            helices.push(helix);
        }
    }

    builder.set_root(Dataset::new(
        DatasetKind::ExperimentalStructure,
        DatabaseLocation::pdb(accession)
            .with_version(version)
            .with_details(header.title()),
    ));

    Ok(builder.metadata(helices))
}

fn extract_derived_from_pdb(
    header: &HeaderLines,
    mut builder: ResultBuilder,
) -> Result<ResultBuilder, ParseError> {
    let accession = field_from(header.first_line(), DERIVED_FROM_PDB_PREFIX.len());

    let local = builder.set_root(Dataset::new(
        DatasetKind::ExperimentalStructure,
        local_file(header, header.title()),
    ));
    let parent = builder.add_dataset(Dataset::new(
        DatasetKind::ExperimentalStructure,
        DatabaseLocation::pdb(accession),
    ));
    builder.add_parent(local, parent)?;

    Ok(builder)
}

fn extract_derived_from_model(
    header: &HeaderLines,
    mut builder: ResultBuilder,
) -> Result<ResultBuilder, ParseError> {
    let doi = field_from(header.first_line(), DERIVED_FROM_MODEL_PREFIX.len());

    let local = builder.set_root(Dataset::new(
        DatasetKind::ComparativeModel,
        local_file(header, header.title()),
    ));
    // The original model is identified by its repository only; its path
    // within the repository is not recorded in the header.
    let parent = builder.add_dataset(Dataset::new(
        DatasetKind::ComparativeModel,
        FileLocation::in_repository(Repository::new(doi), ".")
            .with_details(Some(REMOTE_MODEL_DETAILS.to_string())),
    ));
    builder.add_parent(local, parent)?;

    Ok(builder)
}

fn extract_modeller(
    header: &HeaderLines,
    builder: ResultBuilder,
) -> Result<ResultBuilder, ParseError> {
    let version = field_from(header.first_line(), MODELLER_PREFIX.len())
        .split_whitespace()
        .next()
        .unwrap_or_default();
    let builder = builder.software("modeller", SoftwareVersion::from_text(version));
    handle_comparative_model(header, builder)
}

fn extract_phyre2(
    header: &HeaderLines,
    builder: ResultBuilder,
) -> Result<ResultBuilder, ParseError> {
    let builder = builder.software("phyre2", SoftwareVersion::Unknown);
    handle_comparative_model(header, builder)
}

fn extract_unknown(
    header: &HeaderLines,
    mut builder: ResultBuilder,
    policy: UnknownDialectPolicy,
) -> Result<ResultBuilder, ParseError> {
    match policy {
        UnknownDialectPolicy::ComparativeModel => handle_comparative_model(header, builder),
        UnknownDialectPolicy::ExperimentalStructure => {
            builder.set_root(Dataset::new(
                DatasetKind::ExperimentalStructure,
                local_file(header, header.title()),
            ));
            Ok(builder)
        }
    }
}

fn handle_comparative_model(
    header: &HeaderLines,
    mut builder: ResultBuilder,
) -> Result<ResultBuilder, ParseError> {
    let target = builder.set_root(Dataset::new(
        DatasetKind::ComparativeModel,
        local_file(header, Some(LOCAL_MODEL_DETAILS.to_string())),
    ));
    let templates = recover_templates(header, target, builder.graph_mut())?;
    Ok(builder.templates(templates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::location::Location;

    fn parse(text: &str) -> ExtractionResult {
        parse_header_text(text, Path::new("data/model.pdb"), ParseOptions::default()).unwrap()
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            Dialect::classify("HEADER    HYDROLASE   01-JAN-00   1ABC"),
            Dialect::OfficialPdb
        );
        assert_eq!(
            Dialect::classify("EXPDTA    DERIVED FROM PDB: 1ABC"),
            Dialect::DerivedFromPdb
        );
        assert_eq!(
            Dialect::classify("EXPDTA    DERIVED FROM COMPARATIVE MODEL, DOI: 10.1/x"),
            Dialect::DerivedFromModel
        );
        assert_eq!(
            Dialect::classify("EXPDTA    THEORETICAL MODEL, MODELLER 9.18 2017/02/09"),
            Dialect::Modeller
        );
        assert_eq!(
            Dialect::classify("REMARK  99  Chain ID :   A"),
            Dialect::Phyre2
        );
        assert_eq!(Dialect::classify("REMARK   1 SOMETHING"), Dialect::Unknown);
        assert_eq!(Dialect::classify(""), Dialect::Unknown);
    }

    #[test]
    fn test_official_pdb() {
        let result = parse(
            "HEADER    TEST STRUCTURE                         12-JAN-20   1ABC\n\
             TITLE     A SAMPLE\n",
        );

        let root = result.root().unwrap();
        assert_eq!(root.kind, DatasetKind::ExperimentalStructure);
        assert!(root.parents().is_empty());
        match &root.location {
            Location::Database(db) => {
                assert_eq!(db.accession, "1ABC");
                assert_eq!(db.version.as_deref(), Some("12-JAN-20"));
                assert_eq!(db.details.as_deref(), Some("A SAMPLE"));
            }
            other => panic!("expected database location, got {other:?}"),
        }
        assert!(result.templates.is_empty());
        assert!(result.software.is_empty());
    }

    #[test]
    fn test_official_pdb_standard_columns() {
        let first = format!("{:<50}{:<12}{}", "HEADER    HYDROLASE", "21-MAR-97", "2xyZ");
        let result = parse(&first);

        match &result.root().unwrap().location {
            Location::Database(db) => {
                assert_eq!(db.accession, "2xyZ");
                assert_eq!(db.version.as_deref(), Some("21-MAR-97"));
                assert!(db.details.is_none());
            }
            other => panic!("expected database location, got {other:?}"),
        }
    }

    #[test]
    fn test_official_pdb_full_width_classification() {
        let first = format!(
            "{:<10}{:<40}{:<12}{}",
            "HEADER", "SIGNALING PROTEIN/SIGNALING PROTEIN INHI", "14-SEP-10", "3ODU"
        );
        let result = parse(&first);

        match &result.root().unwrap().location {
            Location::Database(db) => {
                assert_eq!(db.accession, "3ODU");
                assert_eq!(db.version.as_deref(), Some("14-SEP-10"));
            }
            other => panic!("expected database location, got {other:?}"),
        }
    }

    #[test]
    fn test_deposition_date() {
        let standard = format!("{:<50}{:<12}{}", "HEADER    HYDROLASE", "21-MAR-97", "2XYZ");
        assert_eq!(deposition_date(&standard).as_deref(), Some("21-MAR-97"));

        let shifted_left = format!("{:<49}{:<13}{}", "HEADER    HYDROLASE", "21-MAR-97", "2XYZ");
        assert_eq!(deposition_date(&shifted_left).as_deref(), Some("21-MAR-97"));

        let shifted_right = format!("{:<51}{:<11}{}", "HEADER    HYDROLASE", "21-MAR-97", "2XYZ");
        assert_eq!(deposition_date(&shifted_right).as_deref(), Some("21-MAR-97"));

        let free_text = format!("{:<50}{:<12}{}", "HEADER    HYDROLASE", "UNKNOWN", "2XYZ");
        assert_eq!(deposition_date(&free_text).as_deref(), Some("UNKNOWN"));

        assert_eq!(deposition_date("HEADER    HYDROLASE"), None);
    }

    #[test]
    fn test_official_pdb_title_with_replaced_bytes() {
        // An invalid byte in column 10 becomes a replacement character that
        // straddles the start of the title text
        let text = b"HEADER    TEST STRUCTURE                         12-JAN-20   1ABC\n\
                     TITLE    \xff CRYSTAL STRUCTURE\n";
        let header = HeaderLines::read(&text[..], Path::new("x.pdb")).unwrap();
        let result = parse_header(&header, ParseOptions::default()).unwrap();

        let title = result.root().unwrap().location.details().unwrap();
        assert!(title.ends_with(" CRYSTAL STRUCTURE"));
    }

    #[test]
    fn test_official_pdb_title_and_helices() {
        let result = parse(
            "HEADER    TEST STRUCTURE                         12-JAN-20   1ABC\n\
             TITLE     CRYSTAL STRUCTURE OF\n\
             TITLE    2 A PROTEIN\n\
             HELIX    1  HA GLY A   86  GLY A   94  1                                   9\n\
             HELIX    2  HB ALA B   10  LEU B   20  1                                  11\n",
        );

        assert_eq!(
            result.root().unwrap().location.details(),
            Some("CRYSTAL STRUCTURE OF A PROTEIN")
        );
        assert_eq!(result.metadata.len(), 2);
        assert_eq!(result.metadata[1].start_asym, "B");
    }

    #[test]
    fn test_official_pdb_bad_helix() {
        let err = parse_header_text(
            "HEADER    TEST STRUCTURE                         12-JAN-20   1ABC\n\
             HELIX    1  HA GLY A   xx  GLY A   94\n",
            Path::new("x.pdb"),
            ParseOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::InvalidRecord { record: "HELIX", line: 2, .. }));
    }

    #[test]
    fn test_derived_from_pdb() {
        let result = parse(
            "EXPDTA    DERIVED FROM PDB: 1ABC\n\
             TITLE     MUTANT OF 1ABC\n\
             ATOM      1  N   MET A   1      11.104  13.207   2.100  1.00  0.00           N\n\
             TITLE     IGNORED\n",
        );

        let root = result.root().unwrap();
        assert_eq!(root.kind, DatasetKind::ExperimentalStructure);
        match &root.location {
            Location::File(file) => {
                assert_eq!(file.path, PathBuf::from("data/model.pdb"));
                assert_eq!(file.details.as_deref(), Some("MUTANT OF 1ABC"));
            }
            other => panic!("expected file location, got {other:?}"),
        }

        let parents: Vec<&Dataset> = result.graph.parents_of(result.dataset.unwrap()).collect();
        assert_eq!(parents.len(), 1);
        assert_eq!(parents[0].kind, DatasetKind::ExperimentalStructure);
        assert_eq!(parents[0].location.to_string(), "PDB:1ABC");
    }

    #[test]
    fn test_derived_from_pdb_without_title() {
        let result = parse("EXPDTA    DERIVED FROM PDB: 1ABC\n");
        assert!(result.root().unwrap().location.details().is_none());
    }

    #[test]
    fn test_derived_from_model() {
        let result = parse(
            "EXPDTA    DERIVED FROM COMPARATIVE MODEL, DOI: 10.5281/zenodo.46266\n\
             TITLE     REFINED MODEL\n",
        );

        let root = result.root().unwrap();
        assert_eq!(root.kind, DatasetKind::ComparativeModel);
        assert_eq!(root.location.details(), Some("REFINED MODEL"));

        let parents: Vec<&Dataset> = result.graph.parents_of(result.dataset.unwrap()).collect();
        assert_eq!(parents.len(), 1);
        assert_eq!(parents[0].kind, DatasetKind::ComparativeModel);
        match &parents[0].location {
            Location::File(file) => {
                assert_eq!(file.repository.as_ref().unwrap().doi, "10.5281/zenodo.46266");
                assert_eq!(file.path, PathBuf::from("."));
                assert_eq!(file.details.as_deref(), Some(REMOTE_MODEL_DETAILS));
            }
            other => panic!("expected file location, got {other:?}"),
        }
    }

    #[test]
    fn test_modeller_model() {
        let result = parse(
            "EXPDTA    THEORETICAL MODEL, MODELLER 9.1\n\
             REMARK   6 TEMPLATE: 1xyzA 10:A - 120:A MODELS 5:A - 115:A AT 45.0%\n",
        );

        assert_eq!(
            result.software["modeller"],
            SoftwareVersion::Known("9.1".to_string())
        );
        let root = result.root().unwrap();
        assert_eq!(root.kind, DatasetKind::ComparativeModel);
        assert_eq!(root.location.details(), Some(LOCAL_MODEL_DETAILS));

        assert_eq!(result.templates.len(), 1);
        let template = &result.templates[0];
        assert_eq!(template.template_seq_id_range, (10, 120));
        assert_eq!(template.seq_id_range, (5, 115));
        assert!((template.sequence_identity - 45.0).abs() < f64::EPSILON);
        assert_eq!(
            result.dataset(template.dataset).unwrap().location.to_string(),
            "PDB:1XYZ"
        );
        assert_eq!(root.parents(), &[template.dataset]);
    }

    #[test]
    fn test_modeller_without_version() {
        let result = parse("EXPDTA    THEORETICAL MODEL, MODELLER\n");
        assert_eq!(result.software["modeller"], SoftwareVersion::Unknown);
    }

    #[test]
    fn test_phyre2_model() {
        let result = parse("REMARK  99  Chain ID :   A\nREMARK  99  Residues  :  1-100\n");

        assert_eq!(result.software["phyre2"], SoftwareVersion::Unknown);
        assert_eq!(
            result.root().unwrap().kind,
            DatasetKind::ComparativeModel
        );
        assert!(result.templates.is_empty());
    }

    #[test]
    fn test_unknown_defaults_to_comparative_model() {
        let result = parse(
            "REMARK   6 TEMPLATE: 2abcB 1:B - 40:B MODELS 1:A - 40:A AT 60%\n\
             REMARK   1 SOMETHING ELSE\n",
        );

        assert!(result.software.is_empty());
        assert_eq!(
            result.root().unwrap().kind,
            DatasetKind::ComparativeModel
        );
        // Template remark on the first line is still found
        assert_eq!(result.templates.len(), 1);
    }

    #[test]
    fn test_unknown_as_experimental() {
        let options = ParseOptions {
            unknown_dialect: UnknownDialectPolicy::ExperimentalStructure,
        };
        let result = parse_header_text(
            "REMARK   1 SOMETHING\nTITLE     LOCAL STRUCTURE\n",
            Path::new("x.pdb"),
            options,
        )
        .unwrap();

        let root = result.root().unwrap();
        assert_eq!(root.kind, DatasetKind::ExperimentalStructure);
        assert_eq!(root.location.details(), Some("LOCAL STRUCTURE"));
        assert!(result.templates.is_empty());
    }

    #[test]
    fn test_empty_file_is_unknown_model() {
        let result = parse("");
        assert_eq!(
            result.root().unwrap().kind,
            DatasetKind::ComparativeModel
        );
    }

    #[test]
    fn test_header_lines_read_stops_at_coordinates() {
        let text = b"REMARK 1\r\nHETATM    1  O   HOH A   1\nREMARK 2\n";
        let header = HeaderLines::read(&text[..], Path::new("x.pdb")).unwrap();

        assert_eq!(header.lines(), &["REMARK 1".to_string()]);
        assert_eq!(header.first_line(), "REMARK 1");
        assert!(header.rest().is_empty());
    }

    #[test]
    fn test_header_lines_lossy_utf8() {
        let text = b"TITLE     BAD \xff BYTE\n";
        let header = HeaderLines::read(&text[..], Path::new("x.pdb")).unwrap();
        assert_eq!(header.lines().len(), 1);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = "EXPDTA    THEORETICAL MODEL, MODELLER 9.1\n\
                    REMARK   6 TEMPLATE: 3jklC 1:C - 50:C MODELS 60:A - 110:A AT 30%\n\
                    REMARK   6 TEMPLATE: 1abcA 1:A - 50:A MODELS 1:A - 80:A AT 40%\n";
        assert_eq!(parse(text), parse(text));
    }
}
