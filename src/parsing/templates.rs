//! Recovery of comparative-modeling templates from MODELLER-style remarks.
//!
//! Three `REMARK   6` grammars are recognized anywhere in the header:
//!
//! ```text
//! REMARK   6 ALIGNMENT: model.ali
//! REMARK   6 TEMPLATE PATH mytemplate templates/mytemplate.pdb
//! REMARK   6 TEMPLATE: 1xyzA 10:A - 120:A MODELS 5:A - 115:A AT 45.0%
//! ```
//!
//! Template codes that look like a PDB accession plus chain (`1xyzA`,
//! `1xyzA_2`) resolve to the PDB entry. Any other code must have a
//! `TEMPLATE PATH` remark naming its file.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

use crate::core::dataset::{Dataset, DatasetId, ProvenanceGraph};
use crate::core::location::{DatabaseLocation, FileLocation};
use crate::core::template::{sort_templates, SeqIdRange, Template};
use crate::core::types::DatasetKind;
use crate::parsing::patterns::{ALIGNMENT_FILE_REGEX, TEMPLATE_PATH_REGEX, TEMPLATE_STATS_REGEX};
use crate::parsing::pdb::{HeaderLines, ParseError};
use crate::utils::validation::{pdb_accession_from_template_code, resolve_relative_path};

pub const ALIGNMENT_DETAILS: &str = "Alignment for starting comparative model";
pub const TEMPLATE_DETAILS: &str = "Template for comparative modeling";

/// One `TEMPLATE:` remark, parsed but not yet resolved to a dataset
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateStats {
    pub code: String,
    pub asym_id: String,
    pub template_seq_id_range: SeqIdRange,
    pub target_asym_id: String,
    pub seq_id_range: SeqIdRange,
    pub sequence_identity: f64,
}

/// Accumulators for a single scan of one header
struct TemplateScan<'a> {
    source: &'a Path,
    alignment_file: Option<FileLocation>,
    template_paths: HashMap<String, PathBuf>,
    stats: Vec<TemplateStats>,
}

type RecordHandler = fn(&mut TemplateScan<'_>, &Captures<'_>, usize) -> Result<(), ParseError>;

/// Remark grammars, tried in this order against every header line
static REMARK_GRAMMARS: [(&LazyLock<Regex>, RecordHandler); 3] = [
    (&ALIGNMENT_FILE_REGEX, on_alignment_file),
    (&TEMPLATE_PATH_REGEX, on_template_path),
    (&TEMPLATE_STATS_REGEX, on_template_stats),
];

fn on_alignment_file(
    scan: &mut TemplateScan<'_>,
    caps: &Captures<'_>,
    _line: usize,
) -> Result<(), ParseError> {
    let path = resolve_relative_path(scan.source, &caps[1]);
    scan.alignment_file =
        Some(FileLocation::local(path).with_details(Some(ALIGNMENT_DETAILS.to_string())));
    Ok(())
}

fn on_template_path(
    scan: &mut TemplateScan<'_>,
    caps: &Captures<'_>,
    _line: usize,
) -> Result<(), ParseError> {
    let path = resolve_relative_path(scan.source, &caps[2]);
    scan.template_paths.insert(caps[1].to_string(), path);
    Ok(())
}

fn on_template_stats(
    scan: &mut TemplateScan<'_>,
    caps: &Captures<'_>,
    line: usize,
) -> Result<(), ParseError> {
    let int = |i: usize, what: &str| -> Result<i32, ParseError> {
        caps[i].parse().map_err(|_| ParseError::InvalidRecord {
            record: "REMARK   6 TEMPLATE",
            line,
            message: format!("{what} '{}' is not an integer", &caps[i]),
        })
    };

    let template_seq_id_range = (int(2, "template start residue")?, int(4, "template end residue")?);
    let seq_id_range = (int(6, "model start residue")?, int(8, "model end residue")?);
    let sequence_identity = caps[9].parse().map_err(|_| ParseError::InvalidRecord {
        record: "REMARK   6 TEMPLATE",
        line,
        message: format!("sequence identity '{}' is not a number", &caps[9]),
    })?;

    scan.stats.push(TemplateStats {
        code: caps[1].to_string(),
        asym_id: caps[3].to_string(),
        template_seq_id_range,
        target_asym_id: caps[7].to_string(),
        seq_id_range,
        sequence_identity,
    });
    Ok(())
}

/// Resolve a template code to the dataset it came from
fn resolve_template(
    code: &str,
    template_paths: &HashMap<String, PathBuf>,
) -> Result<Dataset, ParseError> {
    if let Some(accession) = pdb_accession_from_template_code(code) {
        return Ok(Dataset::new(
            DatasetKind::ExperimentalStructure,
            DatabaseLocation::pdb(accession),
        ));
    }

    let path = template_paths
        .get(code)
        .ok_or_else(|| ParseError::UnresolvedTemplate(code.to_string()))?;
    Ok(Dataset::new(
        DatasetKind::ExperimentalStructure,
        FileLocation::local(path).with_details(Some(TEMPLATE_DETAILS.to_string())),
    ))
}

/// Recover the templates of a comparative model from its header
///
/// Every resolved template dataset is added to `graph` as a parent of
/// `target`, in the order the `TEMPLATE:` remarks appear. The returned list
/// is sorted by model residue range.
///
/// # Errors
///
/// Returns `ParseError::InvalidRecord` if a `TEMPLATE:` remark has
/// non-numeric ranges or identity, `ParseError::UnresolvedTemplate` if a
/// template code is neither a PDB code nor listed in a `TEMPLATE PATH`
/// remark, or `ParseError::Graph` if `target` is not in `graph`.
pub fn recover_templates(
    header: &HeaderLines,
    target: DatasetId,
    graph: &mut ProvenanceGraph,
) -> Result<Vec<Template>, ParseError> {
    let mut scan = TemplateScan {
        source: header.source(),
        alignment_file: None,
        template_paths: HashMap::new(),
        stats: Vec::new(),
    };

    for (index, line) in header.lines().iter().enumerate() {
        for (regex, handler) in &REMARK_GRAMMARS {
            if let Some(caps) = regex.captures(line) {
                handler(&mut scan, &caps, index + 1)?;
            }
        }
    }

    let mut templates = Vec::with_capacity(scan.stats.len());
    for stats in scan.stats {
        let dataset = graph.insert(resolve_template(&stats.code, &scan.template_paths)?);
        graph.add_parent(target, dataset)?;

        templates.push(Template {
            dataset,
            asym_id: stats.asym_id,
            seq_id_range: stats.seq_id_range,
            template_seq_id_range: stats.template_seq_id_range,
            sequence_identity: stats.sequence_identity,
            alignment_file: scan.alignment_file.clone(),
        });
    }

    sort_templates(&mut templates);
    debug!(
        templates = templates.len(),
        aligned = scan.alignment_file.is_some(),
        "Recovered comparative modeling templates"
    );

    Ok(templates)
}
