use serde::{Deserialize, Serialize};

use crate::core::dataset::DatasetId;
use crate::core::location::FileLocation;

/// Inclusive residue range, compared as a (start, end) tuple
pub type SeqIdRange = (i32, i32);

/// A known structure used as a modeling reference for part of the target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Dataset the template structure came from
    pub dataset: DatasetId,

    /// Chain identifier in the template structure
    pub asym_id: String,

    /// Residues of the model covered by this template
    pub seq_id_range: SeqIdRange,

    /// Corresponding residues in the template
    pub template_seq_id_range: SeqIdRange,

    /// Percent sequence identity (0-100)
    pub sequence_identity: f64,

    /// Alignment shared by every template of the model, if the header names one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment_file: Option<FileLocation>,
}

/// Stable sort by model residue range, start then end
pub fn sort_templates(templates: &mut [Template]) {
    templates.sort_by_key(|t| t.seq_id_range);
}
