//! Parsers for extracting provenance metadata from structural-biology files.
//!
//! This module provides parsers for:
//!
//! - **PDB files**: Classify the header dialect and extract the dataset,
//!   software hints and secondary-structure records
//! - **Comparative-model templates**: Resolve MODELLER `REMARK   6` records to
//!   template datasets
//! - **MRC/CCP4 maps**: Recover an embedded EMDB accession from the binary
//!   header labels
//!
//! ## Example
//!
//! ```rust,no_run
//! use struct_provenance::parsing::{mrc, pdb};
//! use std::path::Path;
//!
//! // Parse a comparative model
//! let result = pdb::parse_file(Path::new("model.pdb")).unwrap();
//! for template in &result.templates {
//!     println!("{:?} covers {:?}", template.dataset, template.seq_id_range);
//! }
//!
//! // Or look for an EMDB accession in a map
//! let accession = mrc::scan_emdb_accession(Path::new("emd_1234.map"));
//! ```

pub mod format;
pub mod mrc;
pub(crate) mod patterns;
pub mod pdb;
pub mod templates;
