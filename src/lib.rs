//! # struct-provenance
//!
//! A library for recovering dataset provenance from structural-biology file headers.
//!
//! Structure and map files often carry metadata that says where they came from:
//! the PDB entry a structure was taken from, the templates a comparative model
//! was built on, or the EMDB entry a density map was deposited as. Each tool
//! writes this metadata differently, and none of it is formally specified.
//!
//! `struct-provenance` reads those headers and assembles the metadata into a
//! provenance graph of datasets plus an ordered list of modeling templates.
//!
//! ## Features
//!
//! - **Dialect classification**: Official PDB entries, locally derived copies,
//!   MODELLER and Phyre2 models are recognized from the first header line
//! - **Template recovery**: MODELLER `REMARK   6` records are resolved to PDB
//!   entries or local template files, with residue ranges and identity
//! - **EMDB accessions**: Embedded accessions are found in MRC map labels even
//!   though the header does not declare its byte order
//! - **Offline by default**: Network lookups are left to an optional,
//!   caller-supplied collaborator
//!
//! ## Example
//!
//! ```rust,no_run
//! use struct_provenance::parsing::pdb::{parse_header_text, ParseOptions};
//! use std::path::Path;
//!
//! let header = "EXPDTA    THEORETICAL MODEL, MODELLER 9.1\n\
//!               REMARK   6 TEMPLATE: 1xyzA 10:A - 120:A MODELS 5:A - 115:A AT 45.0%\n";
//! let result = parse_header_text(header, Path::new("model.pdb"), ParseOptions::default()).unwrap();
//!
//! for template in &result.templates {
//!     let source = result.dataset(template.dataset).unwrap();
//!     println!("{}: {:?} at {:.1}%", source.location, template.seq_id_range, template.sequence_identity);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Locations, datasets, the provenance graph and templates
//! - [`parsing`]: PDB and MRC parsers
//! - [`lookup`]: Optional EMDB entry lookup over HTTP
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod lookup;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::dataset::{Dataset, DatasetId, ProvenanceGraph};
pub use core::location::{DatabaseLocation, FileLocation, Location, Repository};
pub use core::result::ExtractionResult;
pub use core::template::Template;
pub use core::types::*;
pub use parsing::pdb::{Dialect, ParseError, ParseOptions, UnknownDialectPolicy};
