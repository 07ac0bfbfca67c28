//! Core data types for structural-biology provenance.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Location`]: Where a dataset lives, either a database entry or a file
//! - [`Dataset`], [`ProvenanceGraph`]: Provenance nodes and their
//!   "derived from" edges, stored in an arena and addressed by [`DatasetId`]
//! - [`Template`]: One comparative-modeling template row
//! - [`ExtractionResult`]: Everything recovered from one input file
//!
//! ## Provenance
//!
//! | Input | Root dataset | Parents |
//! |-------|--------------|---------|
//! | Official PDB entry | Experimental structure (PDB) | none |
//! | Edited PDB entry | Experimental structure (file) | PDB entry |
//! | Comparative model | Comparative model (file) | one per template |
//! | Density map | Density map (EMDB or file) | none |
//!
//! [`Location`]: location::Location
//! [`Dataset`]: dataset::Dataset
//! [`ProvenanceGraph`]: dataset::ProvenanceGraph
//! [`DatasetId`]: dataset::DatasetId
//! [`Template`]: template::Template
//! [`ExtractionResult`]: result::ExtractionResult

pub mod dataset;
pub mod helix;
pub mod location;
pub mod result;
pub mod template;
pub mod types;
