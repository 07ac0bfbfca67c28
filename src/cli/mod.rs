//! Command-line interface for struct-provenance.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **extract**: Extract provenance and templates from a PDB or MRC file
//! - **classify**: Report which header dialect a file uses
//!
//! ## Usage
//!
//! ```text
//! # Provenance of a MODELLER model, with its templates
//! struct-provenance extract model.pdb
//!
//! # JSON output for scripting
//! struct-provenance extract model.pdb --format json
//!
//! # Density map, fetching the EMDB title if an accession is embedded
//! struct-provenance extract emd_1234.map --lookup
//!
//! # Which dialect does this header use?
//! struct-provenance classify model.pdb
//! ```

use clap::{Parser, Subcommand};

pub mod classify;
pub mod extract;

#[derive(Parser)]
#[command(name = "struct-provenance")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Extract dataset provenance from PDB and MRC file headers")]
#[command(
    long_about = "struct-provenance reads the headers of PDB structure files and MRC density maps and reports where the data came from.\n\nIt recognizes:\n- Official PDB entries and locally edited copies of them\n- Comparative models from MODELLER and Phyre2, including their templates\n- EMDB accessions embedded in density map labels"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the provenance graph and templates from a file
    Extract(extract::ExtractArgs),

    /// Report the header dialect of a file
    Classify(classify::ClassifyArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// Detect from the extension, then the content
    #[default]
    Auto,
    Pdb,
    Mrc,
}
