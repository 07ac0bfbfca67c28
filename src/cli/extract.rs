use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Args;

use crate::cli::{InputFormat, OutputFormat};
use crate::core::location::Location;
use crate::core::result::ExtractionResult;
use crate::lookup::EmdbClient;
use crate::parsing::format::{detect_file_format, FileFormat};
use crate::parsing::mrc::{self, NoLookup};
use crate::parsing::pdb::{self, ParseOptions, UnknownDialectPolicy};

#[derive(Args)]
pub struct ExtractArgs {
    /// Input file (PDB structure or MRC/CCP4 density map)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Input format (auto-detected by default)
    #[arg(long, value_enum, default_value = "auto")]
    pub input_format: InputFormat,

    /// Query EMDB for the release date and title of an embedded map accession
    #[arg(long)]
    pub lookup: bool,

    /// Timeout in seconds for the EMDB query
    #[arg(long, default_value = "10")]
    pub lookup_timeout: u64,

    /// Treat PDB files with an unrecognized header as experimental structures
    /// rather than comparative models
    #[arg(long)]
    pub assume_experimental: bool,
}

/// Execute extract subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or its header references a
/// template that cannot be located.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ExtractArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let file_format = resolve_format(&args.input, args.input_format)?;

    if verbose {
        eprintln!(
            "Reading {} as {}",
            args.input.display(),
            file_format.display_name()
        );
    }

    let result = match file_format {
        FileFormat::Pdb => {
            let options = ParseOptions {
                unknown_dialect: if args.assume_experimental {
                    UnknownDialectPolicy::ExperimentalStructure
                } else {
                    UnknownDialectPolicy::ComparativeModel
                },
            };
            pdb::parse_file_with_options(&args.input, options)?
        }
        FileFormat::Mrc => {
            if args.lookup {
                let client = EmdbClient::new(Duration::from_secs(args.lookup_timeout))?;
                mrc::parse_file(&args.input, &client)?
            } else {
                mrc::parse_file(&args.input, &NoLookup)?
            }
        }
    };

    if verbose {
        eprintln!(
            "Found {} datasets and {} templates",
            result.graph.len(),
            result.templates.len()
        );
    }

    match format {
        OutputFormat::Text => print_text_result(&args.input, &result),
        OutputFormat::Json => print_json_result(&args.input, file_format, &result)?,
        OutputFormat::Tsv => print_tsv_result(&result),
    }

    Ok(())
}

pub(crate) fn resolve_format(path: &Path, requested: InputFormat) -> anyhow::Result<FileFormat> {
    match requested {
        InputFormat::Pdb => Ok(FileFormat::Pdb),
        InputFormat::Mrc => Ok(FileFormat::Mrc),
        InputFormat::Auto => Ok(detect_file_format(path)?),
    }
}

fn describe_location(location: &Location) -> String {
    match location.details() {
        Some(details) => format!("{location} ({details})"),
        None => location.to_string(),
    }
}

fn print_text_result(input: &Path, result: &ExtractionResult) {
    println!("Provenance");
    println!("{}", "=".repeat(60));
    println!("\nInput: {}", input.display());

    let Some(root_id) = result.dataset else {
        println!("\nNo dataset could be extracted.");
        return;
    };

    if let Some(root) = result.root() {
        println!("\nDataset: {}", root.kind);
        println!("  Location: {}", describe_location(&root.location));
        if let Location::Database(db) = &root.location {
            if let Some(version) = &db.version {
                println!("  Version:  {version}");
            }
        }

        let parents: Vec<_> = result.graph.parents_of(root_id).collect();
        if !parents.is_empty() {
            println!("\nDerived from:");
            for parent in parents {
                println!("  - {}: {}", parent.kind, describe_location(&parent.location));
            }
        }
    }

    if !result.software.is_empty() {
        println!("\nSoftware:");
        for (name, version) in &result.software {
            println!("  {name} {version}");
        }
    }

    if !result.templates.is_empty() {
        println!("\nTemplates:");
        for t in &result.templates {
            let source = result
                .dataset(t.dataset)
                .map_or_else(|| "?".to_string(), |d| d.location.to_string());
            println!(
                "  {source} chain {}: template {}-{} -> model {}-{} ({:.1}% identity)",
                t.asym_id,
                t.template_seq_id_range.0,
                t.template_seq_id_range.1,
                t.seq_id_range.0,
                t.seq_id_range.1,
                t.sequence_identity,
            );
        }
        if let Some(alignment) = result.templates.first().and_then(|t| t.alignment_file.as_ref()) {
            println!("  Alignment: {}", alignment.path.display());
        }
    }

    if !result.metadata.is_empty() {
        println!("\nHelices: {}", result.metadata.len());
    }
}

fn print_json_result(
    input: &Path,
    file_format: FileFormat,
    result: &ExtractionResult,
) -> anyhow::Result<()> {
    let datasets: Vec<serde_json::Value> = result
        .graph
        .iter()
        .map(|(id, d)| {
            serde_json::json!({
                "id": id,
                "kind": d.kind,
                "location": d.location,
                "parents": d.parents(),
            })
        })
        .collect();

    let output = serde_json::json!({
        "input": input.display().to_string(),
        "format": file_format.display_name(),
        "dataset": result.dataset,
        "datasets": datasets,
        "templates": result.templates,
        "software": result.software,
        "metadata": result.metadata,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_result(result: &ExtractionResult) {
    println!(
        "template\tasym_id\tmodel_start\tmodel_end\ttemplate_start\ttemplate_end\tidentity\talignment"
    );
    for t in &result.templates {
        let source = result
            .dataset(t.dataset)
            .map_or_else(String::new, |d| d.location.to_string());
        let alignment = t
            .alignment_file
            .as_ref()
            .map_or_else(String::new, |a| a.path.display().to_string());
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{:.2}\t{}",
            source,
            t.asym_id,
            t.seq_id_range.0,
            t.seq_id_range.1,
            t.template_seq_id_range.0,
            t.template_seq_id_range.1,
            t.sequence_identity,
            alignment,
        );
    }
}
