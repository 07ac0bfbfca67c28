use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Args;

use crate::cli::extract::resolve_format;
use crate::cli::{InputFormat, OutputFormat};
use crate::parsing::format::FileFormat;
use crate::parsing::mrc::scan_emdb_accession;
use crate::parsing::pdb::{Dialect, HeaderLines};

#[derive(Args)]
pub struct ClassifyArgs {
    /// Input file (PDB structure or MRC/CCP4 density map)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Input format (auto-detected by default)
    #[arg(long, value_enum, default_value = "auto")]
    pub input_format: InputFormat,
}

/// Execute classify subcommand
///
/// # Errors
///
/// Returns an error if the format cannot be detected or a PDB file cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ClassifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let file_format = resolve_format(&args.input, args.input_format)?;

    let (kind, detail) = match file_format {
        FileFormat::Pdb => {
            let header = HeaderLines::read(BufReader::new(File::open(&args.input)?), &args.input)?;
            if verbose {
                eprintln!("Read {} header lines", header.lines().len());
            }
            let dialect = Dialect::classify(header.first_line());
            (dialect.display_name().to_string(), None)
        }
        FileFormat::Mrc => (
            file_format.display_name().to_string(),
            scan_emdb_accession(&args.input),
        ),
    };

    match format {
        OutputFormat::Text => match &detail {
            Some(accession) => println!("{kind} ({accession})"),
            None => println!("{kind}"),
        },
        OutputFormat::Json => {
            let output = serde_json::json!({
                "input": args.input.display().to_string(),
                "format": file_format.display_name(),
                "classification": kind,
                "accession": detail,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("input\tclassification\taccession");
            println!(
                "{}\t{}\t{}",
                args.input.display(),
                kind,
                detail.as_deref().unwrap_or("")
            );
        }
    }

    Ok(())
}
