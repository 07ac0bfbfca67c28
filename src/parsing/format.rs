use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Supported input file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// PDB-format structure file (text)
    Pdb,
    /// MRC/CCP4 density map (binary)
    Mrc,
}

/// Errors that can occur during format detection
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("Unable to detect file format from content and filename")]
    UnknownFormat,

    #[error("Compressed input is not supported; decompress the file first")]
    Compressed,
}

/// Leading bytes of a gzip stream
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Bytes sampled from the start of a file for content detection
const SNIFF_SIZE: usize = 1024;

impl FileFormat {
    /// Get the display name for this format
    #[must_use]
    #[allow(clippy::trivially_copy_pass_by_ref)] // Idiomatic method signature
    pub fn display_name(&self) -> &'static str {
        match self {
            FileFormat::Pdb => "PDB Structure",
            FileFormat::Mrc => "MRC Density Map",
        }
    }
}

/// Detect the format of the file at `path`
///
/// The extension is trusted when it is recognized; otherwise the first
/// kilobyte is inspected.
///
/// # Errors
///
/// Returns `FormatError::Compressed` for gzip input, or
/// `FormatError::UnknownFormat` if the file cannot be read and its extension
/// is not recognized.
pub fn detect_file_format(path: &Path) -> Result<FileFormat, FormatError> {
    if is_compressed_name(path) {
        return Err(FormatError::Compressed);
    }
    if let Some(format) = detect_format_from_filename(path) {
        return Ok(format);
    }

    let mut sample = Vec::with_capacity(SNIFF_SIZE);
    File::open(path)
        .and_then(|f| f.take(SNIFF_SIZE as u64).read_to_end(&mut sample))
        .map_err(|_| FormatError::UnknownFormat)?;

    detect_format_from_content(&sample)
}

fn is_compressed_name(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}

/// Detect format based on filename and extension
fn detect_format_from_filename(path: &Path) -> Option<FileFormat> {
    let extension = path.extension()?.to_str()?.to_lowercase();

    match extension.as_str() {
        "pdb" | "ent" | "brk" => Some(FileFormat::Pdb),
        "mrc" | "map" | "ccp4" | "mrcs" => Some(FileFormat::Mrc),
        _ => None,
    }
}

/// Detect format from the leading bytes of a file
///
/// Text is assumed to be PDB; anything with control bytes is assumed to be
/// a map, provided it is long enough to hold the label count field.
fn detect_format_from_content(sample: &[u8]) -> Result<FileFormat, FormatError> {
    if sample.is_empty() {
        return Err(FormatError::UnknownFormat);
    }
    if sample.starts_with(&GZIP_MAGIC) {
        return Err(FormatError::Compressed);
    }

    let is_binary = sample
        .iter()
        .any(|&b| b.is_ascii_control() && b != b'\n' && b != b'\r' && b != b'\t');

    if !is_binary {
        return Ok(FileFormat::Pdb);
    }

    if sample.len() >= 224 {
        Ok(FileFormat::Mrc)
    } else {
        Err(FormatError::UnknownFormat)
    }
}
