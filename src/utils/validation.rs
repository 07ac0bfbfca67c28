//! Centralized validation and helper functions.

use std::path::{Path, PathBuf};

use crate::parsing::patterns::TEMPLATE_CODE_REGEX;

/// Extract the uppercased PDB accession from a template code.
/// Returns None if the code does not look like a real PDB entry plus chain.
///
/// # Examples
///
/// ```
/// use struct_provenance::utils::validation::pdb_accession_from_template_code;
///
/// assert_eq!(pdb_accession_from_template_code("1xyzA"), Some("1XYZ".to_string()));
/// assert_eq!(pdb_accession_from_template_code("2abcB_1"), Some("2ABC".to_string()));
/// assert_eq!(pdb_accession_from_template_code("mytemplate"), None);
/// ```
#[must_use]
pub fn pdb_accession_from_template_code(code: &str) -> Option<String> {
    TEMPLATE_CODE_REGEX
        .captures(code)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_uppercase())
}

/// Resolve `path` relative to the directory containing `reference`.
///
/// Absolute paths are returned unchanged. Header remarks name alignment and
/// template files relative to the PDB file that carries them.
#[must_use]
pub fn resolve_relative_path(reference: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match reference.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_code_with_chain() {
        assert_eq!(
            pdb_accession_from_template_code("1abcA"),
            Some("1ABC".to_string())
        );
        assert_eq!(
            pdb_accession_from_template_code("3F4xZ_2"),
            Some("3F4X".to_string())
        );
    }

    #[test]
    fn test_template_code_rejects_non_pdb() {
        // Missing chain letter
        assert_eq!(pdb_accession_from_template_code("1abc"), None);
        // Does not start with a digit
        assert_eq!(pdb_accession_from_template_code("abcdA"), None);
        // Chain must be a letter
        assert_eq!(pdb_accession_from_template_code("1abc1"), None);
        // Suffix must start with underscore
        assert_eq!(pdb_accession_from_template_code("1abcAB"), None);
    }

    #[test]
    fn test_resolve_relative_path() {
        assert_eq!(
            resolve_relative_path(Path::new("data/model.pdb"), "model.ali"),
            PathBuf::from("data/model.ali")
        );
        assert_eq!(
            resolve_relative_path(Path::new("model.pdb"), "model.ali"),
            PathBuf::from("model.ali")
        );
        assert_eq!(
            resolve_relative_path(Path::new("data/model.pdb"), "/abs/t.pdb"),
            PathBuf::from("/abs/t.pdb")
        );
    }
}
