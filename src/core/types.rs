use serde::{Deserialize, Serialize};

/// Public database that hosts a canonical, versioned entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseName {
    /// Protein Data Bank
    Pdb,
    /// Electron Microscopy Data Bank
    Emdb,
}

impl std::fmt::Display for DatabaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pdb => write!(f, "PDB"),
            Self::Emdb => write!(f, "EMDB"),
        }
    }
}

/// What a dataset in the provenance graph holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    /// Experimentally determined structure (e.g. an X-ray or NMR PDB entry)
    ExperimentalStructure,
    /// Electron microscopy density map
    DensityMap,
    /// Structure predicted from one or more templates
    ComparativeModel,
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExperimentalStructure => write!(f, "Experimental model"),
            Self::DensityMap => write!(f, "3DEM volume"),
            Self::ComparativeModel => write!(f, "Comparative model"),
        }
    }
}

/// Version of a modeling package named in a file header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoftwareVersion {
    Known(String),
    /// The header names the package but not its version
    Unknown,
}

impl SoftwareVersion {
    /// Build from a possibly-empty version string
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            Self::Unknown
        } else {
            Self::Known(text.to_string())
        }
    }
}

impl std::fmt::Display for SoftwareVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Known(version) => write!(f, "{version}"),
            Self::Unknown => write!(f, "?"),
        }
    }
}
