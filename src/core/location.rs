use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::types::DatabaseName;

/// Collapse empty or whitespace-only descriptive text to `None`
fn normalize_details(details: Option<String>) -> Option<String> {
    details.filter(|d| !d.trim().is_empty())
}

/// Where a dataset's content can be found
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Location {
    Database(DatabaseLocation),
    File(FileLocation),
}

impl Location {
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::Database(db) => db.details.as_deref(),
            Self::File(file) => file.details.as_deref(),
        }
    }
}

impl From<DatabaseLocation> for Location {
    fn from(loc: DatabaseLocation) -> Self {
        Self::Database(loc)
    }
}

impl From<FileLocation> for Location {
    fn from(loc: FileLocation) -> Self {
        Self::File(loc)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Database(db) => write!(f, "{}:{}", db.db_name, db.accession),
            Self::File(file) => match &file.repository {
                Some(repo) => write!(f, "doi:{}/{}", repo.doi, file.path.display()),
                None => write!(f, "{}", file.path.display()),
            },
        }
    }
}

/// A canonical entry in a public database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseLocation {
    pub db_name: DatabaseName,

    /// Accession code (e.g. "1ABC", "EMD-1234")
    pub accession: String,

    /// Release version or date of the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl DatabaseLocation {
    #[must_use]
    pub fn new(db_name: DatabaseName, accession: impl Into<String>) -> Self {
        Self {
            db_name,
            accession: accession.into(),
            version: None,
            details: None,
        }
    }

    #[must_use]
    pub fn pdb(accession: impl Into<String>) -> Self {
        Self::new(DatabaseName::Pdb, accession)
    }

    #[must_use]
    pub fn emdb(accession: impl Into<String>) -> Self {
        Self::new(DatabaseName::Emdb, accession)
    }

    #[must_use]
    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.version = version.filter(|v| !v.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: Option<String>) -> Self {
        self.details = normalize_details(details);
        self
    }
}

/// Repository identified by a persistent identifier (DOI)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub doi: String,
}

impl Repository {
    #[must_use]
    pub fn new(doi: impl Into<String>) -> Self {
        Self { doi: doi.into() }
    }
}

/// A file, either on local disk or inside a DOI-addressed repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLocation {
    /// Local path, or path relative to the repository root
    pub path: PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<Repository>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FileLocation {
    #[must_use]
    pub fn local(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            repository: None,
            details: None,
        }
    }

    #[must_use]
    pub fn in_repository(repository: Repository, path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            repository: Some(repository),
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: Option<String>) -> Self {
        self.details = normalize_details(details);
        self
    }

    #[must_use]
    pub fn is_local(&self) -> bool {
        self.repository.is_none()
    }
}
