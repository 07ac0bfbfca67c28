//! EMDB entry lookup over HTTP.
//!
//! Extraction itself never touches the network. This client is the optional
//! collaborator a caller can pass to [`crate::parsing::mrc::parse_file`] to
//! replace the generic map description with the entry's release date and
//! title. Every failure degrades to "no information".

use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::parsing::mrc::{EntryInfo, EntryInfoSource};

pub const DEFAULT_EMDB_API_URL: &str = "https://www.ebi.ac.uk/pdbe/api/emdb/entry/summary";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response is missing {0}")]
    MissingField(&'static str),

    #[error("Failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Extract release date and title from an EMDB summary response.
///
/// The response maps the accession to a list of entries; the first entry's
/// `deposition` block holds the fields of interest.
///
/// # Errors
///
/// Returns `LookupError::Json` if the text is not JSON, or
/// `LookupError::MissingField` if the expected structure is absent.
pub fn parse_summary(body: &str) -> Result<EntryInfo, LookupError> {
    let json: Value = serde_json::from_str(body)?;

    let deposition = json
        .as_object()
        .and_then(|entries| entries.values().next())
        .and_then(|entry| entry.get(0))
        .and_then(|entry| entry.get("deposition"))
        .ok_or(LookupError::MissingField("deposition"))?;

    let text = |key: &str| {
        deposition
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    Ok(EntryInfo {
        version: text("map_release_date"),
        title: text("title"),
    })
}

/// Blocking EMDB client backed by its own single-threaded runtime
pub struct EmdbClient {
    runtime: tokio::runtime::Runtime,
    client: reqwest::Client,
    base_url: String,
}

impl EmdbClient {
    /// Create a client for the public EMDB API
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime or HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, LookupError> {
        Self::with_base_url(DEFAULT_EMDB_API_URL, timeout)
    }

    /// Create a client for an alternative API endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime or HTTP client cannot be built.
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            runtime,
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn fetch(&self, accession: &str) -> Result<EntryInfo, LookupError> {
        let url = format!("{}/{accession}", self.base_url);
        debug!(%url, "Querying EMDB");

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_summary(&body)
    }

    /// Look up `accession`, reporting why the lookup failed
    ///
    /// # Errors
    ///
    /// Returns a `LookupError` if the request fails or the response has an
    /// unexpected shape.
    pub fn lookup(&self, accession: &str) -> Result<EntryInfo, LookupError> {
        self.runtime.block_on(self.fetch(accession))
    }
}

impl EntryInfoSource for EmdbClient {
    fn entry_info(&self, accession: &str) -> Option<EntryInfo> {
        match self.lookup(accession) {
            Ok(info) => Some(info),
            Err(e) => {
                warn!(accession, error = %e, "EMDB lookup failed, using generic description");
                None
            }
        }
    }
}
