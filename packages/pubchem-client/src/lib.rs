//! Pure PubChem PUG REST client.
//!
//! A minimal client for the PubChem PUG REST API. Supports listing the
//! synonyms of a compound by name and fetching its full property table.
//!
//! # Example
//!
//! ```rust,ignore
//! use pubchem_client::PubChemClient;
//!
//! let client = PubChemClient::new();
//!
//! let synonyms = client.synonyms("darolutamide").await?;
//! for s in &synonyms {
//!     println!("{s}");
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{PubChemError, Result};
pub use types::{CompoundProperty, CompoundResponse, SynonymsResponse};

use std::time::Duration;

const BASE_URL: &str = "https://pubchem.ncbi.nlm.nih.gov/rest/pug";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct PubChemClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl Default for PubChemClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PubChemClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at a different base URL (test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// List all registered synonyms of a compound, looked up by name.
    pub async fn synonyms(&self, name: &str) -> Result<Vec<String>> {
        let url = format!(
            "{}/compound/name/{}/synonyms/JSON",
            self.base_url,
            urlencoding::encode(name)
        );
        let resp = self.client.get(&url).timeout(self.timeout).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PubChemError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: SynonymsResponse = resp.json().await?;
        let synonyms = parsed
            .information_list
            .information
            .into_iter()
            .next()
            .map(|i| i.synonyms)
            .unwrap_or_default();

        tracing::debug!(name, count = synonyms.len(), "Fetched PubChem synonyms");
        Ok(synonyms)
    }

    /// Fetch the property table of the first compound matching a name.
    pub async fn compound_properties(&self, name: &str) -> Result<Vec<CompoundProperty>> {
        let url = format!(
            "{}/compound/name/{}/JSON",
            self.base_url,
            urlencoding::encode(name)
        );
        let resp = self.client.get(&url).timeout(self.timeout).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PubChemError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: CompoundResponse = resp.json().await?;
        let props = parsed
            .compounds
            .into_iter()
            .next()
            .map(|c| c.props)
            .unwrap_or_default();

        tracing::debug!(name, count = props.len(), "Fetched PubChem properties");
        Ok(props)
    }
}
