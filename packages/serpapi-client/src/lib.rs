//! SerpAPI client with a persistent rotating key pool.
//!
//! Two halves:
//!
//! - [`SerpApiClient`]: a minimal client for `search.json` — Google web
//!   search, Google Patents lookup, and the continuation-link fetch that
//!   expands a patent into its worldwide family breakdown.
//! - [`KeyPool`]: rotation over a set of shared API keys, each with a fixed
//!   monthly quota, persisted through an injectable [`PoolStore`] so the
//!   counters survive process restarts.
//!
//! # Example
//!
//! ```rust,ignore
//! use serpapi_client::{Credential, JsonFileStore, KeyPool, SerpApiClient};
//!
//! let pool = KeyPool::new(
//!     JsonFileStore::new("/tmp/serpapi_pool.json"),
//!     vec![Credential::new("team", std::env::var("SERPAPI_KEY")?)],
//! );
//!
//! let issued = pool.acquire().await?;
//! let client = SerpApiClient::new();
//! let hits = client.google_search("darolutamide patent WO2020", &issued.key).await?;
//! ```

pub mod error;
pub mod pool;
pub mod store;
pub mod types;

pub use error::{PoolError, PoolResult, Result, SerpApiError};
pub use pool::{Credential, Issued, KeyPool, PoolState, PoolStatus, ResetPolicy, MONTHLY_CAP};
pub use store::{JsonFileStore, MemoryStore, PoolStore};
pub use types::{FamilyResponse, NationalApplication, OrganicResult, SearchResponse};

use std::collections::BTreeMap;
use std::time::Duration;

const BASE_URL: &str = "https://serpapi.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct SerpApiClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl Default for SerpApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SerpApiClient {
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

    /// Run one Google web search, returning the organic results.
    pub async fn google_search(&self, query: &str, api_key: &str) -> Result<Vec<OrganicResult>> {
        let resp: SearchResponse = self
            .get_json(&[
                ("engine", "google"),
                ("q", query),
                ("api_key", api_key),
                ("num", "10"),
            ])
            .await?;
        tracing::debug!(query, count = resp.organic_results.len(), "Google search answered");
        Ok(resp.organic_results)
    }

    /// Look up a publication on Google Patents and expand it into its
    /// worldwide family breakdown, keyed by filing year.
    ///
    /// The lookup result carries a continuation link to the full record;
    /// that link is followed with the same API key appended. An empty map
    /// means the publication was not found or had no continuation link.
    pub async fn patent_family(
        &self,
        publication: &str,
        api_key: &str,
    ) -> Result<BTreeMap<String, Vec<NationalApplication>>> {
        let resp: SearchResponse = self
            .get_json(&[
                ("engine", "google_patents"),
                ("q", publication),
                ("api_key", api_key),
                ("num", "20"),
            ])
            .await?;

        let Some(continuation) = resp
            .organic_results
            .into_iter()
            .next()
            .and_then(|r| r.serpapi_link)
        else {
            tracing::debug!(publication, "No continuation link for publication");
            return Ok(BTreeMap::new());
        };

        // The continuation link already carries query parameters; the key is
        // appended the same way the lookup call supplied it.
        let url = format!("{continuation}&api_key={api_key}");
        let resp = self.client.get(&url).timeout(self.timeout).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SerpApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let family: FamilyResponse = resp.json().await?;
        Ok(family.applications_by_year())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}/search.json", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(params)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SerpApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_organic_results() {
        let body = r#"{
            "organic_results": [
                {"title": "WO2020123456 - Pharmaceutical compound",
                 "snippet": "… publication WO 2020 123456 …",
                 "link": "https://patents.google.com/patent/WO2020123456",
                 "serpapi_link": "https://serpapi.com/search.json?engine=google_patents_details&patent_id=patent%2FWO2020123456"}
            ]
        }"#;

        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.organic_results.len(), 1);
        assert!(parsed.organic_results[0].serpapi_link.is_some());
    }

    #[test]
    fn family_response_skips_non_list_years() {
        let body = r#"{
            "worldwide_applications": {
                "2020": [{"document_id": "BR112020012345", "title": "Compound"}],
                "2021": {"unexpected": "shape"}
            }
        }"#;

        let parsed: FamilyResponse = serde_json::from_str(body).unwrap();
        let by_year = parsed.applications_by_year();
        assert_eq!(by_year.len(), 1);
        assert_eq!(by_year["2020"][0].document_id, "BR112020012345");
    }

    #[test]
    fn missing_organic_results_defaults_empty() {
        let parsed: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.organic_results.is_empty());
    }
}
