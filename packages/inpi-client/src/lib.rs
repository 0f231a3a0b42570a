//! Client for the INPI patent crawler.
//!
//! The crawler is an external service that scrapes the Brazilian patent
//! office. It answers `GET {base}?medicine={query}` with a list of patent
//! records whose shape it owns; this client keeps unknown fields intact via
//! a flattened map so callers can pass records through unchanged.
//!
//! The crawler is slow. The default timeout here is deliberately longer than
//! the one used for the other providers.

pub mod error;

pub use error::{InpiError, Result};

use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// A patent record as returned by the crawler.
///
/// Only `number` and `title` are interpreted downstream; everything else is
/// preserved in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InpiPatent {
    pub number: Option<String>,
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Envelope for crawler responses.
#[derive(Debug, Clone, Deserialize)]
struct CrawlerResponse {
    #[serde(default)]
    data: Vec<InpiPatent>,
}

pub struct InpiClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl InpiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run one crawler search. Returns whatever records the crawler found.
    pub async fn search(&self, query: &str) -> Result<Vec<InpiPatent>> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("medicine", query)])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(InpiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: CrawlerResponse = resp.json().await?;
        tracing::debug!(query, count = parsed.data.len(), "INPI crawler answered");
        Ok(parsed.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_unknown_fields() {
        let body = r#"{
            "data": [
                {"title": "COMPOSTOS FARMACEUTICOS", "number": "BR112020012345",
                 "depositor": "Bayer AG", "filing_date": "2020-06-18"}
            ]
        }"#;

        let parsed: CrawlerResponse = serde_json::from_str(body).unwrap();
        let patent = &parsed.data[0];
        assert_eq!(patent.number.as_deref(), Some("BR112020012345"));
        assert_eq!(patent.extra["depositor"], "Bayer AG");

        // Round-trips without losing the crawler-owned fields.
        let json = serde_json::to_value(patent).unwrap();
        assert_eq!(json["filing_date"], "2020-06-18");
    }

    #[test]
    fn tolerates_records_without_number() {
        let body = r#"{"data": [{"title": "USO DE INIBIDORES"}]}"#;
        let parsed: CrawlerResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.data[0].number.is_none());
        assert_eq!(parsed.data[0].title.as_deref(), Some("USO DE INIBIDORES"));
    }
}
