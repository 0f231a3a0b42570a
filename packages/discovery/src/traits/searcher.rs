//! Web search provider seam.
//!
//! The search provider is credential-gated; every call takes the API key the
//! stage acquired from its [`KeySource`](super::keys::KeySource).

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::error::{DiscoveryError, Result};

/// One organic search result: the three text fields the pipeline scans for
/// family identifiers.
#[derive(Debug, Clone, Default)]
pub struct WebHit {
    pub title: String,
    pub snippet: String,
    pub link: String,
}

impl WebHit {
    pub fn new(title: &str, snippet: &str, link: &str) -> Self {
        Self {
            title: title.to_string(),
            snippet: snippet.to_string(),
            link: link.to_string(),
        }
    }
}

/// Rate-limited general-purpose search engine.
#[async_trait]
pub trait WebSearchProvider: Send + Sync {
    async fn search(&self, query: &str, api_key: &str) -> Result<Vec<WebHit>>;
}

/// Mock web search for testing: canned hits per query, optional per-query
/// failures.
#[derive(Default)]
pub struct MockWebSearch {
    hits: RwLock<HashMap<String, Vec<WebHit>>>,
    failing: RwLock<HashSet<String>>,
}

impl MockWebSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add results for a query.
    pub fn with_hits(self, query: &str, hits: Vec<WebHit>) -> Self {
        self.hits.write().unwrap().insert(query.to_string(), hits);
        self
    }

    /// Make one query fail.
    pub fn with_failure(self, query: &str) -> Self {
        self.failing.write().unwrap().insert(query.to_string());
        self
    }
}

#[async_trait]
impl WebSearchProvider for MockWebSearch {
    async fn search(&self, query: &str, _api_key: &str) -> Result<Vec<WebHit>> {
        if self.failing.read().unwrap().contains(query) {
            return Err(DiscoveryError::provider(std::io::Error::other(
                "mock search failure",
            )));
        }
        Ok(self
            .hits
            .read()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default())
    }
}
