//! Jurisdiction crawler seam.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::error::{DiscoveryError, Result};
use crate::types::CrawledRecord;

/// The jurisdiction-specific crawler. Unlike the other providers it needs no
/// credential, but it is slow; implementations carry their own (longer)
/// timeout.
#[async_trait]
pub trait JurisdictionCrawler: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<CrawledRecord>>;
}

/// Mock crawler for testing.
#[derive(Default)]
pub struct MockCrawler {
    records: RwLock<HashMap<String, Vec<CrawledRecord>>>,
    failing: RwLock<HashSet<String>>,
}

impl MockCrawler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(self, query: &str, records: Vec<CrawledRecord>) -> Self {
        self.records
            .write()
            .unwrap()
            .insert(query.to_string(), records);
        self
    }

    pub fn with_failure(self, query: &str) -> Self {
        self.failing.write().unwrap().insert(query.to_string());
        self
    }
}

#[async_trait]
impl JurisdictionCrawler for MockCrawler {
    async fn search(&self, query: &str) -> Result<Vec<CrawledRecord>> {
        if self.failing.read().unwrap().contains(query) {
            return Err(DiscoveryError::provider(std::io::Error::other(
                "mock crawler failure",
            )));
        }
        Ok(self
            .records
            .read()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default())
    }
}
