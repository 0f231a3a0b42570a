//! Patent-family provider seam.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use crate::error::{DiscoveryError, Result};

/// A national-phase application inside a family breakdown.
#[derive(Debug, Clone)]
pub struct FamilyApplication {
    pub document_id: String,
    pub title: Option<String>,
}

impl FamilyApplication {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Expands a family publication into its worldwide applications, keyed by
/// filing year. An empty map means the publication was unknown to the
/// provider or had no family record.
#[async_trait]
pub trait FamilyProvider: Send + Sync {
    async fn worldwide_applications(
        &self,
        publication: &str,
        api_key: &str,
    ) -> Result<BTreeMap<String, Vec<FamilyApplication>>>;
}

/// Mock family provider for testing.
#[derive(Default)]
pub struct MockFamilyProvider {
    families: RwLock<HashMap<String, BTreeMap<String, Vec<FamilyApplication>>>>,
    failing: RwLock<std::collections::HashSet<String>>,
}

impl MockFamilyProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one publication's applications under a single year.
    pub fn with_family(self, publication: &str, year: &str, apps: Vec<FamilyApplication>) -> Self {
        self.families
            .write()
            .unwrap()
            .entry(publication.to_string())
            .or_default()
            .insert(year.to_string(), apps);
        self
    }

    /// Make one publication's lookup fail.
    pub fn with_failure(self, publication: &str) -> Self {
        self.failing.write().unwrap().insert(publication.to_string());
        self
    }
}

#[async_trait]
impl FamilyProvider for MockFamilyProvider {
    async fn worldwide_applications(
        &self,
        publication: &str,
        _api_key: &str,
    ) -> Result<BTreeMap<String, Vec<FamilyApplication>>> {
        if self.failing.read().unwrap().contains(publication) {
            return Err(DiscoveryError::provider(std::io::Error::other(
                "mock family failure",
            )));
        }
        Ok(self
            .families
            .read()
            .unwrap()
            .get(publication)
            .cloned()
            .unwrap_or_default())
    }
}
