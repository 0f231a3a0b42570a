//! Chemistry metadata provider seam.

use async_trait::async_trait;

use crate::error::{DiscoveryError, Result};

/// One label/value row of a provider's property table.
///
/// Some labels are qualified by a variant name (e.g. `SMILES`/`Canonical`);
/// classification matches on both.
#[derive(Debug, Clone)]
pub struct PropertyEntry {
    pub label: String,
    pub name: Option<String>,
    pub value: Option<String>,
}

impl PropertyEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: None,
            value: Some(value.into()),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Resolves a molecule name against a chemistry metadata service.
#[async_trait]
pub trait ChemistryProvider: Send + Sync {
    /// All registered synonyms of the molecule.
    async fn synonyms(&self, molecule: &str) -> Result<Vec<String>>;

    /// The structured property table of the molecule.
    async fn properties(&self, molecule: &str) -> Result<Vec<PropertyEntry>>;
}

/// Mock chemistry provider for testing.
#[derive(Default)]
pub struct MockChemistryProvider {
    synonyms: Vec<String>,
    properties: Vec<PropertyEntry>,
    fail_synonyms: bool,
    fail_properties: bool,
}

impl MockChemistryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_synonyms(mut self, synonyms: &[&str]) -> Self {
        self.synonyms = synonyms.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_properties(mut self, properties: Vec<PropertyEntry>) -> Self {
        self.properties = properties;
        self
    }

    /// Make the synonym call fail.
    pub fn failing_synonyms(mut self) -> Self {
        self.fail_synonyms = true;
        self
    }

    /// Make the property call fail.
    pub fn failing_properties(mut self) -> Self {
        self.fail_properties = true;
        self
    }
}

#[async_trait]
impl ChemistryProvider for MockChemistryProvider {
    async fn synonyms(&self, _molecule: &str) -> Result<Vec<String>> {
        if self.fail_synonyms {
            return Err(DiscoveryError::provider(std::io::Error::other(
                "mock synonym failure",
            )));
        }
        Ok(self.synonyms.clone())
    }

    async fn properties(&self, _molecule: &str) -> Result<Vec<PropertyEntry>> {
        if self.fail_properties {
            return Err(DiscoveryError::provider(std::io::Error::other(
                "mock property failure",
            )));
        }
        Ok(self.properties.clone())
    }
}
