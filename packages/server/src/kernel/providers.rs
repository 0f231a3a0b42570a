//! Adapters from the HTTP client crates to the discovery provider traits.
//!
//! Each adapter maps the client's response types into the discovery types
//! and boxes client errors at the seam. No retry or interpretation happens
//! here; the pipeline owns that policy.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

use discovery::{
    ChemistryProvider, CrawledRecord, DiscoveryError, FamilyApplication, FamilyProvider,
    IssuedKey, JurisdictionCrawler, KeySource, PropertyEntry, WebHit, WebSearchProvider,
};
use inpi_client::InpiClient;
use pubchem_client::PubChemClient;
use serpapi_client::{JsonFileStore, KeyPool, SerpApiClient};

/// PubChem as the chemistry provider.
pub struct PubChemProvider {
    client: PubChemClient,
}

impl PubChemProvider {
    pub fn new(client: PubChemClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChemistryProvider for PubChemProvider {
    async fn synonyms(&self, molecule: &str) -> discovery::Result<Vec<String>> {
        self.client
            .synonyms(molecule)
            .await
            .map_err(DiscoveryError::provider)
    }

    async fn properties(&self, molecule: &str) -> discovery::Result<Vec<PropertyEntry>> {
        let props = self
            .client
            .compound_properties(molecule)
            .await
            .map_err(DiscoveryError::provider)?;

        Ok(props
            .into_iter()
            .map(|p| PropertyEntry {
                label: p.urn.label,
                name: p.urn.name,
                value: p.value.sval,
            })
            .collect())
    }
}

/// SerpAPI Google search as the web-search provider.
pub struct SerpSearchProvider {
    client: Arc<SerpApiClient>,
}

impl SerpSearchProvider {
    pub fn new(client: Arc<SerpApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WebSearchProvider for SerpSearchProvider {
    async fn search(&self, query: &str, api_key: &str) -> discovery::Result<Vec<WebHit>> {
        let results = self
            .client
            .google_search(query, api_key)
            .await
            .map_err(DiscoveryError::provider)?;

        Ok(results
            .into_iter()
            .map(|r| WebHit {
                title: r.title,
                snippet: r.snippet,
                link: r.link,
            })
            .collect())
    }
}

/// SerpAPI Google Patents as the family provider.
pub struct SerpFamilyProvider {
    client: Arc<SerpApiClient>,
}

impl SerpFamilyProvider {
    pub fn new(client: Arc<SerpApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FamilyProvider for SerpFamilyProvider {
    async fn worldwide_applications(
        &self,
        publication: &str,
        api_key: &str,
    ) -> discovery::Result<BTreeMap<String, Vec<FamilyApplication>>> {
        let by_year = self
            .client
            .patent_family(publication, api_key)
            .await
            .map_err(DiscoveryError::provider)?;

        Ok(by_year
            .into_iter()
            .map(|(year, apps)| {
                let apps = apps
                    .into_iter()
                    .map(|a| FamilyApplication {
                        document_id: a.document_id,
                        title: a.title,
                    })
                    .collect();
                (year, apps)
            })
            .collect())
    }
}

/// The shared key pool as the pipeline's credential source.
pub struct PoolKeySource {
    pool: Arc<KeyPool<JsonFileStore>>,
}

impl PoolKeySource {
    pub fn new(pool: Arc<KeyPool<JsonFileStore>>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeySource for PoolKeySource {
    async fn acquire(&self) -> discovery::Result<IssuedKey> {
        let issued = self
            .pool
            .acquire()
            .await
            .map_err(DiscoveryError::credentials)?;
        Ok(IssuedKey {
            key: issued.key,
            exhausted: issued.exhausted,
        })
    }
}

/// The INPI crawler as the jurisdiction crawler.
pub struct InpiCrawlerProvider {
    client: InpiClient,
}

impl InpiCrawlerProvider {
    pub fn new(client: InpiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JurisdictionCrawler for InpiCrawlerProvider {
    async fn search(&self, query: &str) -> discovery::Result<Vec<CrawledRecord>> {
        let records = self
            .client
            .search(query)
            .await
            .map_err(DiscoveryError::provider)?;

        Ok(records
            .into_iter()
            .map(|r| CrawledRecord {
                number: r.number,
                title: r.title,
                extra: r.extra,
            })
            .collect())
    }
}
