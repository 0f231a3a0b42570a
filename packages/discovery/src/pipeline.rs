//! Pipeline orchestration.
//!
//! One request runs its stages sequentially: chemistry profile, query plan,
//! web search, family expansion, direct crawl, aggregation. Every provider
//! failure is absorbed below this level; a run always produces a report.

use std::sync::Arc;
use std::time::Instant;

use crate::aggregate::Aggregator;
use crate::chemistry::ChemistryLookup;
use crate::error::Result;
use crate::planner::plan_queries;
use crate::stages::{DirectCrawlStage, FamilyExpansionStage, WebSearchStage};
use crate::traits::{
    ChemistryProvider, FamilyProvider, JurisdictionCrawler, KeySource, WebSearchProvider,
};
use crate::types::{PipelineConfig, SearchReport, Sources};

pub struct DiscoveryPipeline {
    chemistry: ChemistryLookup,
    web_search: WebSearchStage,
    family: FamilyExpansionStage,
    crawl: DirectCrawlStage,
    aggregator: Aggregator,
    config: PipelineConfig,
}

impl DiscoveryPipeline {
    pub fn new(
        chemistry: Arc<dyn ChemistryProvider>,
        searcher: Arc<dyn WebSearchProvider>,
        family: Arc<dyn FamilyProvider>,
        crawler: Arc<dyn JurisdictionCrawler>,
        keys: Arc<dyn KeySource>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            chemistry: ChemistryLookup::new(chemistry),
            web_search: WebSearchStage::new(searcher, keys.clone(), config.search_pause),
            family: FamilyExpansionStage::new(
                family,
                keys,
                config.jurisdiction_prefix.clone(),
                config.max_candidates,
                config.family_pause,
            ),
            crawl: DirectCrawlStage::new(
                crawler,
                config.max_crawl_codes,
                config.max_crawl_queries,
                config.crawl_pause,
            ),
            aggregator: Aggregator::new(config.expected_baseline),
            config,
        }
    }

    /// Run the full discovery pipeline for one molecule.
    pub async fn run(&self, molecule: &str) -> Result<SearchReport> {
        let started = Instant::now();
        tracing::info!(molecule, "Starting patent discovery");

        let chemistry = self.chemistry.lookup(molecule).await;

        let queries = plan_queries(
            molecule,
            &chemistry.data.dev_codes,
            self.config.max_code_queries,
        );
        let search = self.web_search.search_family_ids(&queries).await;

        let family = self.family.expand_all(&search.data).await;

        let crawl = self
            .crawl
            .crawl(
                molecule,
                &chemistry.data.dev_codes,
                chemistry.data.cas.as_deref(),
            )
            .await;

        let sources = Sources {
            chemistry: chemistry.status,
            web_search: search.status,
            family_expansion: family.status,
            crawler: crawl.status,
        };

        let report = self.aggregator.aggregate(
            chemistry.data,
            search.data,
            family.data,
            crawl.data,
            sources,
            started.elapsed(),
        );

        tracing::info!(
            molecule,
            total = report.statistics.total_br_patents,
            elapsed = report.statistics.execution_time,
            "Patent discovery complete"
        );
        Ok(report)
    }
}
