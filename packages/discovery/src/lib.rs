//! Multi-source BR patent discovery.
//!
//! Correlates four independent external providers to find Brazilian
//! national-phase filings for a pharmaceutical molecule:
//!
//! 1. The chemistry provider resolves the molecule into dev codes, a CAS
//!    number and chemical descriptors.
//! 2. The query planner derives a bounded, ordered query list from the name
//!    and its codes.
//! 3. The web-search stage scans result text for WO family candidates.
//! 4. Family expansion resolves each candidate into its worldwide
//!    applications and keeps the BR filings.
//! 5. The direct crawl asks the jurisdiction crawler the same questions
//!    independently.
//! 6. The aggregator merges both record streams under one identity scheme
//!    and scores coverage.
//!
//! Best-effort by design: every provider failure is contained at the
//! smallest granularity (one query, one candidate) and surfaces as a typed
//! per-source status, never as a failed run.
//!
//! The library only talks to provider traits ([`traits`]); HTTP clients are
//! adapted to them by the application. Every trait ships a mock, so the
//! whole pipeline runs in tests without a network.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use discovery::{DiscoveryPipeline, PipelineConfig};
//!
//! let pipeline = DiscoveryPipeline::new(
//!     chemistry, searcher, family, crawler, keys,
//!     PipelineConfig::default(),
//! );
//!
//! let report = pipeline.run("darolutamide").await?;
//! println!("{} unique BR filings", report.statistics.total_br_patents);
//! ```

pub mod aggregate;
pub mod chemistry;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod planner;
pub mod stages;
pub mod traits;
pub mod types;

pub use aggregate::Aggregator;
pub use chemistry::ChemistryLookup;
pub use error::{DiscoveryError, Result};
pub use normalize::{extract_family_ids, normalize_id};
pub use pipeline::DiscoveryPipeline;
pub use planner::plan_queries;
pub use stages::{DirectCrawlStage, FamilyExpansionStage, WebSearchStage};
pub use traits::{
    ChemistryProvider, FamilyApplication, FamilyProvider, IssuedKey, JurisdictionCrawler,
    KeySource, MockChemistryProvider, MockCrawler, MockFamilyProvider, MockKeySource,
    MockWebSearch, PropertyEntry, WebHit, WebSearchProvider,
};
pub use types::{
    ChemicalProfile, Coverage, CoverageStatus, CrawledRecord, IdentifiedBy, PatentRecord,
    PipelineConfig, SearchReport, SourceStatus, Sources, StageOutcome, Statistics,
};
