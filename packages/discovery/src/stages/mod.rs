//! Pipeline stages.
//!
//! Each stage issues its external calls one at a time with a fixed pause in
//! between, isolates per-call failures, and reports a typed outcome.

pub mod crawl;
pub mod family;
pub mod web_search;

pub use crawl::DirectCrawlStage;
pub use family::FamilyExpansionStage;
pub use web_search::WebSearchStage;
