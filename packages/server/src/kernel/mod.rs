//! Concrete provider wiring.
//!
//! Adapts the HTTP client crates to the discovery library's provider traits.

pub mod providers;

pub use providers::{
    InpiCrawlerProvider, PoolKeySource, PubChemProvider, SerpFamilyProvider, SerpSearchProvider,
};
