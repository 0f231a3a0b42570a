//! Provider trait seams.
//!
//! The pipeline only ever talks to these traits; concrete HTTP clients are
//! adapted to them at the application edge. Each trait ships a mock next to
//! it for tests.

pub mod chemistry;
pub mod crawler;
pub mod family;
pub mod keys;
pub mod searcher;

pub use chemistry::{ChemistryProvider, MockChemistryProvider, PropertyEntry};
pub use crawler::{JurisdictionCrawler, MockCrawler};
pub use family::{FamilyApplication, FamilyProvider, MockFamilyProvider};
pub use keys::{IssuedKey, KeySource, MockKeySource};
pub use searcher::{MockWebSearch, WebHit, WebSearchProvider};
