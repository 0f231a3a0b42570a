//! End-to-end pipeline tests over mock providers.
//!
//! The fictitious molecule "orexolam" walks the happy path: one dev code,
//! one CAS number, one WO candidate from search, one BR filing from family
//! expansion, nothing from the crawler.

use std::sync::Arc;

use discovery::{
    CoverageStatus, CrawledRecord, DiscoveryPipeline, FamilyApplication, IdentifiedBy,
    MockChemistryProvider, MockCrawler, MockFamilyProvider, MockKeySource, MockWebSearch,
    PipelineConfig, SearchReport, SourceStatus, WebHit,
};

struct Providers {
    chemistry: MockChemistryProvider,
    searcher: MockWebSearch,
    family: MockFamilyProvider,
    crawler: MockCrawler,
    keys: MockKeySource,
}

impl Providers {
    fn orexolam() -> Self {
        Self {
            chemistry: MockChemistryProvider::new().with_synonyms(&[
                "OREX-123",
                "999-88-7",
                "Orexolam sodium",
            ]),
            searcher: MockWebSearch::new().with_hits(
                "orexolam patent WO2020",
                vec![WebHit::new(
                    "WO2020123456 - Orexolam derivatives",
                    "publication WO 2020 123456",
                    "https://patents.google.com/patent/WO2020123456",
                )],
            ),
            family: MockFamilyProvider::new().with_family(
                "WO2020123456",
                "2020",
                vec![
                    FamilyApplication::new("BR112020012345").with_title("Derivados de orexolam"),
                    FamilyApplication::new("US20210000001"),
                ],
            ),
            crawler: MockCrawler::new(),
            keys: MockKeySource::new(),
        }
    }

    async fn run(self) -> SearchReport {
        let pipeline = DiscoveryPipeline::new(
            Arc::new(self.chemistry),
            Arc::new(self.searcher),
            Arc::new(self.family),
            Arc::new(self.crawler),
            Arc::new(self.keys),
            PipelineConfig::unpaced(),
        );
        pipeline.run("orexolam").await.unwrap()
    }
}

#[tokio::test]
async fn orexolam_end_to_end() {
    let report = Providers::orexolam().run().await;

    assert_eq!(report.molecule, "orexolam");
    assert_eq!(report.chemistry.dev_codes, vec!["OREX-123"]);
    assert_eq!(report.chemistry.cas.as_deref(), Some("999-88-7"));

    assert_eq!(report.family_candidates, vec!["WO2020123456"]);

    assert_eq!(report.patents.len(), 1);
    let record = &report.patents[0];
    assert_eq!(record.number.as_deref(), Some("BR112020012345"));
    assert_eq!(record.family_source.as_deref(), Some("WO2020123456"));
    assert_eq!(record.identified_by, IdentifiedBy::DocumentNumber);

    assert_eq!(report.statistics.total_br_patents, 1);
    assert_eq!(report.statistics.br_from_family, 1);
    assert_eq!(report.statistics.br_from_crawler, 0);
    assert_eq!(report.statistics.dev_codes, 1);

    assert_eq!(report.sources.chemistry, SourceStatus::Ok);
    assert_eq!(report.sources.web_search, SourceStatus::Ok);
    assert_eq!(report.sources.family_expansion, SourceStatus::Ok);
    assert_eq!(report.sources.crawler, SourceStatus::Empty);

    assert_eq!(report.coverage.status, CoverageStatus::Low);
    assert_eq!(report.coverage.match_rate, "12%");
}

#[tokio::test]
async fn dead_chemistry_provider_degrades_not_fails() {
    let mut providers = Providers::orexolam();
    providers.chemistry = MockChemistryProvider::new()
        .failing_synonyms()
        .failing_properties();

    let report = providers.run().await;

    // No dev codes, but the name-based search templates still ran and the
    // candidate was still found and expanded.
    assert!(report.chemistry.dev_codes.is_empty());
    assert_eq!(report.sources.chemistry, SourceStatus::Failed);
    assert_eq!(report.statistics.total_br_patents, 1);
}

#[tokio::test]
async fn exhausted_pool_skips_search_but_crawler_still_reports() {
    let mut providers = Providers::orexolam();
    providers.keys = MockKeySource::exhausted();
    providers.crawler = MockCrawler::new().with_records(
        "orexolam",
        vec![CrawledRecord::titled("DERIVADOS DE OREXOLAM")],
    );

    let report = providers.run().await;

    assert_eq!(report.sources.web_search, SourceStatus::Skipped);
    // No candidates means family expansion never ran either.
    assert_eq!(report.sources.family_expansion, SourceStatus::Skipped);

    // The crawler needs no credential and still delivered.
    assert_eq!(report.statistics.total_br_patents, 1);
    assert_eq!(report.patents[0].identified_by, IdentifiedBy::Title);
}

#[tokio::test]
async fn family_and_crawler_records_merge_under_one_identity() {
    let mut providers = Providers::orexolam();
    providers.crawler = MockCrawler::new().with_records(
        "orexolam",
        vec![
            // Same filing as family expansion finds, different spelling.
            CrawledRecord {
                number: Some("br 11 2020 012345".to_string()),
                title: Some("Derivados de orexolam".to_string()),
                extra: Default::default(),
            },
            CrawledRecord::titled("USO DE OREXOLAM EM TERAPIA"),
        ],
    );

    let report = providers.run().await;

    assert_eq!(report.statistics.br_from_family, 1);
    assert_eq!(report.statistics.br_from_crawler, 2);
    assert_eq!(report.statistics.total_br_patents, 2);

    // The family record came first in the concatenation and survived.
    assert_eq!(report.patents[0].number.as_deref(), Some("BR112020012345"));
    assert_eq!(report.patents[1].identified_by, IdentifiedBy::Title);
}
