//! Direct jurisdiction-crawler search.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use crate::normalize::normalize_id;
use crate::traits::JurisdictionCrawler;
use crate::types::{CrawledRecord, SourceStatus, StageOutcome};

pub struct DirectCrawlStage {
    crawler: Arc<dyn JurisdictionCrawler>,
    max_codes: usize,
    max_queries: usize,
    pause: Duration,
}

impl DirectCrawlStage {
    pub fn new(
        crawler: Arc<dyn JurisdictionCrawler>,
        max_codes: usize,
        max_queries: usize,
        pause: Duration,
    ) -> Self {
        Self {
            crawler,
            max_codes,
            max_queries,
            pause,
        }
    }

    /// Query the crawler with every known name for the molecule and collect
    /// the union of results, deduplicated by normalized title.
    pub async fn crawl(
        &self,
        molecule: &str,
        dev_codes: &[String],
        cas: Option<&str>,
    ) -> StageOutcome<Vec<CrawledRecord>> {
        let queries = self.build_queries(molecule, dev_codes, cas);
        tracing::info!(queries = queries.len(), "Running crawler queries");

        let mut gathered: Vec<CrawledRecord> = Vec::new();
        let mut attempted = 0usize;
        let mut failed = 0usize;

        for query in &queries {
            attempted += 1;
            match self.crawler.search(query).await {
                Ok(records) if records.is_empty() => {
                    tracing::debug!(query, "Crawler query found nothing");
                }
                Ok(records) => {
                    tracing::info!(query, count = records.len(), "Crawler query hit");
                    gathered.extend(records);
                }
                Err(e) => {
                    failed += 1;
                    tracing::warn!(query, error = %e, "Crawler query failed, skipping");
                }
            }

            if !self.pause.is_zero() {
                tokio::time::sleep(self.pause).await;
            }
        }

        let unique = dedup_by_title(gathered);
        tracing::info!(unique = unique.len(), "Crawler stage complete");

        let status = if !unique.is_empty() {
            SourceStatus::Ok
        } else if attempted > 0 && failed == attempted {
            SourceStatus::Failed
        } else {
            SourceStatus::Empty
        };
        StageOutcome::new(unique, status)
    }

    /// Every plausible crawler spelling of the molecule, deduplicated and
    /// capped. Ordering is not significant for this stage.
    fn build_queries(&self, molecule: &str, dev_codes: &[String], cas: Option<&str>) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut queries: Vec<String> = Vec::new();

        let lowercase = molecule.to_lowercase();
        let mut candidates: Vec<&str> = vec![molecule, &lowercase];
        candidates.extend(dev_codes.iter().take(self.max_codes).map(String::as_str));
        if let Some(cas) = cas {
            candidates.push(cas);
        }

        for candidate in candidates {
            if queries.len() >= self.max_queries {
                break;
            }
            if seen.insert(candidate.to_string()) {
                queries.push(candidate.to_string());
            }
        }
        queries
    }
}

/// Keep the first record per normalized title; titleless records are
/// unidentifiable to the crawler's dedup and dropped here.
fn dedup_by_title(records: Vec<CrawledRecord>) -> Vec<CrawledRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::new();

    for record in records {
        let key = record
            .title
            .as_deref()
            .map(normalize_id)
            .unwrap_or_default();
        if !key.is_empty() && seen.insert(key) {
            unique.push(record);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockCrawler;

    fn codes(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|c| c.to_string()).collect()
    }

    #[tokio::test]
    async fn queries_all_names_and_unions_results() {
        let crawler = MockCrawler::new()
            .with_records(
                "Darolutamide",
                vec![CrawledRecord::titled("COMPOSTOS PIRAZOL")],
            )
            .with_records(
                "ODM-201",
                vec![CrawledRecord::titled("USO DE ANTAGONISTAS")],
            );
        let stage = DirectCrawlStage::new(Arc::new(crawler), 8, 12, Duration::ZERO);

        let outcome = stage
            .crawl("Darolutamide", &codes(&["ODM-201"]), Some("1297538-32-9"))
            .await;

        assert_eq!(outcome.data.len(), 2);
        assert_eq!(outcome.status, SourceStatus::Ok);
    }

    #[tokio::test]
    async fn dedups_by_normalized_title_first_wins() {
        let crawler = MockCrawler::new()
            .with_records(
                "mol",
                vec![
                    CrawledRecord::titled("COMPOSTOS PIRAZOL"),
                    CrawledRecord::titled("compostos -pirazol"),
                    CrawledRecord {
                        // Titleless: nothing to key on, dropped.
                        number: Some("BR102020001234".to_string()),
                        title: None,
                        extra: Default::default(),
                    },
                ],
            );
        let stage = DirectCrawlStage::new(Arc::new(crawler), 8, 12, Duration::ZERO);

        let outcome = stage.crawl("mol", &[], None).await;

        assert_eq!(outcome.data.len(), 1);
        assert_eq!(outcome.data[0].title.as_deref(), Some("COMPOSTOS PIRAZOL"));
    }

    #[tokio::test]
    async fn query_list_is_deduped_and_capped() {
        let crawler = Arc::new(MockCrawler::new());
        let stage = DirectCrawlStage::new(crawler, 8, 12, Duration::ZERO);

        // "aspirin" lowercase equals the input; only one query results.
        let queries = stage.build_queries("aspirin", &[], None);
        assert_eq!(queries, vec!["aspirin"]);

        let many: Vec<String> = (0..20).map(|i| format!("AB-{i:03}")).collect();
        let queries = stage.build_queries("Aspirin", &many, Some("50-78-2"));
        // molecule + lowercase + first 8 codes + cas = 11, under the cap
        assert_eq!(queries.len(), 11);

        let stage = DirectCrawlStage::new(Arc::new(MockCrawler::new()), 20, 12, Duration::ZERO);
        let queries = stage.build_queries("Aspirin", &many, Some("50-78-2"));
        assert_eq!(queries.len(), 12);
    }

    #[tokio::test]
    async fn failures_are_isolated_per_query() {
        let crawler = MockCrawler::new()
            .with_failure("mol")
            .with_records("MOL-123", vec![CrawledRecord::titled("TITULO")]);
        let stage = DirectCrawlStage::new(Arc::new(crawler), 8, 12, Duration::ZERO);

        let outcome = stage.crawl("mol", &codes(&["MOL-123"]), None).await;

        assert_eq!(outcome.data.len(), 1);
        assert_eq!(outcome.status, SourceStatus::Ok);
    }

    #[tokio::test]
    async fn all_failures_report_failed() {
        let crawler = MockCrawler::new().with_failure("mol");
        let stage = DirectCrawlStage::new(Arc::new(crawler), 8, 12, Duration::ZERO);

        let outcome = stage.crawl("mol", &[], None).await;

        assert!(outcome.data.is_empty());
        assert_eq!(outcome.status, SourceStatus::Failed);
    }
}
