//! Family-candidate discovery through web search.
//!
//! Runs the planned queries against the search provider, one credential per
//! call, and scans every result's title, snippet and link for WO publication
//! references.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use crate::normalize::extract_family_ids;
use crate::traits::{KeySource, WebSearchProvider};
use crate::types::{SourceStatus, StageOutcome};

pub struct WebSearchStage {
    searcher: Arc<dyn WebSearchProvider>,
    keys: Arc<dyn KeySource>,
    pause: Duration,
}

impl WebSearchStage {
    pub fn new(
        searcher: Arc<dyn WebSearchProvider>,
        keys: Arc<dyn KeySource>,
        pause: Duration,
    ) -> Self {
        Self {
            searcher,
            keys,
            pause,
        }
    }

    /// Run every query and collect unique family candidates in first-seen
    /// order.
    ///
    /// A failed query is skipped; an exhausted key pool stops the whole
    /// stage, since searching without quota cannot succeed.
    pub async fn search_family_ids(&self, queries: &[String]) -> StageOutcome<Vec<String>> {
        let mut found: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut attempted = 0usize;
        let mut failed = 0usize;
        let mut pool_dry_at_start = false;

        tracing::info!(queries = queries.len(), "Searching for family candidates");

        for query in queries {
            let issued = match self.keys.acquire().await {
                Ok(issued) => issued,
                Err(e) => {
                    tracing::warn!(error = %e, "Key source failed, stopping search stage");
                    break;
                }
            };
            if issued.exhausted {
                tracing::warn!("Search quota exhausted, stopping remaining queries");
                pool_dry_at_start = attempted == 0;
                break;
            }

            attempted += 1;
            match self.searcher.search(query, &issued.key).await {
                Ok(hits) => {
                    for hit in &hits {
                        let text = format!("{} {} {}", hit.title, hit.snippet, hit.link);
                        for id in extract_family_ids(&text) {
                            if seen.insert(id.clone()) {
                                tracing::info!(candidate = %id, "Found family candidate");
                                found.push(id);
                            }
                        }
                    }
                    tracing::debug!(query, results = hits.len(), "Search query done");
                }
                Err(e) => {
                    failed += 1;
                    tracing::warn!(query, error = %e, "Search query failed, skipping");
                }
            }

            if !self.pause.is_zero() {
                tokio::time::sleep(self.pause).await;
            }
        }

        tracing::info!(total = found.len(), "Family candidate search complete");

        let status = if pool_dry_at_start {
            SourceStatus::Skipped
        } else if !found.is_empty() {
            SourceStatus::Ok
        } else if attempted > 0 && failed == attempted {
            SourceStatus::Failed
        } else {
            SourceStatus::Empty
        };
        StageOutcome::new(found, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{MockKeySource, MockWebSearch, WebHit};

    fn queries(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|q| q.to_string()).collect()
    }

    fn stage(searcher: MockWebSearch, keys: Arc<MockKeySource>) -> WebSearchStage {
        WebSearchStage::new(Arc::new(searcher), keys, Duration::ZERO)
    }

    #[tokio::test]
    async fn collects_candidates_in_first_seen_order() {
        let searcher = MockWebSearch::new()
            .with_hits(
                "q1",
                vec![WebHit::new(
                    "WO2020123456 compound",
                    "also mentions WO 2019 654321",
                    "https://example.com",
                )],
            )
            .with_hits(
                "q2",
                vec![WebHit::new(
                    "duplicate wo-2020/123456",
                    "",
                    "https://patents.google.com/patent/WO2021000111",
                )],
            );
        let keys = Arc::new(MockKeySource::new());

        let outcome = stage(searcher, keys.clone())
            .search_family_ids(&queries(&["q1", "q2"]))
            .await;

        assert_eq!(
            outcome.data,
            vec!["WO2020123456", "WO2019654321", "WO2021000111"]
        );
        assert_eq!(outcome.status, SourceStatus::Ok);
        // One credential per query.
        assert_eq!(keys.acquired(), 2);
    }

    #[tokio::test]
    async fn failed_query_is_skipped_not_fatal() {
        let searcher = MockWebSearch::new()
            .with_failure("q1")
            .with_hits("q2", vec![WebHit::new("WO2020123456", "", "")]);
        let keys = Arc::new(MockKeySource::new());

        let outcome = stage(searcher, keys)
            .search_family_ids(&queries(&["q1", "q2"]))
            .await;

        assert_eq!(outcome.data, vec!["WO2020123456"]);
        assert_eq!(outcome.status, SourceStatus::Ok);
    }

    #[tokio::test]
    async fn exhausted_pool_short_circuits_before_any_query() {
        let searcher = MockWebSearch::new().with_hits(
            "q1",
            vec![WebHit::new("WO2020123456", "", "")],
        );
        let keys = Arc::new(MockKeySource::exhausted());

        let outcome = stage(searcher, keys.clone())
            .search_family_ids(&queries(&["q1", "q2", "q3"]))
            .await;

        assert!(outcome.data.is_empty());
        assert_eq!(outcome.status, SourceStatus::Skipped);
        // Stopped at the first acquisition; no further keys were requested.
        assert_eq!(keys.acquired(), 1);
    }

    #[tokio::test]
    async fn all_queries_failing_reports_failed() {
        let searcher = MockWebSearch::new().with_failure("q1").with_failure("q2");
        let keys = Arc::new(MockKeySource::new());

        let outcome = stage(searcher, keys)
            .search_family_ids(&queries(&["q1", "q2"]))
            .await;

        assert!(outcome.data.is_empty());
        assert_eq!(outcome.status, SourceStatus::Failed);
    }

    #[tokio::test]
    async fn clean_run_with_no_matches_reports_empty() {
        let searcher = MockWebSearch::new().with_hits(
            "q1",
            vec![WebHit::new("nothing relevant", "", "")],
        );
        let keys = Arc::new(MockKeySource::new());

        let outcome = stage(searcher, keys).search_family_ids(&queries(&["q1"])).await;

        assert!(outcome.data.is_empty());
        assert_eq!(outcome.status, SourceStatus::Empty);
    }
}
