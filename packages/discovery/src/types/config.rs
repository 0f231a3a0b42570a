use std::time::Duration;

/// Bounds and pacing for one pipeline run.
///
/// The pauses implement the cooperative contract with the providers: one
/// in-flight call per stage, a fixed minimum interval between calls. Tests
/// zero them out.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Document-number prefix of the target jurisdiction.
    pub jurisdiction_prefix: String,
    /// How many dev codes become their own web-search queries.
    pub max_code_queries: usize,
    /// How many family candidates get expanded.
    pub max_candidates: usize,
    /// How many dev codes become crawler queries.
    pub max_crawl_codes: usize,
    /// Cap on the total crawler query list.
    pub max_crawl_queries: usize,
    pub search_pause: Duration,
    pub family_pause: Duration,
    pub crawl_pause: Duration,
    /// Expectation baseline for the coverage block.
    pub expected_baseline: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            jurisdiction_prefix: "BR".to_string(),
            max_code_queries: 3,
            max_candidates: 5,
            max_crawl_codes: 8,
            max_crawl_queries: 12,
            search_pause: Duration::from_millis(500),
            family_pause: Duration::from_secs(1),
            crawl_pause: Duration::from_secs(1),
            expected_baseline: 8,
        }
    }
}

impl PipelineConfig {
    /// Config with all pacing removed, for tests.
    pub fn unpaced() -> Self {
        Self {
            search_pause: Duration::ZERO,
            family_pause: Duration::ZERO,
            crawl_pause: Duration::ZERO,
            ..Default::default()
        }
    }
}
