//! Family expansion into national-phase filings.

use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;
use crate::traits::{FamilyProvider, KeySource};
use crate::types::{IdentifiedBy, PatentRecord, SourceStatus, StageOutcome};

pub struct FamilyExpansionStage {
    provider: Arc<dyn FamilyProvider>,
    keys: Arc<dyn KeySource>,
    jurisdiction_prefix: String,
    max_candidates: usize,
    pause: Duration,
}

impl FamilyExpansionStage {
    pub fn new(
        provider: Arc<dyn FamilyProvider>,
        keys: Arc<dyn KeySource>,
        jurisdiction_prefix: impl Into<String>,
        max_candidates: usize,
        pause: Duration,
    ) -> Self {
        Self {
            provider,
            keys,
            jurisdiction_prefix: jurisdiction_prefix.into(),
            max_candidates,
            pause,
        }
    }

    /// Expand a bounded prefix of the candidate list. One candidate's
    /// failure never affects the others.
    pub async fn expand_all(&self, candidates: &[String]) -> StageOutcome<Vec<PatentRecord>> {
        if candidates.is_empty() {
            return StageOutcome::new(Vec::new(), SourceStatus::Skipped);
        }

        let mut records: Vec<PatentRecord> = Vec::new();
        let mut attempted = 0usize;
        let mut failed = 0usize;

        for candidate in candidates.iter().take(self.max_candidates) {
            attempted += 1;
            tracing::info!(candidate = %candidate, "Expanding family");
            match self.expand_one(candidate).await {
                Ok(found) => records.extend(found),
                Err(e) => {
                    failed += 1;
                    tracing::warn!(candidate = %candidate, error = %e, "Family expansion failed, skipping");
                }
            }

            if !self.pause.is_zero() {
                tokio::time::sleep(self.pause).await;
            }
        }

        let status = if !records.is_empty() {
            SourceStatus::Ok
        } else if failed == attempted {
            SourceStatus::Failed
        } else {
            SourceStatus::Empty
        };
        StageOutcome::new(records, status)
    }

    async fn expand_one(&self, candidate: &str) -> Result<Vec<PatentRecord>> {
        // An exhausted key is still used here: the provider's own quota
        // answer decides, not us.
        let issued = self.keys.acquire().await?;
        let by_year = self
            .provider
            .worldwide_applications(candidate, &issued.key)
            .await?;

        let mut records = Vec::new();
        for applications in by_year.into_values() {
            for application in applications {
                if !application.document_id.starts_with(&self.jurisdiction_prefix) {
                    continue;
                }
                tracing::info!(
                    document = %application.document_id,
                    source = candidate,
                    "Found national-phase filing"
                );
                records.push(PatentRecord {
                    link: Some(PatentRecord::canonical_link(&application.document_id)),
                    number: Some(application.document_id),
                    family_source: Some(candidate.to_string()),
                    title: application.title,
                    identified_by: IdentifiedBy::DocumentNumber,
                });
            }
        }
        Ok(records)
    }
}
