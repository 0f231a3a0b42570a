//! Merging, deduplication and report assembly.
//!
//! One canonical identity per record regardless of origin: the normalized
//! document number when there is one, else the normalized title (marked as a
//! weak identity), else the record is unidentifiable and dropped.

use std::collections::HashSet;
use std::time::Duration;

use crate::normalize::normalize_id;
use crate::types::{
    ChemicalProfile, Coverage, CoverageStatus, CrawledRecord, IdentifiedBy, PatentRecord,
    SearchReport, Sources, Statistics,
};

pub struct Aggregator {
    expected_baseline: usize,
}

impl Aggregator {
    pub fn new(expected_baseline: usize) -> Self {
        Self { expected_baseline }
    }

    /// Assemble the final report from everything the stages gathered.
    pub fn aggregate(
        &self,
        profile: ChemicalProfile,
        family_candidates: Vec<String>,
        family_records: Vec<PatentRecord>,
        crawl_records: Vec<CrawledRecord>,
        sources: Sources,
        elapsed: Duration,
    ) -> SearchReport {
        let br_from_family = family_records.len();
        let br_from_crawler = crawl_records.len();

        let merged = merge_records(family_records, crawl_records);
        let found = merged.len();

        let statistics = Statistics {
            total_br_patents: found,
            family_candidates_found: family_candidates.len(),
            br_from_family,
            br_from_crawler,
            dev_codes: profile.dev_codes.len(),
            execution_time: (elapsed.as_secs_f64() * 100.0).round() / 100.0,
        };

        SearchReport {
            molecule: profile.molecule.clone(),
            chemistry: profile,
            family_candidates,
            patents: merged,
            statistics,
            sources,
            coverage: self.coverage(found),
        }
    }

    fn coverage(&self, found: usize) -> Coverage {
        let expected = self.expected_baseline;
        let rate = if expected == 0 {
            100
        } else {
            (found * 100 / expected).min(100)
        };
        let status = if found * 4 >= expected * 3 {
            CoverageStatus::Excellent
        } else {
            CoverageStatus::Low
        };
        Coverage {
            expected,
            found,
            match_rate: format!("{rate}%"),
            status,
        }
    }
}

/// Concatenate family records and crawler records, keeping the first
/// occurrence per identity key.
fn merge_records(
    family_records: Vec<PatentRecord>,
    crawl_records: Vec<CrawledRecord>,
) -> Vec<PatentRecord> {
    let converted = crawl_records.into_iter().map(|record| PatentRecord {
        link: record.number.as_deref().map(PatentRecord::canonical_link),
        number: record.number,
        family_source: None,
        title: record.title,
        // Placeholder; the merge below re-keys every record.
        identified_by: IdentifiedBy::Title,
    });

    let mut seen: HashSet<String> = HashSet::new();
    let mut unique: Vec<PatentRecord> = Vec::new();

    for mut record in family_records.into_iter().chain(converted) {
        let number_key = record
            .number
            .as_deref()
            .map(normalize_id)
            .filter(|k| !k.is_empty());
        let title_key = record
            .title
            .as_deref()
            .map(normalize_id)
            .filter(|k| !k.is_empty());

        let (key, identified_by) = match (number_key, title_key) {
            (Some(key), _) => (key, IdentifiedBy::DocumentNumber),
            (None, Some(key)) => (key, IdentifiedBy::Title),
            (None, None) => {
                tracing::debug!("Dropping unidentifiable record");
                continue;
            }
        };

        if seen.insert(key) {
            record.identified_by = identified_by;
            unique.push(record);
        }
    }
    unique
}
