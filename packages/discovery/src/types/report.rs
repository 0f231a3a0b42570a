use serde::Serialize;

use super::patent::PatentRecord;
use super::profile::ChemicalProfile;

/// How a stage ended, beyond whatever data it gathered.
///
/// Distinguishes "provider had nothing" from "provider failed" from "stage
/// never ran" so the aggregate report (and tests) don't have to guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceStatus {
    /// Ran and found something.
    Ok,
    /// Ran to completion, found nothing.
    Empty,
    /// Every call the stage attempted failed.
    Failed,
    /// A precondition stopped the stage from running.
    Skipped,
}

/// A stage's gathered data plus how the run went.
#[derive(Debug, Clone)]
pub struct StageOutcome<T> {
    pub data: T,
    pub status: SourceStatus,
}

impl<T> StageOutcome<T> {
    pub fn new(data: T, status: SourceStatus) -> Self {
        Self { data, status }
    }
}

/// Per-source outcome block of the report.
#[derive(Debug, Clone, Serialize)]
pub struct Sources {
    pub chemistry: SourceStatus,
    pub web_search: SourceStatus,
    pub family_expansion: SourceStatus,
    pub crawler: SourceStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    pub total_br_patents: usize,
    pub family_candidates_found: usize,
    pub br_from_family: usize,
    pub br_from_crawler: usize,
    pub dev_codes: usize,
    /// Wall-clock seconds for the whole pipeline run.
    pub execution_time: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageStatus {
    Excellent,
    Low,
}

/// Qualitative completeness signal against a fixed expectation baseline.
///
/// The baseline is a static benchmark for human readers, not something the
/// providers report.
#[derive(Debug, Clone, Serialize)]
pub struct Coverage {
    pub expected: usize,
    pub found: usize,
    pub match_rate: String,
    pub status: CoverageStatus,
}

/// The complete response envelope of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub molecule: String,
    pub chemistry: ChemicalProfile,
    pub family_candidates: Vec<String>,
    pub patents: Vec<PatentRecord>,
    pub statistics: Statistics,
    pub sources: Sources,
    pub coverage: Coverage,
}
