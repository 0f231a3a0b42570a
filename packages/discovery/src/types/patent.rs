use serde::{Deserialize, Serialize};

/// Which key identified a record during deduplication.
///
/// Family-expansion records always carry a document number. Crawler records
/// sometimes only have a title; those are merged on the normalized title and
/// marked `Title` so consumers can treat them as weakly identified instead
/// of silently trusting the merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifiedBy {
    DocumentNumber,
    Title,
}

/// A national-phase patent filing, merged from any source.
#[derive(Debug, Clone, Serialize)]
pub struct PatentRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// The family publication this record was expanded from, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub identified_by: IdentifiedBy,
}

impl PatentRecord {
    /// Canonical Google Patents link for a document number.
    pub fn canonical_link(number: &str) -> String {
        format!("https://patents.google.com/patent/{number}")
    }
}

/// A record as returned by the jurisdiction crawler.
///
/// The crawler owns the shape; only `number` and `title` are interpreted,
/// the rest rides along in `extra` untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrawledRecord {
    pub number: Option<String>,
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CrawledRecord {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}
