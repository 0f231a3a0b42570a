use serde::Deserialize;
use std::collections::BTreeMap;

/// Envelope for `search.json` responses (any engine).
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,
}

/// One organic search result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub link: String,
    /// Continuation link to the full record (google_patents engine).
    pub serpapi_link: Option<String>,
}

/// Envelope for the continuation-link response of a patent record.
///
/// `worldwide_applications` maps a filing year to the national applications
/// of that year. SerpAPI occasionally puts non-list values under a year key;
/// those are skipped during conversion, so the raw value type stays loose.
#[derive(Debug, Clone, Deserialize)]
pub struct FamilyResponse {
    #[serde(default)]
    pub worldwide_applications: BTreeMap<String, serde_json::Value>,
}

/// A national-phase application inside a worldwide family breakdown.
#[derive(Debug, Clone, Deserialize)]
pub struct NationalApplication {
    #[serde(default)]
    pub document_id: String,
    pub title: Option<String>,
}

impl FamilyResponse {
    /// Flatten the year map into (year, applications) pairs, skipping years
    /// whose value is not a list.
    pub fn applications_by_year(self) -> BTreeMap<String, Vec<NationalApplication>> {
        self.worldwide_applications
            .into_iter()
            .filter_map(|(year, value)| {
                serde_json::from_value::<Vec<NationalApplication>>(value)
                    .ok()
                    .map(|apps| (year, apps))
            })
            .collect()
    }
}
