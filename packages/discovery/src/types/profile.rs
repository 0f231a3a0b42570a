use serde::Serialize;

/// Everything the chemistry provider knows about a molecule.
///
/// Built once per search request and immutable afterwards. Every field
/// degrades to empty/`None` when the provider is unreachable so the rest of
/// the pipeline can keep going.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChemicalProfile {
    /// The molecule name as given by the caller.
    pub molecule: String,
    /// Developer codes (e.g. `ODM-201`), first-seen order, deduplicated.
    pub dev_codes: Vec<String>,
    /// CAS registry number, first match wins.
    pub cas: Option<String>,
    pub iupac: Option<String>,
    pub molecular_formula: Option<String>,
    pub molecular_weight: Option<String>,
    pub smiles: Option<String>,
    pub inchi: Option<String>,
    pub inchi_key: Option<String>,
    /// General synonyms kept verbatim, capped.
    pub synonyms: Vec<String>,
}

impl ChemicalProfile {
    pub fn empty(molecule: impl Into<String>) -> Self {
        Self {
            molecule: molecule.into(),
            ..Default::default()
        }
    }

    /// Whether any descriptor or identifier was resolved.
    pub fn has_data(&self) -> bool {
        !self.dev_codes.is_empty()
            || self.cas.is_some()
            || self.molecular_formula.is_some()
            || self.iupac.is_some()
            || !self.synonyms.is_empty()
    }
}
