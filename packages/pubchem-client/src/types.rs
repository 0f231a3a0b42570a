use serde::Deserialize;

/// Envelope for `/compound/name/{name}/synonyms/JSON`.
#[derive(Debug, Clone, Deserialize)]
pub struct SynonymsResponse {
    #[serde(rename = "InformationList")]
    pub information_list: InformationList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InformationList {
    #[serde(rename = "Information", default)]
    pub information: Vec<Information>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Information {
    #[serde(rename = "CID")]
    pub cid: Option<u64>,
    #[serde(rename = "Synonym", default)]
    pub synonyms: Vec<String>,
}

/// Envelope for `/compound/name/{name}/JSON` (full compound record).
#[derive(Debug, Clone, Deserialize)]
pub struct CompoundResponse {
    #[serde(rename = "PC_Compounds", default)]
    pub compounds: Vec<Compound>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Compound {
    #[serde(default)]
    pub props: Vec<CompoundProperty>,
}

/// One row of the compound property table.
///
/// PubChem qualifies some labels with a `name` (e.g. `SMILES`/`Canonical`,
/// `InChI`/`Standard`); callers match on both when they need a specific
/// variant.
#[derive(Debug, Clone, Deserialize)]
pub struct CompoundProperty {
    #[serde(default)]
    pub urn: PropertyUrn,
    #[serde(default)]
    pub value: PropertyValue,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyUrn {
    #[serde(default)]
    pub label: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyValue {
    pub sval: Option<String>,
    pub fval: Option<f64>,
}

impl CompoundProperty {
    /// String value of the property, if it carries one.
    pub fn string_value(&self) -> Option<&str> {
        self.value.sval.as_deref()
    }
}
