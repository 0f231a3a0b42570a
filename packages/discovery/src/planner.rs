//! Search query derivation.
//!
//! A fixed template set: likely filing years, the large pharma filers that
//! dominate BR national-phase entries, then one query per known dev code.
//! Order matters — it drives scan order downstream, and first occurrence
//! wins in every later dedup.

/// Publication-year prefixes worth probing for recent pharma filings.
const FILING_YEAR_TAGS: &[&str] = &["WO2019", "WO2020", "WO2021"];

/// Organizations that file large BR national-phase portfolios.
const LARGE_FILERS: &[&str] = &["Orion Corporation", "Bayer"];

/// Derive the ordered web-search query list for a molecule. Pure function of
/// its inputs.
pub fn plan_queries(molecule: &str, dev_codes: &[String], max_code_queries: usize) -> Vec<String> {
    let mut queries = Vec::new();

    for year in FILING_YEAR_TAGS {
        queries.push(format!("{molecule} patent {year}"));
    }
    for filer in LARGE_FILERS {
        queries.push(format!("{molecule} {filer} patent"));
    }
    for code in dev_codes.iter().take(max_code_queries) {
        queries.push(format!("{code} patent WO"));
    }

    queries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_templates_come_before_code_queries() {
        let codes = vec!["ODM-201".to_string()];
        let queries = plan_queries("darolutamide", &codes, 3);

        assert_eq!(
            queries,
            vec![
                "darolutamide patent WO2019",
                "darolutamide patent WO2020",
                "darolutamide patent WO2021",
                "darolutamide Orion Corporation patent",
                "darolutamide Bayer patent",
                "ODM-201 patent WO",
            ]
        );
    }

    #[test]
    fn code_queries_are_bounded() {
        let codes: Vec<String> = (0..10).map(|i| format!("AB-{i:03}")).collect();
        let queries = plan_queries("m", &codes, 3);

        let code_queries: Vec<_> = queries.iter().filter(|q| q.ends_with("patent WO")).collect();
        assert_eq!(code_queries.len(), 3);
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let codes = vec!["X-100".to_string()];
        assert_eq!(plan_queries("m", &codes, 3), plan_queries("m", &codes, 3));
    }
}
