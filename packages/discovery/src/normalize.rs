//! Identifier normalization and family-id extraction.
//!
//! Every source formats patent identifiers differently (`BR 10 2020 001234`,
//! `br-10-2020-001234`, …). One normalization function backs every dedup key
//! in the pipeline so records collapse regardless of origin.

use regex::Regex;
use std::sync::OnceLock;

/// Canonical dedup key: whitespace and hyphens stripped, uppercased.
pub fn normalize_id(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect::<String>()
        .to_uppercase()
}

/// WO publication references in free text: `WO`, optional separator, 4-digit
/// year, optional separator, 6-digit serial.
static WO_PATTERN: OnceLock<Regex> = OnceLock::new();

fn wo_pattern() -> &'static Regex {
    WO_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)WO[\s-]?(\d{4})[\s/]?(\d{6})").expect("literal pattern compiles")
    })
}

/// Extract every WO publication reference from a blob of text, normalized to
/// `WO{year}{serial}`. Duplicates within the text are kept; callers dedup
/// across texts to preserve first-seen order.
pub fn extract_family_ids(text: &str) -> Vec<String> {
    wo_pattern()
        .captures_iter(text)
        .map(|caps| format!("WO{}{}", &caps[1], &caps[2]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_separator_and_case_variants_to_one_key() {
        assert_eq!(normalize_id("BR 10 2020 001234"), "BR102020001234");
        assert_eq!(normalize_id("br-10-2020-001234"), "BR102020001234");
        assert_eq!(
            normalize_id("BR 10 2020 001234"),
            normalize_id("br-10-2020-001234")
        );
    }

    #[test]
    fn extracts_wo_references_in_all_spellings() {
        let text = "see WO2020123456, also WO 2019 654321 and wo-2021/111222";
        assert_eq!(
            extract_family_ids(text),
            vec!["WO2020123456", "WO2019654321", "WO2021111222"]
        );
    }

    #[test]
    fn ignores_short_serials() {
        assert!(extract_family_ids("WO2020 1234").is_empty());
    }
}
