use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A chemical substance as supplied by the caller (user input or an external
/// substance-lookup service).
///
/// Only `name`, `ghs_classes` and `h_codes` participate in rule matching.
/// The remaining fields are display metadata and are carried through
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Substance {
    pub name: String,
    /// GHS pictogram codes (e.g., "GHS01".."GHS09").
    #[serde(default)]
    pub ghs_classes: BTreeSet<String>,
    /// Hazard statement codes (e.g., "H220"), in the order supplied.
    #[serde(default)]
    pub h_codes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cas_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Substance {
    /// Build a substance from a bare name (empty hazard data).
    pub fn named(name: impl Into<String>) -> Substance {
        Substance {
            name: name.into(),
            ..Substance::default()
        }
    }

    /// Case-insensitive substring test against the substance name.
    pub fn name_contains(&self, pattern: &str) -> bool {
        self.name.to_lowercase().contains(&pattern.to_lowercase())
    }

    /// Test whether the name matches any pattern in a group.
    pub fn name_matches_any(&self, patterns: &[String]) -> bool {
        let lower = self.name.to_lowercase();
        patterns.iter().any(|p| lower.contains(&p.to_lowercase()))
    }

    /// GHS pictogram set membership.
    pub fn has_ghs(&self, code: &str) -> bool {
        self.ghs_classes.contains(code)
    }

    /// H-code containment: a code matches a pattern it *contains*
    /// ("H220" matches pattern "H22"), not only on equality.
    pub fn h_code_contains(&self, pattern: &str) -> bool {
        self.h_codes.iter().any(|h| h.contains(pattern))
    }

    /// Test whether any H-code contains any pattern in a group.
    pub fn h_code_matches_any(&self, patterns: &[String]) -> bool {
        patterns.iter().any(|p| self.h_code_contains(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_h_codes(name: &str, codes: &[&str]) -> Substance {
        Substance {
            h_codes: codes.iter().map(|c| c.to_string()).collect(),
            ..Substance::named(name)
        }
    }

    #[test]
    fn test_name_matching_is_case_insensitive() {
        let s = Substance::named("Peroxyde de Benzoyle");
        assert!(s.name_contains("peroxyde"));
        assert!(s.name_contains("PEROXYDE"));
        assert!(!s.name_contains("chlorate"));
    }

    #[test]
    fn test_h_code_containment_not_equality() {
        let s = with_h_codes("x", &["H220"]);
        assert!(s.h_code_contains("H220"));
        assert!(s.h_code_contains("H22"));
        assert!(!s.h_code_contains("H221"));
    }

    #[test]
    fn test_ghs_membership() {
        let s = Substance {
            ghs_classes: BTreeSet::from(["GHS01".to_string(), "GHS05".to_string()]),
            ..Substance::named("x")
        };
        assert!(s.has_ghs("GHS01"));
        assert!(!s.has_ghs("GHS02"));
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let s: Substance = serde_json::from_str(
            r#"{
                "name": "acide chlorhydrique",
                "ghsClasses": ["GHS05"],
                "hCodes": ["H314"],
                "casNumber": "7647-01-0"
            }"#,
        )
        .unwrap();
        assert_eq!(s.name, "acide chlorhydrique");
        assert!(s.has_ghs("GHS05"));
        assert_eq!(s.h_codes, vec!["H314"]);
        assert_eq!(s.cas_number.as_deref(), Some("7647-01-0"));

        // Missing hazard fields degrade to empty, never an error.
        let bare: Substance = serde_json::from_str(r#"{ "name": "eau" }"#).unwrap();
        assert!(bare.ghs_classes.is_empty());
        assert!(bare.h_codes.is_empty());
    }

    #[test]
    fn test_confidence_score_serializes_exactly() {
        let substance = Substance {
            confidence_score: Some(rust_decimal_macros::dec!(0.92)),
            ..Substance::named("toluène")
        };
        let json = serde_json::to_value(&substance).unwrap();
        assert_eq!(json["confidenceScore"], "0.92");
    }
}
