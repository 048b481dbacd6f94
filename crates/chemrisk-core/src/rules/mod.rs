pub mod builtin;
pub mod schema;

use crate::error::ChemRiskError;
use crate::severity::Severity;
use schema::{ClassificationRuleSet, ExplosionRuleSet, GasRuleSet};
use serde::Deserialize;
use std::path::Path;

/// The three rule tables the detectors evaluate against.
#[derive(Debug, Clone)]
pub struct RuleLibrary {
    pub explosion: ExplosionRuleSet,
    pub gas: GasRuleSet,
    pub classification: ClassificationRuleSet,
}

impl RuleLibrary {
    /// Library backed by the builtin embedded tables.
    pub fn builtin() -> RuleLibrary {
        RuleLibrary {
            explosion: builtin::explosion_rules().clone(),
            gas: builtin::gas_rules().clone(),
            classification: builtin::classification_rules().clone(),
        }
    }

    /// Load a custom rule file. Each section is optional; omitted sections
    /// fall back to the builtin tables.
    pub fn from_file(path: &Path) -> Result<RuleLibrary, ChemRiskError> {
        let content = std::fs::read_to_string(path).map_err(|e| ChemRiskError::RuleFileLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let overrides: RuleFileDef =
            serde_json::from_str(&content).map_err(|e| ChemRiskError::RuleFileLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let library = RuleLibrary {
            explosion: overrides
                .explosion
                .unwrap_or_else(|| builtin::explosion_rules().clone()),
            gas: overrides.gas.unwrap_or_else(|| builtin::gas_rules().clone()),
            classification: overrides
                .classification
                .unwrap_or_else(|| builtin::classification_rules().clone()),
        };
        library.validate()?;
        Ok(library)
    }

    /// Validate all three tables.
    pub fn validate(&self) -> Result<(), ChemRiskError> {
        validate_explosion_rules(&self.explosion)?;
        validate_gas_rules(&self.gas)?;
        validate_classification_rules(&self.classification)?;
        Ok(())
    }
}

/// On-disk shape of a custom rule file: any subset of the three tables.
#[derive(Debug, Clone, Deserialize)]
struct RuleFileDef {
    #[serde(default)]
    explosion: Option<ExplosionRuleSet>,
    #[serde(default)]
    gas: Option<GasRuleSet>,
    #[serde(default)]
    classification: Option<ClassificationRuleSet>,
}

/// Validate the explosion/instability table.
pub fn validate_explosion_rules(rules: &ExplosionRuleSet) -> Result<(), ChemRiskError> {
    for indicator in &rules.indicators {
        if indicator.pattern.trim().is_empty() {
            return Err(ChemRiskError::RuleFileInvalid(
                "indicator pattern must not be empty".into(),
            ));
        }
        if indicator.risk.trim().is_empty() {
            return Err(ChemRiskError::RuleFileInvalid(format!(
                "indicator '{}' has no risk description",
                indicator.pattern
            )));
        }
    }

    if rules.explosive_h_patterns.is_empty() {
        return Err(ChemRiskError::RuleFileInvalid(
            "explosive_h_patterns must not be empty".into(),
        ));
    }
    if rules.explosive_pictogram.trim().is_empty() {
        return Err(ChemRiskError::RuleFileInvalid(
            "explosive_pictogram must not be empty".into(),
        ));
    }

    for (i, mix) in rules.mixtures.iter().enumerate() {
        validate_pattern_groups(&mix.group_a, &mix.group_b, &format!("mixture rule #{}", i + 1))?;
        if mix.risk.trim().is_empty() {
            return Err(ChemRiskError::RuleFileInvalid(format!(
                "mixture rule #{} has no risk description",
                i + 1
            )));
        }
        if mix.severity == Severity::Medium {
            return Err(ChemRiskError::RuleFileInvalid(format!(
                "mixture rule #{} must be 'high' or 'critical'",
                i + 1
            )));
        }
    }

    Ok(())
}

/// Validate the gas-reaction table.
pub fn validate_gas_rules(rules: &GasRuleSet) -> Result<(), ChemRiskError> {
    for reaction in &rules.reactions {
        if reaction.name.trim().is_empty() || reaction.gas.trim().is_empty() {
            return Err(ChemRiskError::RuleFileInvalid(
                "gas reaction must name its gas".into(),
            ));
        }
        validate_pattern_groups(
            &reaction.reactant_a,
            &reaction.reactant_b,
            &format!("gas reaction '{}'", reaction.name),
        )?;
    }
    Ok(())
}

/// Validate the classification table.
pub fn validate_classification_rules(rules: &ClassificationRuleSet) -> Result<(), ChemRiskError> {
    let mut seen = std::collections::BTreeSet::new();
    for class in &rules.classes {
        if class.label.trim().is_empty() {
            return Err(ChemRiskError::RuleFileInvalid(
                "classification label must not be empty".into(),
            ));
        }
        if !seen.insert(class.label.clone()) {
            return Err(ChemRiskError::RuleFileInvalid(format!(
                "duplicate classification label '{}'",
                class.label
            )));
        }
        if class.ghs_codes.is_empty() && class.h_patterns.is_empty() {
            return Err(ChemRiskError::RuleFileInvalid(format!(
                "classification '{}' matches nothing (no GHS codes, no H patterns)",
                class.label
            )));
        }
        if class.ghs_codes.iter().any(|c| c.trim().is_empty())
            || class.h_patterns.iter().any(|p| p.trim().is_empty())
        {
            return Err(ChemRiskError::RuleFileInvalid(format!(
                "classification '{}' contains an empty code or pattern",
                class.label
            )));
        }
    }
    Ok(())
}

/// Both groups of a two-group rule must be non-empty, contain no empty
/// patterns, and be disjoint (a shared pattern would make the rule fire on
/// a single match).
fn validate_pattern_groups(
    group_a: &[String],
    group_b: &[String],
    context: &str,
) -> Result<(), ChemRiskError> {
    if group_a.is_empty() || group_b.is_empty() {
        return Err(ChemRiskError::RuleFileInvalid(format!(
            "{context}: both pattern groups must be non-empty"
        )));
    }
    for pattern in group_a.iter().chain(group_b) {
        if pattern.trim().is_empty() {
            return Err(ChemRiskError::RuleFileInvalid(format!(
                "{context}: empty pattern"
            )));
        }
    }
    for a in group_a {
        if group_b.iter().any(|b| a.eq_ignore_ascii_case(b)) {
            return Err(ChemRiskError::RuleFileInvalid(format!(
                "{context}: pattern '{a}' appears in both groups"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::{GasReactionDef, IndicatorRuleDef, MixtureRuleDef};

    fn minimal_explosion() -> ExplosionRuleSet {
        ExplosionRuleSet {
            version: "1.0".into(),
            description: None,
            indicators: vec![IndicatorRuleDef {
                pattern: "peroxyde".into(),
                risk: "instable".into(),
            }],
            explosive_h_patterns: vec!["H200".into()],
            explosive_pictogram: "GHS01".into(),
            mixtures: vec![MixtureRuleDef {
                group_a: vec!["chlorate".into()],
                group_b: vec!["soufre".into()],
                risk: "réaction violente".into(),
                severity: Severity::Critical,
            }],
        }
    }

    #[test]
    fn test_valid_explosion_rules() {
        validate_explosion_rules(&minimal_explosion()).unwrap();
    }

    #[test]
    fn test_empty_indicator_pattern_rejected() {
        let mut rules = minimal_explosion();
        rules.indicators[0].pattern = "  ".into();
        assert!(validate_explosion_rules(&rules).is_err());
    }

    #[test]
    fn test_overlapping_mixture_groups_rejected() {
        let mut rules = minimal_explosion();
        rules.mixtures[0].group_b.push("Chlorate".into());
        let err = validate_explosion_rules(&rules).unwrap_err();
        assert!(err.to_string().contains("both groups"));
    }

    #[test]
    fn test_medium_mixture_severity_rejected() {
        let mut rules = minimal_explosion();
        rules.mixtures[0].severity = Severity::Medium;
        assert!(validate_explosion_rules(&rules).is_err());
    }

    #[test]
    fn test_gas_rule_empty_group_rejected() {
        let rules = GasRuleSet {
            version: "1.0".into(),
            description: None,
            reactions: vec![GasReactionDef {
                reactant_a: vec![],
                reactant_b: vec!["sulfure".into()],
                gas: "H₂S".into(),
                name: "Sulfure d'hydrogène".into(),
                danger_level: "toxique".into(),
                exposure_limit: "5 ppm".into(),
                symptoms: "irritation".into(),
            }],
        };
        assert!(validate_gas_rules(&rules).is_err());
    }

    #[test]
    fn test_classification_without_criteria_rejected() {
        let rules: ClassificationRuleSet = serde_json::from_str(
            r#"{
                "version": "1.0",
                "classes": [
                    { "label": "Vide", "ghs_codes": [], "h_patterns": [] }
                ]
            }"#,
        )
        .unwrap();
        assert!(validate_classification_rules(&rules).is_err());
    }

    #[test]
    fn test_duplicate_labels_rejected() {
        let rules: ClassificationRuleSet = serde_json::from_str(
            r#"{
                "version": "1.0",
                "classes": [
                    { "label": "Corrosif", "ghs_codes": ["GHS05"], "h_patterns": [] },
                    { "label": "Corrosif", "ghs_codes": ["GHS05"], "h_patterns": [] }
                ]
            }"#,
        )
        .unwrap();
        assert!(validate_classification_rules(&rules).is_err());
    }

    #[test]
    fn test_partial_rule_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial-rules.json");
        std::fs::write(
            &path,
            r#"{
                "gas": {
                    "version": "custom",
                    "reactions": [
                        {
                            "reactant_a": ["acide"],
                            "reactant_b": ["carbure"],
                            "gas": "C₂H₂",
                            "name": "Acétylène",
                            "danger_level": "Inflammable",
                            "exposure_limit": "Asphyxiant simple",
                            "symptoms": "Risque d'explosion"
                        }
                    ]
                }
            }"#,
        )
        .unwrap();

        let library = RuleLibrary::from_file(&path).unwrap();

        assert_eq!(library.gas.version, "custom");
        assert_eq!(library.gas.reactions.len(), 1);
        // Untouched sections come from the builtin tables.
        assert_eq!(library.explosion.version, builtin::explosion_rules().version);
        assert_eq!(library.classification.classes.len(), 8);
    }

    #[test]
    fn test_missing_rule_file_reports_path() {
        let err = RuleLibrary::from_file(Path::new("/nonexistent/rules.json")).unwrap_err();
        assert!(matches!(err, ChemRiskError::RuleFileLoad { .. }));
    }
}
