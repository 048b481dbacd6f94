use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// Rule table for the explosion/instability detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionRuleSet {
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Single-substance name indicators.
    pub indicators: Vec<IndicatorRuleDef>,
    /// H-code patterns that mark a substance as classified explosive.
    pub explosive_h_patterns: Vec<String>,
    /// GHS pictogram code that marks a substance as labelled explosive.
    pub explosive_pictogram: String,
    /// Two-group incompatible mixture rules.
    pub mixtures: Vec<MixtureRuleDef>,
}

/// A `(pattern, risk)` pair tested against a single substance name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorRuleDef {
    pub pattern: String,
    pub risk: String,
}

/// Satisfied when any substance name matches `group_a` and any substance
/// name matches `group_b`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixtureRuleDef {
    pub group_a: Vec<String>,
    pub group_b: Vec<String>,
    pub risk: String,
    pub severity: Severity,
}

/// Rule table for the dangerous gas-formation detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasRuleSet {
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    pub reactions: Vec<GasReactionDef>,
}

/// A two-reactant rule: fires when any substance name matches `reactant_a`
/// and any substance name matches `reactant_b`. The remaining fields are
/// descriptive and carried into the finding verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasReactionDef {
    pub reactant_a: Vec<String>,
    pub reactant_b: Vec<String>,
    /// Chemical formula of the evolved gas (e.g., "H₂S").
    pub gas: String,
    /// Gas name for display (e.g., "Sulfure d'hydrogène").
    pub name: String,
    pub danger_level: String,
    pub exposure_limit: String,
    pub symptoms: String,
}

/// Rule table for the GHS/H-code classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationRuleSet {
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    pub classes: Vec<ClassRuleDef>,
}

/// A classification bucket: a substance belongs when its GHS set intersects
/// `ghs_codes` or any of its H-codes contains any pattern in `h_patterns`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassRuleDef {
    pub label: String,
    pub ghs_codes: Vec<String>,
    pub h_patterns: Vec<String>,
}
