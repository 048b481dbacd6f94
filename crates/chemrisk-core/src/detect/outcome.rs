use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// What kind of rule produced an explosion-risk finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingKind {
    /// A name-pattern indicator matched a single substance.
    SubstanceIndicator,
    /// An explosive H-statement (H200-H205, H240, H241) was present.
    ClassificationHit,
    /// The explosive pictogram (GHS01) was present.
    PictogramHit,
    /// A two-group incompatible-mixture rule matched across the list.
    MixtureHit,
}

/// A single explosion-risk finding. Recomputed on every evaluation, never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub kind: FindingKind,
    /// Substance name, or "Mélange" for mixture findings.
    pub subject_label: String,
    pub description: String,
    pub severity: Severity,
}

/// Result of the explosion/instability detector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplosionReport {
    pub findings: Vec<Finding>,
    /// OR over finding severities. Callers must surface a blocking expert
    /// consultation advisory when set.
    pub has_critical: bool,
}

/// A matched gas-formation rule. Descriptive fields are carried from the
/// rule verbatim; there is no computed severity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasFinding {
    /// Chemical formula of the evolved gas (e.g., "H₂S").
    pub gas: String,
    /// Gas name for display (e.g., "Sulfure d'hydrogène").
    pub name: String,
    pub danger_level: String,
    pub exposure_limit: String,
    pub symptoms: String,
    /// Substance names that matched the first reactant group.
    pub matched_reactants_a: Vec<String>,
    /// Substance names that matched the second reactant group.
    pub matched_reactants_b: Vec<String>,
}

/// Result of the gas-formation detector, in rule declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasReport {
    pub findings: Vec<GasFinding>,
}
