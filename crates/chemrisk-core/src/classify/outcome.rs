use crate::model::Substance;
use serde::{Deserialize, Serialize};

/// A substance together with the classification buckets it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedSubstance {
    pub substance: Substance,
    /// Bucket labels in table declaration order; empty when nothing matched.
    pub classes: Vec<String>,
}

/// Number of substances that fell into one bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassOccurrence {
    pub label: String,
    pub count: usize,
}

/// Result of the GHS/H-code classifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationReport {
    pub substances: Vec<ClassifiedSubstance>,
    /// Per-bucket occurrence counts, zero-hit buckets filtered out.
    pub summary: Vec<ClassOccurrence>,
}
