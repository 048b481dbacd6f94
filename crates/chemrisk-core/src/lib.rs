pub mod classify;
pub mod detect;
pub mod error;
pub mod model;
pub mod rules;
pub mod severity;

use classify::outcome::ClassificationReport;
use detect::outcome::{ExplosionReport, GasReport};
use error::ChemRiskError;
use model::Substance;
use rules::RuleLibrary;
use serde::{Deserialize, Serialize};

/// Evaluation knobs shared by the detectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessOptions {
    /// Require two distinct substances to satisfy the two pattern groups of
    /// a mixture or gas-reaction rule. Off by default: the original
    /// behavior accepts a single substance matching both groups.
    pub require_distinct_reactants: bool,
}

/// Combined result of the three detectors. Pure function of the input list;
/// holds no identity across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HazardAssessment {
    pub explosion: ExplosionReport,
    pub gas: GasReport,
    pub classification: ClassificationReport,
}

/// Main API entry point: run all three detectors over a substance list.
pub fn assess(
    substances: &[Substance],
    library: &RuleLibrary,
    options: &AssessOptions,
) -> HazardAssessment {
    HazardAssessment {
        explosion: detect::detect_explosion_risks(substances, &library.explosion, options),
        gas: detect::detect_gas_risks(substances, &library.gas, options),
        classification: classify::classify_substances(substances, &library.classification),
    }
}

/// Parse a caller-supplied substance list from JSON.
///
/// Accepts either a bare array or an object with a `substances` field, the
/// two shapes produced by the surrounding application.
pub fn parse_substances(json: &str) -> Result<Vec<Substance>, ChemRiskError> {
    #[derive(Deserialize)]
    struct Wrapper {
        substances: Vec<Substance>,
    }

    serde_json::from_str::<Vec<Substance>>(json)
        .or_else(|_| serde_json::from_str::<Wrapper>(json).map(|w| w.substances))
        .map_err(|e| ChemRiskError::SubstanceParse(e.to_string()))
}
