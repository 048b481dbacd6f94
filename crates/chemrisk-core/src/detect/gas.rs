use crate::detect::explosion::groups_satisfied;
use crate::detect::outcome::{GasFinding, GasReport};
use crate::model::Substance;
use crate::rules::schema::GasRuleSet;
use crate::AssessOptions;

/// Evaluate the gas-formation rules against a substance list.
///
/// A single substance cannot react, so lists shorter than two produce an
/// empty report. Matched rules are returned in declaration order with no
/// deduplication or ranking.
pub fn detect_gas_risks(
    substances: &[Substance],
    rules: &GasRuleSet,
    options: &AssessOptions,
) -> GasReport {
    if substances.len() < 2 {
        return GasReport::default();
    }

    let mut findings = Vec::new();
    for reaction in &rules.reactions {
        if !groups_satisfied(substances, &reaction.reactant_a, &reaction.reactant_b, options) {
            continue;
        }
        findings.push(GasFinding {
            gas: reaction.gas.clone(),
            name: reaction.name.clone(),
            danger_level: reaction.danger_level.clone(),
            exposure_limit: reaction.exposure_limit.clone(),
            symptoms: reaction.symptoms.clone(),
            matched_reactants_a: matching_names(substances, &reaction.reactant_a),
            matched_reactants_b: matching_names(substances, &reaction.reactant_b),
        });
    }

    GasReport { findings }
}

fn matching_names(substances: &[Substance], patterns: &[String]) -> Vec<String> {
    substances
        .iter()
        .filter(|s| s.name_matches_any(patterns))
        .map(|s| s.name.clone())
        .collect()
}
