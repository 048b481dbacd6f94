use crate::classify::outcome::{ClassOccurrence, ClassificationReport, ClassifiedSubstance};
use crate::model::Substance;
use crate::rules::schema::{ClassRuleDef, ClassificationRuleSet};

/// Assign each substance to its GHS classification buckets and compute the
/// per-bucket occurrence summary.
///
/// A substance belongs to a bucket when its GHS pictogram set intersects the
/// bucket's GHS codes OR any of its H-codes contains any bucket H-pattern.
/// Membership is not exclusive; empty hazard data degrades to an empty
/// classification, never an error.
pub fn classify_substances(
    substances: &[Substance],
    rules: &ClassificationRuleSet,
) -> ClassificationReport {
    let classified: Vec<ClassifiedSubstance> = substances
        .iter()
        .map(|substance| ClassifiedSubstance {
            substance: substance.clone(),
            classes: rules
                .classes
                .iter()
                .filter(|class| belongs_to(substance, class))
                .map(|class| class.label.clone())
                .collect(),
        })
        .collect();

    let summary: Vec<ClassOccurrence> = rules
        .classes
        .iter()
        .map(|class| ClassOccurrence {
            label: class.label.clone(),
            count: classified
                .iter()
                .filter(|c| c.classes.contains(&class.label))
                .count(),
        })
        .filter(|occurrence| occurrence.count > 0)
        .collect();

    ClassificationReport {
        substances: classified,
        summary,
    }
}

fn belongs_to(substance: &Substance, class: &ClassRuleDef) -> bool {
    class.ghs_codes.iter().any(|code| substance.has_ghs(code))
        || substance.h_code_matches_any(&class.h_patterns)
}
