use super::schema::{ClassificationRuleSet, ExplosionRuleSet, GasRuleSet};
use std::sync::LazyLock;

const EXPLOSION_RISKS_JSON: &str = include_str!("../../../../rules/explosion-risks.json");
const GAS_REACTIONS_JSON: &str = include_str!("../../../../rules/gas-reactions.json");
const GHS_CLASSES_JSON: &str = include_str!("../../../../rules/ghs-classes.json");

static EXPLOSION_RULES: LazyLock<ExplosionRuleSet> = LazyLock::new(|| {
    serde_json::from_str(EXPLOSION_RISKS_JSON).expect("embedded explosion-risks.json is valid")
});

static GAS_RULES: LazyLock<GasRuleSet> = LazyLock::new(|| {
    serde_json::from_str(GAS_REACTIONS_JSON).expect("embedded gas-reactions.json is valid")
});

static CLASSIFICATION_RULES: LazyLock<ClassificationRuleSet> = LazyLock::new(|| {
    serde_json::from_str(GHS_CLASSES_JSON).expect("embedded ghs-classes.json is valid")
});

/// Get the builtin explosion/instability rule table.
pub fn explosion_rules() -> &'static ExplosionRuleSet {
    &EXPLOSION_RULES
}

/// Get the builtin gas-reaction rule table.
pub fn gas_rules() -> &'static GasRuleSet {
    &GAS_RULES
}

/// Get the builtin GHS classification table.
pub fn classification_rules() -> &'static ClassificationRuleSet {
    &CLASSIFICATION_RULES
}
