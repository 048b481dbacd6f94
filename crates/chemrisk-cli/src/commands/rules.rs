use chemrisk_core::error::ChemRiskError;
use chemrisk_core::rules::{builtin, RuleLibrary};
use std::path::Path;

/// Table names accepted by `rules explain`.
const TABLES: &[&str] = &["explosion", "gas", "classification"];

pub fn list() -> Result<(), ChemRiskError> {
    let explosion = builtin::explosion_rules();
    let gas = builtin::gas_rules();
    let classification = builtin::classification_rules();

    println!("Builtin rule tables:\n");
    println!(
        "  explosion       v{} -- {} indicateurs, {} mélanges",
        explosion.version,
        explosion.indicators.len(),
        explosion.mixtures.len()
    );
    println!(
        "  gas             v{} -- {} réactions",
        gas.version,
        gas.reactions.len()
    );
    println!(
        "  classification  v{} -- {} familles de danger",
        classification.version,
        classification.classes.len()
    );
    println!();
    Ok(())
}

pub fn explain(table: &str) -> Result<(), ChemRiskError> {
    match table {
        "explosion" => explain_explosion(),
        "gas" => explain_gas(),
        "classification" => explain_classification(),
        _ => Err(ChemRiskError::RuleFileInvalid(format!(
            "unknown table '{}'. Available: {}",
            table,
            TABLES.join(", ")
        ))),
    }
}

fn explain_explosion() -> Result<(), ChemRiskError> {
    let rules = builtin::explosion_rules();

    println!("Risques d'explosion (v{})\n", rules.version);
    if let Some(ref desc) = rules.description {
        println!("{desc}\n");
    }

    println!("Indicateurs (nom de substance, sévérité élevée) :\n");
    let max_pattern = rules
        .indicators
        .iter()
        .map(|i| i.pattern.len())
        .max()
        .unwrap_or(12);
    for indicator in &rules.indicators {
        println!(
            "  {:<width$}  {}",
            indicator.pattern,
            indicator.risk,
            width = max_pattern
        );
    }

    println!("\nMentions de danger explosives (sévérité critique) :\n");
    println!("  {}", rules.explosive_h_patterns.join(", "));
    println!(
        "\nPictogramme explosif (sévérité critique) : {}\n",
        rules.explosive_pictogram
    );

    println!("Mélanges incompatibles (≥ 2 substances) :\n");
    for mix in &rules.mixtures {
        println!("  [{}] {}", mix.severity, mix.risk);
        println!("    Groupe A : {}", mix.group_a.join(", "));
        println!("    Groupe B : {}", mix.group_b.join(", "));
        println!();
    }
    Ok(())
}

fn explain_gas() -> Result<(), ChemRiskError> {
    let rules = builtin::gas_rules();

    println!("Dégagements gazeux dangereux (v{})\n", rules.version);
    if let Some(ref desc) = rules.description {
        println!("{desc}\n");
    }
    println!("Une règle se déclenche quand une substance correspond au groupe A");
    println!("ET une substance correspond au groupe B (liste d'au moins 2 produits).\n");

    for reaction in &rules.reactions {
        println!("  {} ({})", reaction.name, reaction.gas);
        println!("    Groupe A   : {}", reaction.reactant_a.join(", "));
        println!("    Groupe B   : {}", reaction.reactant_b.join(", "));
        println!("    Danger     : {}", reaction.danger_level);
        println!("    Exposition : {}", reaction.exposure_limit);
        println!();
    }
    Ok(())
}

fn explain_classification() -> Result<(), ChemRiskError> {
    let rules = builtin::classification_rules();

    println!("Familles de danger GHS (v{})\n", rules.version);
    if let Some(ref desc) = rules.description {
        println!("{desc}\n");
    }
    println!("Une substance appartient à une famille si l'un de ses pictogrammes");
    println!("GHS figure dans la famille OU si l'un de ses codes H contient l'un");
    println!("des motifs de la famille.\n");

    for class in &rules.classes {
        println!("  {}", class.label);
        println!("    GHS     : {}", class.ghs_codes.join(", "));
        println!("    Codes H : {}", class.h_patterns.join(", "));
        println!();
    }
    Ok(())
}

pub fn schema() -> Result<(), ChemRiskError> {
    print!(
        r#"JSON Rule File Schema
=====================

A rule file overrides one or more of the builtin tables. Every top-level
section is optional; omitted sections keep the builtin rules.

Top-level sections:
  explosion       (object, optional)  Explosion/instability table
  gas             (object, optional)  Gas-formation table
  classification  (object, optional)  GHS classification table

"explosion" fields:
  version               (string, required)
  description           (string, optional)
  indicators            (array, required)   {{ "pattern", "risk" }} pairs;
                                            pattern is matched case-insensitively
                                            as a substring of substance names.
  explosive_h_patterns  (array, required)   H-code patterns. Matching is by
                                            containment: a substance code
                                            "H200" matches pattern "H20".
  explosive_pictogram   (string, required)  GHS pictogram code (e.g., "GHS01").
  mixtures              (array, required)   Two-group rules:
                                            {{ "group_a", "group_b", "risk",
                                              "severity": "high"|"critical" }}.
                                            Groups must be disjoint.

"gas" fields:
  version      (string, required)
  description  (string, optional)
  reactions    (array, required)  {{ "reactant_a", "reactant_b", "gas",
                                    "name", "danger_level", "exposure_limit",
                                    "symptoms" }}. Groups must be disjoint.

"classification" fields:
  version      (string, required)
  description  (string, optional)
  classes      (array, required)  {{ "label", "ghs_codes", "h_patterns" }};
                                  each class needs at least one code or
                                  pattern, labels must be unique.

Example:
{{
  "gas": {{
    "version": "site-1",
    "reactions": [
      {{
        "reactant_a": ["acide"],
        "reactant_b": ["carbure"],
        "gas": "C₂H₂",
        "name": "Acétylène",
        "danger_level": "Extrêmement inflammable",
        "exposure_limit": "Asphyxiant simple",
        "symptoms": "Risque d'atmosphère explosive"
      }}
    ]
  }}
}}
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), ChemRiskError> {
    let library = RuleLibrary::from_file(file)?;

    println!("Rule file is valid.");
    println!(
        "  explosion       v{} -- {} indicateurs, {} mélanges",
        library.explosion.version,
        library.explosion.indicators.len(),
        library.explosion.mixtures.len()
    );
    println!(
        "  gas             v{} -- {} réactions",
        library.gas.version,
        library.gas.reactions.len()
    );
    println!(
        "  classification  v{} -- {} familles",
        library.classification.version,
        library.classification.classes.len()
    );

    // Check for suspicious patterns (warnings, not errors)
    let mut warnings = Vec::new();
    for indicator in &library.explosion.indicators {
        if indicator.pattern.trim() != indicator.pattern {
            warnings.push(format!(
                "indicator pattern '{}' has leading or trailing whitespace",
                indicator.pattern
            ));
        }
    }
    for reaction in &library.gas.reactions {
        for pattern in reaction.reactant_a.iter().chain(&reaction.reactant_b) {
            if pattern.trim() != pattern {
                warnings.push(format!(
                    "reaction '{}': pattern '{}' has leading or trailing whitespace",
                    reaction.name, pattern
                ));
            }
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {w}");
        }
    }

    Ok(())
}
