use chemrisk_core::HazardAssessment;

pub fn print(result: &HazardAssessment, verbose: bool) {
    print_explosion(result);
    print_gas(result);
    print_classification(result, verbose);
}

fn print_explosion(result: &HazardAssessment) {
    println!("=== Risques d'explosion ===\n");

    if result.explosion.findings.is_empty() {
        println!("  Aucun risque détecté\n");
    } else {
        for finding in &result.explosion.findings {
            let style = finding.severity.style();
            println!(
                "  [{:<3}] {} -- {}",
                style.badge, finding.subject_label, finding.description
            );
        }
        println!();
    }

    // Display policy: a critical finding blocks until an expert has been
    // consulted.
    if result.explosion.has_critical {
        println!("  ⚠ RISQUE CRITIQUE : consultez un expert en sécurité chimique");
        println!("    avant toute manipulation de ce mélange.\n");
    }
}

fn print_gas(result: &HazardAssessment) {
    println!("=== Dégagements gazeux dangereux ===\n");

    if result.gas.findings.is_empty() {
        println!("  Aucune réaction détectée\n");
        return;
    }

    for finding in &result.gas.findings {
        println!("  {} ({})", finding.name, finding.gas);
        println!("    Danger      : {}", finding.danger_level);
        println!("    Exposition  : {}", finding.exposure_limit);
        println!("    Symptômes   : {}", finding.symptoms);
        println!(
            "    Réactifs    : {} + {}",
            finding.matched_reactants_a.join(", "),
            finding.matched_reactants_b.join(", ")
        );
        println!();
    }
}

fn print_classification(result: &HazardAssessment, verbose: bool) {
    println!("=== Classification GHS ===\n");

    if result.classification.summary.is_empty() {
        println!("  Aucune substance classée\n");
    } else {
        for occurrence in &result.classification.summary {
            println!("  {:<32} {}", occurrence.label, occurrence.count);
        }
        println!();
    }

    if verbose {
        let max_name = result
            .classification
            .substances
            .iter()
            .map(|c| c.substance.name.len())
            .max()
            .unwrap_or(10);

        for classified in &result.classification.substances {
            let classes = if classified.classes.is_empty() {
                "-".to_string()
            } else {
                classified.classes.join(", ")
            };
            println!(
                "  {:<width$}  {}",
                classified.substance.name,
                classes,
                width = max_name
            );
        }
        println!();
    }
}
