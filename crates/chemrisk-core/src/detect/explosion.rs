use crate::detect::outcome::{ExplosionReport, Finding, FindingKind};
use crate::model::Substance;
use crate::rules::schema::ExplosionRuleSet;
use crate::severity::Severity;
use crate::AssessOptions;

/// Label used for findings that concern the whole list rather than a single
/// substance.
const MIXTURE_LABEL: &str = "Mélange";

/// Evaluate the explosion/instability rules against a substance list.
///
/// All checks are independent: a substance can produce an indicator finding,
/// a classification finding and a pictogram finding at once, and mixture
/// rules never suppress per-substance findings.
pub fn detect_explosion_risks(
    substances: &[Substance],
    rules: &ExplosionRuleSet,
    options: &AssessOptions,
) -> ExplosionReport {
    let mut findings = Vec::new();

    findings.extend(evaluate_indicators(substances, rules));
    findings.extend(evaluate_explosive_h_codes(substances, rules));
    findings.extend(evaluate_pictograms(substances, rules));
    if substances.len() >= 2 {
        findings.extend(evaluate_mixtures(substances, rules, options));
    }

    let has_critical = findings.iter().any(|f| f.severity.is_critical());

    ExplosionReport {
        findings,
        has_critical,
    }
}

/// Name-pattern indicators: one finding per (substance, matching pattern).
fn evaluate_indicators(substances: &[Substance], rules: &ExplosionRuleSet) -> Vec<Finding> {
    let mut findings = Vec::new();
    for substance in substances {
        for indicator in &rules.indicators {
            if substance.name_contains(&indicator.pattern) {
                findings.push(Finding {
                    kind: FindingKind::SubstanceIndicator,
                    subject_label: substance.name.clone(),
                    description: indicator.risk.clone(),
                    severity: Severity::High,
                });
            }
        }
    }
    findings
}

/// Explosive H-statements: one finding per substance carrying any of the
/// configured codes (H200-H205, H240, H241 in the builtin table).
fn evaluate_explosive_h_codes(substances: &[Substance], rules: &ExplosionRuleSet) -> Vec<Finding> {
    let mut findings = Vec::new();
    for substance in substances {
        let matched: Vec<&str> = rules
            .explosive_h_patterns
            .iter()
            .filter(|p| substance.h_code_contains(p))
            .map(|p| p.as_str())
            .collect();
        if !matched.is_empty() {
            findings.push(Finding {
                kind: FindingKind::ClassificationHit,
                subject_label: substance.name.clone(),
                description: format!(
                    "Classé explosif ou auto-réactif ({})",
                    matched.join(", ")
                ),
                severity: Severity::Critical,
            });
        }
    }
    findings
}

/// Explosive pictogram (GHS01): one finding per labelled substance.
fn evaluate_pictograms(substances: &[Substance], rules: &ExplosionRuleSet) -> Vec<Finding> {
    substances
        .iter()
        .filter(|s| s.has_ghs(&rules.explosive_pictogram))
        .map(|s| Finding {
            kind: FindingKind::PictogramHit,
            subject_label: s.name.clone(),
            description: format!(
                "Pictogramme {} présent (bombe explosant)",
                rules.explosive_pictogram
            ),
            severity: Severity::Critical,
        })
        .collect()
}

/// Two-group mixture rules across the whole list. By default the same
/// substance may satisfy both groups; `require_distinct_reactants` demands
/// two distinct substances.
fn evaluate_mixtures(
    substances: &[Substance],
    rules: &ExplosionRuleSet,
    options: &AssessOptions,
) -> Vec<Finding> {
    let mut findings = Vec::new();
    for mix in &rules.mixtures {
        if groups_satisfied(substances, &mix.group_a, &mix.group_b, options) {
            findings.push(Finding {
                kind: FindingKind::MixtureHit,
                subject_label: MIXTURE_LABEL.to_string(),
                description: mix.risk.clone(),
                severity: mix.severity,
            });
        }
    }
    findings
}

/// Shared two-group satisfaction test (also used by the gas detector).
pub(crate) fn groups_satisfied(
    substances: &[Substance],
    group_a: &[String],
    group_b: &[String],
    options: &AssessOptions,
) -> bool {
    let in_a: Vec<usize> = substances
        .iter()
        .enumerate()
        .filter(|(_, s)| s.name_matches_any(group_a))
        .map(|(i, _)| i)
        .collect();
    let in_b: Vec<usize> = substances
        .iter()
        .enumerate()
        .filter(|(_, s)| s.name_matches_any(group_b))
        .map(|(i, _)| i)
        .collect();

    if options.require_distinct_reactants {
        in_a.iter().any(|a| in_b.iter().any(|b| a != b))
    } else {
        !in_a.is_empty() && !in_b.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::builtin;

    fn detect(substances: &[Substance]) -> ExplosionReport {
        detect_explosion_risks(
            substances,
            builtin::explosion_rules(),
            &AssessOptions::default(),
        )
    }

    #[test]
    fn test_empty_input_empty_report() {
        let report = detect(&[]);
        assert!(report.findings.is_empty());
        assert!(!report.has_critical);
    }

    #[test]
    fn test_benzoyl_peroxide_single_indicator() {
        let report = detect(&[Substance::named("peroxyde de benzoyle")]);
        assert_eq!(report.findings.len(), 1);

        let finding = &report.findings[0];
        assert_eq!(finding.kind, FindingKind::SubstanceIndicator);
        assert_eq!(finding.subject_label, "peroxyde de benzoyle");
        assert!(finding.description.contains("Peroxyde"));
        assert_eq!(finding.severity, Severity::High);
        assert!(!report.has_critical);
    }

    #[test]
    fn test_explosive_h_code_is_critical() {
        let substance = Substance {
            h_codes: vec!["H201".into()],
            ..Substance::named("TNT")
        };
        let report = detect(&[substance]);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].kind, FindingKind::ClassificationHit);
        assert_eq!(report.findings[0].severity, Severity::Critical);
        assert!(report.findings[0].description.contains("H201"));
        assert!(report.has_critical);
    }

    #[test]
    fn test_ghs01_pictogram_is_critical() {
        let substance = Substance {
            ghs_classes: std::collections::BTreeSet::from(["GHS01".to_string()]),
            ..Substance::named("composé pyrotechnique")
        };
        let report = detect(&[substance]);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].kind, FindingKind::PictogramHit);
        assert!(report.has_critical);
    }

    #[test]
    fn test_oxidizer_reducer_mixture_fires_with_indicator() {
        // Indicator ("perchlor") and mixture rule fire simultaneously
        // without suppressing each other.
        let report = detect(&[
            Substance::named("perchlorate de potassium"),
            Substance::named("soufre"),
        ]);

        let indicator_hits: Vec<&Finding> = report
            .findings
            .iter()
            .filter(|f| f.kind == FindingKind::SubstanceIndicator)
            .collect();
        assert!(indicator_hits
            .iter()
            .any(|f| f.description.contains("Perchlorate")));

        let mixture_hits: Vec<&Finding> = report
            .findings
            .iter()
            .filter(|f| f.kind == FindingKind::MixtureHit)
            .collect();
        assert_eq!(mixture_hits.len(), 1);
        assert_eq!(mixture_hits[0].subject_label, "Mélange");
        assert_eq!(mixture_hits[0].severity, Severity::Critical);
        assert!(report.has_critical);
    }

    #[test]
    fn test_mixture_rules_skipped_for_single_substance() {
        // "permanganate" matches an oxidizer group, but a single substance
        // cannot form a mixture.
        let report = detect(&[Substance::named("permanganate de potassium")]);
        assert!(report
            .findings
            .iter()
            .all(|f| f.kind != FindingKind::MixtureHit));
    }

    #[test]
    fn test_harmless_substances_no_findings() {
        let report = detect(&[Substance::named("eau"), Substance::named("chlorure de sodium")]);
        assert!(report.findings.is_empty());
        assert!(!report.has_critical);
    }

    #[test]
    fn test_order_independence() {
        let a = Substance::named("perchlorate de potassium");
        let b = Substance::named("soufre");
        let forward = detect(&[a.clone(), b.clone()]);
        let backward = detect(&[b, a]);
        assert_eq!(forward.findings.len(), backward.findings.len());
        assert_eq!(forward.has_critical, backward.has_critical);

        let count = |report: &ExplosionReport, kind: FindingKind| {
            report.findings.iter().filter(|f| f.kind == kind).count()
        };
        for kind in [
            FindingKind::SubstanceIndicator,
            FindingKind::ClassificationHit,
            FindingKind::PictogramHit,
            FindingKind::MixtureHit,
        ] {
            assert_eq!(count(&forward, kind), count(&backward, kind));
        }
    }

    #[test]
    fn test_monotonicity_under_addition() {
        let base = vec![Substance::named("peroxyde de benzoyle")];
        let before = detect(&base);

        let mut extended = base.clone();
        extended.push(Substance::named("acétone"));
        let after = detect(&extended);

        for finding in &before.findings {
            assert!(after
                .findings
                .iter()
                .any(|f| f.kind == finding.kind
                    && f.subject_label == finding.subject_label
                    && f.description == finding.description));
        }
    }
}
