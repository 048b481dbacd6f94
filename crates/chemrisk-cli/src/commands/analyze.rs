use chemrisk_core::error::ChemRiskError;
use chemrisk_core::rules::RuleLibrary;
use chemrisk_core::AssessOptions;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    rule_file: Option<PathBuf>,
    output_format: &str,
    distinct_reactants: bool,
    verbose: bool,
) -> Result<(), ChemRiskError> {
    let library = match rule_file {
        Some(path) => RuleLibrary::from_file(&path)?,
        None => RuleLibrary::builtin(),
    };

    let json = std::fs::read_to_string(&input_file)?;
    let substances = chemrisk_core::parse_substances(&json)?;

    let options = AssessOptions {
        require_distinct_reactants: distinct_reactants,
    };
    let result = chemrisk_core::assess(&substances, &library, &options);

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print(&result, verbose),
    }

    Ok(())
}
