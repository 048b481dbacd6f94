use chemrisk_core::error::ChemRiskError;
use chemrisk_core::HazardAssessment;

pub fn print(result: &HazardAssessment) -> Result<(), ChemRiskError> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}
