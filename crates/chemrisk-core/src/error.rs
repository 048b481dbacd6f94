use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ChemRiskError {
    #[error("failed to load rule file from {path}: {reason}")]
    RuleFileLoad { path: PathBuf, reason: String },

    #[error("invalid rule file: {0}")]
    RuleFileInvalid(String),

    #[error("failed to parse substance list: {0}")]
    SubstanceParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
