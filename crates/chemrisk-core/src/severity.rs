use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity attached to a finding. Ordered so that the worst severity of a
/// report can be taken with `max()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn is_critical(&self) -> bool {
        matches!(self, Severity::Critical)
    }

    /// Display attributes for a severity level.
    pub fn style(&self) -> SeverityStyle {
        match self {
            Severity::Medium => SeverityStyle {
                label: "À surveiller",
                badge: "!",
                color: "orange",
            },
            Severity::High => SeverityStyle {
                label: "Risque élevé",
                badge: "!!",
                color: "red",
            },
            Severity::Critical => SeverityStyle {
                label: "Risque critique",
                badge: "!!!",
                color: "darkred",
            },
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Display attributes associated with a severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityStyle {
    pub label: &'static str,
    pub badge: &'static str,
    pub color: &'static str,
}
