//! Four-tier risk banding shared by the advisor and the panels.

use serde::{Deserialize, Serialize};

/// A district scoring below this is considered safe.
pub const SAFE_RISK_THRESHOLD: f64 = 0.2;

/// Band for a normalized 0-1 risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Safe,
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            RiskBand::High
        } else if score >= 0.4 {
            RiskBand::Medium
        } else if score >= SAFE_RISK_THRESHOLD {
            RiskBand::Low
        } else {
            RiskBand::Safe
        }
    }

    /// Display label used across the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Safe => "Normal",
            RiskBand::Low => "Advisory",
            RiskBand::Medium => "Warning",
            RiskBand::High => "Critical",
        }
    }
}
