//! Live flood intelligence payloads.
//!
//! Only the snapshot polled by the flood dashboard is typed; the rest of
//! the `/intelligence/*` surface is display-only and consumed as opaque
//! JSON through [`crate::api::ApiClient::intelligence_get`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Qualitative level used by the live flood feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

/// Per-district heat entry in the live snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneHeat {
    pub district_id: String,
    /// Normalized 0-1.
    pub intensity: f64,
}

/// Payload of `GET /intelligence/flood-live`, polled every few seconds.
#[derive(Debug, Clone, Deserialize)]
pub struct LiveFloodSnapshot {
    pub water_level_m: f64,
    pub rainfall_intensity_mm_hr: f64,
    pub flood_spread_radius_km: f64,
    pub risk_forecast_30min: RiskLevel,
    /// Normalized 0-1.
    pub risk_score: f64,
    pub risk_level_label: String,
    /// Factor weights and contributions for explainability.
    #[serde(default)]
    pub risk_factors: HashMap<String, f64>,
    pub timestamp: String,
    pub zone_heatmap: Vec<ZoneHeat>,
    #[serde(default)]
    pub stations: Vec<serde_json::Value>,
}
