//! Simulation result payloads for flood and earthquake runs.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Scenario kind reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisasterType {
    Flood,
    Earthquake,
    /// Reserved by the backend, never produced today.
    Fire,
}

/// Flood severity preset, doubling as the `intensity` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            other => Err(format!("unknown severity: {other}")),
        }
    }
}

/// Per-district flood assessment.
#[derive(Debug, Clone, Deserialize)]
pub struct FloodZone {
    pub district_id: String,
    pub district_name: String,
    /// Normalized 0-1.
    pub risk_score: f64,
    /// Estimated depth in meters.
    pub flood_depth: f64,
    pub is_flooded: bool,
    pub affected_population: u64,
    /// Factor contributions the backend used for this score.
    #[serde(default)]
    pub risk_breakdown: HashMap<String, f64>,
}

/// Per-district shaking assessment.
#[derive(Debug, Clone, Deserialize)]
pub struct EarthquakeZone {
    pub district_id: String,
    pub district_name: String,
    /// Normalized 0-1.
    pub intensity_score: f64,
    pub intensity_label: String,
    /// Distance from the epicenter.
    pub distance_km: f64,
    pub affected_population: u64,
    #[serde(default)]
    pub is_epicenter: bool,
}

/// An evacuation shelter tracked by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shelter {
    pub id: String,
    pub name: String,
    pub location: Coordinate,
    pub capacity: u32,
    #[serde(default)]
    pub current_occupancy: u32,
    pub district_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvacuationRoute {
    pub from_district: String,
    pub to_shelter: String,
    pub path: Vec<Coordinate>,
    pub distance_km: f64,
    pub estimated_time_minutes: f64,
    #[serde(default = "default_true")]
    pub is_accessible: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct RiskMetrics {
    pub total_population_at_risk: u64,
    pub high_risk_zones: u32,
    pub medium_risk_zones: u32,
    pub low_risk_zones: u32,
    pub estimated_evacuation_time_hours: f64,
    pub overall_risk_score: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmergencyResources {
    pub ambulances_needed: u32,
    pub rescue_boats_needed: u32,
    pub medical_teams_needed: u32,
    pub evacuation_buses_needed: u32,
    pub food_kits_needed: u32,
    pub water_liters_needed: u64,
}

/// The backend's explanation of how it arrived at a result.
#[derive(Debug, Clone, Deserialize)]
pub struct AiExplanation {
    pub confidence_score: f64,
    pub methodology: String,
    pub factors_considered: Vec<String>,
    pub limitations: Vec<String>,
    pub recommendation: String,
}

/// Payload of `GET /simulate-flood`.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationResult {
    pub disaster_type: DisasterType,
    pub severity: Severity,
    /// mm/hour.
    pub rainfall_intensity: f64,
    pub timestamp: String,
    pub flood_zones: Vec<FloodZone>,
    pub shelters: Vec<Shelter>,
    pub evacuation_routes: Vec<EvacuationRoute>,
    pub risk_metrics: RiskMetrics,
    pub emergency_resources: EmergencyResources,
    pub ai_explanation: AiExplanation,
}

/// Payload of `GET /simulate-earthquake`.
#[derive(Debug, Clone, Deserialize)]
pub struct EarthquakeResult {
    pub disaster_type: DisasterType,
    pub magnitude: f64,
    pub epicenter_district_id: String,
    pub epicenter_district_name: String,
    pub timestamp: String,
    pub earthquake_zones: Vec<EarthquakeZone>,
    pub shelters: Vec<Shelter>,
    pub risk_metrics: RiskMetrics,
    pub emergency_resources: EmergencyResources,
    pub ai_explanation: AiExplanation,
}

/// Payload of `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub simulation_ready: bool,
}

/// The most recent simulation run, whichever scenario produced it.
///
/// Replaced wholesale on every run; holders treat it as an immutable
/// snapshot.
#[derive(Debug, Clone)]
pub enum SimulationOutcome {
    Flood(SimulationResult),
    Earthquake(EarthquakeResult),
}

impl SimulationOutcome {
    /// Risk score and display name for a district's zone, if the run
    /// produced one. Flood runs report `risk_score`, earthquake runs
    /// `intensity_score`; both are normalized 0-1.
    pub fn zone_risk(&self, district_id: &str) -> Option<(f64, &str)> {
        match self {
            SimulationOutcome::Flood(r) => r
                .flood_zones
                .iter()
                .find(|z| z.district_id == district_id)
                .map(|z| (z.risk_score, z.district_name.as_str())),
            SimulationOutcome::Earthquake(r) => r
                .earthquake_zones
                .iter()
                .find(|z| z.district_id == district_id)
                .map(|z| (z.intensity_score, z.district_name.as_str())),
        }
    }

    pub fn shelters(&self) -> &[Shelter] {
        match self {
            SimulationOutcome::Flood(r) => &r.shelters,
            SimulationOutcome::Earthquake(r) => &r.shelters,
        }
    }

    pub fn risk_metrics(&self) -> &RiskMetrics {
        match self {
            SimulationOutcome::Flood(r) => &r.risk_metrics,
            SimulationOutcome::Earthquake(r) => &r.risk_metrics,
        }
    }

    pub fn ai_explanation(&self) -> &AiExplanation {
        match self {
            SimulationOutcome::Flood(r) => &r.ai_explanation,
            SimulationOutcome::Earthquake(r) => &r.ai_explanation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_round_trip() {
        assert_eq!("medium".parse::<Severity>().unwrap(), Severity::Medium);
        assert_eq!(Severity::High.to_string(), "high");
        assert!("extreme".parse::<Severity>().is_err());
    }

    #[test]
    fn test_parse_flood_result() {
        let body = r#"{
            "disaster_type": "flood",
            "severity": "high",
            "rainfall_intensity": 100.0,
            "timestamp": "2026-08-07T10:00:00.000000Z",
            "flood_zones": [{
                "district_id": "d1",
                "district_name": "Srinagar",
                "risk_score": 0.82,
                "flood_depth": 1.6,
                "is_flooded": true,
                "affected_population": 410000,
                "risk_breakdown": {"rainfall": 0.5, "elevation": 0.22, "drainage": 0.1}
            }],
            "shelters": [{
                "id": "s1",
                "name": "SK Stadium",
                "location": {"lat": 34.09, "lng": 74.81},
                "capacity": 5000,
                "district_id": "d1"
            }],
            "evacuation_routes": [{
                "from_district": "d1",
                "to_shelter": "s1",
                "path": [{"lat": 34.08, "lng": 74.80}, {"lat": 34.09, "lng": 74.81}],
                "distance_km": 2.4,
                "estimated_time_minutes": 11.0
            }],
            "risk_metrics": {
                "total_population_at_risk": 410000,
                "high_risk_zones": 1,
                "medium_risk_zones": 0,
                "low_risk_zones": 9,
                "estimated_evacuation_time_hours": 5.5,
                "overall_risk_score": 0.61
            },
            "emergency_resources": {
                "ambulances_needed": 40,
                "rescue_boats_needed": 25,
                "medical_teams_needed": 18,
                "evacuation_buses_needed": 60,
                "food_kits_needed": 90000,
                "water_liters_needed": 1200000
            },
            "ai_explanation": {
                "confidence_score": 0.85,
                "methodology": "weighted factor model",
                "factors_considered": ["rainfall", "elevation", "drainage"],
                "limitations": ["static drainage data"],
                "recommendation": "Evacuate low-lying areas"
            }
        }"#;

        let result: SimulationResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.disaster_type, DisasterType::Flood);
        assert_eq!(result.flood_zones[0].risk_breakdown["rainfall"], 0.5);
        // Unspecified occupancy defaults to zero.
        assert_eq!(result.shelters[0].current_occupancy, 0);
        // Unspecified accessibility defaults to open.
        assert!(result.evacuation_routes[0].is_accessible);
    }

    #[test]
    fn test_parse_earthquake_result_and_zone_view() {
        let body = r#"{
            "disaster_type": "earthquake",
            "magnitude": 6.5,
            "epicenter_district_id": "d1",
            "epicenter_district_name": "Srinagar",
            "timestamp": "2026-08-07T10:00:00Z",
            "earthquake_zones": [{
                "district_id": "d1",
                "district_name": "Srinagar",
                "intensity_score": 0.9,
                "intensity_label": "Severe",
                "distance_km": 0.0,
                "affected_population": 600000,
                "is_epicenter": true
            }, {
                "district_id": "d7",
                "district_name": "Jammu",
                "intensity_score": 0.12,
                "intensity_label": "Light",
                "distance_km": 151.0,
                "affected_population": 12000
            }],
            "shelters": [],
            "risk_metrics": {
                "total_population_at_risk": 612000,
                "high_risk_zones": 1,
                "medium_risk_zones": 0,
                "low_risk_zones": 1,
                "estimated_evacuation_time_hours": 8.0,
                "overall_risk_score": 0.51
            },
            "emergency_resources": {
                "ambulances_needed": 55,
                "rescue_boats_needed": 0,
                "medical_teams_needed": 30,
                "evacuation_buses_needed": 80,
                "food_kits_needed": 120000,
                "water_liters_needed": 1500000
            },
            "ai_explanation": {
                "confidence_score": 0.8,
                "methodology": "attenuation model",
                "factors_considered": ["magnitude", "distance"],
                "limitations": [],
                "recommendation": "Inspect structures before re-entry"
            }
        }"#;

        let result: EarthquakeResult = serde_json::from_str(body).unwrap();
        assert!(result.earthquake_zones[0].is_epicenter);
        assert!(!result.earthquake_zones[1].is_epicenter);

        let outcome = SimulationOutcome::Earthquake(result);
        let (score, name) = outcome.zone_risk("d7").unwrap();
        assert_eq!(score, 0.12);
        assert_eq!(name, "Jammu");
        assert!(outcome.zone_risk("d4").is_none());
    }
}
