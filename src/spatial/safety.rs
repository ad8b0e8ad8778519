//! Risk classification for a located user.

use super::index::DistrictIndex;
use super::nearest::{nearest_entity, Nearest};
use crate::models::{Coordinate, District, Shelter, SimulationOutcome};
use crate::risk::SAFE_RISK_THRESHOLD;

/// Risk classification of one district under the current simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneRisk {
    /// Normalized 0-1 (flood risk or shaking intensity).
    pub risk_score: f64,
    pub district_name: String,
    /// True iff the score is below the safe threshold.
    pub is_safe: bool,
}

/// Classify a district against the current simulation outcome.
///
/// A district with no zone in the run is no data, not an error.
pub fn zone_risk_for_district(
    outcome: &SimulationOutcome,
    district_id: &str,
) -> Option<ZoneRisk> {
    let (risk_score, district_name) = outcome.zone_risk(district_id)?;
    Some(ZoneRisk {
        risk_score,
        district_name: district_name.to_string(),
        is_safe: risk_score < SAFE_RISK_THRESHOLD,
    })
}

/// Everything the safety panel answers locally for one position.
///
/// Each field degrades independently to `None` when the information is
/// not available (position outside all districts, no simulation run yet,
/// no shelters in the snapshot).
#[derive(Debug)]
pub struct SafetyAssessment<'a> {
    pub district: Option<&'a District>,
    pub risk: Option<ZoneRisk>,
    pub nearest_shelter: Option<Nearest<'a, Shelter>>,
}

/// Assess a position: containing district, its risk, nearest shelter.
pub fn assess<'a>(
    index: &'a DistrictIndex,
    outcome: Option<&'a SimulationOutcome>,
    position: Coordinate,
) -> SafetyAssessment<'a> {
    let district = index.locate(position);

    let risk = match (district, outcome) {
        (Some(d), Some(o)) => zone_risk_for_district(o, &d.id),
        _ => None,
    };

    let nearest_shelter = outcome.and_then(|o| nearest_entity(position, o.shelters()));

    SafetyAssessment {
        district,
        risk,
        nearest_shelter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::simulation::{
        AiExplanation, DisasterType, EmergencyResources, FloodZone, RiskMetrics, Severity,
        SimulationResult,
    };

    fn flood_outcome(zones: Vec<FloodZone>, shelters: Vec<Shelter>) -> SimulationOutcome {
        SimulationOutcome::Flood(SimulationResult {
            disaster_type: DisasterType::Flood,
            severity: Severity::Medium,
            rainfall_intensity: 50.0,
            timestamp: "2026-08-07T10:00:00Z".to_string(),
            flood_zones: zones,
            shelters,
            evacuation_routes: vec![],
            risk_metrics: RiskMetrics {
                total_population_at_risk: 0,
                high_risk_zones: 0,
                medium_risk_zones: 0,
                low_risk_zones: 0,
                estimated_evacuation_time_hours: 0.0,
                overall_risk_score: 0.0,
            },
            emergency_resources: EmergencyResources {
                ambulances_needed: 0,
                rescue_boats_needed: 0,
                medical_teams_needed: 0,
                evacuation_buses_needed: 0,
                food_kits_needed: 0,
                water_liters_needed: 0,
            },
            ai_explanation: AiExplanation {
                confidence_score: 0.9,
                methodology: "weighted factors".to_string(),
                factors_considered: vec![],
                limitations: vec![],
                recommendation: "".to_string(),
            },
        })
    }

    fn zone(district_id: &str, name: &str, risk_score: f64) -> FloodZone {
        FloodZone {
            district_id: district_id.to_string(),
            district_name: name.to_string(),
            risk_score,
            flood_depth: 0.5,
            is_flooded: risk_score >= 0.4,
            affected_population: 100,
            risk_breakdown: Default::default(),
        }
    }

    #[test]
    fn test_safe_below_threshold() {
        let outcome = flood_outcome(vec![zone("d1", "Srinagar", 0.19)], vec![]);
        let risk = zone_risk_for_district(&outcome, "d1").unwrap();
        assert!(risk.is_safe);
        assert_eq!(risk.district_name, "Srinagar");
    }

    #[test]
    fn test_unsafe_at_threshold() {
        let outcome = flood_outcome(vec![zone("d1", "Srinagar", 0.20)], vec![]);
        let risk = zone_risk_for_district(&outcome, "d1").unwrap();
        assert!(!risk.is_safe);
    }

    #[test]
    fn test_missing_zone_is_no_data() {
        let outcome = flood_outcome(vec![zone("d1", "Srinagar", 0.5)], vec![]);
        assert!(zone_risk_for_district(&outcome, "d7").is_none());
    }

    #[test]
    fn test_assess_inside_district_with_flood_zone() {
        let d1 = District {
            id: "d1".to_string(),
            name: "Srinagar".to_string(),
            center: Coordinate::new(34.1, 74.8),
            polygon: vec![
                Coordinate::new(34.0, 74.7),
                Coordinate::new(34.0, 74.9),
                Coordinate::new(34.2, 74.9),
                Coordinate::new(34.2, 74.7),
            ],
            population: 1_200_000,
            elevation: 16.0,
            drainage_capacity: 0.4,
            has_shelter: true,
            shelter_capacity: Some(5000),
        };
        let index = DistrictIndex::build(vec![d1]);
        let outcome = flood_outcome(
            vec![zone("d1", "Srinagar", 0.15)],
            vec![Shelter {
                id: "s1".to_string(),
                name: "SK Stadium".to_string(),
                location: Coordinate::new(34.09, 74.81),
                capacity: 5000,
                current_occupancy: 120,
                district_id: "d1".to_string(),
            }],
        );

        let report = assess(&index, Some(&outcome), Coordinate::new(34.1, 74.8));
        assert_eq!(report.district.unwrap().id, "d1");
        let risk = report.risk.unwrap();
        assert!(risk.is_safe);
        assert_eq!(risk.district_name, "Srinagar");
        assert_eq!(report.nearest_shelter.unwrap().entity.id, "s1");
    }

    #[test]
    fn test_assess_without_simulation() {
        let index = DistrictIndex::build(vec![]);
        let report = assess(&index, None, Coordinate::new(34.1, 74.8));
        assert!(report.district.is_none());
        assert!(report.risk.is_none());
        assert!(report.nearest_shelter.is_none());
    }
}
