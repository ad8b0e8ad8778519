//! Live resource state: ambulances, rescue teams, hospitals, assignments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::simulation::Severity;
use super::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Ambulance,
    RescueTeam,
}

/// A dispatchable field unit with a live position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceUnit {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub location: Coordinate,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub speed_kmh: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub last_updated: DateTime<Utc>,
}

/// Partial update for a unit; unset fields keep their current value.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceUpdate {
    pub id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_kmh: Option<f64>,
}

/// Body of `POST /resources/update`.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceUpdatesRequest {
    pub updates: Vec<ResourceUpdate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub location: Coordinate,
    pub capacity: u32,
    pub current_occupancy: u32,
}

/// Body of `POST /resources/assign`.
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentRequest {
    pub severity: Severity,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub closed_districts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_hour: Option<u8>,
}

/// One planned dispatch produced by the backend's optimizer.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceAssignment {
    pub resource_id: String,
    pub resource_type: ResourceType,
    pub to_district_id: String,
    pub to_district_name: Option<String>,
    pub path: Vec<Coordinate>,
    pub distance_km: f64,
    pub estimated_time_minutes: f64,
    pub passable: bool,
    #[serde(default)]
    pub vehicle_note: Option<String>,
    #[serde(default)]
    pub destination_hospital_id: Option<String>,
    #[serde(default)]
    pub destination_hospital_name: Option<String>,
    #[serde(default)]
    pub hospital_wait_minutes: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentResponse {
    pub assignments: Vec<ResourceAssignment>,
    pub unassigned_ids: Vec<String>,
}

/// Payload of `GET /resources/nearest-ambulance`.
///
/// `found: false` means no reachable ambulance, not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct NearestAmbulanceResponse {
    pub found: bool,
    #[serde(default)]
    pub ambulance: Option<ResourceUnit>,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub estimated_time_minutes: Option<f64>,
    #[serde(default)]
    pub path: Vec<Coordinate>,
}
