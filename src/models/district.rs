//! District records as served by `GET /districts`.

use serde::{Deserialize, Serialize};

use super::simulation::Shelter;
use super::Coordinate;

/// An administrative district with its polygon boundary.
///
/// The polygon is an ordered ring of vertices, implicitly closed (the
/// last vertex connects back to the first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct District {
    pub id: String,
    pub name: String,
    pub center: Coordinate,
    pub polygon: Vec<Coordinate>,
    pub population: u64,
    /// Meters above the valley floor datum used by the flood model.
    pub elevation: f64,
    /// 0-1 scale, higher drains better.
    pub drainage_capacity: f64,
    #[serde(default)]
    pub has_shelter: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shelter_capacity: Option<u32>,
}

/// Payload of `GET /districts` (districts plus shelters, no simulation).
#[derive(Debug, Clone, Deserialize)]
pub struct DistrictsResponse {
    pub districts: Vec<District>,
    pub shelters: Vec<Shelter>,
}
