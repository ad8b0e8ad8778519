//! Typed wire model for the simulation backend.
//!
//! Every payload is parsed into a total struct at the API boundary so the
//! spatial and classification code never deals with missing fields.

pub mod district;
pub mod geometry;
pub mod intelligence;
pub mod resources;
pub mod simulation;

pub use district::{District, DistrictsResponse};
pub use geometry::Coordinate;
pub use intelligence::{LiveFloodSnapshot, RiskLevel, ZoneHeat};
pub use resources::{
    AssignmentRequest, AssignmentResponse, Hospital, NearestAmbulanceResponse, ResourceAssignment,
    ResourceType, ResourceUnit, ResourceUpdate, ResourceUpdatesRequest,
};
pub use simulation::{
    AiExplanation, DisasterType, EarthquakeResult, EarthquakeZone, EmergencyResources,
    EvacuationRoute, FloodZone, HealthResponse, RiskMetrics, Severity, Shelter, SimulationOutcome,
    SimulationResult,
};
