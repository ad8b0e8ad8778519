//! Client-side geospatial query layer.
//!
//! District containment, great-circle distance, nearest-entity search,
//! and safety classification over immutable simulation snapshots. All
//! operations are pure and synchronous; failures resolve to "no match"
//! or "no data", never an error.

mod distance;
mod index;
mod navigation;
mod nearest;
mod polygon;
mod safety;

pub use distance::{haversine_km, round_km};
pub use index::DistrictIndex;
pub use navigation::{directions_url, search_url};
pub use nearest::{nearest_entity, Located, Nearest};
pub use polygon::point_in_polygon;
pub use safety::{assess, zone_risk_for_district, SafetyAssessment, ZoneRisk};
