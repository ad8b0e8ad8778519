//! Geographic primitives shared by the wire model and the spatial layer.

use geo_types::{Coord, Point};
use serde::{Deserialize, Serialize};

/// Geographic point in the backend's wire format.
///
/// Latitude in [-90, 90], longitude in [-180, 180]. Callers are expected
/// to supply sane values; nothing here re-validates ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

// Projection convention: longitude is x, latitude is y.
impl From<Coordinate> for Coord<f64> {
    fn from(c: Coordinate) -> Self {
        Coord { x: c.lng, y: c.lat }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(c: Coordinate) -> Self {
        Point::new(c.lng, c.lat)
    }
}
