//! Built-in district boundary table for Jammu & Kashmir.
//!
//! Loaded once, never mutated. Polygons are compact hexagons around each
//! district headquarters; ids match the backend's zone records so local
//! lookups join cleanly against simulation results.

use std::sync::OnceLock;

use crate::models::{Coordinate, District};
use crate::spatial::DistrictIndex;

// Hexagon half-extents in degrees, sized so neighbouring districts do
// not overlap.
const HALF_LAT: f64 = 0.06;
const HALF_LNG: f64 = 0.08;

struct Seed {
    id: &'static str,
    name: &'static str,
    lat: f64,
    lng: f64,
    population: u64,
    elevation: f64,
    drainage_capacity: f64,
    shelter_capacity: Option<u32>,
}

const SEEDS: [Seed; 10] = [
    Seed { id: "d1", name: "Srinagar", lat: 34.0837, lng: 74.7973, population: 1_250_000, elevation: 16.0, drainage_capacity: 0.35, shelter_capacity: Some(5000) },
    Seed { id: "d2", name: "Ganderbal", lat: 34.2307, lng: 74.7764, population: 300_000, elevation: 28.0, drainage_capacity: 0.50, shelter_capacity: None },
    Seed { id: "d3", name: "Budgam", lat: 34.0158, lng: 74.7195, population: 750_000, elevation: 34.0, drainage_capacity: 0.55, shelter_capacity: None },
    Seed { id: "d4", name: "Anantnag", lat: 33.7311, lng: 75.1487, population: 1_080_000, elevation: 41.0, drainage_capacity: 0.45, shelter_capacity: Some(3500) },
    Seed { id: "d5", name: "Pulwama", lat: 33.8716, lng: 74.8946, population: 560_000, elevation: 38.0, drainage_capacity: 0.60, shelter_capacity: None },
    Seed { id: "d6", name: "Baramulla", lat: 34.1980, lng: 74.3636, population: 1_010_000, elevation: 47.0, drainage_capacity: 0.50, shelter_capacity: Some(4000) },
    Seed { id: "d7", name: "Jammu", lat: 32.7266, lng: 74.8570, population: 1_530_000, elevation: 52.0, drainage_capacity: 0.65, shelter_capacity: Some(6000) },
    Seed { id: "d8", name: "Udhampur", lat: 32.9159, lng: 75.1416, population: 550_000, elevation: 76.0, drainage_capacity: 0.70, shelter_capacity: Some(2500) },
    Seed { id: "d9", name: "Kathua", lat: 32.3864, lng: 75.5173, population: 620_000, elevation: 39.0, drainage_capacity: 0.60, shelter_capacity: None },
    Seed { id: "d10", name: "Kupwara", lat: 34.5262, lng: 74.2546, population: 870_000, elevation: 63.0, drainage_capacity: 0.55, shelter_capacity: None },
];

fn hexagon(lat: f64, lng: f64) -> Vec<Coordinate> {
    vec![
        Coordinate::new(lat + HALF_LAT, lng),
        Coordinate::new(lat + HALF_LAT * 0.4, lng + HALF_LNG),
        Coordinate::new(lat - HALF_LAT * 0.4, lng + HALF_LNG),
        Coordinate::new(lat - HALF_LAT, lng),
        Coordinate::new(lat - HALF_LAT * 0.4, lng - HALF_LNG),
        Coordinate::new(lat + HALF_LAT * 0.4, lng - HALF_LNG),
    ]
}

fn build_table() -> Vec<District> {
    SEEDS
        .iter()
        .map(|s| District {
            id: s.id.to_string(),
            name: s.name.to_string(),
            center: Coordinate::new(s.lat, s.lng),
            polygon: hexagon(s.lat, s.lng),
            population: s.population,
            elevation: s.elevation,
            drainage_capacity: s.drainage_capacity,
            has_shelter: s.shelter_capacity.is_some(),
            shelter_capacity: s.shelter_capacity,
        })
        .collect()
}

/// The built-in district table.
pub fn builtin_districts() -> &'static [District] {
    static TABLE: OnceLock<Vec<District>> = OnceLock::new();
    TABLE.get_or_init(build_table)
}

/// Process-wide spatial index over the built-in table.
pub fn district_index() -> &'static DistrictIndex {
    static INDEX: OnceLock<DistrictIndex> = OnceLock::new();
    INDEX.get_or_init(|| DistrictIndex::build(build_table()))
}
