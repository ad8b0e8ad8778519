//! Nearest-entity selection by great-circle distance.

use super::distance::{haversine_km, round_km};
use crate::models::{Coordinate, Hospital, ResourceUnit, Shelter};

/// Anything with a (possibly unknown) map coordinate.
pub trait Located {
    fn coordinate(&self) -> Option<Coordinate>;
}

impl Located for Shelter {
    fn coordinate(&self) -> Option<Coordinate> {
        Some(self.location)
    }
}

impl Located for ResourceUnit {
    fn coordinate(&self) -> Option<Coordinate> {
        Some(self.location)
    }
}

impl Located for Hospital {
    fn coordinate(&self) -> Option<Coordinate> {
        Some(self.location)
    }
}

/// The winning entity and its distance, rounded to 0.1 km.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<'a, T> {
    pub entity: &'a T,
    pub distance_km: f64,
}

/// Linear scan for the entity closest to `origin`.
///
/// Strict less-than keeps the earliest entity on ties. Entities without
/// a coordinate are skipped; an empty or coordinate-less collection
/// yields `None`.
pub fn nearest_entity<T: Located>(origin: Coordinate, entities: &[T]) -> Option<Nearest<'_, T>> {
    let mut best: Option<(&T, f64)> = None;
    for entity in entities {
        let Some(location) = entity.coordinate() else {
            continue;
        };
        let d = haversine_km(origin, location);
        match best {
            Some((_, min)) if d >= min => {}
            _ => best = Some((entity, d)),
        }
    }

    best.map(|(entity, d)| Nearest {
        entity,
        distance_km: round_km(d),
    })
}
