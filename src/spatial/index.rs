//! Spatial index for district boundary lookups.

use geo::{BoundingRect, LineString};
use hashbrown::HashMap;
use rstar::{RTree, RTreeObject, AABB};
use tracing::debug;

use super::polygon::point_in_polygon;
use crate::models::{Coordinate, District};

/// Wrapper for R-tree indexing of one district boundary.
struct IndexedDistrict {
    /// Position in the source table; the lowest wins if boundaries
    /// ever overlap, matching plain first-match iteration.
    order: usize,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for IndexedDistrict {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// District lookup over an immutable polygon table.
///
/// The R-tree prefilters by bounding box; the exact test is the
/// ray-casting containment check.
pub struct DistrictIndex {
    districts: Vec<District>,
    by_id: HashMap<String, usize>,
    tree: RTree<IndexedDistrict>,
}

impl DistrictIndex {
    /// Build the index from a district table. Districts with an empty
    /// polygon are kept for id lookup but can never contain a point.
    pub fn build(districts: Vec<District>) -> Self {
        let mut entries = Vec::new();
        for (order, district) in districts.iter().enumerate() {
            let ring: LineString<f64> =
                district.polygon.iter().map(|&c| geo::Coord::from(c)).collect();
            let Some(rect) = ring.bounding_rect() else {
                continue;
            };
            entries.push(IndexedDistrict {
                order,
                envelope: AABB::from_corners(
                    [rect.min().x, rect.min().y],
                    [rect.max().x, rect.max().y],
                ),
            });
        }

        let by_id = districts
            .iter()
            .enumerate()
            .map(|(i, d)| (d.id.clone(), i))
            .collect();

        debug!("district index built with {} boundaries", entries.len());

        Self {
            districts,
            by_id,
            tree: RTree::bulk_load(entries),
        }
    }

    /// The district containing `point`, or `None`.
    pub fn locate(&self, point: Coordinate) -> Option<&District> {
        let query = AABB::from_point([point.lng, point.lat]);
        self.tree
            .locate_in_envelope_intersecting(&query)
            .filter(|e| point_in_polygon(point, &self.districts[e.order].polygon))
            .min_by_key(|e| e.order)
            .map(|e| &self.districts[e.order])
    }

    /// Look up a district by id.
    pub fn get(&self, id: &str) -> Option<&District> {
        self.by_id.get(id).map(|&i| &self.districts[i])
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    pub fn len(&self) -> usize {
        self.districts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }
}
