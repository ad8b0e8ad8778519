//! Even-odd ray-casting containment test.

use crate::models::Coordinate;

/// Whether `point` lies inside `polygon`.
///
/// Casts a horizontal ray eastward and counts edge crossings; an odd
/// count means inside. The polygon is implicitly closed (last vertex
/// connects back to the first). Fewer than three vertices never contain
/// anything. A point exactly on an edge or vertex may resolve to either
/// side; callers must not rely on boundary behavior.
pub fn point_in_polygon(point: Coordinate, polygon: &[Coordinate]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    // Longitude is x, latitude is y.
    let x = point.lng;
    let y = point.lat;

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (xi, yi) = (polygon[i].lng, polygon[i].lat);
        let (xj, yj) = (polygon[j].lng, polygon[j].lat);

        // Edge straddles the ray's latitude and crosses east of the point.
        let crosses = (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi;
        if crosses {
            inside = !inside;
        }
        j = i;
    }

    inside
}
