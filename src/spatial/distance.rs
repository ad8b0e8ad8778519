//! Great-circle distance on a spherical Earth.

use crate::models::Coordinate;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometers.
///
/// Spherical approximation; the error against an ellipsoidal model is
/// irrelevant at district scale.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Round to one decimal kilometer, half away from zero.
pub fn round_km(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Coordinate::new(34.0837, 74.7973);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (Coordinate::new(34.0837, 74.7973), Coordinate::new(32.7266, 74.8570)),
            (Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0)),
            (Coordinate::new(-45.0, 10.0), Coordinate::new(60.0, -120.0)),
        ];
        for (a, b) in pairs {
            assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_srinagar_to_jammu() {
        let srinagar = Coordinate::new(34.0837, 74.7973);
        let jammu = Coordinate::new(32.7266, 74.8570);
        let d = haversine_km(srinagar, jammu);
        assert!((d - 151.0).abs() < 2.0, "got {d} km");
    }

    #[test]
    fn test_round_km() {
        assert_eq!(round_km(0.144), 0.1);
        assert_eq!(round_km(0.25), 0.3);
        assert_eq!(round_km(3.1999), 3.2);
        assert_eq!(round_km(0.0), 0.0);
    }
}
