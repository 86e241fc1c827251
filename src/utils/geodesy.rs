//! Conversions between geographic coordinates and the local meter plane.
//!
//! Every function here uses the same spherical great-circle model
//! (mean radius [`EARTH_RADIUS`]): distance is haversine, bearing is the
//! initial great-circle bearing and projection follows the great circle.
//! `move_point` and `points_to_vector` are therefore exact inverses of each
//! other up to floating point error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::EARTH_RADIUS;
use crate::utils::vector2d::{normalize_degrees, Vector2D};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        LatLon { lat, lon }
    }

    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Great-circle distance in meters.
pub fn calculate_distance(a: LatLon, b: LatLon) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

    2.0 * EARTH_RADIUS * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Initial great-circle bearing from `a` to `b`, degrees in `[0, 360)`.
pub fn calculate_bearing(a: LatLon, b: LatLon) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    normalize_degrees(y.atan2(x).to_degrees())
}

pub fn get_destination_point(origin: LatLon, distance: f64, bearing: f64) -> LatLon {
    let angular = distance / EARTH_RADIUS;
    let theta = bearing.to_radians();
    let lat1 = origin.lat.to_radians();
    let lon1 = origin.lon.to_radians();

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * theta.cos()).asin();
    let lon2 = lon1
        + (theta.sin() * angular.sin() * lat1.cos()).atan2(angular.cos() - lat1.sin() * lat2.sin());

    LatLon::new(lat2.to_degrees(), wrap_longitude(lon2.to_degrees()))
}

/// Displaces `origin` by a meter vector (east, north).
pub fn move_point(origin: LatLon, vector: Vector2D) -> LatLon {
    let distance = vector.magnitude();
    if distance == 0.0 {
        return origin;
    }
    get_destination_point(origin, distance, vector.bearing())
}

pub fn points_to_vector(a: LatLon, b: LatLon) -> Vector2D {
    let distance = calculate_distance(a, b);
    if distance == 0.0 {
        return Vector2D::zero();
    }
    Vector2D::from_bearing(calculate_bearing(a, b)) * distance
}

fn wrap_longitude(lon: f64) -> f64 {
    (lon + 540.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn landing_zone() -> LatLon {
        LatLon::new(52.0, 5.0)
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let a = LatLon::new(0.0, 0.0);
        let b = LatLon::new(1.0, 0.0);
        let expected = EARTH_RADIUS * 1.0_f64.to_radians();

        assert_abs_diff_eq!(calculate_distance(a, b), expected, epsilon = 1e-6);
        assert_abs_diff_eq!(calculate_bearing(a, b), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = landing_zone();

        let east = get_destination_point(origin, 1000.0, 90.0);
        let south = get_destination_point(origin, 1000.0, 180.0);
        let west = get_destination_point(origin, 1000.0, 270.0);

        assert_abs_diff_eq!(calculate_bearing(origin, east), 90.0, epsilon = 0.01);
        assert_abs_diff_eq!(calculate_bearing(origin, south), 180.0, epsilon = 1e-6);
        assert_abs_diff_eq!(calculate_bearing(origin, west), 270.0, epsilon = 0.01);
    }

    #[test]
    fn test_destination_distance_matches() {
        let origin = landing_zone();
        let target = get_destination_point(origin, 2500.0, 37.0);

        assert_abs_diff_eq!(calculate_distance(origin, target), 2500.0, epsilon = 1e-6);
    }

    #[test]
    fn test_move_point_zero_vector() {
        let origin = landing_zone();
        assert_eq!(move_point(origin, Vector2D::zero()), origin);
    }

    #[test]
    fn test_move_point_and_back() {
        let origin = landing_zone();
        let offset = Vector2D::new(-1200.0, 850.0);

        let moved = move_point(origin, offset);
        let recovered = points_to_vector(origin, moved);

        assert_abs_diff_eq!(recovered.x, offset.x, epsilon = 1e-6);
        assert_abs_diff_eq!(recovered.y, offset.y, epsilon = 1e-6);
    }

    #[test]
    fn test_move_point_north_keeps_longitude() {
        let origin = landing_zone();
        let moved = move_point(origin, Vector2D::new(0.0, 3000.0));

        assert!(moved.lat > origin.lat);
        assert_abs_diff_eq!(moved.lon, origin.lon, epsilon = 1e-12);
    }

    #[test]
    fn test_points_to_vector_same_point() {
        let origin = landing_zone();
        assert_eq!(points_to_vector(origin, origin), Vector2D::zero());
    }

    #[test]
    fn test_destination_wraps_antimeridian() {
        let origin = LatLon::new(0.0, 179.99);
        let moved = get_destination_point(origin, 5000.0, 90.0);

        assert!(moved.lon < -179.0);
        assert!(moved.is_in_range());
    }
}
