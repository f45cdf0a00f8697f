//! Great-circle geometry on the mean-Earth sphere
//!
//! Everything the route sampler needs: haversine distance, initial bearing,
//! and the inverse "offset origin" solve that finds the point a given
//! distance behind a destination along a heading.

use std::f64::consts::FRAC_PI_2;

use crate::models::Coordinate;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_METERS: f64 = 6_371_009.0;

/// Great-circle distance between two coordinates in meters
#[must_use]
pub fn distance_meters(from: Coordinate, to: Coordinate) -> f64 {
    angle_between(from, to) * EARTH_RADIUS_METERS
}

/// Central angle between two coordinates in radians
fn angle_between(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lng1 = from.longitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let lng2 = to.longitude.to_radians();
    arc_hav(hav_distance(lat1, lat2, lng1 - lng2))
}

/// Initial bearing of the great-circle path from `from` to `to`, in degrees
/// normalized into `[-180, 180)`
#[must_use]
pub fn heading_degrees(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lng1 = from.longitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let lng2 = to.longitude.to_radians();
    let d_lng = lng2 - lng1;

    let heading = (d_lng.sin() * lat2.cos())
        .atan2(lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos());
    wrap(heading.to_degrees(), -180.0, 180.0)
}

/// Solves for the origin `distance_meters` behind `to` along
/// `heading_degrees`: walking that distance at that heading from the returned
/// point lands on `to`.
///
/// The latitude comes out of a quadratic with two candidate roots; the `+`
/// root is tried first, the `-` root second, and `None` is returned when the
/// discriminant is negative or neither root yields a latitude in
/// `[-90°, 90°]` — no origin exists for that combination.
#[must_use]
pub fn offset_origin(
    to: Coordinate,
    distance_meters: f64,
    heading_degrees: f64,
) -> Option<Coordinate> {
    let heading = heading_degrees.to_radians();
    let distance = distance_meters / EARTH_RADIUS_METERS;

    let n1 = distance.cos();
    let n2 = distance.sin() * heading.cos();
    let n3 = distance.sin() * heading.sin();
    let n4 = to.latitude.to_radians().sin();

    let n12 = n1 * n1;
    let discriminant = n2 * n2 * n12 + n12 * n12 - n12 * n4 * n4;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let denominator = n12 + n2 * n2;

    let mut b = (n2 * n4 + root) / denominator;
    let a = (n4 - n2 * b) / n1;
    let mut from_lat = a.atan2(b);

    if !(-FRAC_PI_2..=FRAC_PI_2).contains(&from_lat) {
        b = (n2 * n4 - root) / denominator;
        from_lat = a.atan2(b);
    }
    if !(-FRAC_PI_2..=FRAC_PI_2).contains(&from_lat) {
        return None;
    }

    let from_lng =
        to.longitude.to_radians() - n3.atan2(n1 * from_lat.cos() - n2 * from_lat.sin());
    Some(Coordinate::new(from_lat.to_degrees(), from_lng.to_degrees()))
}

/// Wraps `value` into the half-open interval `[min, max)`
fn wrap(value: f64, min: f64, max: f64) -> f64 {
    if (min..max).contains(&value) {
        value
    } else {
        positive_mod(value - min, max - min) + min
    }
}

/// Euclidean modulus, always in `[0, modulus)`
fn positive_mod(value: f64, modulus: f64) -> f64 {
    (value % modulus + modulus) % modulus
}

/// Inverse haversine: central angle for a haversine value
fn arc_hav(x: f64) -> f64 {
    2.0 * x.sqrt().asin()
}

/// Haversine of the central angle between two points, all in radians
fn hav_distance(lat1: f64, lat2: f64, d_lng: f64) -> f64 {
    hav(lat1 - lat2) + hav(d_lng) * lat1.cos() * lat2.cos()
}

fn hav(x: f64) -> f64 {
    let half_sin = (x * 0.5).sin();
    half_sin * half_sin
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Forward great-circle offset, used to verify the inverse solve.
    fn offset(from: Coordinate, distance_meters: f64, heading_degrees: f64) -> Coordinate {
        let distance = distance_meters / EARTH_RADIUS_METERS;
        let heading = heading_degrees.to_radians();
        let lat1 = from.latitude.to_radians();
        let lng1 = from.longitude.to_radians();

        let lat2 =
            (lat1.sin() * distance.cos() + lat1.cos() * distance.sin() * heading.cos()).asin();
        let lng2 = lng1
            + (heading.sin() * distance.sin() * lat1.cos())
                .atan2(distance.cos() - lat1.sin() * lat2.sin());
        Coordinate::new(lat2.to_degrees(), lng2.to_degrees())
    }

    #[test]
    fn test_distance_of_coincident_points_is_zero() {
        let p = Coordinate::new(48.8566, 2.3522);
        assert_eq!(distance_meters(p, p), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Coordinate::new(40.7128, -74.006);
        let b = Coordinate::new(42.3601, -71.0589);
        let ab = distance_meters(a, b);
        let ba = distance_meters(b, a);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_distance_along_equator() {
        // 0.1 degree of longitude on the equator.
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 0.1);
        let expected = 0.1_f64.to_radians() * EARTH_RADIUS_METERS;
        assert!((distance_meters(a, b) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_heading_cardinal_directions() {
        let origin = Coordinate::new(0.0, 0.0);
        assert!((heading_degrees(origin, Coordinate::new(1.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((heading_degrees(origin, Coordinate::new(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((heading_degrees(origin, Coordinate::new(0.0, -1.0)) + 90.0).abs() < 1e-9);
        // Due south lands on -180 after normalization into [-180, 180).
        assert!((heading_degrees(origin, Coordinate::new(-1.0, 0.0)) + 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_heading_of_coincident_points_does_not_crash() {
        let p = Coordinate::new(51.5074, -0.1278);
        let heading = heading_degrees(p, p);
        assert!(heading.is_finite());
    }

    #[test]
    fn test_offset_origin_round_trip() {
        let to = Coordinate::new(10.0, 20.0);
        let distance = 5_000.0;
        let heading = 45.0;

        let origin = offset_origin(to, distance, heading).unwrap();
        let landed = offset(origin, distance, heading);

        assert!((landed.latitude - to.latitude).abs() < 1e-7);
        assert!((landed.longitude - to.longitude).abs() < 1e-7);
    }

    #[test]
    fn test_offset_origin_zero_distance_is_identity() {
        let to = Coordinate::new(0.0, 0.1);
        let origin = offset_origin(to, 0.0, 90.0).unwrap();
        assert!((origin.latitude - to.latitude).abs() < 1e-9);
        assert!((origin.longitude - to.longitude).abs() < 1e-9);
    }

    #[test]
    fn test_offset_origin_no_solution_near_pole() {
        // Asking for a point 200 km "east-behind" a near-polar destination
        // pushes the latitude quadratic's discriminant negative.
        let to = Coordinate::new(89.9, 0.0);
        assert!(offset_origin(to, 200_000.0, 90.0).is_none());
    }

    #[test]
    fn test_wrap_heading_range() {
        assert_eq!(wrap(190.0, -180.0, 180.0), -170.0);
        assert_eq!(wrap(-190.0, -180.0, 180.0), 170.0);
        assert_eq!(wrap(180.0, -180.0, 180.0), -180.0);
        assert_eq!(wrap(0.0, -180.0, 180.0), 0.0);
    }
}
