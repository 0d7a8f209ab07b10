//! Great-circle navigation on a spherical Earth.
//!
//! Formulas follow the Aviation Formulary (Ed Williams). All latitudes and
//! longitudes are in degrees, north and east positive; distances are in
//! nautical miles, where one nautical mile is one minute of arc.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::constants::{EPS, NM_PER_DEGREE};
use crate::error::AvCalcError;

/// Smallest |sin(d)| accepted by the checked intermediate-point calculation
const MIN_ROUTE_SIN: f64 = 1e-12;

/// Geodetic position on the sphere
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, [-90, 90]
    pub lat: f64,
    /// Longitude in degrees, east positive
    pub lon: f64,
}

impl GeoPoint {
    /// Point from latitude and longitude in degrees
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }

    /// Unit vector of this point in Earth-centred Cartesian coordinates
    fn unit_vector(&self) -> Vector3<f64> {
        let lat = self.lat.to_radians();
        let lon = self.lon.to_radians();
        Vector3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
    }

    fn from_vector(v: &Vector3<f64>) -> Self {
        GeoPoint {
            lat: v.z.atan2((v.x * v.x + v.y * v.y).sqrt()).to_degrees(),
            lon: v.y.atan2(v.x).to_degrees(),
        }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        GeoPoint { lat, lon }
    }
}

/// Great-circle angular distance between two points in radians (haversine).
///
/// Near the antipode the haversine term can round past 1.0; it is clamped so
/// the result stays at π. NaN input still yields NaN.
pub fn angular_distance(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let lat1 = p1.lat.to_radians();
    let lat2 = p2.lat.to_radians();
    let half_dlat = (p1.lat - p2.lat).to_radians() / 2.0;
    let half_dlon = (p2.lon - p1.lon).to_radians() / 2.0;

    let h = half_dlat.sin().powi(2) + half_dlon.sin().powi(2) * (lat1.cos() * lat2.cos());

    2.0 * h.sqrt().clamp(0.0, 1.0).asin()
}

/// Great-circle distance between two points in nautical miles.
///
/// Symmetric, non-negative and bounded by half the circumference (10800 nm).
pub fn distance(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    NM_PER_DEGREE * angular_distance(p1, p2).to_degrees()
}

/// Initial true course from `p1` toward `p2` in degrees, [0, 360).
///
/// A start on a pole has no defined course: the north pole returns 180 (due
/// south) and the south pole returns 0 (due north). Antipodal pairs have no
/// unique route and are not handled.
pub fn initial_course(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let lat1 = p1.lat.to_radians();
    let lat2 = p2.lat.to_radians();
    let dlon = (p2.lon - p1.lon).to_radians();

    if lat1.cos() < EPS {
        return if lat1 > 0.0 { 180.0 } else { 0.0 };
    }

    let tc = (dlon.sin() * lat2.cos())
        .atan2(lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos());

    // rem_euclid can round a tiny negative angle up to exactly TAU
    let course = tc.rem_euclid(TAU).to_degrees();
    if course >= 360.0 {
        0.0
    } else {
        course
    }
}

/// Point a `fraction` of the way along the great circle from `p1` to `p2`.
///
/// `fraction` 0 gives `p1`, 1 gives `p2` (longitude normalized to
/// (-180, 180]). Coincident or antipodal endpoints make the route undefined;
/// the weights divide by sin(d) = 0 and the result is NaN. Use
/// [`try_intermediate_point`] for a checked variant.
pub fn intermediate_point(p1: &GeoPoint, p2: &GeoPoint, fraction: f64) -> GeoPoint {
    let d = angular_distance(p1, p2);

    let a = ((1.0 - fraction) * d).sin() / d.sin();
    let b = (fraction * d).sin() / d.sin();

    let v = p1.unit_vector() * a + p2.unit_vector() * b;
    GeoPoint::from_vector(&v)
}

/// Checked [`intermediate_point`]: rejects fractions outside [0, 1] and
/// coincident or antipodal endpoints.
pub fn try_intermediate_point(
    p1: &GeoPoint,
    p2: &GeoPoint,
    fraction: f64,
) -> Result<GeoPoint, AvCalcError> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(AvCalcError::InvalidFraction(fraction));
    }

    let d = angular_distance(p1, p2);
    if d.sin().abs() < MIN_ROUTE_SIN {
        let reason = if d < 1.0 { "coincident endpoints" } else { "antipodal endpoints" };
        return Err(AvCalcError::UndefinedRoute(reason.to_string()));
    }

    Ok(intermediate_point(p1, p2, fraction))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lax() -> GeoPoint {
        GeoPoint::new(33.95, -118.4)
    }

    fn jfk() -> GeoPoint {
        GeoPoint::new(40.633333, -73.783333)
    }

    #[test]
    fn test_distance_lax_jfk() {
        let d = distance(&lax(), &jfk());
        assert!((d - 2144.0).abs() < 5.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let pairs = [
            (GeoPoint::new(0.0, 0.0), GeoPoint::new(70.0, 70.0)),
            (lax(), jfk()),
            (GeoPoint::new(-89.0, 12.0), GeoPoint::new(45.0, -170.0)),
        ];
        for (a, b) in pairs.iter() {
            assert_eq!(distance(a, b), distance(b, a));
        }
    }

    #[test]
    fn test_distance_zero_and_wrap() {
        assert_eq!(distance(&lax(), &lax()), 0.0);

        let east = GeoPoint::new(10.0, 180.0);
        let west = GeoPoint::new(10.0, -180.0);
        assert!(distance(&east, &west) < 1e-9);
    }

    #[test]
    fn test_distance_bounded_by_half_circumference() {
        let d = distance(&GeoPoint::new(90.0, 0.0), &GeoPoint::new(-90.0, 0.0));
        assert!((d - 10800.0).abs() < 1e-6);

        let antipode = distance(&GeoPoint::new(-40.402194, 176.311146), &GeoPoint::new(40.402194, -3.688854));
        assert!(antipode <= 10800.0);
        assert!((antipode - 10800.0).abs() < 0.01);
    }

    #[test]
    fn test_distance_nan_input_propagates() {
        let target = GeoPoint::new(10.0, 10.0);
        assert!(distance(&GeoPoint::new(f64::NAN, 0.0), &target).is_nan());
        assert!(distance(&GeoPoint::new(0.0, f64::NAN), &target).is_nan());
        assert!(angular_distance(&target, &GeoPoint::new(f64::NAN, f64::NAN)).is_nan());
    }

    #[test]
    fn test_angular_distance_quarter_circle() {
        let d = angular_distance(&GeoPoint::new(0.0, 0.0), &GeoPoint::new(0.0, 90.0));
        assert!((d - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_initial_course_lax_jfk() {
        let course = initial_course(&lax(), &jfk());
        assert!((course - 66.0).abs() < 0.5);
    }

    #[test]
    fn test_initial_course_range() {
        // Westbound courses come out as positive bearings
        let course = initial_course(&jfk(), &lax());
        assert!(course > 270.0 && course < 280.0);

        let origin = GeoPoint::new(0.0, 0.0);
        assert!((initial_course(&origin, &GeoPoint::new(10.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((initial_course(&origin, &GeoPoint::new(0.0, 10.0)) - 90.0).abs() < 1e-9);
        assert!((initial_course(&origin, &GeoPoint::new(-10.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((initial_course(&origin, &GeoPoint::new(0.0, -10.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_initial_course_from_poles() {
        let north = GeoPoint::new(90.0, 0.0);
        let south = GeoPoint::new(-90.0, 0.0);
        for target in [lax(), jfk(), GeoPoint::new(-30.0, 100.0)] {
            assert_eq!(initial_course(&north, &target), 180.0);
            assert_eq!(initial_course(&south, &target), 0.0);
        }
    }

    #[test]
    fn test_intermediate_point_lax_jfk() {
        let wp = intermediate_point(&lax(), &jfk(), 0.4);
        assert!((wp.lat - 38.669).abs() < 0.02);
        assert!((wp.lon - (-101.626)).abs() < 0.05);
    }

    #[test]
    fn test_intermediate_point_endpoints() {
        let start = intermediate_point(&lax(), &jfk(), 0.0);
        assert!((start.lat - lax().lat).abs() < 1e-9);
        assert!((start.lon - lax().lon).abs() < 1e-9);

        let end = intermediate_point(&lax(), &jfk(), 1.0);
        assert!((end.lat - jfk().lat).abs() < 1e-9);
        assert!((end.lon - jfk().lon).abs() < 1e-9);
    }

    #[test]
    fn test_intermediate_point_across_dateline() {
        let mid = intermediate_point(&GeoPoint::new(0.0, 170.0), &GeoPoint::new(0.0, -170.0), 0.5);
        assert!(mid.lat.abs() < 1e-9);
        assert!((mid.lon.abs() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_intermediate_point_coincident_is_nan() {
        let wp = intermediate_point(&lax(), &lax(), 0.5);
        assert!(wp.lat.is_nan() || wp.lon.is_nan());
    }

    #[test]
    fn test_try_intermediate_point() {
        assert!(try_intermediate_point(&lax(), &jfk(), 0.4).is_ok());
        assert_eq!(
            try_intermediate_point(&lax(), &jfk(), 1.5),
            Err(AvCalcError::InvalidFraction(1.5))
        );
        assert!(matches!(
            try_intermediate_point(&lax(), &lax(), 0.5),
            Err(AvCalcError::UndefinedRoute(_))
        ));
        assert!(matches!(
            try_intermediate_point(&GeoPoint::new(90.0, 0.0), &GeoPoint::new(-90.0, 0.0), 0.5),
            Err(AvCalcError::UndefinedRoute(_))
        ));
    }
}
