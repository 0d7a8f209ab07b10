//! FFI bindings for C and other native callers

use crate::atmosphere::{
    calibrated_airspeed, density_at_altitude, pressure_at_altitude, speed_of_sound,
    standard_temperature, true_airspeed,
};
use crate::constants::OUT_OF_RANGE_SENTINEL;
use crate::great_circle::{distance, initial_course, intermediate_point, GeoPoint};
use std::os::raw::{c_double, c_int};

// FFI-safe structures with C-compatible layouts

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FFIGeoPoint {
    pub lat: c_double, // degrees, north positive
    pub lon: c_double, // degrees, east positive
}

impl From<&FFIGeoPoint> for GeoPoint {
    fn from(p: &FFIGeoPoint) -> Self {
        GeoPoint::new(p.lat, p.lon)
    }
}

impl From<GeoPoint> for FFIGeoPoint {
    fn from(p: GeoPoint) -> Self {
        FFIGeoPoint { lat: p.lat, lon: p.lon }
    }
}

fn read_points(p1: *const FFIGeoPoint, p2: *const FFIGeoPoint) -> Option<(GeoPoint, GeoPoint)> {
    if p1.is_null() || p2.is_null() {
        return None;
    }
    let (p1, p2) = unsafe { (&*p1, &*p2) };
    Some((p1.into(), p2.into()))
}

/// Great-circle distance in nautical miles. NaN on null input.
#[no_mangle]
pub extern "C" fn avcalc_distance(p1: *const FFIGeoPoint, p2: *const FFIGeoPoint) -> c_double {
    match read_points(p1, p2) {
        Some((a, b)) => distance(&a, &b),
        None => f64::NAN,
    }
}

/// Initial true course in degrees. NaN on null input.
#[no_mangle]
pub extern "C" fn avcalc_initial_course(p1: *const FFIGeoPoint, p2: *const FFIGeoPoint) -> c_double {
    match read_points(p1, p2) {
        Some((a, b)) => initial_course(&a, &b),
        None => f64::NAN,
    }
}

/// Intermediate point written to `result`. Returns 0 on success, -1 on null input.
#[no_mangle]
pub extern "C" fn avcalc_intermediate_point(
    p1: *const FFIGeoPoint,
    p2: *const FFIGeoPoint,
    fraction: c_double,
    result: *mut FFIGeoPoint,
) -> c_int {
    if result.is_null() {
        return -1;
    }
    let Some((a, b)) = read_points(p1, p2) else {
        return -1;
    };

    let waypoint = intermediate_point(&a, &b, fraction);
    unsafe {
        *result = waypoint.into();
    }
    0
}

#[no_mangle]
pub extern "C" fn avcalc_standard_temperature(pressure_alt_ft: c_double) -> c_double {
    standard_temperature(pressure_alt_ft)
}

#[no_mangle]
pub extern "C" fn avcalc_pressure_at_altitude(altitude_ft: c_double) -> c_double {
    pressure_at_altitude(altitude_ft)
}

#[no_mangle]
pub extern "C" fn avcalc_density_at_altitude(altitude_ft: c_double, oat_c: c_double) -> c_double {
    density_at_altitude(altitude_ft, oat_c)
}

#[no_mangle]
pub extern "C" fn avcalc_speed_of_sound(oat_c: c_double) -> c_double {
    speed_of_sound(oat_c)
}

/// Not implemented; always -1
#[no_mangle]
pub extern "C" fn avcalc_true_airspeed(cas: c_double, pressure_alt_ft: c_double, oat_c: c_double) -> c_double {
    true_airspeed(cas, pressure_alt_ft, oat_c).unwrap_or(OUT_OF_RANGE_SENTINEL)
}

/// Not implemented; always -1
#[no_mangle]
pub extern "C" fn avcalc_calibrated_airspeed(tas: c_double, pressure_alt_ft: c_double, oat_c: c_double) -> c_double {
    calibrated_airspeed(tas, pressure_alt_ft, oat_c).unwrap_or(OUT_OF_RANGE_SENTINEL)
}
