//! # AvCalc
//!
//! Aviation calculations on a spherical Earth: great-circle distance, initial
//! course and intermediate waypoints, plus ICAO standard atmosphere
//! temperature, pressure, density and speed of sound.
//!
//! Every function is pure and thread-safe. Out-of-range inputs are reported
//! through documented sentinels (NaN for temperature, -1 for pressure and
//! density); the `try_*` variants report the same conditions as
//! [`AvCalcError`].

// Re-export the main types and functions
pub use atmosphere::{
    calibrated_airspeed, density_at_altitude, pressure_at_altitude, speed_of_sound,
    standard_atmosphere_bands, standard_temperature, true_airspeed, try_density_at_altitude,
    try_pressure_at_altitude, try_standard_temperature, AltitudeBand,
};
pub use error::AvCalcError;
pub use great_circle::{
    angular_distance, distance, initial_course, intermediate_point, try_intermediate_point,
    GeoPoint,
};

// Module declarations
pub mod atmosphere;
pub mod constants;
mod error;
pub mod ffi;
pub mod great_circle;
