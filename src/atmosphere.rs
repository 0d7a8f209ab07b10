//! Standard atmosphere calculations.
//!
//! Temperature follows ICAO Doc 7488 (Manual of the ICAO Standard Atmosphere)
//! from -5 km to 80 km. Pressure and density use the two-band
//! troposphere/tropopause model of the Aviation Formulary and are only
//! defined below 20 km. Altitudes are pressure altitudes in feet.

use once_cell::sync::Lazy;

use crate::constants::{
    DENSITY_EXPONENT, FEET_PER_KM, ISOTHERMAL_DECAY_COEFFICIENT, KELVIN_OFFSET, METERS_PER_FOOT,
    OUT_OF_RANGE_SENTINEL, PRESSURE_EXPONENT, PRESSURE_MODEL_CEILING_FT, P_0, RHO_0,
    SEA_LEVEL_TEMPERATURE_C, SPEED_OF_SOUND_COEFFICIENT, TROPOPAUSE_ALTITUDE_FT,
    TROPOPAUSE_DENSITY_RATIO, TROPOPAUSE_PRESSURE, TROPOSPHERE_COEFFICIENT,
};
use crate::error::AvCalcError;

/// One layer of the banded temperature model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeBand {
    /// Altitude of the lower boundary (ft)
    pub lower_ft: f64,
    /// Temperature lapse rate (°C/ft)
    pub lapse_rate: f64,
    /// Temperature at the lower boundary (°C)
    pub anchor_temp_c: f64,
}

impl AltitudeBand {
    /// Temperature inside this band at `altitude_ft`
    #[inline(always)]
    fn temperature_at(&self, altitude_ft: f64) -> f64 {
        self.anchor_temp_c + self.lapse_rate * (altitude_ft - self.lower_ft)
    }
}

/// Band boundaries (km): mesopause floor at the top, -5 km at the bottom
const BAND_BOUNDARIES_KM: [f64; 9] = [-5.0, 0.0, 11.0, 20.0, 32.0, 47.0, 51.0, 71.0, 80.0];

/// Lapse rates per band (°C/km)
const BAND_LAPSE_RATES_C_PER_KM: [f64; 8] = [
    -6.5, // -5 to 0 km, troposphere below sea level
    -6.5, // 0 to 11 km, troposphere
    0.0,  // 11 to 20 km, tropopause
    1.0,  // 20 to 32 km, lower stratosphere
    2.8,  // 32 to 47 km, upper stratosphere
    0.0,  // 47 to 51 km, stratopause
    -2.8, // 51 to 71 km, lower mesosphere
    -2.0, // 71 to 80 km, upper mesosphere
];

/// Index of the band whose lower boundary is sea level
const SEA_LEVEL_BAND: usize = 1;

static BOUNDARIES_FT: Lazy<[f64; 9]> = Lazy::new(|| BAND_BOUNDARIES_KM.map(|km| km * 1000.0 / METERS_PER_FOOT));

/// Band table with chained anchor temperatures.
///
/// The sea-level band is anchored at 15 °C. Every band above starts at the
/// temperature the band below reaches at their shared boundary, and the band
/// below sea level is anchored so that it reaches 15 °C at 0 ft.
static ALTITUDE_BANDS: Lazy<[AltitudeBand; 8]> = Lazy::new(|| {
    let bounds = *BOUNDARIES_FT;
    let mut bands = [AltitudeBand { lower_ft: 0.0, lapse_rate: 0.0, anchor_temp_c: 0.0 }; 8];

    for (i, band) in bands.iter_mut().enumerate() {
        band.lower_ft = bounds[i];
        band.lapse_rate = BAND_LAPSE_RATES_C_PER_KM[i] / FEET_PER_KM;
    }

    bands[SEA_LEVEL_BAND].anchor_temp_c = SEA_LEVEL_TEMPERATURE_C;

    for i in SEA_LEVEL_BAND + 1..bands.len() {
        let below = bands[i - 1];
        bands[i].anchor_temp_c = below.temperature_at(bounds[i]);
    }

    for i in (0..SEA_LEVEL_BAND).rev() {
        let above = bands[i + 1];
        bands[i].anchor_temp_c = above.anchor_temp_c - bands[i].lapse_rate * (bounds[i + 1] - bounds[i]);
    }

    bands
});

/// The read-only band table of the temperature model, lowest band first
pub fn standard_atmosphere_bands() -> &'static [AltitudeBand] {
    &ALTITUDE_BANDS[..]
}

/// Lowest altitude covered by the temperature model (ft), -5 km
pub fn temperature_model_floor_ft() -> f64 {
    BOUNDARIES_FT[0]
}

/// Highest altitude covered by the temperature model (ft), 80 km
pub fn temperature_model_ceiling_ft() -> f64 {
    BOUNDARIES_FT[BOUNDARIES_FT.len() - 1]
}

/// Standard temperature at a pressure altitude.
///
/// # Arguments
/// * `pressure_alt_ft` - Pressure altitude in feet
///
/// # Returns
/// Temperature in °C, or NaN outside the modeled range [-5 km, 80 km]
pub fn standard_temperature(pressure_alt_ft: f64) -> f64 {
    let h = pressure_alt_ft;
    if !(temperature_model_floor_ft()..=temperature_model_ceiling_ft()).contains(&h) {
        return f64::NAN;
    }

    match ALTITUDE_BANDS.iter().rev().find(|band| h >= band.lower_ft) {
        Some(band) => band.temperature_at(h),
        None => f64::NAN,
    }
}

/// Checked [`standard_temperature`]
pub fn try_standard_temperature(pressure_alt_ft: f64) -> Result<f64, AvCalcError> {
    let t = standard_temperature(pressure_alt_ft);
    if t.is_nan() {
        Err(AvCalcError::AltitudeOutOfRange {
            altitude_ft: pressure_alt_ft,
            min_ft: temperature_model_floor_ft(),
            max_ft: temperature_model_ceiling_ft(),
        })
    } else {
        Ok(t)
    }
}

/// Standard pressure at altitude.
///
/// # Arguments
/// * `altitude_ft` - Pressure altitude in feet
///
/// # Returns
/// Pressure in Pa, or -1 at or above 65616.8 ft
pub fn pressure_at_altitude(altitude_ft: f64) -> f64 {
    let h = altitude_ft;
    if h < TROPOPAUSE_ALTITUDE_FT {
        P_0 * (1.0 - TROPOSPHERE_COEFFICIENT * h).powf(PRESSURE_EXPONENT)
    } else if h < PRESSURE_MODEL_CEILING_FT {
        TROPOPAUSE_PRESSURE * (-ISOTHERMAL_DECAY_COEFFICIENT * (h - TROPOPAUSE_ALTITUDE_FT)).exp()
    } else {
        OUT_OF_RANGE_SENTINEL
    }
}

/// Checked [`pressure_at_altitude`]
pub fn try_pressure_at_altitude(altitude_ft: f64) -> Result<f64, AvCalcError> {
    if altitude_ft < PRESSURE_MODEL_CEILING_FT {
        Ok(pressure_at_altitude(altitude_ft))
    } else {
        Err(pressure_model_range_error(altitude_ft))
    }
}

/// Standard density at altitude.
///
/// The model assumes a standard-day temperature profile: `_oat_c` is accepted
/// for interface compatibility but does not enter the calculation.
///
/// # Returns
/// Density in slug/ft³, or -1 at or above 65616.8 ft
pub fn density_at_altitude(altitude_ft: f64, _oat_c: f64) -> f64 {
    let h = altitude_ft;
    if h < TROPOPAUSE_ALTITUDE_FT {
        RHO_0 * (1.0 - TROPOSPHERE_COEFFICIENT * h).powf(DENSITY_EXPONENT)
    } else if h < PRESSURE_MODEL_CEILING_FT {
        let rho_tropopause = TROPOPAUSE_DENSITY_RATIO * RHO_0;
        rho_tropopause * (-ISOTHERMAL_DECAY_COEFFICIENT * (h - TROPOPAUSE_ALTITUDE_FT)).exp()
    } else {
        OUT_OF_RANGE_SENTINEL
    }
}

/// Checked [`density_at_altitude`]
pub fn try_density_at_altitude(altitude_ft: f64, oat_c: f64) -> Result<f64, AvCalcError> {
    if altitude_ft < PRESSURE_MODEL_CEILING_FT {
        Ok(density_at_altitude(altitude_ft, oat_c))
    } else {
        Err(pressure_model_range_error(altitude_ft))
    }
}

fn pressure_model_range_error(altitude_ft: f64) -> AvCalcError {
    AvCalcError::AltitudeOutOfRange {
        altitude_ft,
        min_ft: f64::NEG_INFINITY,
        max_ft: PRESSURE_MODEL_CEILING_FT,
    }
}

/// Speed of sound for an outside air temperature in °C, `38.967854 * sqrt(T_kelvin)`.
///
/// The formulary states the result in ft/s; the coefficient gives 661.5 at
/// 15 °C, the sea-level value when read as knots. Below absolute zero the
/// square root yields NaN.
#[inline(always)]
pub fn speed_of_sound(oat_c: f64) -> f64 {
    SPEED_OF_SOUND_COEFFICIENT * (KELVIN_OFFSET + oat_c).sqrt()
}

/// True airspeed from calibrated airspeed. Not implemented.
pub fn true_airspeed(_cas: f64, _pressure_alt_ft: f64, _oat_c: f64) -> Result<f64, AvCalcError> {
    Err(AvCalcError::NotImplemented("true_airspeed"))
}

/// Calibrated airspeed from true airspeed. Not implemented.
pub fn calibrated_airspeed(_tas: f64, _pressure_alt_ft: f64, _oat_c: f64) -> Result<f64, AvCalcError> {
    Err(AvCalcError::NotImplemented("calibrated_airspeed"))
}
