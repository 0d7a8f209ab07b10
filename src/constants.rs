//! Physical and numerical constants used by the navigation and atmosphere calculations

/// Small number on the order of machine precision, used for the pole test in course calculations
pub const EPS: f64 = 1e-15;

/// Nautical miles per degree of great-circle arc (1 nm = 1 minute of arc)
pub const NM_PER_DEGREE: f64 = 60.0;

/// Conversion factor: metres per foot
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Feet per kilometre as used for lapse-rate conversion (°C/km to °C/ft)
pub const FEET_PER_KM: f64 = 3280.84;

/// Offset between degrees Celsius and Kelvin
pub const KELVIN_OFFSET: f64 = 273.15;

/// Standard sea-level temperature (°C)
pub const SEA_LEVEL_TEMPERATURE_C: f64 = 15.0;

/// Standard sea-level pressure (Pa)
///
/// Value: 101325 Pa (1013.25 hPa). The lower-band polytropic formula evaluated at the
/// tropopause lands on the 22632.06 Pa anchor with this reference.
pub const P_0: f64 = 101325.0;

/// Standard sea-level air density (slug/ft³)
pub const RHO_0: f64 = 0.0023769;

/// Pressure altitude of the tropopause (ft), i.e. 11 km
pub const TROPOPAUSE_ALTITUDE_FT: f64 = 36089.24;

/// Upper limit of the two-band pressure and density model (ft), i.e. 20 km
pub const PRESSURE_MODEL_CEILING_FT: f64 = 65616.8;

/// Pressure at the tropopause (Pa)
pub const TROPOPAUSE_PRESSURE: f64 = 22632.06;

/// Density at the tropopause as a fraction of sea-level density
pub const TROPOPAUSE_DENSITY_RATIO: f64 = 0.2970756;

/// Polytropic coefficient of the troposphere (1/ft)
pub const TROPOSPHERE_COEFFICIENT: f64 = 6.8755856e-6;

/// Troposphere pressure exponent (g / (R·L))
pub const PRESSURE_EXPONENT: f64 = 5.2558797;

/// Troposphere density exponent (g / (R·L) - 1)
pub const DENSITY_EXPONENT: f64 = 4.2558797;

/// Exponential decay coefficient in the isothermal tropopause layer (1/ft)
pub const ISOTHERMAL_DECAY_COEFFICIENT: f64 = 4.806346e-5;

/// Speed of sound coefficient: a = 38.967854 * sqrt(T_kelvin) in ft/s
pub const SPEED_OF_SOUND_COEFFICIENT: f64 = 38.967854;

/// Sentinel returned by the pressure and density functions above their supported range
pub const OUT_OF_RANGE_SENTINEL: f64 = -1.0;
