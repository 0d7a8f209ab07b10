/// Errors reported by the checked (`try_*`) variants of the calculations.
///
/// The unchecked functions keep their documented sentinel returns (NaN, -1)
/// and never produce these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AvCalcError {
    #[error("altitude {altitude_ft} ft outside modeled range [{min_ft}, {max_ft}] ft")]
    AltitudeOutOfRange {
        altitude_ft: f64,
        min_ft: f64,
        max_ft: f64,
    },

    #[error("great-circle route undefined: {0}")]
    UndefinedRoute(String),

    #[error("fraction {0} outside [0, 1]")]
    InvalidFraction(f64),

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AvCalcError::AltitudeOutOfRange {
            altitude_ft: 70000.0,
            min_ft: f64::NEG_INFINITY,
            max_ft: 65616.8,
        };
        assert!(err.to_string().contains("70000"));

        let err = AvCalcError::NotImplemented("true_airspeed");
        assert_eq!(err.to_string(), "true_airspeed is not implemented");
    }
}
