use thiserror::Error;

use crate::integrate::QuadratureError;

/// Errors raised while validating inputs or evaluating a heat capacity model.
#[derive(Debug, Error)]
pub enum Error {
    /// A scalar parameter that must be strictly positive was zero, negative or not finite.
    #[error("{name} must be a finite positive number, got {value}")]
    NonPositiveParameter { name: &'static str, value: f64 },

    /// A temperature sample was zero, negative or not finite.
    #[error("temperature at index {index} must be a finite positive number, got {value} K")]
    InvalidTemperature { index: usize, value: f64 },

    /// The temperature samples are not strictly increasing.
    #[error("temperatures must be strictly increasing, but index {index} is not above index {}", .index - 1)]
    NotIncreasing { index: usize },

    #[error("a temperature series needs at least one point")]
    EmptySeries,

    #[error("temperature range start ({start} K) must be below stop ({stop} K)")]
    InvalidRange { start: f64, stop: f64 },

    /// The Debye integral did not converge at the given temperature.
    #[error("Debye integral failed at T = {temperature} K: {source}")]
    Quadrature {
        temperature: f64,
        #[source]
        source: QuadratureError,
    },

    #[error("invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Checks that a model parameter is finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::NonPositiveParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_positive_accepts_positive() {
        assert_eq!(ensure_positive("x", 2.5).unwrap(), 2.5);
    }

    #[test]
    fn ensure_positive_rejects_zero_negative_and_nan() {
        for value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ensure_positive("debye temperature", value),
                Err(Error::NonPositiveParameter {
                    name: "debye temperature",
                    ..
                })
            ));
        }
    }

    #[test]
    fn not_increasing_message_names_both_indices() {
        let err = Error::NotIncreasing { index: 3 };
        assert_eq!(
            err.to_string(),
            "temperatures must be strictly increasing, but index 3 is not above index 2"
        );
    }
}
