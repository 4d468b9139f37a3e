use std::fmt;
use std::ops::Deref;

use crate::error::{ensure_positive, Error, Result};

/// Strictly increasing sequence of positive temperatures in K.
///
/// Every model evaluator borrows the same series, so the checks here are the
/// only place temperatures are validated.
#[derive(Clone, Debug, PartialEq)]
pub struct TemperatureSeries {
    values: Vec<f64>,
}

impl TemperatureSeries {
    /// Wraps `values` after checking that each one is finite and positive and
    /// that they strictly increase.
    pub fn new(values: Vec<f64>) -> Result<TemperatureSeries> {
        if values.is_empty() {
            return Err(Error::EmptySeries);
        }
        for (index, &value) in values.iter().enumerate() {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidTemperature { index, value });
            }
            if index > 0 && value <= values[index - 1] {
                return Err(Error::NotIncreasing { index });
            }
        }
        Ok(TemperatureSeries { values })
    }

    /// `points` evenly spaced temperatures from `start` to `stop`, both included.
    ///
    /// A single point gives `[start]`.
    pub fn linspace(start: f64, stop: f64, points: usize) -> Result<TemperatureSeries> {
        ensure_positive("temperature start", start)?;
        ensure_positive("temperature stop", stop)?;
        match points {
            0 => Err(Error::EmptySeries),
            1 => TemperatureSeries::new(vec![start]),
            _ => {
                if start >= stop {
                    return Err(Error::InvalidRange { start, stop });
                }
                let step = (stop - start) / (points - 1) as f64;
                let mut values: Vec<f64> =
                    (0..points).map(|i| start + step * i as f64).collect();
                // land exactly on `stop` like numpy does
                values[points - 1] = stop;
                TemperatureSeries::new(values)
            }
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Each temperature divided by a characteristic temperature, for plotting.
    pub fn normalized(&self, characteristic_temperature: f64) -> Vec<f64> {
        self.values
            .iter()
            .map(|t| t / characteristic_temperature)
            .collect()
    }

    pub fn first(&self) -> f64 {
        self.values[0]
    }

    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }
}

impl Deref for TemperatureSeries {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl fmt::Display for TemperatureSeries {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "TemperatureSeries {{ points: {}, from: {} K, to: {} K }}",
            self.values.len(),
            self.first(),
            self.last()
        )
    }
}
