//! The four heat capacity models.
//!
//! Each evaluator maps a [`TemperatureSeries`] to one heat capacity per
//! temperature, in J/K, in the same order as the input.

use std::f64::consts::PI;

use tracing::{debug, warn};

use crate::constants::BOLTZMANN;
use crate::error::{ensure_positive, Error, Result};
use crate::integrate;
use crate::temperature::TemperatureSeries;

/// How [`debye_with`] walks the temperature series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DebyeLoop {
    /// One integral per temperature.
    #[default]
    Full,
    /// Only the first temperature is evaluated and every later entry stays at
    /// zero. Kept to reproduce figures made with the original script.
    Legacy,
}

/// Classical limit, `3·N·k_B` at every temperature.
///
/// The oscillator count is not validated.
pub fn dulong_petit(oscillators: f64, temperatures: &TemperatureSeries) -> Vec<f64> {
    vec![3.0 * oscillators * BOLTZMANN; temperatures.len()]
}

/// Einstein model with every oscillator at one frequency.
///
/// `C(T) = 3·N·k_B·x²·eˣ/(eˣ − 1)²` with `x = ET/T`, see [`einstein_function`].
pub fn einstein(
    oscillators: f64,
    einstein_temperature: f64,
    temperatures: &TemperatureSeries,
) -> Result<Vec<f64>> {
    ensure_positive("einstein temperature", einstein_temperature)?;
    let scale = 3.0 * oscillators * BOLTZMANN;
    Ok(temperatures
        .iter()
        .map(|&t| scale * einstein_function(einstein_temperature / t))
        .collect())
}

/// `x²·eˣ/(eˣ − 1)²`, tending to 1 as `x → 0` and 0 as `x → ∞`.
///
/// Written as `(x/(e⁻ˣ − 1))²·e⁻ˣ` so neither a tiny nor a huge `x` produces `NaN`.
pub fn einstein_function(x: f64) -> f64 {
    if x == 0.0 {
        return 1.0;
    }
    let decay = (-x).exp();
    if decay == 0.0 {
        return 0.0;
    }
    let r = x / (-x).exp_m1();
    r * r * decay
}

/// Debye model, integrating the phonon density of states up to `DT/T`.
pub fn debye(
    oscillators: f64,
    debye_temperature: f64,
    temperatures: &TemperatureSeries,
) -> Result<Vec<f64>> {
    debye_with(oscillators, debye_temperature, temperatures, DebyeLoop::Full)
}

/// [`debye`] with an explicit [`DebyeLoop`].
///
/// # Errors
///
/// Returns [`Error::NonPositiveParameter`] for a non-positive Debye
/// temperature and [`Error::Quadrature`] if the integral fails to converge.
pub fn debye_with(
    oscillators: f64,
    debye_temperature: f64,
    temperatures: &TemperatureSeries,
    mode: DebyeLoop,
) -> Result<Vec<f64>> {
    ensure_positive("debye temperature", debye_temperature)?;
    let scale = 9.0 * oscillators * BOLTZMANN;

    let evaluated = match mode {
        DebyeLoop::Full => temperatures.len(),
        DebyeLoop::Legacy => {
            warn!("legacy Debye loop: only the first temperature is evaluated");
            1
        }
    };

    let mut heat_capacity = vec![0.0; temperatures.len()];
    for (c, &t) in heat_capacity.iter_mut().zip(temperatures.iter()).take(evaluated) {
        // (T/DT)³·I(DT/T) == I(x)/x³, which stays finite where T/DT overflows when cubed
        let reduced = debye_reduced_integral(debye_temperature / t).map_err(|source| {
            Error::Quadrature {
                temperature: t,
                source,
            }
        })?;
        *c = scale * reduced;
    }
    debug!(points = evaluated, "evaluated Debye heat capacity");
    Ok(heat_capacity)
}

/// Low-temperature Debye limit, `(12π⁴/5)·N·k_B·(T/DT)³`.
///
/// No range restriction is applied; the result only tracks [`debye`] for `T ≪ DT`.
pub fn debye_low_temperature(
    oscillators: f64,
    debye_temperature: f64,
    temperatures: &TemperatureSeries,
) -> Result<Vec<f64>> {
    ensure_positive("debye temperature", debye_temperature)?;
    let scale = 12.0 * PI.powi(4) / 5.0 * oscillators * BOLTZMANN;
    Ok(temperatures
        .iter()
        .map(|&t| scale * (t / debye_temperature).powi(3))
        .collect())
}

/// Upper bound past which the Debye integrand contributes less than `1e-20`.
pub const DEBYE_CUTOFF: f64 = 64.0;

/// Below this `x` the reduced integral uses its power series.
const SERIES_LIMIT: f64 = 1e-2;

/// `∫₀ˣ u⁴·eᵘ/(eᵘ − 1)² du`.
///
/// The upper bound is capped at [`DEBYE_CUTOFF`] so the peak near `u ≈ 4`
/// always falls inside the first quadrature panel.
pub fn debye_integral(x: f64) -> std::result::Result<f64, integrate::QuadratureError> {
    integrate::quad(debye_integrand, 0.0, x.min(DEBYE_CUTOFF))
}

/// `I(x)/x³`, tending to `1/3` as `x → 0`.
pub fn debye_reduced_integral(x: f64) -> std::result::Result<f64, integrate::QuadratureError> {
    if x < SERIES_LIMIT {
        // I(x) = x³/3 − x⁵/60 + x⁷/1680 − …
        let x2 = x * x;
        return Ok(1.0 / 3.0 - x2 / 60.0 + x2 * x2 / 1680.0);
    }
    Ok(debye_integral(x)? / x.powi(3))
}

/// `u⁴·eᵘ/(eᵘ − 1)²`, with its limit `0` at `u = 0`.
pub fn debye_integrand(u: f64) -> f64 {
    if u == 0.0 {
        return 0.0;
    }
    u * u * einstein_function(u)
}
