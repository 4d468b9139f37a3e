//! Integration tests: limiting behaviour of each heat capacity model.
//!
//! Each model is checked against the physical limit it must reproduce,
//! one mole of oscillators throughout.

use approx::assert_relative_eq;
use heatcapacity::constants::{AVOGADRO, BOLTZMANN};
use heatcapacity::{
    debye, debye_low_temperature, dulong_petit, einstein, Error, TemperatureSeries,
};

const N: f64 = AVOGADRO;
const THETA: f64 = 105.0; // K

fn classical_limit() -> f64 {
    3.0 * N * BOLTZMANN
}

#[test]
fn dulong_petit_is_flat_for_any_length() {
    for points in [1, 2, 17, 1000] {
        let temperatures = TemperatureSeries::linspace(1.0, 500.0, points).unwrap();
        let c = dulong_petit(N, &temperatures);
        assert_eq!(c.len(), points);
        assert!(c.iter().all(|&value| value == classical_limit()));
    }
}

#[test]
fn einstein_reaches_dulong_petit_at_high_temperature() {
    let temperatures = TemperatureSeries::new(vec![10.0 * THETA, 50.0 * THETA]).unwrap();
    let c = einstein(N, THETA, &temperatures).unwrap();
    for value in c {
        assert_relative_eq!(value, classical_limit(), max_relative = 0.01);
        assert!(value <= classical_limit());
    }
}

#[test]
fn einstein_vanishes_at_low_temperature() {
    let temperatures =
        TemperatureSeries::new(vec![THETA / 1000.0, THETA / 50.0, THETA / 10.0]).unwrap();
    let c = einstein(N, THETA, &temperatures).unwrap();
    assert_eq!(c[0], 0.0);
    assert!(c[1] < 1e-15);
    assert!(c[0] <= c[1] && c[1] < c[2]);
}

#[test]
fn debye_increases_up_to_the_debye_temperature() {
    let temperatures = TemperatureSeries::linspace(THETA / 100.0, THETA, 60).unwrap();
    let c = debye(N, THETA, &temperatures).unwrap();
    for pair in c.windows(2) {
        assert!(pair[1] > pair[0], "{} is not above {}", pair[1], pair[0]);
    }
}

#[test]
fn debye_matches_low_temperature_limit_as_temperature_vanishes() {
    let temperatures = TemperatureSeries::new(vec![THETA / 100.0, THETA / 20.0]).unwrap();
    let full = debye(N, THETA, &temperatures).unwrap();
    let limit = debye_low_temperature(N, THETA, &temperatures).unwrap();
    for (c, low) in full.iter().zip(&limit) {
        assert_relative_eq!(c / low, 1.0, max_relative = 1e-4);
    }
}

#[test]
fn debye_keeps_the_cubic_law_far_below_the_debye_temperature() {
    // DT/T far beyond the integrand peak, where the integral must not collapse to zero
    let temperatures =
        TemperatureSeries::new(vec![THETA * 1e-6, THETA * 1e-5, THETA * 1e-4, THETA * 3e-4])
            .unwrap();
    let full = debye(N, THETA, &temperatures).unwrap();
    let limit = debye_low_temperature(N, THETA, &temperatures).unwrap();
    for (c, low) in full.iter().zip(&limit) {
        assert_relative_eq!(c / low, 1.0, max_relative = 1e-9);
    }
}

#[test]
fn debye_low_temperature_overshoots_well_above_the_debye_temperature() {
    // the cubic law has no classical ceiling
    let temperatures = TemperatureSeries::new(vec![2.0 * THETA]).unwrap();
    let limit = debye_low_temperature(N, THETA, &temperatures).unwrap();
    assert!(limit[0] > classical_limit());
}

#[test]
fn characteristic_temperature_must_be_positive() {
    let temperatures = TemperatureSeries::new(vec![1.0]).unwrap();
    assert!(matches!(
        einstein(N, -THETA, &temperatures),
        Err(Error::NonPositiveParameter { .. })
    ));
    assert!(matches!(
        debye(N, 0.0, &temperatures),
        Err(Error::NonPositiveParameter { .. })
    ));
    assert!(matches!(
        debye_low_temperature(N, f64::NAN, &temperatures),
        Err(Error::NonPositiveParameter { .. })
    ));
}

#[test]
fn zero_kelvin_never_reaches_an_evaluator() {
    assert!(matches!(
        TemperatureSeries::new(vec![0.0, 1.0]),
        Err(Error::InvalidTemperature { index: 0, .. })
    ));
}
