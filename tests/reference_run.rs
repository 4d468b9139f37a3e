//! Integration tests: the reference comparison run.
//!
//! One mole of oscillators, DT = ET = 105 K, 1000 temperatures from 1 K to 500 K.

use approx::assert_relative_eq;
use heatcapacity::constants::{AVOGADRO, BOLTZMANN};
use heatcapacity::{debye, debye_with, Comparison, DebyeLoop, RunConfig, TemperatureSeries};

#[test]
fn reference_run_series_lengths_and_bounds() {
    let comparison = Comparison::compute(&RunConfig::default()).unwrap();
    let classical = 3.0 * AVOGADRO * BOLTZMANN;

    assert_eq!(comparison.temperatures.len(), 1000);
    assert_eq!(comparison.dulong_petit.len(), 1000);
    assert_eq!(comparison.einstein.len(), 1000);
    assert_eq!(comparison.debye.len(), 1000);
    assert_eq!(comparison.debye_low_temperature.len(), 1000);

    assert_relative_eq!(classical, 24.93, max_relative = 1e-3);
    assert!(comparison.dulong_petit.iter().all(|&c| c == classical));
    assert!(comparison.einstein.iter().all(|&c| c.is_finite() && c <= classical));
    assert!(comparison.debye.iter().all(|&c| c > 0.0 && c <= classical));
}

#[test]
fn reference_run_debye_is_above_einstein_at_low_temperature() {
    // acoustic phonons survive where a single Einstein mode is frozen out
    let comparison = Comparison::compute(&RunConfig::default()).unwrap();
    for i in 0..20 {
        assert!(comparison.debye[i] > comparison.einstein[i]);
    }
}

#[test]
fn debye_five_temperatures_are_independent() {
    let temperatures = TemperatureSeries::new(vec![5.0, 20.0, 60.0, 105.0, 300.0]).unwrap();
    let c = debye(AVOGADRO, 105.0, &temperatures).unwrap();
    assert_eq!(c.len(), 5);
    assert!(c.iter().all(|&value| value != 0.0));
    for i in 0..c.len() {
        for j in (i + 1)..c.len() {
            assert_ne!(c[i], c[j]);
        }
    }
    // each entry equals a single-temperature evaluation
    for (i, &t) in temperatures.iter().enumerate() {
        let single = debye(AVOGADRO, 105.0, &TemperatureSeries::new(vec![t]).unwrap()).unwrap();
        assert_eq!(c[i], single[0]);
    }
}

#[test]
fn legacy_debye_reproduces_the_single_value_figure() {
    let temperatures = TemperatureSeries::linspace(1.0, 500.0, 5).unwrap();
    let legacy = debye_with(AVOGADRO, 105.0, &temperatures, DebyeLoop::Legacy).unwrap();
    assert!(legacy[0] > 0.0);
    assert_eq!(legacy.iter().filter(|&&c| c == 0.0).count(), 4);
}
