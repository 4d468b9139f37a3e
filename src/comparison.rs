use std::fmt::Write;

use tracing::info;

use crate::error::Result;
use crate::file::RunConfig;
use crate::models::{self, DebyeLoop};
use crate::temperature::TemperatureSeries;

/// All four models evaluated over one temperature series.
///
/// Every series has the same length as `temperatures` and index `i` of each
/// belongs to `temperatures[i]`.
#[derive(Clone, Debug)]
pub struct Comparison {
    pub oscillators: f64,
    pub debye_temperature: f64,    // K
    pub einstein_temperature: f64, // K
    pub temperatures: TemperatureSeries,
    pub dulong_petit: Vec<f64>,          // J/K
    pub einstein: Vec<f64>,              // J/K
    pub debye: Vec<f64>,                 // J/K
    pub debye_low_temperature: Vec<f64>, // J/K
}

impl Comparison {
    pub fn compute(config: &RunConfig) -> Result<Comparison> {
        config.validate()?;
        let temperatures = TemperatureSeries::linspace(
            config.temperature_start,
            config.temperature_stop,
            config.points,
        )?;
        info!(%temperatures, "evaluating heat capacity models");

        let oscillators = config.oscillators;
        let debye_temperature = config.debye_temperature;
        let einstein_temperature = config.einstein_temperature();
        let mode = if config.legacy_debye {
            DebyeLoop::Legacy
        } else {
            DebyeLoop::Full
        };

        Ok(Comparison {
            dulong_petit: models::dulong_petit(oscillators, &temperatures),
            einstein: models::einstein(oscillators, einstein_temperature, &temperatures)?,
            debye: models::debye_with(oscillators, debye_temperature, &temperatures, mode)?,
            debye_low_temperature: models::debye_low_temperature(
                oscillators,
                debye_temperature,
                &temperatures,
            )?,
            oscillators,
            debye_temperature,
            einstein_temperature,
            temperatures,
        })
    }

    /// `T / DT` for every temperature, the x-axis of the plot.
    pub fn normalized_temperatures(&self) -> Vec<f64> {
        self.temperatures.normalized(self.debye_temperature)
    }

    /// Plain text table with about `rows` evenly spaced rows, always including
    /// the first and last temperature.
    pub fn summary(&self, rows: usize) -> String {
        let len = self.temperatures.len();
        let stride = (len / rows.max(1)).max(1);

        let mut out = String::new();
        // the formatting `{:>10.3}` aligns the columns on the decimal point
        let _ = writeln!(
            out,
            "{:>10} {:>8} {:>13} {:>10} {:>10} {:>13}",
            "T [K]", "T/DT", "Dulong-Petit", "Einstein", "Debye", "Debye, low T"
        );
        let mut indices: Vec<usize> = (0..len).step_by(stride).collect();
        if indices.last() != Some(&(len - 1)) {
            indices.push(len - 1);
        }
        for i in indices {
            let t = self.temperatures[i];
            let _ = writeln!(
                out,
                "{:>10.3} {:>8.3} {:>13.3} {:>10.3} {:>10.3} {:>13.3}",
                t,
                t / self.debye_temperature,
                self.dulong_petit[i],
                self.einstein[i],
                self.debye[i],
                self.debye_low_temperature[i],
            );
        }
        out
    }
}
