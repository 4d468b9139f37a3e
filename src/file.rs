use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::constants::AVOGADRO;
use crate::error::{ensure_positive, Error, Result};

/// Parameters of one comparison run.
///
/// Every field may be left out of the TOML file and falls back to the
/// reference run: one mole of oscillators, `DT = ET = 105 K`, and 1000
/// temperatures from 1 K to 500 K.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub oscillators: f64,
    pub debye_temperature: f64, // K
    /// Defaults to `debye_temperature` when absent.
    pub einstein_temperature: Option<f64>, // K
    pub temperature_start: f64, // K
    pub temperature_stop: f64, // K
    pub points: usize,
    pub legacy_debye: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            oscillators: AVOGADRO,
            debye_temperature: 105.0,
            einstein_temperature: None,
            temperature_start: 1.0,
            temperature_stop: 500.0,
            points: 1000,
            legacy_debye: false,
        }
    }
}

impl RunConfig {
    pub fn einstein_temperature(&self) -> f64 {
        self.einstein_temperature.unwrap_or(self.debye_temperature)
    }

    /// Rejects parameters no model can be evaluated with.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("oscillators", self.oscillators)?;
        ensure_positive("debye temperature", self.debye_temperature)?;
        ensure_positive("einstein temperature", self.einstein_temperature())?;
        ensure_positive("temperature start", self.temperature_start)?;
        ensure_positive("temperature stop", self.temperature_stop)?;
        if self.points == 0 {
            return Err(Error::EmptySeries);
        }
        if self.points > 1 && self.temperature_start >= self.temperature_stop {
            return Err(Error::InvalidRange {
                start: self.temperature_start,
                stop: self.temperature_stop,
            });
        }
        Ok(())
    }
}

/// Parses a [`RunConfig`] from TOML text and validates it.
pub fn parse_config(content: &str) -> Result<RunConfig> {
    let config: RunConfig =
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<RunConfig> {
    info!(path = %path.display(), "loading config");
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    debug!(?config, "parsed config");
    Ok(config)
}
