//! Four classical models of the heat capacity of a solid, evaluated over a
//! temperature range and compared on one plot.

#[cfg(all(feature = "cli", feature = "plot"))]
pub mod cli;
mod comparison;
pub mod constants;
mod error;
pub mod file;
pub mod integrate;
pub mod models;
#[cfg(feature = "plot")]
pub mod plot;
mod temperature;

pub use comparison::Comparison;
pub use error::{Error, Result};
pub use file::{load_config, RunConfig};
pub use models::{
    debye, debye_low_temperature, debye_with, dulong_petit, einstein, DebyeLoop,
};
pub use temperature::TemperatureSeries;
