//! Temperature dependence of reaction rates and gas solubility in water.
//!
//! Closed-form building blocks for canopy-flux models:
//!
//! - [`temperature_dependence`]: Q10, Arrhenius, and enzyme (two-state
//!   deactivation) models of how a reaction rate scales with temperature.
//! - [`solubility`]: empirical solubility fits for CO2 and OCS in water.

mod error;

pub mod solubility;
pub mod temperature_dependence;

pub use error::ChemError;
pub use solubility::{Solubility, SolubilityUnit, gas_solubility, solubility_co2, solubility_ocs};
pub use temperature_dependence::{
    ArrheniusParameters, EnzymeParameters, Q10Parameters, TemperatureDependence,
    TemperatureResponse, arrhenius_ratio, enzyme_ratio, enzyme_temperature_optimum, evaluate,
    q10_ratio,
};
