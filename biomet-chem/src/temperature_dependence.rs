//! Temperature dependence of reaction rates.
//!
//! Each model is a dimensionless ratio `k(T) / k(T₀)` that scales a rate known
//! at a reference temperature `T₀` to any other temperature `T`:
//!
//! - [`q10_ratio`]: `Q10^((T − T₀) / 10 K)`.
//! - [`arrhenius_ratio`]: `exp(Eₐ·(T − T₀) / (R·T₀·T))`.
//! - [`enzyme_ratio`]: an Arrhenius-like rise damped by reversible enzyme
//!   deactivation at high temperature, which gives the rate an optimum.
//!
//! Fitted parameters are kept in one of the records [`Q10Parameters`],
//! [`ArrheniusParameters`], or [`EnzymeParameters`], wrapped in the closed
//! [`TemperatureDependence`] enum and evaluated with [`evaluate`].
//!
//! # Example
//!
//! ```
//! use biomet_chem::{Q10Parameters, TemperatureDependence, evaluate};
//! use uom::si::{
//!     f64::{Ratio, ThermodynamicTemperature},
//!     ratio::ratio,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let respiration = TemperatureDependence::Q10(Q10Parameters {
//!     q10: Ratio::new::<ratio>(2.0),
//!     reference_temperature: ThermodynamicTemperature::new::<kelvin>(298.15),
//!     reference_rate: 4.0,
//! });
//!
//! let rate = evaluate(&respiration, ThermodynamicTemperature::new::<kelvin>(308.15));
//! assert!((rate - 8.0).abs() < 1e-12);
//! ```

mod arrhenius;
mod enzyme;
mod q10;

use std::ops::Mul;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
};

pub use arrhenius::{ArrheniusParameters, arrhenius_ratio};
pub use enzyme::{EnzymeParameters, enzyme_ratio, enzyme_temperature_optimum};
pub use q10::{Q10Parameters, q10_ratio};

/// A model of how a reaction rate responds to temperature.
///
/// Implementors return the dimensionless ratio of the rate at `temperature`
/// to the rate at the model's own reference temperature.
pub trait TemperatureResponse {
    /// Returns `k(temperature) / k(reference_temperature)`.
    fn ratio_at(&self, temperature: ThermodynamicTemperature) -> Ratio;
}

/// Fitted parameters for one of the supported temperature-dependence models.
///
/// The reference rate type `R` is whatever the caller measures rates in: a
/// plain `f64` or any `uom` quantity that can be scaled by an `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-derive",
    serde(tag = "model", rename_all = "snake_case")
)]
pub enum TemperatureDependence<R = f64> {
    Q10(Q10Parameters<R>),
    Arrhenius(ArrheniusParameters<R>),
    Enzyme(EnzymeParameters<R>),
}

impl<R: Copy + Mul<f64, Output = R>> TemperatureDependence<R> {
    /// Returns the rate at `temperature`.
    ///
    /// Equivalent to the free function [`evaluate`].
    #[must_use]
    pub fn evaluate(&self, temperature: ThermodynamicTemperature) -> R {
        evaluate(self, temperature)
    }
}

impl<R: Copy> TemperatureDependence<R> {
    /// Returns the rate at the reference temperature.
    #[must_use]
    pub fn reference_rate(&self) -> R {
        match self {
            Self::Q10(params) => params.reference_rate,
            Self::Arrhenius(params) => params.reference_rate,
            Self::Enzyme(params) => params.reference_rate,
        }
    }

    /// Returns the temperature at which the rate equals the reference rate.
    #[must_use]
    pub fn reference_temperature(&self) -> ThermodynamicTemperature {
        match self {
            Self::Q10(params) => params.reference_temperature,
            Self::Arrhenius(params) => params.reference_temperature,
            Self::Enzyme(params) => params.reference_temperature,
        }
    }
}

impl<R> TemperatureResponse for TemperatureDependence<R> {
    fn ratio_at(&self, temperature: ThermodynamicTemperature) -> Ratio {
        match self {
            Self::Q10(params) => params.ratio_at(temperature),
            Self::Arrhenius(params) => params.ratio_at(temperature),
            Self::Enzyme(params) => params.ratio_at(temperature),
        }
    }
}

impl<R> From<Q10Parameters<R>> for TemperatureDependence<R> {
    fn from(params: Q10Parameters<R>) -> Self {
        Self::Q10(params)
    }
}

impl<R> From<ArrheniusParameters<R>> for TemperatureDependence<R> {
    fn from(params: ArrheniusParameters<R>) -> Self {
        Self::Arrhenius(params)
    }
}

impl<R> From<EnzymeParameters<R>> for TemperatureDependence<R> {
    fn from(params: EnzymeParameters<R>) -> Self {
        Self::Enzyme(params)
    }
}

/// Evaluates a temperature-dependence model at `temperature`.
///
/// Returns `reference_rate · ratio`, where the ratio comes from the model
/// selected by the variant of `parameters`.
///
/// Temperatures at or below absolute zero are not rejected. They produce
/// infinite or NaN results following IEEE 754 arithmetic.
#[must_use]
pub fn evaluate<R>(
    parameters: &TemperatureDependence<R>,
    temperature: ThermodynamicTemperature,
) -> R
where
    R: Copy + Mul<f64, Output = R>,
{
    parameters.reference_rate() * parameters.ratio_at(temperature).get::<ratio>()
}
