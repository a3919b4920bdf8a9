use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use super::{Solubility, SolubilityUnit};

/// Computes the solubility of carbonyl sulfide (OCS) in fresh water.
///
/// Uses the empirical Bunsen coefficient fit `k = T·exp(4050.32/T − 20.0007)`.
///
/// Temperatures at or near absolute zero are not guarded.
#[must_use]
pub fn solubility_ocs(temperature: ThermodynamicTemperature, unit: SolubilityUnit) -> Solubility {
    let t = temperature.get::<kelvin>();
    let bunsen = t * (4050.32 / t - 20.0007).exp();

    Solubility::Bunsen(Ratio::new::<ratio>(bunsen)).into_unit(unit, temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn temp(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(value)
    }

    #[test]
    fn bunsen_at_25_celsius() {
        let s = solubility_ocs(temp(298.15), SolubilityUnit::Bunsen);
        assert_eq!(s.unit(), SolubilityUnit::Bunsen);
        assert_relative_eq!(s.value(), 0.487_598_265_443_800_36, epsilon = 1e-10);
    }

    #[test]
    fn henry_at_25_celsius() {
        let s = solubility_ocs(temp(298.15), SolubilityUnit::Henry);
        assert_eq!(s.unit(), SolubilityUnit::Henry);
        assert_relative_eq!(s.value(), 0.019_930_113_211_735_698, epsilon = 1e-10);
    }

    #[test]
    fn solubility_decreases_with_temperature() {
        let cold = solubility_ocs(temp(278.15), SolubilityUnit::Bunsen);
        let warm = solubility_ocs(temp(308.15), SolubilityUnit::Bunsen);
        assert!(cold.value() > warm.value());
    }

    #[test]
    fn absolute_zero_is_not_guarded() {
        // Zero times an infinite exponential.
        let s = solubility_ocs(temp(0.0), SolubilityUnit::Henry);
        assert!(s.value().is_nan());
    }
}
