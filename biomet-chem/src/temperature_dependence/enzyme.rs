use log::debug;
#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{MolarEnergy, MolarHeatCapacity, Ratio, ThermodynamicTemperature},
    molar_energy::joule_per_mole,
    molar_heat_capacity::joule_per_kelvin_mole,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use biomet_core::constants::GAS_CONSTANT;

use crate::ChemError;

use super::TemperatureResponse;

/// Parameters of the enzyme model with reversible high-temperature deactivation.
///
/// The enzyme is split between an active and a deactivated state in
/// thermodynamic equilibrium. The rate follows the active fraction, so it
/// rises with temperature until deactivation takes over, giving an optimum
/// (see [`EnzymeParameters::temperature_optimum`]).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct EnzymeParameters<R = f64> {
    /// Gibbs free energy of activation `ΔGₐ`.
    pub gibbs_free_energy_activation: MolarEnergy,

    /// Enthalpy of deactivation `ΔH_d`.
    pub enthalpy_deactivation: MolarEnergy,

    /// Entropy of deactivation `ΔS_d`.
    pub entropy_deactivation: MolarHeatCapacity,

    /// Temperature at which the rate equals `reference_rate`.
    pub reference_temperature: ThermodynamicTemperature,

    /// Rate at the reference temperature.
    pub reference_rate: R,
}

impl<R> EnzymeParameters<R> {
    /// Returns the temperature at which the rate peaks.
    ///
    /// # Errors
    ///
    /// See [`enzyme_temperature_optimum`].
    pub fn temperature_optimum(&self) -> Result<ThermodynamicTemperature, ChemError> {
        enzyme_temperature_optimum(
            self.gibbs_free_energy_activation,
            self.enthalpy_deactivation,
            self.entropy_deactivation,
        )
    }
}

impl<R> TemperatureResponse for EnzymeParameters<R> {
    fn ratio_at(&self, temperature: ThermodynamicTemperature) -> Ratio {
        enzyme_ratio(
            self.gibbs_free_energy_activation,
            self.enthalpy_deactivation,
            self.entropy_deactivation,
            self.reference_temperature,
            temperature,
        )
    }
}

/// Computes the enzyme temperature response `f(T) / f(T₀)`, where
///
/// ```text
/// f(T) = exp(−ΔGₐ / (R·T)) / (1 + exp((ΔS_d − ΔH_d / T) / R))
/// ```
#[must_use]
pub fn enzyme_ratio(
    gibbs_free_energy_activation: MolarEnergy,
    enthalpy_deactivation: MolarEnergy,
    entropy_deactivation: MolarHeatCapacity,
    reference_temperature: ThermodynamicTemperature,
    temperature: ThermodynamicTemperature,
) -> Ratio {
    let activity = |t: ThermodynamicTemperature| {
        enzyme_activity(
            gibbs_free_energy_activation.get::<joule_per_mole>(),
            enthalpy_deactivation.get::<joule_per_mole>(),
            entropy_deactivation.get::<joule_per_kelvin_mole>(),
            t.get::<kelvin>(),
        )
    };

    Ratio::new::<ratio>(activity(temperature) / activity(reference_temperature))
}

/// Computes the temperature at which the enzyme model peaks,
/// `T_opt = ΔH_d / (ΔS_d + R·ln(ΔH_d / ΔGₐ − 1))`.
///
/// # Errors
///
/// Returns [`ChemError::Undefined`] if the model has no optimum: either
/// `ΔH_d / ΔGₐ` does not exceed one, or the formula does not yield a finite
/// positive temperature.
pub fn enzyme_temperature_optimum(
    gibbs_free_energy_activation: MolarEnergy,
    enthalpy_deactivation: MolarEnergy,
    entropy_deactivation: MolarHeatCapacity,
) -> Result<ThermodynamicTemperature, ChemError> {
    let dg_a = gibbs_free_energy_activation.get::<joule_per_mole>();
    let dh_d = enthalpy_deactivation.get::<joule_per_mole>();
    let ds_d = entropy_deactivation.get::<joule_per_kelvin_mole>();

    let enthalpy_ratio = dh_d / dg_a;
    if enthalpy_ratio.is_nan() || enthalpy_ratio <= 1.0 {
        debug!("no enzyme temperature optimum: ΔH_d/ΔGₐ = {enthalpy_ratio}");
        return Err(ChemError::Undefined {
            quantity: "enzyme temperature optimum",
            context: Some(format!(
                "ratio of deactivation enthalpy to activation energy must exceed 1, got {enthalpy_ratio}"
            )),
        });
    }

    let t_opt = dh_d / (ds_d + GAS_CONSTANT * (enthalpy_ratio - 1.0).ln());
    if !t_opt.is_finite() || t_opt <= 0.0 {
        debug!("no enzyme temperature optimum: formula gives {t_opt} K");
        return Err(ChemError::Undefined {
            quantity: "enzyme temperature optimum",
            context: Some(format!("expected a positive temperature, got {t_opt} K")),
        });
    }

    Ok(ThermodynamicTemperature::new::<kelvin>(t_opt))
}

/// Active-state rate factor at temperature `t`, all values in SI.
fn enzyme_activity(dg_a: f64, dh_d: f64, ds_d: f64, t: f64) -> f64 {
    (-dg_a / (GAS_CONSTANT * t)).exp() / (1.0 + ((ds_d - dh_d / t) / GAS_CONSTANT).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn params() -> EnzymeParameters {
        EnzymeParameters {
            gibbs_free_energy_activation: MolarEnergy::new::<joule_per_mole>(4e4),
            enthalpy_deactivation: MolarEnergy::new::<joule_per_mole>(2e5),
            entropy_deactivation: MolarHeatCapacity::new::<joule_per_kelvin_mole>(660.0),
            reference_temperature: temp(298.15),
            reference_rate: 1.0,
        }
    }

    fn temp(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(value)
    }

    #[test]
    fn unity_at_reference_temperature() {
        let p = params();
        for t in [273.15, 298.15, 320.0] {
            let r = enzyme_ratio(
                p.gibbs_free_energy_activation,
                p.enthalpy_deactivation,
                p.entropy_deactivation,
                temp(t),
                temp(t),
            );
            assert_eq!(r.get::<ratio>(), 1.0);
        }
    }

    #[test]
    fn fifteen_kelvin_below_reference() {
        let r = params().ratio_at(temp(283.15));
        assert_relative_eq!(r.get::<ratio>(), 0.539_322_086_280_474_5, epsilon = 1e-10);
    }

    #[test]
    fn temperature_optimum() -> Result<(), ChemError> {
        let t_opt = params().temperature_optimum()?;
        assert_relative_eq!(t_opt.get::<kelvin>(), 297.828_993_728_325_2, epsilon = 1e-8);
        Ok(())
    }

    #[test]
    fn rate_peaks_at_optimum() -> Result<(), ChemError> {
        let p = params();
        let t_opt = p.temperature_optimum()?.get::<kelvin>();
        let peak = p.ratio_at(temp(t_opt)).get::<ratio>();

        for offset in [-10.0, -1.0, -0.1, 0.1, 1.0, 10.0] {
            let off_peak = p.ratio_at(temp(t_opt + offset)).get::<ratio>();
            assert!(off_peak < peak, "rate at T_opt{offset:+} K exceeds the peak");
        }
        Ok(())
    }

    #[test]
    fn no_optimum_when_deactivation_enthalpy_is_too_small() {
        for dh_d in [4e4, 3e4, -1e5] {
            let result = enzyme_temperature_optimum(
                MolarEnergy::new::<joule_per_mole>(4e4),
                MolarEnergy::new::<joule_per_mole>(dh_d),
                MolarHeatCapacity::new::<joule_per_kelvin_mole>(660.0),
            );
            assert!(matches!(
                result,
                Err(ChemError::Undefined {
                    quantity: "enzyme temperature optimum",
                    ..
                })
            ));
        }
    }

    #[test]
    fn no_optimum_when_formula_gives_negative_temperature() {
        // Denominator: -100 + R·ln(4) ≈ -88.5 J/mol·K
        let result = enzyme_temperature_optimum(
            MolarEnergy::new::<joule_per_mole>(4e4),
            MolarEnergy::new::<joule_per_mole>(2e5),
            MolarHeatCapacity::new::<joule_per_kelvin_mole>(-100.0),
        );
        assert!(matches!(result, Err(ChemError::Undefined { .. })));
    }

    #[test]
    fn absolute_zero_is_not_guarded() {
        // The activation term vanishes and the deactivation term diverges.
        let p = params();
        let r = enzyme_ratio(
            p.gibbs_free_energy_activation,
            p.enthalpy_deactivation,
            p.entropy_deactivation,
            p.reference_temperature,
            temp(0.0),
        );
        assert_eq!(r.get::<ratio>(), 0.0);
    }
}
