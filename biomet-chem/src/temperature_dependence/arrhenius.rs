#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{MolarEnergy, Ratio, ThermodynamicTemperature},
    molar_energy::joule_per_mole,
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use biomet_core::{constants::GAS_CONSTANT, units::TemperatureOps};

use super::TemperatureResponse;

/// Parameters of the Arrhenius model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct ArrheniusParameters<R = f64> {
    /// Activation energy `Eₐ`.
    pub activation_energy: MolarEnergy,

    /// Temperature at which the rate equals `reference_rate`.
    pub reference_temperature: ThermodynamicTemperature,

    /// Rate at the reference temperature.
    pub reference_rate: R,
}

impl<R> TemperatureResponse for ArrheniusParameters<R> {
    fn ratio_at(&self, temperature: ThermodynamicTemperature) -> Ratio {
        arrhenius_ratio(self.activation_energy, self.reference_temperature, temperature)
    }
}

/// Computes the Arrhenius temperature response `exp(Eₐ·(T − T₀) / (R·T₀·T))`.
///
/// A positive activation energy makes the ratio increase with temperature,
/// a negative one makes it decrease.
#[must_use]
pub fn arrhenius_ratio(
    activation_energy: MolarEnergy,
    reference_temperature: ThermodynamicTemperature,
    temperature: ThermodynamicTemperature,
) -> Ratio {
    let e_act = activation_energy.get::<joule_per_mole>();
    let t_ref = reference_temperature.get::<kelvin>();
    let t = temperature.get::<kelvin>();
    let delta_t = temperature
        .minus(reference_temperature)
        .get::<delta_kelvin>();

    Ratio::new::<ratio>((e_act * delta_t / (GAS_CONSTANT * t_ref * t)).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn energy(value: f64) -> MolarEnergy {
        MolarEnergy::new::<joule_per_mole>(value)
    }

    fn temp(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(value)
    }

    #[test]
    fn unity_at_reference_temperature() {
        for e_act in [-3e4, 0.0, 5e4, 1.2e5] {
            let r = arrhenius_ratio(energy(e_act), temp(288.15), temp(288.15));
            assert_eq!(r.get::<ratio>(), 1.0);
        }
    }

    #[test]
    fn fifteen_kelvin_below_reference() {
        let r = arrhenius_ratio(energy(5e4), temp(298.15), temp(283.15));
        assert_relative_eq!(r.get::<ratio>(), 0.343_522_425_565_366_9, epsilon = 1e-10);
    }

    #[test]
    fn sign_of_activation_energy_sets_direction() {
        let t_ref = temp(298.15);

        let rising = arrhenius_ratio(energy(6e4), t_ref, temp(308.15));
        assert!(rising.get::<ratio>() > 1.0);

        let falling = arrhenius_ratio(energy(-6e4), t_ref, temp(308.15));
        assert!(falling.get::<ratio>() < 1.0);

        // Opposite activation energies give reciprocal ratios.
        assert_relative_eq!(
            rising.get::<ratio>() * falling.get::<ratio>(),
            1.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn zero_activation_energy_is_temperature_independent() {
        let r = arrhenius_ratio(energy(0.0), temp(298.15), temp(350.0));
        assert_eq!(r.get::<ratio>(), 1.0);
    }

    #[test]
    fn absolute_zero_is_not_guarded() {
        // The exponent diverges to negative infinity.
        let r = arrhenius_ratio(energy(5e4), temp(298.15), temp(0.0));
        assert_eq!(r.get::<ratio>(), 0.0);
    }
}
