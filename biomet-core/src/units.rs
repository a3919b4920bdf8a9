//! Quantity aliases and extensions not provided by `uom`.

use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{MolarConcentration, Pressure, TemperatureInterval, ThermodynamicTemperature},
        molar_concentration::mole_per_liter,
        pressure::atmosphere,
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin as abs_kelvin,
    },
    typenum::{N1, N2, P1, P2, Z0},
};

/// Henry solubility coefficient, mol/m³·Pa in SI.
///
/// Concentration of a dissolved gas per unit of its partial pressure.
/// The customary unit in the solubility literature is mol/L·atm, see
/// [`henry_from_mol_per_liter_atm`] and [`henry_in_mol_per_liter_atm`].
pub type HenryCoefficient = Quantity<ISQ<N2, N1, P2, Z0, Z0, P1, Z0>, SI<f64>, f64>;

/// Creates a [`HenryCoefficient`] from a value in mol/L·atm.
#[inline]
#[must_use]
pub fn henry_from_mol_per_liter_atm(value: f64) -> HenryCoefficient {
    MolarConcentration::new::<mole_per_liter>(value) / Pressure::new::<atmosphere>(1.0)
}

/// Returns the value of a [`HenryCoefficient`] in mol/L·atm.
#[inline]
#[must_use]
pub fn henry_in_mol_per_liter_atm(henry: HenryCoefficient) -> f64 {
    MolarConcentration::from(henry * Pressure::new::<atmosphere>(1.0)).get::<mole_per_liter>()
}

/// Extension method for `ThermodynamicTemperature` to compute a temperature difference.
pub trait TemperatureOps {
    /// Computes the difference between two temperature values.
    ///
    /// A `TemperatureInterval` (a temperature change) is distinct from a
    /// `ThermodynamicTemperature` (a specific temperature value), so `uom`
    /// does not allow subtracting two absolute temperatures directly.
    ///
    /// For more background on this distinction and unit handling in `uom`, see:
    /// - [uom#380](https://github.com/iliekturtles/uom/issues/380)
    /// - [uom#289](https://github.com/iliekturtles/uom/issues/289)
    /// - [uom#403](https://github.com/iliekturtles/uom/issues/403)
    ///
    /// Inputs may use any supported temperature units, with values internally
    /// converted to kelvin for calculation.
    ///
    /// # Parameters
    ///
    /// - `other`: The temperature to subtract from `self`.
    ///
    /// # Returns
    ///
    /// A `TemperatureInterval` representing the signed difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureOps for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}
