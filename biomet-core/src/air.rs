//! Properties of dry air treated as an ideal gas.

use uom::si::f64::{MolarConcentration, MolarVolume, Pressure, ThermodynamicTemperature};

use crate::constants::gas_constant;

/// Computes the molar concentration of air with `n/V = p / (R·T)`.
///
/// This is the number of moles of air per cubic meter, used to convert
/// between Bunsen and Henry solubility coefficients.
#[must_use]
pub fn molar_concentration(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
) -> MolarConcentration {
    (pressure / (gas_constant() * temperature)).into()
}

/// Computes the molar volume of air with `V/n = R·T / p`.
#[must_use]
pub fn molar_volume(temperature: ThermodynamicTemperature, pressure: Pressure) -> MolarVolume {
    gas_constant() * temperature / pressure
}
