//! Physical constants.

use uom::si::{
    f64::{MolarHeatCapacity, Pressure},
    molar_heat_capacity::joule_per_kelvin_mole,
    pressure::pascal,
};

/// Universal gas constant `R`, J/mol·K.
///
/// Exact value since the 2019 redefinition of the SI base units.
pub const GAS_CONSTANT: f64 = 8.314_462_618;

/// Standard atmosphere, Pa.
pub const STANDARD_ATMOSPHERE: f64 = 101_325.0;

/// Returns the universal gas constant as a typed quantity.
#[inline]
#[must_use]
pub fn gas_constant() -> MolarHeatCapacity {
    MolarHeatCapacity::new::<joule_per_kelvin_mole>(GAS_CONSTANT)
}

/// Returns one standard atmosphere as a typed quantity.
#[inline]
#[must_use]
pub fn atm() -> Pressure {
    Pressure::new::<pascal>(STANDARD_ATMOSPHERE)
}
