//! Solubility of trace gases in water.
//!
//! Solubility is reported in one of two conventions, chosen with
//! [`SolubilityUnit`]:
//!
//! - **Bunsen coefficient**: dimensionless ratio of dissolved gas volume per
//!   volume of liquid, as a [`Ratio`].
//! - **Henry coefficient**: dissolved concentration per unit partial pressure,
//!   as a [`HenryCoefficient`] (customarily quoted in mol/L·atm).
//!
//! The two are related through the molar concentration of air `c_air` at one
//! standard atmosphere: `Bunsen = Henry[mol/L·atm] · 1000 / c_air[mol/m³]`.

mod co2;
mod ocs;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    molar_concentration::mole_per_cubic_meter,
    ratio::ratio,
};

use biomet_core::{
    air,
    constants::atm,
    units::{HenryCoefficient, henry_from_mol_per_liter_atm, henry_in_mol_per_liter_atm},
};

use crate::ChemError;

pub use co2::solubility_co2;
pub use ocs::solubility_ocs;

/// Unit convention for a computed solubility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "snake_case"))]
pub enum SolubilityUnit {
    /// Dimensionless Bunsen coefficient.
    #[default]
    Bunsen,
    /// Henry coefficient, mol/L·atm.
    Henry,
}

/// A gas solubility in one of the two supported conventions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solubility {
    /// Dimensionless Bunsen coefficient.
    Bunsen(Ratio),
    /// Henry coefficient, stored in SI and quoted in mol/L·atm by [`Solubility::value`].
    Henry(HenryCoefficient),
}

impl Solubility {
    /// Returns the unit convention of this value.
    #[must_use]
    pub fn unit(&self) -> SolubilityUnit {
        match self {
            Self::Bunsen(_) => SolubilityUnit::Bunsen,
            Self::Henry(_) => SolubilityUnit::Henry,
        }
    }

    /// Returns the plain value: dimensionless for Bunsen, mol/L·atm for Henry.
    #[must_use]
    pub fn value(&self) -> f64 {
        match *self {
            Self::Bunsen(bunsen) => bunsen.get::<ratio>(),
            Self::Henry(henry) => henry_in_mol_per_liter_atm(henry),
        }
    }

    /// Returns the Bunsen coefficient, converting at `temperature` if needed.
    #[must_use]
    pub fn to_bunsen(self, temperature: ThermodynamicTemperature) -> Ratio {
        match self {
            Self::Bunsen(bunsen) => bunsen,
            Self::Henry(henry) => Ratio::new::<ratio>(
                henry_in_mol_per_liter_atm(henry) * 1000.0 / air_concentration(temperature),
            ),
        }
    }

    /// Returns the Henry coefficient, converting at `temperature` if needed.
    #[must_use]
    pub fn to_henry(self, temperature: ThermodynamicTemperature) -> HenryCoefficient {
        match self {
            Self::Bunsen(bunsen) => henry_from_mol_per_liter_atm(
                bunsen.get::<ratio>() * air_concentration(temperature) / 1000.0,
            ),
            Self::Henry(henry) => henry,
        }
    }

    /// Converts to the requested unit convention at `temperature`.
    #[must_use]
    pub fn into_unit(self, unit: SolubilityUnit, temperature: ThermodynamicTemperature) -> Self {
        match unit {
            SolubilityUnit::Bunsen => Self::Bunsen(self.to_bunsen(temperature)),
            SolubilityUnit::Henry => Self::Henry(self.to_henry(temperature)),
        }
    }
}

/// Computes the solubility of a gas identified by name.
///
/// Reserved for dispatch by gas species. No species is supported yet; use
/// [`solubility_co2`] or [`solubility_ocs`] directly.
///
/// # Errors
///
/// Always returns [`ChemError::NotImplemented`].
pub fn gas_solubility(
    gas: &str,
    _temperature: ThermodynamicTemperature,
    _unit: SolubilityUnit,
) -> Result<Solubility, ChemError> {
    Err(ChemError::NotImplemented {
        operation: "gas_solubility",
        context: Some(format!("no generic solubility model for gas `{gas}`")),
    })
}

/// Molar concentration of air at one standard atmosphere, mol/m³.
fn air_concentration(temperature: ThermodynamicTemperature) -> f64 {
    air::molar_concentration(temperature, atm()).get::<mole_per_cubic_meter>()
}
