use log::debug;
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::per_mille,
    thermodynamic_temperature::kelvin,
};

use biomet_core::units::henry_from_mol_per_liter_atm;

use super::{Solubility, SolubilityUnit};

/// Temperature range of the seawater measurements behind the fit, K.
const FIT_TEMPERATURE: (f64, f64) = (271.15, 313.15);

/// Salinity range of the seawater measurements behind the fit, g/kg.
const FIT_SALINITY: (f64, f64) = (0.0, 40.0);

/// Computes the solubility of CO2 in water or seawater.
///
/// Uses the fit of Weiss (1974), Mar. Chem. 2, 203–215, for the Henry
/// coefficient `K₀` in mol/L·atm:
///
/// ```text
/// ln K₀ = A₁ + A₂·(100/T) + A₃·ln(T/100) + S·(B₁ + B₂·(T/100) + B₃·(T/100)²)
/// ```
///
/// with salinity `S` in g/kg (pass zero for fresh water).
///
/// Inputs outside the fitted range are extrapolated without error.
#[must_use]
pub fn solubility_co2(
    temperature: ThermodynamicTemperature,
    salinity: Ratio,
    unit: SolubilityUnit,
) -> Solubility {
    const A1: f64 = -58.0931;
    const A2: f64 = 90.5069;
    const A3: f64 = 22.2940;
    const B1: f64 = 0.027766;
    const B2: f64 = -0.025888;
    const B3: f64 = 0.0050578;

    let t_k = temperature.get::<kelvin>();
    let s = salinity.get::<per_mille>();
    if !in_fit_range(t_k, s) {
        debug!("CO2 solubility extrapolated beyond fit range: T = {t_k} K, S = {s} g/kg");
    }

    let t = t_k / 100.0;
    let kcp = (A1 + A2 / t + A3 * t.ln() + s * (B1 + B2 * t + B3 * t * t)).exp();

    Solubility::Henry(henry_from_mol_per_liter_atm(kcp)).into_unit(unit, temperature)
}

/// Whether `t_k` (K) and `s` (g/kg) lie within the measurements behind the fit.
fn in_fit_range(t_k: f64, s: f64) -> bool {
    (FIT_TEMPERATURE.0..=FIT_TEMPERATURE.1).contains(&t_k)
        && (FIT_SALINITY.0..=FIT_SALINITY.1).contains(&s)
}
