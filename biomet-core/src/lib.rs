//! Physical constants, air properties, and unit types for the Biomet library.
//!
//! These are the shared building blocks the chemistry and flux models draw on:
//! the universal gas constant, the standard atmosphere, and the molar
//! concentration of air used to move between solubility conventions.

pub mod air;
pub mod constants;
pub mod units;
