#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
};

use biomet_core::units::TemperatureOps;

use super::TemperatureResponse;

/// Parameters of the Q10 model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Q10Parameters<R = f64> {
    /// Factor by which the rate changes for a 10 K rise in temperature.
    pub q10: Ratio,

    /// Temperature at which the rate equals `reference_rate`.
    pub reference_temperature: ThermodynamicTemperature,

    /// Rate at the reference temperature.
    pub reference_rate: R,
}

impl<R> TemperatureResponse for Q10Parameters<R> {
    fn ratio_at(&self, temperature: ThermodynamicTemperature) -> Ratio {
        q10_ratio(self.q10, self.reference_temperature, temperature)
    }
}

/// Computes the Q10 temperature response `Q10^(0.1·(T − T₀))`.
///
/// `q10` must be positive; a negative base gives NaN for most temperatures.
#[must_use]
pub fn q10_ratio(
    q10: Ratio,
    reference_temperature: ThermodynamicTemperature,
    temperature: ThermodynamicTemperature,
) -> Ratio {
    let delta_t = temperature
        .minus(reference_temperature)
        .get::<delta_kelvin>();

    Ratio::new::<ratio>(q10.get::<ratio>().powf(0.1 * delta_t))
}
