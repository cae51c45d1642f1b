use uom::si::{
    available_energy::joule_per_kilogram, f64::TemperatureInterval,
    temperature_interval::kelvin,
};

use crate::support::units::SpecificEnthalpy;

/// Numerical settings for the segment march.
///
/// The single-phase driving force assumes a nominal temperature change
/// across each segment for both streams. Those nominal steps only shape the
/// log-mean difference; the duty itself always comes from `U·A·ΔT`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarchConfig {
    /// Enthalpy band around the saturated states treated as single phase.
    pub phase_margin: SpecificEnthalpy,

    /// Nominal refrigerant temperature change across a single-phase segment.
    pub primary_step: TemperatureInterval,

    /// Nominal secondary temperature change across a single-phase segment.
    pub secondary_step: TemperatureInterval,

    /// Differences closer than this use the arithmetic mean.
    pub lmtd_tolerance: TemperatureInterval,
}

impl Default for MarchConfig {
    fn default() -> Self {
        Self {
            phase_margin: SpecificEnthalpy::new::<joule_per_kilogram>(100.0),
            primary_step: TemperatureInterval::new::<kelvin>(2.0),
            secondary_step: TemperatureInterval::new::<kelvin>(0.2),
            lmtd_tolerance: TemperatureInterval::new::<kelvin>(0.01),
        }
    }
}
