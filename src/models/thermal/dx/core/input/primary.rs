use uom::si::f64::{MassRate, TemperatureInterval, ThermodynamicTemperature};

use crate::support::{
    constraint::{Constrained, UnitInterval},
    thermo::{Phase, fluid::Refrigerant},
};

/// Refrigerant state entering the first segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimaryInlet {
    /// Vapor at a temperature at or above saturation.
    Superheated(ThermodynamicTemperature),
    /// Saturated mixture at the given vapor quality.
    TwoPhase(Constrained<f64, UnitInterval>),
    /// Liquid at a temperature at or below saturation.
    Subcooled(ThermodynamicTemperature),
}

impl PrimaryInlet {
    /// Returns the nominal phase of the inlet.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Self::Superheated(_) => Phase::SuperheatedVapor,
            Self::TwoPhase(_) => Phase::TwoPhase,
            Self::Subcooled(_) => Phase::SubcooledLiquid,
        }
    }
}

/// The tube-side refrigerant stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimaryStream {
    pub refrigerant: Refrigerant,
    pub mass_rate: MassRate,
    pub inlet: PrimaryInlet,

    /// Condensing or evaporating temperature.
    pub saturation_temperature: ThermodynamicTemperature,

    /// Required subcooling (condenser) or superheat (evaporator) at the outlet.
    pub terminal_target: TemperatureInterval,
}
