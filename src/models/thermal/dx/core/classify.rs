//! Enthalpy-based phase classification.
//!
//! The march tracks enthalpy as the primary state variable. A state is
//! single-phase only when its enthalpy lies strictly outside the saturated
//! band shrunk by the configured margin:
//!
//! ```text
//! h > h_g - margin  →  superheated vapor
//! h < h_f + margin  →  subcooled liquid
//! otherwise         →  two-phase, x = (h - h_f) / (h_g - h_f)
//! ```
//!
//! A state exactly on either edge of the band is two-phase.

use uom::{
    ConstZero,
    si::f64::{TemperatureInterval, ThermodynamicTemperature},
};

use crate::support::{
    constraint::{Constrained, UnitInterval},
    thermo::{Phase, capability::SaturationProperties},
    units::{SpecificEnthalpy, TemperatureDifference},
};

/// The phase of a refrigerant state, carrying the quality when two-phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Regime {
    SuperheatedVapor,
    TwoPhase(Constrained<f64, UnitInterval>),
    SubcooledLiquid,
}

impl Regime {
    pub(super) fn phase(self) -> Phase {
        match self {
            Self::SuperheatedVapor => Phase::SuperheatedVapor,
            Self::TwoPhase(_) => Phase::TwoPhase,
            Self::SubcooledLiquid => Phase::SubcooledLiquid,
        }
    }

    pub(super) fn quality(self) -> Option<Constrained<f64, UnitInterval>> {
        match self {
            Self::TwoPhase(quality) => Some(quality),
            _ => None,
        }
    }
}

/// Classifies a state by its enthalpy alone.
pub(super) fn classify(
    enthalpy: SpecificEnthalpy,
    sat: &SaturationProperties,
    margin: SpecificEnthalpy,
) -> Regime {
    if enthalpy > sat.vapor_enthalpy - margin {
        Regime::SuperheatedVapor
    } else if enthalpy < sat.liquid_enthalpy + margin {
        Regime::SubcooledLiquid
    } else {
        let quality = ((enthalpy - sat.liquid_enthalpy) / sat.latent_heat()).value;
        Regime::TwoPhase(UnitInterval::clamped(quality))
    }
}

/// Returns the temperature consistent with `enthalpy` in the given regime.
///
/// Used when the march crosses a phase boundary. Single-phase temperatures
/// are extrapolated from saturation with the saturated-state `cp`.
pub(super) fn anchored_temperature(
    regime: Regime,
    enthalpy: SpecificEnthalpy,
    sat: &SaturationProperties,
) -> ThermodynamicTemperature {
    match regime {
        Regime::TwoPhase(_) => sat.temperature,
        Regime::SuperheatedVapor => {
            let excess = (enthalpy - sat.vapor_enthalpy).max(SpecificEnthalpy::ZERO);
            let superheat: TemperatureInterval = excess / sat.vapor.cp;
            sat.temperature + superheat
        }
        Regime::SubcooledLiquid => {
            let deficit = (sat.liquid_enthalpy - enthalpy).max(SpecificEnthalpy::ZERO);
            let subcooling: TemperatureInterval = deficit / sat.liquid.cp;
            sat.temperature + subcooling * -1.0
        }
    }
}

/// Returns the refrigerant enthalpy in equilibrium with a secondary liquid
/// at `temperature`.
///
/// This is the inverse of [`anchored_temperature`] and bounds how far one
/// segment can move the refrigerant before the streams would cross.
pub(super) fn equilibrium_enthalpy(
    temperature: ThermodynamicTemperature,
    sat: &SaturationProperties,
) -> SpecificEnthalpy {
    let offset = temperature.minus(sat.temperature);
    if offset >= TemperatureInterval::ZERO {
        sat.vapor_enthalpy + sat.vapor.cp * offset
    } else {
        sat.liquid_enthalpy + sat.liquid.cp * offset
    }
}
