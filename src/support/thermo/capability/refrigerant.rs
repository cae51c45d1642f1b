use uom::si::f64::{Pressure, SpecificHeatCapacity, ThermodynamicTemperature};

use crate::support::{
    constraint::{Constrained, UnitInterval},
    thermo::{Phase, PropertyError, fluid::Refrigerant},
    units::SpecificEnthalpy,
};

use super::{BulkProperties, SaturationProperties};

/// Property service for a phase-changing refrigerant.
///
/// Implementations must be pure: the same query always yields the same
/// answer, and no query mutates the service.
pub trait RefrigerantProperties {
    /// Returns the saturation pressure at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the fluid is unknown or the temperature
    /// is outside the model's saturation range.
    fn saturation_pressure(
        &self,
        fluid: Refrigerant,
        temperature: ThermodynamicTemperature,
    ) -> Result<Pressure, PropertyError>;

    /// Returns the critical pressure of `fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::UnknownFluid`] if the model has no data for `fluid`.
    fn critical_pressure(&self, fluid: Refrigerant) -> Result<Pressure, PropertyError>;

    /// Returns saturated liquid and vapor properties at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the fluid is unknown or the temperature
    /// is outside the model's saturation range.
    fn saturated(
        &self,
        fluid: Refrigerant,
        temperature: ThermodynamicTemperature,
    ) -> Result<SaturationProperties, PropertyError>;

    /// Returns single-phase bulk properties at `temperature` and `pressure`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::Undefined`] for [`Phase::TwoPhase`], and other
    /// variants if the fluid is unknown or the state is out of range.
    fn bulk(
        &self,
        fluid: Refrigerant,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        phase: Phase,
    ) -> Result<BulkProperties, PropertyError>;

    /// Returns the single-phase specific enthalpy at `temperature` and `pressure`.
    ///
    /// Two-phase enthalpy depends on quality rather than pressure and is
    /// available through [`mixture_enthalpy`](Self::mixture_enthalpy).
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::Undefined`] for [`Phase::TwoPhase`], and other
    /// variants if the fluid is unknown or the state is out of range.
    fn enthalpy(
        &self,
        fluid: Refrigerant,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        phase: Phase,
    ) -> Result<SpecificEnthalpy, PropertyError>;

    /// Returns the single-phase specific heat capacity.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`bulk`](Self::bulk).
    fn specific_heat(
        &self,
        fluid: Refrigerant,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        phase: Phase,
    ) -> Result<SpecificHeatCapacity, PropertyError> {
        Ok(self.bulk(fluid, temperature, pressure, phase)?.cp)
    }

    /// Returns the enthalpy of a saturated mixture, `h_f + x·(h_g - h_f)`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`saturated`](Self::saturated).
    fn mixture_enthalpy(
        &self,
        fluid: Refrigerant,
        saturation_temperature: ThermodynamicTemperature,
        quality: Constrained<f64, UnitInterval>,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let sat = self.saturated(fluid, saturation_temperature)?;
        Ok(sat.liquid_enthalpy + sat.latent_heat() * quality.into_inner())
    }
}
