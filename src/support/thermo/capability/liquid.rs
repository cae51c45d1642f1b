use uom::si::f64::{MassDensity, SpecificHeatCapacity, ThermodynamicTemperature};

use crate::support::thermo::{PropertyError, fluid::SecondaryFluid};

use super::BulkProperties;

/// Property service for a single-phase secondary liquid.
pub trait LiquidProperties {
    /// Returns bulk properties of `fluid` at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the fluid is unknown or the temperature
    /// is outside the model's valid range.
    fn liquid(
        &self,
        fluid: SecondaryFluid,
        temperature: ThermodynamicTemperature,
    ) -> Result<BulkProperties, PropertyError>;

    /// Returns the specific heat capacity of `fluid` at `temperature`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`liquid`](Self::liquid).
    fn specific_heat(
        &self,
        fluid: SecondaryFluid,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificHeatCapacity, PropertyError> {
        Ok(self.liquid(fluid, temperature)?.cp)
    }

    /// Returns the density of `fluid` at `temperature`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`liquid`](Self::liquid).
    fn density(
        &self,
        fluid: SecondaryFluid,
        temperature: ThermodynamicTemperature,
    ) -> Result<MassDensity, PropertyError> {
        Ok(self.liquid(fluid, temperature)?.density)
    }
}
