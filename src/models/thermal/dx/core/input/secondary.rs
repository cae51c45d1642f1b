use uom::si::f64::{MassRate, ThermodynamicTemperature, VolumeRate};

use crate::support::thermo::{
    PropertyError, capability::LiquidProperties, fluid::SecondaryFluid,
};

/// The shell-side liquid stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecondaryStream {
    pub fluid: SecondaryFluid,
    pub mass_rate: MassRate,
    pub inlet_temperature: ThermodynamicTemperature,
}

impl SecondaryStream {
    /// Creates a stream from a volumetric flow measured at the inlet temperature.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the liquid density cannot be evaluated.
    pub fn from_volume_rate(
        fluid: SecondaryFluid,
        volume_rate: VolumeRate,
        inlet_temperature: ThermodynamicTemperature,
        liquid: &impl LiquidProperties,
    ) -> Result<Self, PropertyError> {
        let density = liquid.density(fluid, inlet_temperature)?;
        Ok(Self {
            fluid,
            mass_rate: volume_rate * density,
            inlet_temperature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass_rate::kilogram_per_second, thermodynamic_temperature::degree_celsius,
        volume_rate::cubic_meter_per_second,
    };

    use crate::support::thermo::model::IncompressibleLiquid;

    #[test]
    fn volume_rate_uses_inlet_density() {
        let stream = SecondaryStream::from_volume_rate(
            SecondaryFluid::Water,
            VolumeRate::new::<cubic_meter_per_second>(24_851.0 / 3.6e6),
            ThermodynamicTemperature::new::<degree_celsius>(35.0),
            &IncompressibleLiquid,
        )
        .unwrap();

        assert_relative_eq!(
            stream.mass_rate.get::<kilogram_per_second>(),
            24_851.0 / 3.6e6 * 993.95,
            max_relative = 1e-12
        );
    }
}
