use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, MassDensity, Pressure, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::units::SpecificEnthalpy;

/// Bulk transport and caloric properties of a single-phase fluid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulkProperties {
    pub density: MassDensity,
    pub viscosity: DynamicViscosity,
    pub conductivity: ThermalConductivity,
    pub cp: SpecificHeatCapacity,
}

impl BulkProperties {
    /// Returns the Prandtl number, `cp·μ/k`.
    #[must_use]
    pub fn prandtl(&self) -> f64 {
        self.cp.get::<joule_per_kilogram_kelvin>() * self.viscosity.get::<pascal_second>()
            / self.conductivity.get::<watt_per_meter_kelvin>()
    }
}

/// Saturated liquid and vapor properties at one saturation temperature.
///
/// A segment march requests these once per run and reuses them for every
/// two-phase segment and every phase classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationProperties {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub critical_pressure: Pressure,
    pub liquid_enthalpy: SpecificEnthalpy,
    pub vapor_enthalpy: SpecificEnthalpy,
    pub liquid: BulkProperties,
    pub vapor: BulkProperties,
}

impl SaturationProperties {
    /// Latent heat of vaporization, `h_g - h_f`.
    #[must_use]
    pub fn latent_heat(&self) -> SpecificEnthalpy {
        self.vapor_enthalpy - self.liquid_enthalpy
    }

    /// Saturation pressure divided by the critical pressure.
    #[must_use]
    pub fn reduced_pressure(&self) -> f64 {
        (self.pressure / self.critical_pressure).value
    }
}
