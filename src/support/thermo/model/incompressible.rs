//! Incompressible secondary-liquid model.
//!
//! `IncompressibleLiquid` treats water and glycol brines as incompressible
//! liquids whose properties depend on temperature only. Values are
//! interpolated from tables at 10 K intervals.
//!
//! # Assumptions
//!
//! - Pressure effects are not modeled
//! - Glycol brines are fixed 30 % (by mass) blends
//!
//! # When To Use
//!
//! Use this model for chilled or cooling water and brine circuits on the
//! shell side of a DX exchanger, where the liquid never changes phase.

use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, MassDensity, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::thermo::{
    PropertyError,
    capability::{BulkProperties, LiquidProperties},
    fluid::SecondaryFluid,
};

use super::table::Table;

/// Water at atmospheric pressure.
///
/// Columns: `T` [°C], `ρ` [kg/m³], `cp` [kJ/kg·K], `μ` [mPa·s], `k` [W/m·K].
const WATER: [[f64; 5]; 11] = [
    [0.0, 999.8, 4.217, 1.792, 0.561],
    [10.0, 999.7, 4.192, 1.306, 0.580],
    [20.0, 998.2, 4.182, 1.002, 0.598],
    [30.0, 995.7, 4.178, 0.798, 0.615],
    [40.0, 992.2, 4.179, 0.653, 0.631],
    [50.0, 988.0, 4.181, 0.547, 0.644],
    [60.0, 983.2, 4.185, 0.467, 0.654],
    [70.0, 977.8, 4.190, 0.404, 0.663],
    [80.0, 971.8, 4.197, 0.355, 0.670],
    [90.0, 965.3, 4.205, 0.315, 0.675],
    [100.0, 958.4, 4.216, 0.282, 0.679],
];

/// 30 % ethylene glycol, same columns as [`WATER`].
const ETHYLENE_GLYCOL_30: [[f64; 5]; 8] = [
    [-10.0, 1055.0, 3.58, 5.3, 0.46],
    [0.0, 1050.0, 3.62, 3.5, 0.47],
    [10.0, 1046.0, 3.66, 2.5, 0.48],
    [20.0, 1041.0, 3.70, 1.9, 0.49],
    [30.0, 1036.0, 3.74, 1.5, 0.50],
    [40.0, 1030.0, 3.78, 1.2, 0.51],
    [50.0, 1024.0, 3.82, 0.98, 0.51],
    [60.0, 1017.0, 3.86, 0.81, 0.52],
];

/// 30 % propylene glycol, same columns as [`WATER`].
const PROPYLENE_GLYCOL_30: [[f64; 5]; 8] = [
    [-10.0, 1037.0, 3.85, 9.5, 0.43],
    [0.0, 1034.0, 3.87, 5.9, 0.44],
    [10.0, 1030.0, 3.90, 3.9, 0.45],
    [20.0, 1026.0, 3.93, 2.7, 0.46],
    [30.0, 1021.0, 3.96, 1.9, 0.47],
    [40.0, 1015.0, 3.99, 1.4, 0.48],
    [50.0, 1009.0, 4.02, 1.1, 0.48],
    [60.0, 1002.0, 4.05, 0.88, 0.49],
];

/// Secondary-liquid property service for water and glycol brines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IncompressibleLiquid;

impl IncompressibleLiquid {
    fn table(fluid: SecondaryFluid) -> Table<5> {
        match fluid {
            SecondaryFluid::Water => Table::new(&WATER),
            SecondaryFluid::EthyleneGlycol30 => Table::new(&ETHYLENE_GLYCOL_30),
            SecondaryFluid::PropyleneGlycol30 => Table::new(&PROPYLENE_GLYCOL_30),
        }
    }
}

impl LiquidProperties for IncompressibleLiquid {
    fn liquid(
        &self,
        fluid: SecondaryFluid,
        temperature: ThermodynamicTemperature,
    ) -> Result<BulkProperties, PropertyError> {
        let table = Self::table(fluid);
        let t = temperature.get::<degree_celsius>();
        let row = table.at(t).ok_or_else(|| {
            let (lo, hi) = table.range();
            PropertyError::OutOfRange {
                context: format!("{fluid} at {t:.2}°C is outside {lo}..{hi}°C"),
            }
        })?;

        Ok(BulkProperties {
            density: MassDensity::new::<kilogram_per_cubic_meter>(row[1]),
            cp: SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(row[2]),
            viscosity: DynamicViscosity::new::<pascal_second>(row[3] * 1e-3),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(row[4]),
        })
    }
}
