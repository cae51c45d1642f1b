//! Tabulated refrigerant properties.
//!
//! Saturation properties are interpolated linearly from tables at 10 K
//! intervals for R134a and R410A.
//!
//! # Single-phase states
//!
//! - Subcooled liquid is evaluated as saturated liquid at the same
//!   temperature. Pressure effects on liquid properties are neglected.
//! - Superheated vapor is extrapolated from the saturated vapor state at the
//!   same pressure. Its `cp` relaxes exponentially from the saturated value
//!   toward an ideal-gas value, so the enthalpy is the closed-form integral
//!   `h = h_g + cp₀·ΔT + (cp_g - cp₀)·τ·(1 - e^(-ΔT/τ))`. Density follows the
//!   ideal-gas law at constant pressure and transport properties follow
//!   power laws in absolute temperature.

mod r134a;
mod r410a;

use uom::si::{
    available_energy::kilojoule_per_kilogram,
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, MassDensity, Pressure, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    mass_density::kilogram_per_cubic_meter,
    pressure::kilopascal,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    thermo::{
        Phase, PropertyError,
        capability::{BulkProperties, RefrigerantProperties, SaturationProperties},
        fluid::Refrigerant,
    },
    units::SpecificEnthalpy,
};

use super::table::Table;

const PRESSURE: usize = 1;
const H_F: usize = 2;
const H_G: usize = 3;
const RHO_L: usize = 4;
const RHO_V: usize = 5;
const CP_L: usize = 6;
const CP_V: usize = 7;
const MU_L: usize = 8;
const MU_V: usize = 9;
const K_L: usize = 10;
const K_V: usize = 11;

/// Decay length of the superheated `cp` toward its ideal-gas value, in K.
const SUPERHEAT_DECAY: f64 = 20.0;

const VISCOSITY_EXPONENT: f64 = 0.8;
const CONDUCTIVITY_EXPONENT: f64 = 1.2;

/// Offset between Celsius and Kelvin.
const ZERO_CELSIUS: f64 = 273.15;

pub(super) struct RefrigerantData {
    table: Table<12>,
    /// Critical pressure, kPa.
    critical_pressure: f64,
    /// Low-pressure (ideal-gas) vapor `cp`, kJ/kg·K.
    ideal_gas_cp: f64,
}

/// Refrigerant property service backed by built-in saturation tables.
///
/// # Example
///
/// ```
/// use dx_exchanger_models::support::thermo::{
///     capability::RefrigerantProperties, fluid::Refrigerant, model::Tabulated,
/// };
/// use uom::si::{f64::ThermodynamicTemperature, pressure::kilopascal, thermodynamic_temperature::degree_celsius};
///
/// let t = ThermodynamicTemperature::new::<degree_celsius>(40.0);
/// let p = Tabulated.saturation_pressure(Refrigerant::R134a, t).unwrap();
/// assert!((p.get::<kilopascal>() - 1016.6).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tabulated;

impl Tabulated {
    fn data(fluid: Refrigerant) -> Result<&'static RefrigerantData, PropertyError> {
        match fluid {
            Refrigerant::R134a => Ok(&r134a::DATA),
            Refrigerant::R410A => Ok(&r410a::DATA),
        }
    }

    fn row(fluid: Refrigerant, t: f64) -> Result<[f64; 12], PropertyError> {
        let data = Self::data(fluid)?;
        data.table.at(t).ok_or_else(|| {
            let (lo, hi) = data.table.range();
            PropertyError::OutOfRange {
                context: format!("{fluid} at {t:.2}°C is outside the table range {lo}..{hi}°C"),
            }
        })
    }

    /// Returns the saturation temperature in °C at `pressure`.
    fn saturation_celsius(fluid: Refrigerant, pressure: Pressure) -> Result<f64, PropertyError> {
        let data = Self::data(fluid)?;
        let p = pressure.get::<kilopascal>();
        data.table
            .temperature_where(PRESSURE, p)
            .ok_or_else(|| PropertyError::OutOfRange {
                context: format!("{fluid} saturation pressure {p:.1} kPa is outside the table"),
            })
    }

    /// Returns the superheated vapor properties and enthalpy (kJ/kg).
    fn vapor(
        fluid: Refrigerant,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<(BulkProperties, f64), PropertyError> {
        let data = Self::data(fluid)?;
        let t_sat = Self::saturation_celsius(fluid, pressure)?;
        let row = Self::row(fluid, t_sat)?;

        let superheat = (temperature.get::<degree_celsius>() - t_sat).max(0.0);
        let decay = (-superheat / SUPERHEAT_DECAY).exp();
        let cp0 = data.ideal_gas_cp;
        let cp = cp0 + (row[CP_V] - cp0) * decay;
        let h = row[H_G] + cp0 * superheat + (row[CP_V] - cp0) * SUPERHEAT_DECAY * (1.0 - decay);

        let ratio = (t_sat + superheat + ZERO_CELSIUS) / (t_sat + ZERO_CELSIUS);
        let props = bulk(
            row[RHO_V] / ratio,
            row[MU_V] * ratio.powf(VISCOSITY_EXPONENT),
            row[K_V] * ratio.powf(CONDUCTIVITY_EXPONENT),
            cp,
        );
        Ok((props, h))
    }
}

impl RefrigerantProperties for Tabulated {
    fn saturation_pressure(
        &self,
        fluid: Refrigerant,
        temperature: ThermodynamicTemperature,
    ) -> Result<Pressure, PropertyError> {
        let row = Self::row(fluid, temperature.get::<degree_celsius>())?;
        Ok(Pressure::new::<kilopascal>(row[PRESSURE]))
    }

    fn critical_pressure(&self, fluid: Refrigerant) -> Result<Pressure, PropertyError> {
        Ok(Pressure::new::<kilopascal>(
            Self::data(fluid)?.critical_pressure,
        ))
    }

    fn saturated(
        &self,
        fluid: Refrigerant,
        temperature: ThermodynamicTemperature,
    ) -> Result<SaturationProperties, PropertyError> {
        let row = Self::row(fluid, temperature.get::<degree_celsius>())?;
        Ok(SaturationProperties {
            temperature,
            pressure: Pressure::new::<kilopascal>(row[PRESSURE]),
            critical_pressure: self.critical_pressure(fluid)?,
            liquid_enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(row[H_F]),
            vapor_enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(row[H_G]),
            liquid: bulk(row[RHO_L], row[MU_L], row[K_L], row[CP_L]),
            vapor: bulk(row[RHO_V], row[MU_V], row[K_V], row[CP_V]),
        })
    }

    fn bulk(
        &self,
        fluid: Refrigerant,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        phase: Phase,
    ) -> Result<BulkProperties, PropertyError> {
        match phase {
            Phase::SuperheatedVapor => Ok(Self::vapor(fluid, temperature, pressure)?.0),
            Phase::SubcooledLiquid => {
                let row = Self::row(fluid, temperature.get::<degree_celsius>())?;
                Ok(bulk(row[RHO_L], row[MU_L], row[K_L], row[CP_L]))
            }
            Phase::TwoPhase => Err(PropertyError::Undefined {
                context: format!("{fluid} bulk properties inside the vapor dome"),
            }),
        }
    }

    fn enthalpy(
        &self,
        fluid: Refrigerant,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        phase: Phase,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let h = match phase {
            Phase::SuperheatedVapor => Self::vapor(fluid, temperature, pressure)?.1,
            Phase::SubcooledLiquid => Self::row(fluid, temperature.get::<degree_celsius>())?[H_F],
            Phase::TwoPhase => {
                return Err(PropertyError::Undefined {
                    context: format!("{fluid} enthalpy inside the vapor dome requires a quality"),
                });
            }
        };
        Ok(SpecificEnthalpy::new::<kilojoule_per_kilogram>(h))
    }
}

/// Builds bulk properties from table units (kg/m³, µPa·s, mW/m·K, kJ/kg·K).
fn bulk(density: f64, viscosity: f64, conductivity: f64, cp: f64) -> BulkProperties {
    BulkProperties {
        density: MassDensity::new::<kilogram_per_cubic_meter>(density),
        viscosity: DynamicViscosity::new::<pascal_second>(viscosity * 1e-6),
        conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(conductivity * 1e-3),
        cp: SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(cp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;

    use crate::support::constraint::UnitInterval;

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    #[test]
    fn saturation_at_condensing_temperature() {
        let sat = Tabulated.saturated(Refrigerant::R134a, celsius(45.0)).unwrap();

        assert_relative_eq!(sat.pressure.get::<kilopascal>(), 1167.35, epsilon = 1e-9);
        assert_relative_eq!(sat.liquid_enthalpy.get::<kilojoule_per_kilogram>(), 264.0, epsilon = 1e-9);
        assert_relative_eq!(sat.vapor_enthalpy.get::<kilojoule_per_kilogram>(), 421.4, epsilon = 1e-9);
        assert_relative_eq!(sat.latent_heat().get::<kilojoule_per_kilogram>(), 157.4, epsilon = 1e-9);
        assert_relative_eq!(sat.reduced_pressure(), 1167.35 / 4059.0, epsilon = 1e-12);
    }

    #[test]
    fn superheated_enthalpy_matches_saturation_at_zero_superheat() {
        let p = Tabulated
            .saturation_pressure(Refrigerant::R410A, celsius(5.0))
            .unwrap();
        let h = Tabulated
            .enthalpy(Refrigerant::R410A, celsius(5.0), p, Phase::SuperheatedVapor)
            .unwrap();
        assert_relative_eq!(h.get::<kilojoule_per_kilogram>(), 420.45, epsilon = 1e-9);
    }

    #[test]
    fn superheated_vapor_from_compressor_discharge() {
        let p = Tabulated
            .saturation_pressure(Refrigerant::R134a, celsius(45.0))
            .unwrap();
        let h = Tabulated
            .enthalpy(Refrigerant::R134a, celsius(95.0), p, Phase::SuperheatedVapor)
            .unwrap()
            .get::<kilojoule_per_kilogram>();

        let cp_sat = 1.1955;
        let decay = (-2.5_f64).exp();
        let expected = 421.4 + 0.85 * 50.0 + (cp_sat - 0.85) * 20.0 * (1.0 - decay);
        assert_relative_eq!(h, expected, epsilon = 1e-6);

        let props = Tabulated
            .bulk(Refrigerant::R134a, celsius(95.0), p, Phase::SuperheatedVapor)
            .unwrap();
        let cp = props.cp.get::<joule_per_kilogram_kelvin>();
        assert!(cp > 850.0 && cp < 1195.5);
        assert!(props.density.get::<kilogram_per_cubic_meter>() < 58.18);
    }

    #[test]
    fn mixture_enthalpy_spans_the_dome() {
        let t = celsius(45.0);
        let half = UnitInterval::new(0.5).unwrap();
        let h = Tabulated
            .mixture_enthalpy(Refrigerant::R134a, t, half)
            .unwrap();
        assert_relative_eq!(h.get::<kilojoule_per_kilogram>(), 264.0 + 0.5 * 157.4, epsilon = 1e-9);
    }

    #[test]
    fn two_phase_single_phase_queries_are_undefined() {
        let t = celsius(10.0);
        let p = Pressure::new::<kilopascal>(414.9);
        assert!(matches!(
            Tabulated.bulk(Refrigerant::R134a, t, p, Phase::TwoPhase),
            Err(PropertyError::Undefined { .. })
        ));
        assert!(matches!(
            Tabulated.specific_heat(Refrigerant::R134a, t, p, Phase::TwoPhase),
            Err(PropertyError::Undefined { .. })
        ));
    }

    #[test]
    fn states_outside_the_tables_are_out_of_range() {
        assert!(matches!(
            Tabulated.saturated(Refrigerant::R410A, celsius(75.0)),
            Err(PropertyError::OutOfRange { .. })
        ));
        assert!(matches!(
            Tabulated.saturation_pressure(Refrigerant::R134a, celsius(-40.0)),
            Err(PropertyError::OutOfRange { .. })
        ));
    }
}
