//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities on its public
//! boundaries (temperatures, flows, lengths, duties, coefficients).
//! This module adds the pieces [`uom`] doesn't ship with.
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus)
//! method for subtracting one absolute temperature from another:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use uom::si::temperature_interval::kelvin;
//! use dx_exchanger_models::support::units::TemperatureDifference;
//!
//! let t_sat = ThermodynamicTemperature::new::<degree_celsius>(45.0);
//! let t_out = ThermodynamicTemperature::new::<degree_celsius>(40.0);
//! let subcooling = t_sat.minus(t_out);
//! assert!((subcooling.get::<kelvin>() - 5.0).abs() < 1e-9);
//! ```
//!
//! ## Area-specific resistances
//!
//! Fouling is specified as an area-specific thermal resistance (m²·K/W),
//! which [`uom`] has no quantity for. [`ThermalInsulance`] fills that gap.

mod quantities;
mod temperature_difference;

pub use quantities::{SpecificEnthalpy, ThermalInsulance, square_meter_kelvin_per_watt};
pub use temperature_difference::TemperatureDifference;
