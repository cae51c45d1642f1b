//! Supporting utilities used by the exchanger models.
//!
//! - [`constraint`]: Typed numeric constraints such as [`constraint::UnitInterval`]
//! - [`heat_transfer`]: Pure convection correlations and conductance arithmetic
//! - [`thermo`]: Refrigerant and secondary-liquid property services
//! - [`units`]: Quantities and helpers [`uom`] does not provide

pub mod constraint;
pub mod heat_transfer;
pub mod thermo;
pub mod units;
