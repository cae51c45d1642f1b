//! Refrigerant and secondary-liquid property services.
//!
//! Property lookups are pure functions of fluid identity, temperature, and
//! (for superheated vapor) pressure. The capability traits in [`capability`]
//! define what a property service must provide, and [`model`] ships
//! tabulated implementations that need no external property library.

mod error;
mod phase;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use phase::Phase;
