//! Canonical fluid identifiers.
//!
//! A fluid type names a substance, and each property model decides which
//! names it can resolve. Asking a model for a fluid it has no data for
//! yields [`PropertyError::UnknownFluid`](super::PropertyError::UnknownFluid).

mod refrigerant;
mod secondary;

pub use refrigerant::Refrigerant;
pub use secondary::SecondaryFluid;
