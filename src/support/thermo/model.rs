//! Property models.

pub mod incompressible;
pub mod tabulated;

mod table;

pub use incompressible::IncompressibleLiquid;
pub use tabulated::Tabulated;
