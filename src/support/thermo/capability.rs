//! Capability traits used to query refrigerant and liquid properties.

mod liquid;
mod properties;
mod refrigerant;

pub use liquid::LiquidProperties;
pub use properties::{BulkProperties, SaturationProperties};
pub use refrigerant::RefrigerantProperties;
