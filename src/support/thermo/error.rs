use thiserror::Error;

/// Failure of a refrigerant or secondary-liquid property lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The service carries no data for this fluid.
    #[error("no property data for {fluid}")]
    UnknownFluid { fluid: String },

    /// The state lies outside the tabulated or fitted range.
    #[error("state outside the property range: {context}")]
    OutOfRange { context: String },

    /// The property has no single-phase value at this state, such as the
    /// bulk properties of a saturated mixture.
    #[error("property undefined: {context}")]
    Undefined { context: String },
}
