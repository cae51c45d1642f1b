use thiserror::Error;

use crate::support::constraint::{Constraint, NonNegative, StrictlyPositive};

/// Errors returned by heat transfer correlations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CorrelationError {
    /// An input that must be strictly positive was not.
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// An input that must be non-negative was negative.
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    /// The tube inner diameter is not smaller than the outer diameter.
    #[error("inner diameter {inner} m must be less than outer diameter {outer} m")]
    DiameterOrder { inner: f64, outer: f64 },
}

impl CorrelationError {
    /// Returns the name of the offending input.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::NonPositive { name, .. } | Self::Negative { name, .. } => name,
            Self::DiameterOrder { .. } => "inner_diameter",
        }
    }
}

/// Checks that `value` is strictly positive.
pub(super) fn positive(name: &'static str, value: f64) -> Result<f64, CorrelationError> {
    StrictlyPositive::check(&value)
        .map(|()| value)
        .map_err(|_| CorrelationError::NonPositive { name, value })
}

/// Checks that `value` is non-negative.
pub(super) fn non_negative(name: &'static str, value: f64) -> Result<f64, CorrelationError> {
    NonNegative::check(&value)
        .map(|()| value)
        .map_err(|_| CorrelationError::Negative { name, value })
}
