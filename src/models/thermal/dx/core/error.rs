use thiserror::Error;

use crate::support::{heat_transfer::CorrelationError, thermo::PropertyError};

use super::AllocationError;

/// Errors that can occur while marching a DX exchanger.
#[derive(Debug, Error)]
pub enum MarchError {
    /// A design input failed validation, or a correlation rejected a value
    /// derived from it.
    #[error("invalid input `{field}`{}: {reason}", in_segment(.segment))]
    InvalidInput {
        /// Dotted path of the offending input, such as `geometry.passes`.
        field: &'static str,

        /// One-based segment index, or `None` when validation rejected the
        /// design before marching.
        segment: Option<usize>,

        /// Why the value was rejected.
        reason: String,
    },

    /// A property service could not evaluate a state.
    #[error("property lookup failed{}: {context}", in_segment(.segment))]
    PropertyLookup {
        /// One-based segment index, or `None` when the failure happened
        /// while resolving the inlet or saturation state.
        segment: Option<usize>,

        /// What was being evaluated.
        context: String,

        /// Underlying property service error.
        #[source]
        source: PropertyError,
    },

    /// The tube allocation does not fit the exchanger.
    #[error("tube allocation is inconsistent")]
    AllocationInconsistency(#[from] AllocationError),
}

impl MarchError {
    /// Creates an invalid input error.
    pub(super) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            segment: None,
            reason: reason.into(),
        }
    }

    /// Creates a property lookup error with context.
    pub(super) fn property(
        segment: Option<usize>,
        context: impl Into<String>,
        source: PropertyError,
    ) -> Self {
        Self::PropertyLookup {
            segment,
            context: context.into(),
            source,
        }
    }

    /// Maps a correlation failure in segment `index` onto the input it
    /// traces back to.
    pub(super) fn correlation(index: usize, err: CorrelationError) -> Self {
        Self::InvalidInput {
            field: err.field(),
            segment: Some(index),
            reason: err.to_string(),
        }
    }
}

fn in_segment(segment: &Option<usize>) -> String {
    segment.map(|i| format!(" in segment {i}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_failures_name_their_segment() {
        let err = MarchError::correlation(
            7,
            CorrelationError::NonPositive {
                name: "mass_rate",
                value: 0.0,
            },
        );
        assert!(matches!(
            err,
            MarchError::InvalidInput {
                field: "mass_rate",
                segment: Some(7),
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "invalid input `mass_rate` in segment 7: mass_rate must be positive, got 0"
        );
    }

    #[test]
    fn validation_failures_have_no_segment() {
        let err = MarchError::invalid("segments", "5 is outside 10..=50");
        assert_eq!(
            err.to_string(),
            "invalid input `segments`: 5 is outside 10..=50"
        );
    }
}
