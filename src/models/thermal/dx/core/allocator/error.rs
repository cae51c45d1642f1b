use thiserror::Error;

use crate::models::thermal::dx::core::{ExchangerKind, Zone};

/// Errors describing an allocation that does not fit the bundle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocationError {
    /// A tube index lies outside the bundle.
    #[error("tube {index} is outside a bundle of {total} tubes")]
    TubeOutOfRange { index: usize, total: usize },

    /// A tube range starts after it ends.
    #[error("tube range {start}..{end} is reversed")]
    ReversedRange { start: usize, end: usize },

    /// More tubes are allocated than the bundle holds.
    #[error("{count} tubes allocated but the bundle holds {total}")]
    ExceedsTotal { count: usize, total: usize },

    /// A zone from the other exchanger kind was assigned.
    #[error("{zone} zone does not exist in a {kind}")]
    ForeignZone { zone: Zone, kind: ExchangerKind },

    /// A percentage share is negative or not a number.
    #[error("{zone} share of {percent}% is invalid")]
    InvalidShare { zone: Zone, percent: f64 },

    /// Percentage shares add up to more than the whole bundle.
    #[error("zone shares add up to {percent}%")]
    SharesExceedTotal { percent: f64 },

    /// A row assignment was given rows with no tubes.
    #[error("rows must contain at least one tube")]
    EmptyRows,
}
