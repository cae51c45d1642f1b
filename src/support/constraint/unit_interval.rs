use std::{cmp::Ordering, marker::PhantomData};

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that an `f64` lies in the closed unit interval `0 ≤ x ≤ 1`.
///
/// Vapor quality is the main user of this constraint.
///
/// # Examples
///
/// ```
/// use dx_exchanger_models::support::constraint::UnitInterval;
///
/// let x = UnitInterval::new(0.25).unwrap();
/// assert_eq!(x.into_inner(), 0.25);
///
/// assert_eq!(UnitInterval::clamped(1.2).into_inner(), 1.0);
/// assert!(UnitInterval::new(-0.0001).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs a `Constrained<f64, UnitInterval>` if `0 ≤ value ≤ 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] for `NaN`.
    pub fn new(value: f64) -> Result<Constrained<f64, UnitInterval>, ConstraintError> {
        Constrained::<f64, UnitInterval>::new(value)
    }

    /// Clamps `value` into `[0, 1]`.
    ///
    /// `NaN` clamps to zero.
    #[must_use]
    pub fn clamped(value: f64) -> Constrained<f64, UnitInterval> {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
        Constrained {
            value,
            _marker: PhantomData,
        }
    }
}

impl Constraint<f64> for UnitInterval {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&0.0), value.partial_cmp(&1.0)) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
