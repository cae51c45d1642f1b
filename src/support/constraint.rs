//! Checked numeric bounds.
//!
//! Exchanger inputs carry physical bounds: flow rates are above zero,
//! fouling resistances are never negative, and vapor quality stays within
//! `[0, 1]`. A bound is a zero-sized marker implementing [`Constraint`], and
//! [`Constrained<T, C>`] carries a value that has already passed it.
//!
//! - [`NonNegative`]: `x ≥ 0`
//! - [`StrictlyPositive`]: `x > 0`
//! - [`UnitInterval`]: `0 ≤ x ≤ 1`

mod sign;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use sign::{NonNegative, StrictlyPositive};
pub use unit_interval::UnitInterval;

/// A bound a value can be checked against.
pub trait Constraint<T> {
    /// Checks `value` against the bound.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing how the value falls outside.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// How a value violated a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("must not be negative")]
    Negative,
    #[error("must be greater than zero")]
    Zero,
    #[error("is not a number")]
    NotANumber,
    #[error("is below the lower bound")]
    BelowMinimum,
    #[error("is above the upper bound")]
    AboveMaximum,
}

/// A value known to satisfy the constraint `C`.
///
/// ```
/// use dx_exchanger_models::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};
///
/// let m_dot = MassRate::new::<kilogram_per_second>(0.221);
/// let m_dot = Constrained::<_, StrictlyPositive>::new(m_dot).unwrap();
/// assert_eq!(m_dot.into_inner().get::<kilogram_per_second>(), 0.221);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] reported by `C`.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}
