use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Accepts zero and anything above it.
///
/// Fouling resistances and terminal targets use this bound.
///
/// ```
/// use dx_exchanger_models::support::constraint::NonNegative;
///
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(-1e-9).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonNegative;

/// Accepts only values above zero.
///
/// Flow rates, tube dimensions, and tube counts use this bound.
///
/// ```
/// use dx_exchanger_models::support::constraint::StrictlyPositive;
///
/// assert!(StrictlyPositive::new(200_usize).is_ok());
/// assert!(StrictlyPositive::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictlyPositive;

impl NonNegative {
    /// Wraps `value` if it is zero or greater.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Negative`] or [`ConstraintError::NotANumber`].
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl StrictlyPositive {
    /// Wraps `value` if it is greater than zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Zero`], [`ConstraintError::Negative`], or
    /// [`ConstraintError::NotANumber`].
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match sign_of(value)? {
            Ordering::Less => Err(ConstraintError::Negative),
            Ordering::Equal | Ordering::Greater => Ok(()),
        }
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match sign_of(value)? {
            Ordering::Less => Err(ConstraintError::Negative),
            Ordering::Equal => Err(ConstraintError::Zero),
            Ordering::Greater => Ok(()),
        }
    }
}

fn sign_of<T: PartialOrd + Zero>(value: &T) -> Result<Ordering, ConstraintError> {
    value
        .partial_cmp(&T::zero())
        .ok_or(ConstraintError::NotANumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, MassRate, TemperatureInterval},
        length::millimeter,
        mass_rate::kilogram_per_second,
        temperature_interval::kelvin,
    };

    #[test]
    fn zero_separates_the_two_bounds() {
        assert!(NonNegative::new(0.0).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(0_usize), Err(ConstraintError::Zero));
    }

    #[test]
    fn negatives_and_nan_fail_both() {
        assert_eq!(NonNegative::new(-2.0), Err(ConstraintError::Negative));
        assert_eq!(StrictlyPositive::new(-2.0), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn quantities() {
        assert!(StrictlyPositive::new(MassRate::new::<kilogram_per_second>(0.221)).is_ok());
        assert!(StrictlyPositive::new(Length::new::<millimeter>(0.0)).is_err());
        assert!(NonNegative::new(TemperatureInterval::new::<kelvin>(0.0)).is_ok());
        assert!(NonNegative::new(TemperatureInterval::new::<kelvin>(-0.5)).is_err());
    }
}
