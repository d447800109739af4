use std::cmp::Ordering;

use uom::si::{f64::Ratio, ratio::ratio};

use crate::constraint::{Constrained, Constraint, ConstraintError};

/// Types with well-defined zero and one endpoints.
///
/// Implemented for `f32`, `f64`, and `uom::si::f64::Ratio`.
pub trait UnitBounds: PartialOrd + Sized {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f32 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }

    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Marker type enforcing that a value lies in the left-open unit interval: `0 < x ≤ 1`.
///
/// Derating factors such as a weld joint efficiency or the fraction of yield
/// used as allowable stress live here: zero would make every member
/// infinitely thick, while one means no derating at all.
///
/// # Examples
///
/// ```
/// use vessel_core::constraint::UnitIntervalLeftOpen;
/// use uom::si::{f64::Ratio, ratio::ratio};
///
/// let e = UnitIntervalLeftOpen::new(Ratio::new::<ratio>(0.85)).unwrap();
/// assert_eq!(e.as_ref().get::<ratio>(), 0.85);
///
/// let full = UnitIntervalLeftOpen::one::<f64>();
/// assert_eq!(full.into_inner(), 1.0);
///
/// assert!(UnitIntervalLeftOpen::new(0.0).is_err());
/// assert!(UnitIntervalLeftOpen::new(1.2).is_err());
/// assert!(UnitIntervalLeftOpen::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalLeftOpen;

impl UnitIntervalLeftOpen {
    /// Constructs `Constrained<T, UnitIntervalLeftOpen>` if 0 < value ≤ 1.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalLeftOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalLeftOpen>::new(value)
    }

    /// Returns the upper bound (one) as a constrained value.
    #[must_use]
    pub fn one<T: UnitBounds>() -> Constrained<T, UnitIntervalLeftOpen> {
        Constrained::new_unchecked(T::one())
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalLeftOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn floats_valid() {
        assert!(Constrained::<f64, UnitIntervalLeftOpen>::new(1.0).is_ok());
        assert!(Constrained::<f64, UnitIntervalLeftOpen>::new(1e-9).is_ok());
        assert!(UnitIntervalLeftOpen::new(0.4).is_ok());

        let one = UnitIntervalLeftOpen::one::<f64>();
        assert_eq!(one.into_inner(), 1.0);
    }

    #[test]
    fn floats_out_of_range() {
        assert_eq!(
            UnitIntervalLeftOpen::new(0.0),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            UnitIntervalLeftOpen::new(-0.5),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            UnitIntervalLeftOpen::new(1.000_001),
            Err(ConstraintError::AboveMaximum)
        );
    }

    #[test]
    fn floats_nan_is_not_a_number() {
        assert_eq!(
            UnitIntervalLeftOpen::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn uom_ratio() {
        assert!(UnitIntervalLeftOpen::new(Ratio::new::<ratio>(0.85)).is_ok());
        assert_eq!(
            UnitIntervalLeftOpen::new(Ratio::new::<ratio>(0.0)),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            UnitIntervalLeftOpen::new(Ratio::new::<ratio>(1.5)),
            Err(ConstraintError::AboveMaximum)
        );
    }
}
