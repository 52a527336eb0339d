//! Numeric bound validators
//!
//! Bounds are inclusive and work for any `PartialOrd + Display` type, so the
//! same validators cover integers, floats and anything else with an ordering.

use super::Validator;
use std::cmp::PartialOrd;
use std::fmt::Display;

/// Validator for a lower bound: `value >= min`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::validator::*;
///
/// assert!(Min(2).is_satisfied(&2));
/// assert!(!Min(2).is_satisfied(&1));
/// assert_eq!(Min(2).default_message(), "Minimum is 2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Min<T>(pub T);

impl<T: PartialOrd + Display + Send + Sync> Validator<T> for Min<T> {
    #[inline]
    fn is_satisfied(&self, value: &T) -> bool {
        *value >= self.0
    }

    fn default_message(&self) -> String {
        format!("Minimum is {}", self.0)
    }
}

/// Validator for an upper bound: `value <= max`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::validator::*;
///
/// assert!(Max(5).is_satisfied(&5));
/// assert!(!Max(5).is_satisfied(&6));
/// assert_eq!(Max(5).default_message(), "Maximum is 5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Max<T>(pub T);

impl<T: PartialOrd + Display + Send + Sync> Validator<T> for Max<T> {
    #[inline]
    fn is_satisfied(&self, value: &T) -> bool {
        *value <= self.0
    }

    fn default_message(&self) -> String {
        format!("Maximum is {}", self.0)
    }
}

/// Validator for an inclusive range, composed of a [`Min`] and a [`Max`].
///
/// Satisfied only when both bounds are. The failure message always names
/// both bounds, whichever one was crossed.
///
/// # Example
///
/// ```rust
/// use fieldcheck::validator::*;
///
/// let r = Range { min: Min(2), max: Max(5) };
/// assert!(r.is_satisfied(&2));
/// assert!(r.is_satisfied(&5));
/// assert!(!r.is_satisfied(&1));
/// assert!(!r.is_satisfied(&6));
/// assert_eq!(r.default_message(), "Range is 2 to 5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range<T> {
    /// Lower bound.
    pub min: Min<T>,
    /// Upper bound.
    pub max: Max<T>,
}

impl<T> Range<T> {
    /// Create a range from its two bounds.
    pub fn new(min: T, max: T) -> Self {
        Range {
            min: Min(min),
            max: Max(max),
        }
    }
}

impl<T: PartialOrd + Display + Send + Sync> Validator<T> for Range<T> {
    #[inline]
    fn is_satisfied(&self, value: &T) -> bool {
        self.min.is_satisfied(value) && self.max.is_satisfied(value)
    }

    fn default_message(&self) -> String {
        format!("Range is {} to {}", self.min.0, self.max.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min() {
        assert!(Min(2).is_satisfied(&3));
        assert!(Min(2).is_satisfied(&2));
        assert!(!Min(2).is_satisfied(&1));
        assert!(!Min(2).is_satisfied(&-100));
    }

    #[test]
    fn test_max() {
        assert!(Max(5).is_satisfied(&4));
        assert!(Max(5).is_satisfied(&5));
        assert!(!Max(5).is_satisfied(&6));
    }

    #[test]
    fn test_range_inclusive_bounds() {
        let r = Range::new(2, 5);
        assert!(r.is_satisfied(&2));
        assert!(r.is_satisfied(&3));
        assert!(r.is_satisfied(&5));
        assert!(!r.is_satisfied(&1));
        assert!(!r.is_satisfied(&6));
    }

    #[test]
    fn test_range_new_matches_struct_literal() {
        assert_eq!(
            Range::new(2, 5),
            Range {
                min: Min(2),
                max: Max(5)
            }
        );
    }

    #[test]
    fn test_floats() {
        assert!(Min(0.5).is_satisfied(&0.5));
        assert!(!Max(1.0).is_satisfied(&1.01));
        assert!(!Range::new(0.0, 1.0).is_satisfied(&f64::NAN));
        assert_eq!(Min(2.5).default_message(), "Minimum is 2.5");
    }

    #[test]
    fn test_messages() {
        assert_eq!(Min(2).default_message(), "Minimum is 2");
        assert_eq!(Max(-3).default_message(), "Maximum is -3");
        // same message whichever side fails
        assert_eq!(Range::new(2, 5).default_message(), "Range is 2 to 5");
    }
}
