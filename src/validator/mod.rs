//! Validators: the checks a [`Validation`](crate::Validation) context runs
//!
//! A validator is a small, stateless value that answers one question about a
//! field ("is it present?", "is it at least 2?") and knows how to describe the
//! failure. Validators carry only their own configuration (bounds, patterns)
//! and can be reused freely across calls and contexts.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::validator::*;
//!
//! assert!(Min(2).is_satisfied(&3));
//! assert!(!Max(5).is_satisfied(&6));
//! assert!(Range::new(2, 5).is_satisfied(&5));
//! assert_eq!(Min(2).default_message(), "Minimum is 2");
//!
//! assert!(Required.is_satisfied("q"));
//! assert!(!Required.is_satisfied(&None::<String>));
//! ```
//!
//! # Writing your own
//!
//! ```rust
//! use fieldcheck::{Validation, Validator};
//!
//! struct Even;
//!
//! impl Validator<i64> for Even {
//!     fn is_satisfied(&self, value: &i64) -> bool {
//!         value % 2 == 0
//!     }
//!
//!     fn default_message(&self) -> String {
//!         "Must be even".to_string()
//!     }
//! }
//!
//! let mut v = Validation::new();
//! assert!(!v.apply(&Even, &3).is_ok());
//! assert_eq!(v.to_string(), "Must be even\n");
//! ```

mod number;
mod pattern;
mod required;
mod size;

pub mod prelude;

// Re-export leaf validators
pub use number::{Max, Min, Range};
pub use pattern::{Email, Match};
pub use required::Required;
pub use size::{HasSize, Length, MaxSize, MinSize};

/// A check that a value of type `T` either satisfies or fails.
///
/// Implementations must be pure: `is_satisfied` has no side effects, and
/// `default_message` depends only on the validator's own configuration.
///
/// The trait is object safe, so validators of different concrete types can be
/// chained through [`Validation::check`](crate::Validation::check) as
/// `&dyn Validator<T>`.
pub trait Validator<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this validator.
    fn is_satisfied(&self, value: &T) -> bool;

    /// Human-readable explanation of a failure, recorded when the check fails.
    fn default_message(&self) -> String;
}

impl<T: ?Sized, V: Validator<T> + ?Sized> Validator<T> for &V {
    #[inline]
    fn is_satisfied(&self, value: &T) -> bool {
        (**self).is_satisfied(value)
    }

    fn default_message(&self) -> String {
        (**self).default_message()
    }
}

impl<T: ?Sized, V: Validator<T> + ?Sized> Validator<T> for Box<V> {
    #[inline]
    fn is_satisfied(&self, value: &T) -> bool {
        (**self).is_satisfied(value)
    }

    fn default_message(&self) -> String {
        (**self).default_message()
    }
}
