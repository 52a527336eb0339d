//! Testing utilities for code that validates with fieldcheck
//!
//! Assertion macros for [`Validation`](crate::Validation) contexts, plus
//! property-based testing support behind the `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::{assert_invalid, assert_valid, assert_validation_errors};
//! use fieldcheck::Validation;
//!
//! let mut v = Validation::new();
//! v.min(3, 2);
//! assert_valid!(v);
//!
//! v.max(9, 5);
//! assert_invalid!(v);
//! assert_validation_errors!(v, ["Maximum is 5"]);
//! ```

/// Assert that a validation context recorded no errors.
///
/// Panics with the recorded messages otherwise.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{Validation, assert_valid};
///
/// let mut v = Validation::new();
/// v.required("Ada");
/// assert_valid!(v);
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($validation:expr) => {
        match &$validation {
            v if !v.has_errors() => {}
            v => {
                panic!("Expected no validation errors, got: {:?}", v.messages());
            }
        }
    };
}

/// Assert that a validation context recorded at least one error.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{Validation, assert_invalid};
///
/// let mut v = Validation::new();
/// v.required("");
/// assert_invalid!(v);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($validation:expr) => {
        if !$validation.has_errors() {
            panic!("Expected validation errors, got none");
        }
    };
}

/// Assert that a validation context recorded exactly these messages, in order.
///
/// # Example
///
/// ```rust
/// use fieldcheck::{Validation, assert_validation_errors};
///
/// let mut v = Validation::new();
/// v.min(1, 2);
/// v.error("custom");
/// assert_validation_errors!(v, ["Minimum is 2", "custom"]);
/// ```
#[macro_export]
macro_rules! assert_validation_errors {
    ($validation:expr, $expected:expr) => {{
        let actual = $validation.messages();
        let expected: ::std::vec::Vec<::std::string::String> = $expected
            .into_iter()
            .map(|m| ::std::string::ToString::to_string(&m))
            .collect();
        if actual != expected {
            panic!(
                "Expected validation errors {:?}, got: {:?}",
                expected, actual
            );
        }
    }};
}

#[cfg(feature = "proptest")]
use crate::ValidationError;

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for ValidationError {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        ".*".prop_map(ValidationError::new).boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::Validation;

    #[test]
    fn assert_valid_macro() {
        let v = Validation::new();
        assert_valid!(v);
    }

    #[test]
    fn assert_invalid_macro() {
        let mut v = Validation::new();
        v.error("boom");
        assert_invalid!(v);
    }

    #[test]
    fn assert_validation_errors_macro() {
        let mut v = Validation::new();
        v.error("error1");
        v.error("error2");
        assert_validation_errors!(v, ["error1", "error2"]);
        assert_validation_errors!(v, vec![String::from("error1"), String::from("error2")]);
    }

    #[test]
    fn assert_validation_errors_empty() {
        let v = Validation::new();
        assert_validation_errors!(v, Vec::<String>::new());
    }

    #[test]
    #[should_panic(expected = "Expected no validation errors")]
    fn assert_valid_panics_on_errors() {
        let mut v = Validation::new();
        v.error("boom");
        assert_valid!(v);
    }

    #[test]
    #[should_panic(expected = "Expected validation errors, got none")]
    fn assert_invalid_panics_when_valid() {
        let v = Validation::new();
        assert_invalid!(v);
    }

    #[test]
    #[should_panic(expected = "Expected validation errors")]
    fn assert_validation_errors_panics_on_mismatch() {
        let mut v = Validation::new();
        v.error("actual");
        assert_validation_errors!(v, ["expected"]);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::{Validation, ValidationError};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn recorded_errors_keep_their_message(errors in prop::collection::vec(any::<ValidationError>(), 0..20)) {
                let mut v = Validation::new();
                for error in &errors {
                    v.error(error.message());
                }
                prop_assert_eq!(v.errors().collect::<Vec<_>>(), errors);
            }
        }
    }
}
