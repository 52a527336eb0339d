//! Presence validator

use super::Validator;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Validator that a value is present and not empty.
///
/// What "empty" means is decided per type:
///
/// - strings must not be empty (whitespace counts as content);
/// - collections must contain at least one element;
/// - `Option<T>` must be `Some`, and its content must itself be required-satisfied.
///
/// Unlike a zero-value check, numbers and booleans are deliberately not
/// supported: `0` and `false` are treated as real values rather than as
/// missing ones. Wrap the field in an `Option` when absence matters.
///
/// # Example
///
/// ```rust
/// use fieldcheck::validator::*;
///
/// assert!(Required.is_satisfied("q"));
/// assert!(!Required.is_satisfied(""));
/// assert!(Required.is_satisfied("   "));
/// assert!(!Required.is_satisfied(&Some(String::new())));
/// assert!(!Required.is_satisfied(&Vec::<u8>::new()));
/// assert_eq!(Validator::<str>::default_message(&Required), "Required");
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Required;

const MESSAGE: &str = "Required";

impl Validator<str> for Required {
    #[inline]
    fn is_satisfied(&self, value: &str) -> bool {
        !value.is_empty()
    }

    fn default_message(&self) -> String {
        MESSAGE.to_string()
    }
}

impl Validator<String> for Required {
    #[inline]
    fn is_satisfied(&self, value: &String) -> bool {
        Validator::<str>::is_satisfied(self, value)
    }

    fn default_message(&self) -> String {
        MESSAGE.to_string()
    }
}

impl<T: ?Sized> Validator<&T> for Required
where
    Required: Validator<T>,
{
    #[inline]
    fn is_satisfied(&self, value: &&T) -> bool {
        Validator::<T>::is_satisfied(self, *value)
    }

    fn default_message(&self) -> String {
        MESSAGE.to_string()
    }
}

impl<T> Validator<Option<T>> for Required
where
    Required: Validator<T>,
{
    #[inline]
    fn is_satisfied(&self, value: &Option<T>) -> bool {
        value
            .as_ref()
            .is_some_and(|inner| Validator::<T>::is_satisfied(self, inner))
    }

    fn default_message(&self) -> String {
        MESSAGE.to_string()
    }
}

macro_rules! required_non_empty {
    ($([$($generics:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Validator<$ty> for Required {
                #[inline]
                fn is_satisfied(&self, value: &$ty) -> bool {
                    !value.is_empty()
                }

                fn default_message(&self) -> String {
                    MESSAGE.to_string()
                }
            }
        )*
    };
}

required_non_empty! {
    [T] [T],
    [T, const N: usize] [T; N],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [K, V, S] HashMap<K, V, S>,
    [K, V] BTreeMap<K, V>,
    [T, S] HashSet<T, S>,
    [T] BTreeSet<T>,
}
