//! Size and length validators
//!
//! Strings are measured in `char`s, collections in elements.

use super::Validator;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Anything with a countable size.
///
/// # Example
///
/// ```rust
/// use fieldcheck::validator::HasSize;
///
/// assert_eq!("héllo".size(), 5);
/// assert_eq!(vec![1, 2, 3].size(), 3);
/// ```
pub trait HasSize {
    /// Number of characters or elements.
    fn size(&self) -> usize;
}

impl HasSize for str {
    #[inline]
    fn size(&self) -> usize {
        self.chars().count()
    }
}

impl HasSize for String {
    #[inline]
    fn size(&self) -> usize {
        self.as_str().size()
    }
}

impl<T: HasSize + ?Sized> HasSize for &T {
    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }
}

impl<T> HasSize for [T] {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> HasSize for [T; N] {
    #[inline]
    fn size(&self) -> usize {
        N
    }
}

impl<T> HasSize for Vec<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> HasSize for VecDeque<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> HasSize for HashMap<K, V, S> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> HasSize for BTreeMap<K, V> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, S> HasSize for HashSet<T, S> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> HasSize for BTreeSet<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

/// Validator for a minimum size: `size >= min`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::validator::*;
///
/// assert!(MinSize(2).is_satisfied("ab"));
/// assert!(!MinSize(2).is_satisfied(&vec![1]));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinSize(pub usize);

impl<T: HasSize + ?Sized> Validator<T> for MinSize {
    #[inline]
    fn is_satisfied(&self, value: &T) -> bool {
        value.size() >= self.0
    }

    fn default_message(&self) -> String {
        format!("Minimum size is {}", self.0)
    }
}

/// Validator for a maximum size: `size <= max`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::validator::*;
///
/// assert!(MaxSize(3).is_satisfied("abc"));
/// assert!(!MaxSize(3).is_satisfied("abcd"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaxSize(pub usize);

impl<T: HasSize + ?Sized> Validator<T> for MaxSize {
    #[inline]
    fn is_satisfied(&self, value: &T) -> bool {
        value.size() <= self.0
    }

    fn default_message(&self) -> String {
        format!("Maximum size is {}", self.0)
    }
}

/// Validator for an exact size: `size == n`.
///
/// # Example
///
/// ```rust
/// use fieldcheck::validator::*;
///
/// assert!(Length(3).is_satisfied(&[1, 2, 3]));
/// assert!(!Length(3).is_satisfied("ab"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Length(pub usize);

impl<T: HasSize + ?Sized> Validator<T> for Length {
    #[inline]
    fn is_satisfied(&self, value: &T) -> bool {
        value.size() == self.0
    }

    fn default_message(&self) -> String {
        format!("Required length is {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_size_counts_chars() {
        assert_eq!("".size(), 0);
        assert_eq!("abc".size(), 3);
        // 2 chars, 6 bytes
        assert_eq!("日本".size(), 2);
        assert_eq!(String::from("日本").size(), 2);
    }

    #[test]
    fn test_collection_sizes() {
        assert_eq!(vec![1, 2].size(), 2);
        assert_eq!([0u8; 4].size(), 4);
        assert_eq!((&[1, 2, 3][..]).size(), 3);
        assert_eq!(VecDeque::from(vec![1]).size(), 1);

        let mut map = HashMap::new();
        map.insert("a", 1);
        assert_eq!(map.size(), 1);

        let set: BTreeSet<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(set.size(), 3);
    }

    #[test]
    fn test_min_size() {
        assert!(MinSize(2).is_satisfied("ab"));
        assert!(MinSize(2).is_satisfied("abc"));
        assert!(!MinSize(2).is_satisfied("a"));
        assert!(!MinSize(1).is_satisfied(&Vec::<i32>::new()));
    }

    #[test]
    fn test_max_size() {
        assert!(MaxSize(2).is_satisfied(&vec![1, 2]));
        assert!(!MaxSize(2).is_satisfied(&vec![1, 2, 3]));
        assert!(MaxSize(0).is_satisfied(""));
    }

    #[test]
    fn test_length() {
        assert!(Length(2).is_satisfied("日本"));
        assert!(!Length(2).is_satisfied("日本語"));
        assert!(Length(0).is_satisfied(&BTreeMap::<i32, i32>::new()));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Validator::<str>::default_message(&MinSize(2)),
            "Minimum size is 2"
        );
        assert_eq!(
            Validator::<str>::default_message(&MaxSize(8)),
            "Maximum size is 8"
        );
        assert_eq!(
            Validator::<str>::default_message(&Length(4)),
            "Required length is 4"
        );
    }
}
