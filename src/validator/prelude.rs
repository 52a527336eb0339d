//! Validator prelude for convenient imports
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::validator::prelude::*;
//!
//! assert!(Range::new(2, 5).is_satisfied(&3));
//! assert!(MinSize(1).is_satisfied("a"));
//! ```

// Core traits
pub use super::{HasSize, Validator};

// Leaf validators
pub use super::{Email, Length, Match, Max, MaxSize, Min, MinSize, Range, Required};
