//! Serde support for validation errors (feature-gated)
//!
//! A [`ValidationError`] serializes as `{"message": "..."}` and a
//! [`Validation`] as the list of its errors, in the order they were recorded.
//!
//! # Example
//!
//! ```rust,ignore
//! use fieldcheck::Validation;
//!
//! let mut v = Validation::new();
//! v.min(1, 2);
//!
//! let json = serde_json::to_string(&v).unwrap();
//! assert_eq!(json, r#"[{"message":"Minimum is 2"}]"#);
//! ```

use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

use super::{Validation, ValidationError};

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationError", 1)?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}

impl Serialize for Validation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for error in self.errors() {
            seq.serialize_element(&error)?;
        }
        seq.end()
    }
}
