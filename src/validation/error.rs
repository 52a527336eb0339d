//! The error recorded for a failed check

use std::error::Error as StdError;
use std::fmt;

/// A single validation failure: the message describing what went wrong.
///
/// Errors are created by a [`Validation`](crate::Validation) context when a
/// check fails, and can only be changed afterwards by overriding the message
/// through the [`ValidationResult`](crate::ValidationResult) that reported it.
///
/// # Examples
///
/// ```
/// use fieldcheck::ValidationError;
///
/// let err = ValidationError::new("Minimum is 2");
/// assert_eq!(err.message(), "Minimum is 2");
/// assert_eq!(err.to_string(), "Minimum is 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        ValidationError {
            message: message.into(),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the error and return its message.
    pub fn into_message(self) -> String {
        self.message
    }

    pub(crate) fn set_message(&mut self, message: String) {
        self.message = message;
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for ValidationError {}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        ValidationError::new(message)
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        ValidationError::new(message)
    }
}
