//! The validation context: runs checks and accumulates their errors

use super::error::ValidationError;
use super::result::{SharedError, ValidationResult};
use crate::validator::{Email, HasSize, Length, Match, Max, MaxSize, Min, MinSize, Range};
use crate::validator::{Required, Validator};
use regex::Regex;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// An ordered accumulator of validation errors for one validation pass.
///
/// Every failed check appends exactly one [`ValidationError`], in the order
/// the checks ran. Passing checks leave the context untouched. Nothing is
/// ever removed except by [`clear`](Self::clear), which removes everything.
///
/// `Validation` is meant for a single thread: results share their errors with
/// the context through `Rc`, so neither can be sent across threads.
///
/// # Examples
///
/// ```
/// use fieldcheck::Validation;
/// use fieldcheck::validator::{Max, Min, Required};
///
/// let mut v = Validation::new();
/// v.check("", &[&Required]).message("Name is required");
/// v.check(&7, &[&Min(2), &Max(5)]);
///
/// assert!(v.has_errors());
/// assert_eq!(v.to_string(), "Name is required\nMaximum is 5\n");
/// ```
#[derive(Default)]
pub struct Validation {
    errors: Vec<SharedError>,
}

impl Validation {
    /// Create an empty context.
    pub fn new() -> Self {
        Validation { errors: Vec::new() }
    }

    /// Run one validator against `value`.
    ///
    /// On failure the validator's default message is appended to the context
    /// and the returned result points at it. On success nothing is recorded.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Validation;
    /// use fieldcheck::validator::Min;
    ///
    /// let mut v = Validation::new();
    /// assert!(v.apply(&Min(2), &3).is_ok());
    /// assert!(!v.has_errors());
    ///
    /// let failed = v.apply(&Min(2), &1);
    /// assert_eq!(failed.error_message().as_deref(), Some("Minimum is 2"));
    /// assert_eq!(v.len(), 1);
    /// ```
    pub fn apply<T, V>(&mut self, validator: &V, value: &T) -> ValidationResult
    where
        T: ?Sized,
        V: Validator<T> + ?Sized,
    {
        if validator.is_satisfied(value) {
            return ValidationResult::success();
        }

        let message = validator.default_message();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            reason = %message,
            errors = self.errors.len() + 1,
            "validation check failed"
        );
        self.push(message)
    }

    /// Run validators in order against `value`, stopping at the first failure.
    ///
    /// Returns the failing result, so at most one error is recorded per call.
    /// When every validator passes, returns the result of the last one. An
    /// empty `validators` slice runs nothing and returns a passing result
    /// whose message override is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Validation;
    /// use fieldcheck::validator::{Max, Min};
    ///
    /// let mut v = Validation::new();
    /// assert!(v.check(&3, &[&Min(2), &Max(5)]).is_ok());
    ///
    /// // Min fails first; Max never runs
    /// let result = v.check(&1, &[&Min(2), &Max(0)]);
    /// assert!(result.is_err());
    /// assert_eq!(v.messages(), vec!["Minimum is 2"]);
    /// ```
    pub fn check<T>(&mut self, value: &T, validators: &[&dyn Validator<T>]) -> ValidationResult
    where
        T: ?Sized,
    {
        let mut result = ValidationResult::success();
        for validator in validators {
            result = self.apply(*validator, value);
            if result.is_err() {
                break;
            }
        }
        result
    }

    /// Record a caller-authored error without running a validator.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Validation;
    ///
    /// let mut v = Validation::new();
    /// let passwords_match = false;
    /// if !passwords_match {
    ///     v.error("Passwords do not match");
    /// }
    /// assert_eq!(v.to_string(), "Passwords do not match\n");
    /// ```
    pub fn error(&mut self, message: impl Into<String>) -> ValidationResult {
        let message = message.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(reason = %message, errors = self.errors.len() + 1, "validation error recorded");
        self.push(message)
    }

    /// Record a caller-authored, formatted error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Validation;
    ///
    /// let mut v = Validation::new();
    /// v.error_fmt(format_args!("{} is taken", "ada"));
    /// assert_eq!(v.messages(), vec!["ada is taken"]);
    /// ```
    pub fn error_fmt(&mut self, args: fmt::Arguments<'_>) -> ValidationResult {
        self.error(args.to_string())
    }

    fn push(&mut self, message: String) -> ValidationResult {
        let error = Rc::new(RefCell::new(ValidationError::new(message)));
        self.errors.push(Rc::clone(&error));
        ValidationResult::failure(error)
    }

    /// Returns `true` if at least one error has been recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of recorded errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if no error has been recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Remove every recorded error.
    ///
    /// Results returned before the call stay readable but no longer affect
    /// this context.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(discarded = self.errors.len(), "validation errors cleared");
        self.errors.clear();
    }

    /// Snapshots of the recorded errors, in the order they were recorded.
    pub fn errors(&self) -> impl Iterator<Item = ValidationError> + '_ {
        self.errors.iter().map(|e| e.borrow().clone())
    }

    /// The recorded messages, in the order they were recorded.
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|e| e.borrow().message().to_string())
            .collect()
    }

    /// Check that `value` is present and not empty. See [`Required`].
    pub fn required<T>(&mut self, value: &T) -> ValidationResult
    where
        T: ?Sized,
        Required: Validator<T>,
    {
        self.apply(&Required, value)
    }

    /// Check that `n >= min`.
    pub fn min<T>(&mut self, n: T, min: T) -> ValidationResult
    where
        T: PartialOrd + fmt::Display + Send + Sync,
    {
        self.apply(&Min(min), &n)
    }

    /// Check that `n <= max`.
    pub fn max<T>(&mut self, n: T, max: T) -> ValidationResult
    where
        T: PartialOrd + fmt::Display + Send + Sync,
    {
        self.apply(&Max(max), &n)
    }

    /// Check that `min <= n <= max`.
    pub fn range<T>(&mut self, n: T, min: T, max: T) -> ValidationResult
    where
        T: PartialOrd + fmt::Display + Send + Sync,
    {
        self.apply(&Range::new(min, max), &n)
    }

    /// Check that the size of `value` is at least `min`.
    pub fn min_size<T: HasSize + ?Sized>(&mut self, value: &T, min: usize) -> ValidationResult {
        self.apply(&MinSize(min), value)
    }

    /// Check that the size of `value` is at most `max`.
    pub fn max_size<T: HasSize + ?Sized>(&mut self, value: &T, max: usize) -> ValidationResult {
        self.apply(&MaxSize(max), value)
    }

    /// Check that the size of `value` is exactly `n`.
    pub fn length<T: HasSize + ?Sized>(&mut self, value: &T, n: usize) -> ValidationResult {
        self.apply(&Length(n), value)
    }

    /// Check that `value` matches `pattern`.
    pub fn matches<S>(&mut self, value: &S, pattern: &Regex) -> ValidationResult
    where
        S: AsRef<str> + ?Sized,
    {
        self.apply(&Match::new(pattern.clone()), value)
    }

    /// Check that `value` is a plausible e-mail address.
    pub fn email<S>(&mut self, value: &S) -> ValidationResult
    where
        S: AsRef<str> + ?Sized,
    {
        self.apply(&Email::new(), value)
    }
}

impl fmt::Display for Validation {
    /// One message per line, each followed by a newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error.borrow())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validation")
            .field("errors", &self.messages())
            .finish()
    }
}
