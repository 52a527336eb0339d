//! Per-check outcome and the message override path

use super::error::ValidationError;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Handle shared between a context and the results that point into it.
pub(crate) type SharedError = Rc<RefCell<ValidationError>>;

/// The outcome of one [`apply`](crate::Validation::apply) or
/// [`check`](crate::Validation::check) call.
///
/// A failed result holds a handle to the error that was just appended to the
/// context. Overriding the message through the result rewrites that stored
/// error, so the new text shows up when the context is displayed or iterated.
///
/// The handle keeps the error alive on its own: after
/// [`Validation::clear`](crate::Validation::clear) a previously returned
/// result can still be read, it just no longer affects the context.
///
/// # Examples
///
/// ```
/// use fieldcheck::Validation;
/// use fieldcheck::validator::Min;
///
/// let mut v = Validation::new();
/// let result = v.apply(&Min(2), &1);
/// assert!(!result.is_ok());
///
/// result.message("Too small");
/// assert_eq!(result.error_message().as_deref(), Some("Too small"));
/// assert_eq!(v.to_string(), "Too small\n");
/// ```
#[derive(Clone)]
pub struct ValidationResult {
    error: Option<SharedError>,
}

impl ValidationResult {
    pub(crate) fn success() -> Self {
        ValidationResult { error: None }
    }

    pub(crate) fn failure(error: SharedError) -> Self {
        ValidationResult { error: Some(error) }
    }

    /// Returns `true` if the check passed.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Returns `true` if the check failed and recorded an error.
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }

    /// A snapshot of the recorded error, or `None` on success.
    pub fn error(&self) -> Option<ValidationError> {
        self.error.as_ref().map(|e| e.borrow().clone())
    }

    /// The recorded message, or `None` on success.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.borrow().message().to_string())
    }

    /// Replace the recorded message with `message`, used verbatim.
    ///
    /// Does nothing when the check passed. Returns `self` so calls chain
    /// straight off `apply`/`check`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Validation;
    /// use fieldcheck::validator::Required;
    ///
    /// let mut v = Validation::new();
    /// v.check("", &[&Required]).message("Name is required");
    /// v.check("Ada", &[&Required]).message("never recorded");
    ///
    /// assert_eq!(v.messages(), vec!["Name is required"]);
    /// ```
    pub fn message(&self, message: impl Into<String>) -> &Self {
        if let Some(error) = &self.error {
            error.borrow_mut().set_message(message.into());
        }
        self
    }

    /// Replace the recorded message with a formatted one.
    ///
    /// Same as [`message`](Self::message), taking `format_args!` output so
    /// positional placeholders are filled in.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::Validation;
    ///
    /// let mut v = Validation::new();
    /// let age = 12;
    /// v.min(age, 18)
    ///     .message_fmt(format_args!("Age {} is below {}", age, 18));
    ///
    /// assert_eq!(v.to_string(), "Age 12 is below 18\n");
    /// ```
    pub fn message_fmt(&self, args: fmt::Arguments<'_>) -> &Self {
        if let Some(error) = &self.error {
            error.borrow_mut().set_message(args.to_string());
        }
        self
    }
}

impl fmt::Debug for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationResult")
            .field("ok", &self.is_ok())
            .field("error", &self.error.as_ref().map(|e| e.borrow().clone()))
            .finish()
    }
}
