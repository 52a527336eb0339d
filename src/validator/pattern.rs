//! Regular expression validators

use super::Validator;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$")
        .expect("email pattern is a valid regex")
});

/// Validator that a string matches a compiled pattern.
///
/// Uses [`Regex::is_match`], so the pattern only needs to match somewhere in
/// the value; anchor it with `^...$` to match the whole string.
///
/// # Example
///
/// ```rust
/// use fieldcheck::validator::*;
/// use regex::Regex;
///
/// let zip = Match::new(Regex::new(r"^\d{5}$").unwrap());
/// assert!(zip.is_satisfied("12345"));
/// assert!(!zip.is_satisfied("1234a"));
/// assert_eq!(Validator::<str>::default_message(&zip), r"Must match ^\d{5}$");
/// ```
#[derive(Clone, Debug)]
pub struct Match(pub Regex);

impl Match {
    /// Create a validator from a compiled pattern.
    pub fn new(pattern: Regex) -> Self {
        Match(pattern)
    }

    /// The underlying pattern.
    pub fn pattern(&self) -> &Regex {
        &self.0
    }
}

impl<S: AsRef<str> + ?Sized> Validator<S> for Match {
    #[inline]
    fn is_satisfied(&self, value: &S) -> bool {
        self.0.is_match(value.as_ref())
    }

    fn default_message(&self) -> String {
        format!("Must match {}", self.0.as_str())
    }
}

/// Validator that a string is a plausible e-mail address.
///
/// Delegates to a [`Match`] over a built-in pattern anchored at both ends.
/// The local part is a run of atoms separated by single dots, so leading,
/// trailing and doubled dots are rejected. The domain needs at least one dot,
/// so single-label hosts like `localhost` are rejected. Quoted local parts and
/// IP-literal domains are not supported; use [`Match`] with your own pattern
/// when those matter.
///
/// # Example
///
/// ```rust
/// use fieldcheck::validator::*;
///
/// assert!(Email::new().is_satisfied("user@example.com"));
/// assert!(!Email::new().is_satisfied("user@"));
/// assert!(!Email::new().is_satisfied("not an email"));
/// assert!(!Email::new().is_satisfied("a..b@example.com"));
/// assert!(!Email::new().is_satisfied("admin@localhost"));
/// ```
#[derive(Clone, Debug)]
pub struct Email(Match);

impl Email {
    /// Create an e-mail validator using the built-in pattern.
    pub fn new() -> Self {
        Email(Match(EMAIL_PATTERN.clone()))
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str> + ?Sized> Validator<S> for Email {
    #[inline]
    fn is_satisfied(&self, value: &S) -> bool {
        self.0.is_satisfied(value)
    }

    fn default_message(&self) -> String {
        "Must be a valid email address".to_string()
    }
}
