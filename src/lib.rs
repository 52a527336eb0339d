//! # fieldcheck
//!
//! Lightweight field validation: apply checks to values, collect
//! human-readable messages for the ones that fail.
//!
//! ## Pieces
//!
//! - [`Validator`]: a stateless check with a default failure message.
//!   Built-ins live in [`validator`]: `Required`, `Min`, `Max`, `Range`,
//!   `MinSize`, `MaxSize`, `Length`, `Match` and `Email`.
//! - [`Validation`]: the context that runs validators and accumulates a
//!   [`ValidationError`] for every failure, in call order.
//! - [`ValidationResult`]: what each check returns; a failed result lets you
//!   replace the recorded message with your own.
//!
//! ## Quick Example
//!
//! ```rust
//! use fieldcheck::Validation;
//! use fieldcheck::validator::{Max, Min, Required};
//!
//! struct Signup {
//!     name: Option<String>,
//!     age: u32,
//!     email: String,
//! }
//!
//! fn validate(form: &Signup) -> Validation {
//!     let mut v = Validation::new();
//!     v.check(&form.name, &[&Required]).message("Name is required");
//!     v.check(&form.age, &[&Min(18), &Max(130)])
//!         .message_fmt(format_args!("Age {} is not allowed", form.age));
//!     v.email(&form.email);
//!     v
//! }
//!
//! let v = validate(&Signup {
//!     name: None,
//!     age: 12,
//!     email: "ada@example.com".to_string(),
//! });
//!
//! assert!(v.has_errors());
//! assert_eq!(v.to_string(), "Name is required\nAge 12 is not allowed\n");
//! ```
//!
//! ## Features
//!
//! - `tracing`: log failed checks and cleared contexts through `tracing`
//! - `serde`: `Serialize` for [`ValidationError`] and [`Validation`]
//! - `proptest`: `Arbitrary` for [`ValidationError`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod testing;
pub mod validation;
pub mod validator;

// Re-exports
pub use validation::{Validation, ValidationError, ValidationResult};
pub use validator::Validator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::validation::{Validation, ValidationError, ValidationResult};
    pub use crate::validator::prelude::*;
}
