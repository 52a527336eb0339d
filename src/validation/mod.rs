//! Validation context, results and errors
//!
//! This module provides:
//! - [`Validation`], the context that runs validators and accumulates errors
//! - [`ValidationResult`], the per-check outcome with the message override path
//! - [`ValidationError`], the recorded failure message

mod context;
mod error;
mod result;

#[cfg(feature = "serde")]
mod serde_impl;

pub use context::Validation;
pub use error::ValidationError;
pub use result::ValidationResult;
