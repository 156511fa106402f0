//! Validation rules engine for the dashboard forms
//!
//! Pure, deterministic functions mapping a field value to either "valid" or
//! a specific user-facing error message. No I/O happens here; the form
//! controllers decide *when* to validate (eagerly on blur for credential
//! forms, lazily on submit everywhere else).
//!
//! # Example
//!
//! ```rust
//! use dash_validate::{validate, Field, ValidationError};
//!
//! assert_eq!(validate(Field::Gender, ""), Err(ValidationError::GenderRequired));
//! assert!(validate(Field::Instagram, "some.user").is_ok());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod filter;
mod rules;

pub use error::ValidationError;
pub use filter::{about_remaining, digits_only};
pub use rules::{check_image, validate, Field, ALLOWED_IMAGE_TYPES, MAX_IMAGE_BYTES};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
