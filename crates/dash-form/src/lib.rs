//! Form state controllers for the dashboard
//!
//! Each controller holds the in-memory draft for one form, applies edits
//! with their side-effect rules, tracks per-field errors, and orchestrates
//! submit through the API seam. The contract is two-phase everywhere:
//! editing a field eagerly clears its error, and validation runs again only
//! on submit (credential forms additionally validate a single field on
//! blur).
//!
//! Submits are single-flight per form instance: a second submit while one
//! is outstanding is a no-op, never queued or cancelled. No timeouts are
//! added — a hung request leaves the form in its saving state, matching the
//! UI this layer drives.
//!
//! # Core Concepts
//!
//! - [`ProfileForm`]: load/edit/save plus the photo upload lifecycle
//! - [`SupportForm`]: per-open ticket draft with screenshot handling
//! - [`LoginForm`] / [`SignupForm`]: credential forms with blur validation
//! - [`ErrorMap`]: field name → message; absence of a key means valid

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod credentials;
mod error;
mod error_map;
mod profile;
mod support;

pub use credentials::{CredentialField, LoginForm, SignupForm};
pub use error::FormError;
pub use error_map::ErrorMap;
pub use profile::{ProfileField, ProfileForm};
pub use support::{SupportForm, TicketField};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
