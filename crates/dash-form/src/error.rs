//! Controller-level failures

use dash_validate::ValidationError;

/// Why a form operation did not go through.
///
/// `Invalid` means the per-field error map was populated and nothing was
/// sent; `Remote` carries text that is already user-facing (server message
/// or the operation's fallback).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// No session record exists; the caller should route to login.
    #[error("not logged in")]
    NotLoggedIn,

    /// The session record has no backend user id.
    #[error("User ID not found. Please login again.")]
    MissingUserId,

    /// Field validation failed; details are in the form's error map.
    #[error("Please fix the validation errors before saving")]
    Invalid,

    /// A file was rejected locally, before any network call.
    #[error("{0}")]
    Rejected(#[from] ValidationError),

    /// The server or transport failed; the message is ready to display.
    #[error("{0}")]
    Remote(String),

    /// An equivalent operation is already outstanding; this one was a no-op.
    #[error("operation already in flight")]
    InFlight,
}
