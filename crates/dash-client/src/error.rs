//! API error taxonomy
//!
//! Three kinds of failure leave this crate: transport problems, non-2xx
//! server responses, and local upload rejections that never reached the
//! network. Profile absence is *not* an error — `get_profile` maps 404 to
//! `Ok(None)`.

use dash_validate::ValidationError;

/// Failure talking to (or being refused by) the dashboard API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (connection, DNS, body decode).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status. `message` is the
    /// server-supplied text when present, otherwise the operation's
    /// generic fallback.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The upload was rejected client-side before any network call.
    #[error("{0}")]
    Rejected(#[from] ValidationError),
}

impl ApiError {
    /// Text to put in front of the user, preferring whatever the server
    /// said over the caller's generic fallback.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Server { message, .. } if !message.is_empty() => message.clone(),
            Self::Rejected(err) => err.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// HTTP status of a server response, if there was one.
    #[inline]
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
