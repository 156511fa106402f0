//! Session and auth user records

use serde::{Deserialize, Serialize};

/// One login or signup attempt's input. Ephemeral: built per attempt,
/// never persisted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

// Keep the password out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// User shape returned by the auth endpoints (`/auth/login`, `/auth/signup`,
/// `/auth/me/:id`).
///
/// The server is loose about which fields each endpoint includes, so
/// everything except `email` is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    pub email: String,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

/// The single session record persisted in client-side storage between page
/// loads. Its presence gates route access: no record means login, a record
/// means dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub user_id: String,
    pub email: String,
    #[serde(default, rename = "createdAt")]
    pub created_at: String,
    /// Cached copy of the hosted profile photo URL, kept so the avatar
    /// survives a reload without refetching the profile.
    #[serde(
        default,
        rename = "profilePhoto",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_photo: Option<String>,
}

impl SessionUser {
    /// Build a session record from an auth response, defaulting the fields
    /// the endpoint did not include.
    #[must_use]
    pub fn from_auth(user: AuthUser) -> Self {
        Self {
            id: user.id.unwrap_or_default(),
            user_id: user.user_id.unwrap_or_default(),
            email: user.email,
            created_at: user.created_at.unwrap_or_default(),
            profile_photo: None,
        }
    }
}
