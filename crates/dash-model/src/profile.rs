//! Profile draft and its wire mapping
//!
//! The draft is the client-authoritative copy of the profile between loads:
//! the server is the source of truth on load, the draft is mutated locally,
//! and the two are reconciled only on an explicit save.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Maximum length of the about section.
pub const ABOUT_MAX_CHARS: usize = 500;

/// Required number of digits in a phone number.
pub const PHONE_DIGITS: usize = 10;

/// Country prefix the UI pins next to the phone field.
const COUNTRY_CODE: &str = "+91";

/// Social media links held by the draft. Empty string means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    pub linkedin: String,
    pub website: String,
    pub instagram: String,
    pub youtube: String,
}

/// Client-held, not-yet-persisted copy of the profile.
///
/// `email` is immutable post-load: it comes from the account record and the
/// editor never exposes it as an editable field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    /// `YYYY-MM-DD`, or empty when unset.
    pub dob: String,
    pub gender: String,
    /// Digits only, at most [`PHONE_DIGITS`] of them.
    pub phone: String,
    pub about: String,
    pub social: SocialLinks,
    /// Hosted photo URL, empty when absent.
    pub profile_photo: String,
}

impl ProfileDraft {
    /// Fully-defaulted draft for an account that has no profile yet.
    /// The display name starts as the email local-part.
    #[must_use]
    pub fn defaults_for(email: &str) -> Self {
        Self {
            name: email_local_part(email).to_string(),
            email: email.to_string(),
            ..Self::default()
        }
    }

    /// Total construction from a partial server record.
    ///
    /// Every optional field gets an explicit default; a missing name falls
    /// back to the email local-part, and server timestamps are truncated to
    /// the date part.
    #[must_use]
    pub fn from_record(record: &ProfileRecord, email: &str) -> Self {
        let social = record.social_media.clone().unwrap_or_default();
        Self {
            name: record
                .name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| email_local_part(email).to_string()),
            email: email.to_string(),
            dob: record.date_of_birth.as_deref().map(date_only).unwrap_or_default(),
            gender: record.gender.clone().unwrap_or_default(),
            phone: record.phone_number.clone().unwrap_or_default(),
            about: record.about.clone().unwrap_or_default(),
            social: SocialLinks {
                linkedin: social.linkedin.unwrap_or_default(),
                website: social.website.unwrap_or_default(),
                instagram: social.instagram.unwrap_or_default(),
                youtube: social.youtube.unwrap_or_default(),
            },
            profile_photo: record.profile_photo.clone().unwrap_or_default(),
        }
    }

    /// Map the draft to the save-endpoint wire shape.
    ///
    /// Renames happen here: `phone` → `phoneNumber`, `dob` → `dateOfBirth`,
    /// flat social links → nested `socialMedia`. Empty photo and dob become
    /// `null` rather than empty strings.
    #[must_use]
    pub fn to_payload(&self) -> SaveProfilePayload {
        SaveProfilePayload {
            name: self.name.clone(),
            email: self.email.clone(),
            profile_photo: non_empty(&self.profile_photo),
            date_of_birth: non_empty(&self.dob),
            gender: self.gender.clone(),
            phone_number: self.phone.clone(),
            country_code: COUNTRY_CODE.to_string(),
            about: self.about.clone(),
            social_media: SocialMediaPayload {
                linkedin: self.social.linkedin.clone(),
                website: self.social.website.clone(),
                instagram: self.social.instagram.clone(),
                youtube: self.social.youtube.clone(),
            },
        }
    }

    /// Characters left in the about section. Saturates at zero.
    #[inline]
    #[must_use]
    pub fn about_remaining(&self) -> usize {
        ABOUT_MAX_CHARS.saturating_sub(self.about.chars().count())
    }
}

/// Partial profile record as the server returns it from
/// `GET /profile/:userId` (`data` envelope already unwrapped).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub social_media: Option<SocialMediaRecord>,
    #[serde(default)]
    pub profile_photo: Option<String>,
}

/// Nested `socialMedia` object of a server profile record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SocialMediaRecord {
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
}

/// Wire shape for `POST /profile/:userId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProfilePayload {
    pub name: String,
    pub email: String,
    pub profile_photo: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: String,
    pub phone_number: String,
    pub country_code: String,
    pub about: String,
    pub social_media: SocialMediaPayload,
}

/// Nested `socialMedia` object of the save payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SocialMediaPayload {
    pub linkedin: String,
    pub website: String,
    pub instagram: String,
    pub youtube: String,
}

/// Part of the email before the `@`, used as the default display name.
#[must_use]
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Truncate a server timestamp to `YYYY-MM-DD`.
///
/// RFC 3339 timestamps are parsed properly; anything else falls back to
/// taking the text before the `T`.
fn date_only(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.format("%Y-%m-%d").to_string(),
        Err(_) => raw.split('T').next().unwrap_or(raw).to_string(),
    }
}
