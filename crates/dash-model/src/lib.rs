//! Dashboard domain model
//!
//! Client-held data for the dashboard: the persisted session record, the
//! profile draft and its wire mapping, support tickets, and file uploads.
//!
//! # Core Concepts
//!
//! - [`SessionUser`]: the single persisted session record that gates access
//! - [`ProfileDraft`]: client copy of the profile, reconciled on explicit save
//! - [`ProfileRecord`]: partial server record a draft is defaulted from
//! - [`SupportTicket`]: per-modal-open ticket draft
//! - [`FileUpload`] / [`UploadedAsset`]: binary in, hosted URL out
//! - [`PreviewUrl`]: scoped preview resource that must be released

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod profile;
mod ticket;
mod upload;
mod user;

pub use profile::{
    email_local_part, ProfileDraft, ProfileRecord, SocialLinks, SocialMediaRecord,
    SaveProfilePayload, SocialMediaPayload, ABOUT_MAX_CHARS, PHONE_DIGITS,
};
pub use ticket::{SupportPayload, SupportRequestRecord, SupportTicket};
pub use upload::{FileUpload, PreviewUrl, UploadedAsset};
pub use user::{AuthUser, Credentials, SessionUser};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
