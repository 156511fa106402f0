//! Testing utilities for the dashboard workspace
//!
//! Shared fixtures plus the mock API seam the form tests swap in.

#![allow(missing_docs)]

use async_trait::async_trait;
use dash_client::{Api, ApiError};
use dash_model::{
    AuthUser, FileUpload, ProfileRecord, SaveProfilePayload, SessionUser, SocialMediaRecord,
    SupportPayload, SupportRequestRecord, UploadedAsset,
};

mockall::mock! {
    /// Hand-rolled mock of the [`Api`] seam, shared by every crate's tests.
    pub Api {}

    #[async_trait]
    impl Api for Api {
        async fn login(&self, email: &str, password: &str) -> Result<AuthUser, ApiError>;
        async fn signup(&self, email: &str, password: &str) -> Result<AuthUser, ApiError>;
        async fn get_me(&self, user_id: &str) -> Result<AuthUser, ApiError>;
        async fn get_profile(&self, user_id: &str) -> Result<Option<ProfileRecord>, ApiError>;
        async fn save_profile(
            &self,
            user_id: &str,
            payload: &SaveProfilePayload,
        ) -> Result<(), ApiError>;
        async fn set_profile_photo(&self, user_id: &str, photo_url: &str) -> Result<(), ApiError>;
        async fn delete_profile_photo(&self, user_id: &str) -> Result<(), ApiError>;
        async fn share_profile(&self, user_id: &str) -> Result<String, ApiError>;
        async fn upload_file(&self, upload: FileUpload) -> Result<UploadedAsset, ApiError>;
        async fn submit_support(&self, payload: &SupportPayload) -> Result<(), ApiError>;
        async fn support_history(
            &self,
            user_id: &str,
        ) -> Result<Vec<SupportRequestRecord>, ApiError>;
    }
}

/// Session record for the standard test account.
pub fn sample_session_user() -> SessionUser {
    SessionUser {
        id: "abc".to_string(),
        user_id: "u-1".to_string(),
        email: "jo@example.com".to_string(),
        created_at: "2025-01-01T00:00:00Z".to_string(),
        profile_photo: None,
    }
}

/// Auth response matching [`sample_session_user`].
pub fn sample_auth_user() -> AuthUser {
    AuthUser {
        id: Some("abc".to_string()),
        user_id: Some("u-1".to_string()),
        email: "jo@example.com".to_string(),
        created_at: Some("2025-01-01T00:00:00Z".to_string()),
    }
}

/// A fully-populated profile record as the server would return it.
pub fn sample_profile_record() -> ProfileRecord {
    ProfileRecord {
        name: Some("Jo Doe".to_string()),
        date_of_birth: Some("1994-06-15T00:00:00.000Z".to_string()),
        gender: Some("Female".to_string()),
        phone_number: Some("9876543210".to_string()),
        about: Some("Hello there".to_string()),
        social_media: Some(SocialMediaRecord {
            linkedin: Some("https://linkedin.com/in/jodoe".to_string()),
            website: Some("https://jodoe.dev".to_string()),
            instagram: None,
            youtube: None,
        }),
        profile_photo: Some("https://cdn.example.com/jo.png".to_string()),
    }
}

/// Small PNG upload that passes the image checks.
pub fn png_upload() -> FileUpload {
    FileUpload::new("shot.png", "image/png", vec![0u8; 256])
}

/// Small JPEG upload that passes the image checks.
pub fn jpeg_upload() -> FileUpload {
    FileUpload::new("photo.jpg", "image/jpeg", vec![0u8; 512])
}
