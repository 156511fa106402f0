//! The API seam and its reqwest-backed implementation
//!
//! One method per backend endpoint. Every method is a single request with no
//! retry; non-2xx responses become [`ApiError::Server`] carrying the
//! server's `message` when it sent one, otherwise the operation's generic
//! fallback text.

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::types::{ErrorBody, ProfileEnvelope, ShareEnvelope, SupportHistoryBody, UserEnvelope};
use async_trait::async_trait;
use dash_model::{
    AuthUser, FileUpload, ProfileRecord, SaveProfilePayload, SupportPayload,
    SupportRequestRecord, UploadedAsset,
};
use reqwest::multipart;
use reqwest::{Response, StatusCode};
use serde_json::json;
use tracing::{debug, warn};

/// Remote dashboard API.
///
/// Object-safe so form controllers can hold `&dyn Api` and tests can swap
/// in a mock.
#[async_trait]
pub trait Api: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<AuthUser, ApiError>;

    async fn signup(&self, email: &str, password: &str) -> Result<AuthUser, ApiError>;

    async fn get_me(&self, user_id: &str) -> Result<AuthUser, ApiError>;

    /// Fetch the profile. `Ok(None)` means the server reported no profile
    /// yet (404) — a valid initial state, not an error.
    async fn get_profile(&self, user_id: &str) -> Result<Option<ProfileRecord>, ApiError>;

    /// Create-or-update is unified; the server infers from existence.
    async fn save_profile(
        &self,
        user_id: &str,
        payload: &SaveProfilePayload,
    ) -> Result<(), ApiError>;

    /// Register an already-uploaded photo URL on the profile.
    async fn set_profile_photo(&self, user_id: &str, photo_url: &str) -> Result<(), ApiError>;

    async fn delete_profile_photo(&self, user_id: &str) -> Result<(), ApiError>;

    async fn share_profile(&self, user_id: &str) -> Result<String, ApiError>;

    /// Upload a binary and get back its hosted URL. Rejects unsupported
    /// types and oversized files locally, before any network call.
    async fn upload_file(&self, upload: FileUpload) -> Result<UploadedAsset, ApiError>;

    async fn submit_support(&self, payload: &SupportPayload) -> Result<(), ApiError>;

    async fn support_history(
        &self,
        user_id: &str,
    ) -> Result<Vec<SupportRequestRecord>, ApiError>;
}

/// reqwest-backed [`Api`] implementation.
#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            base_url: config.base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Adapter against the local development backend.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Pass 2xx responses through; turn anything else into
    /// [`ApiError::Server`] with the body's `message` when present.
    async fn ensure_success(resp: Response, fallback: &str) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| fallback.to_string());
        warn!(status = status.as_u16(), %message, "api request refused");
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl Api for HttpApi {
    async fn login(&self, email: &str, password: &str) -> Result<AuthUser, ApiError> {
        debug!(%email, "login");
        let resp = self
            .http
            .post(self.url("/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "Login failed").await?;
        let envelope: UserEnvelope = resp.json().await?;
        Ok(envelope.user)
    }

    async fn signup(&self, email: &str, password: &str) -> Result<AuthUser, ApiError> {
        debug!(%email, "signup");
        let resp = self
            .http
            .post(self.url("/auth/signup"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "Signup failed").await?;
        let envelope: UserEnvelope = resp.json().await?;
        Ok(envelope.user)
    }

    async fn get_me(&self, user_id: &str) -> Result<AuthUser, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/auth/me/{user_id}")))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "Failed to fetch user profile").await?;
        let envelope: UserEnvelope = resp.json().await?;
        Ok(envelope.user)
    }

    async fn get_profile(&self, user_id: &str) -> Result<Option<ProfileRecord>, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/profile/{user_id}")))
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_FOUND {
            debug!(%user_id, "no profile yet");
            return Ok(None);
        }
        let resp = Self::ensure_success(resp, "Failed to fetch user profile").await?;
        let envelope: ProfileEnvelope = resp.json().await?;
        Ok(Some(envelope.data))
    }

    async fn save_profile(
        &self,
        user_id: &str,
        payload: &SaveProfilePayload,
    ) -> Result<(), ApiError> {
        debug!(%user_id, "save profile");
        let resp = self
            .http
            .post(self.url(&format!("/profile/{user_id}")))
            .json(payload)
            .send()
            .await?;
        Self::ensure_success(resp, "Failed to update user profile").await?;
        Ok(())
    }

    async fn set_profile_photo(&self, user_id: &str, photo_url: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url(&format!("/profile/{user_id}/photo")))
            .json(&json!({ "photoUrl": photo_url }))
            .send()
            .await?;
        Self::ensure_success(resp, "Failed to upload profile photo").await?;
        Ok(())
    }

    async fn delete_profile_photo(&self, user_id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/profile/{user_id}/photo")))
            .send()
            .await?;
        Self::ensure_success(resp, "Failed to delete profile photo").await?;
        Ok(())
    }

    async fn share_profile(&self, user_id: &str) -> Result<String, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/profile/{user_id}/share")))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "Failed to get shareable profile").await?;
        let envelope: ShareEnvelope = resp.json().await?;
        Ok(envelope.share_url)
    }

    async fn upload_file(&self, upload: FileUpload) -> Result<UploadedAsset, ApiError> {
        // Local gate: type and size are checked before any network traffic.
        dash_validate::check_image(&upload)?;

        debug!(file = %upload.file_name, size = upload.size(), "upload file");
        let part = multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.mime_type)?;
        let form = multipart::Form::new().part("file", part);

        let resp = self
            .http
            .post(self.url("/upload"))
            .multipart(form)
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "Failed to upload file").await?;
        let asset: UploadedAsset = resp.json().await?;
        Ok(asset)
    }

    async fn submit_support(&self, payload: &SupportPayload) -> Result<(), ApiError> {
        debug!(user_id = %payload.user_id, "submit support request");
        let resp = self
            .http
            .post(self.url("/support"))
            .json(payload)
            .send()
            .await?;
        Self::ensure_success(resp, "Support request failed").await?;
        Ok(())
    }

    async fn support_history(
        &self,
        user_id: &str,
    ) -> Result<Vec<SupportRequestRecord>, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/support/user/{user_id}")))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "Failed to fetch support requests").await?;
        let body: SupportHistoryBody = resp.json().await?;
        Ok(body.into_records())
    }
}
