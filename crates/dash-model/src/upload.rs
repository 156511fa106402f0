//! File uploads and preview resources

use serde::Deserialize;
use uuid::Uuid;

/// An in-memory file picked by the user, headed for `POST /upload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    /// MIME type as reported by the picker, e.g. `image/png`.
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Size in bytes.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Result of handing a binary to the upload endpoint. Ownership of the file
/// bytes ends once this URL exists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadedAsset {
    pub url: String,
}

/// Scoped local preview of a picked file, standing in for a browser object
/// URL.
///
/// The URL must be released when a new file replaces the old one or the
/// owning form is discarded. [`release`](Self::release) is idempotent and
/// also runs on drop, so the resource cannot leak; a revocation hook makes
/// the release observable to callers that manage a real object URL.
pub struct PreviewUrl {
    url: String,
    on_release: Option<Box<dyn FnOnce() + Send>>,
}

impl PreviewUrl {
    /// Fresh preview with a generated `blob:` URL and no revocation hook.
    #[must_use]
    pub fn new() -> Self {
        Self {
            url: format!("blob:{}", Uuid::new_v4()),
            on_release: None,
        }
    }

    /// Preview wrapping an externally-created URL; `on_release` runs exactly
    /// once, when the preview is released or dropped.
    #[must_use]
    pub fn with_release_hook(
        url: impl Into<String>,
        on_release: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            url: url.into(),
            on_release: Some(Box::new(on_release)),
        }
    }

    #[inline]
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Release the underlying URL. Safe to call more than once.
    pub fn release(&mut self) {
        if let Some(hook) = self.on_release.take() {
            hook();
        }
    }
}

impl Default for PreviewUrl {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for PreviewUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewUrl")
            .field("url", &self.url)
            .field("released", &self.on_release.is_none())
            .finish()
    }
}
