//! Support ticket controller
//!
//! One draft per modal open: `open` starts it, `close` discards it (unless
//! a submit is in flight), and a successful submit latches `submitted`
//! until `finish` resets for the next ticket. Screenshot attachment is a
//! two-step lifecycle — local preview on attach, upload deferred to submit.

use crate::error::FormError;
use crate::error_map::ErrorMap;
use dash_client::Api;
use dash_model::{
    FileUpload, PreviewUrl, SupportPayload, SupportRequestRecord, SupportTicket, PHONE_DIGITS,
};
use dash_validate::{digits_only, Field};
use tracing::debug;

/// Editable fields of the ticket draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketField {
    Subject,
    Description,
    ContactNumber,
}

impl TicketField {
    fn key(self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Description => "description",
            Self::ContactNumber => "contactNumber",
        }
    }
}

/// A picked screenshot waiting for submit: the file bytes plus the local
/// preview standing in for them.
#[derive(Debug)]
struct Attachment {
    file: FileUpload,
    preview: PreviewUrl,
}

/// State of the support modal.
#[derive(Debug, Default)]
pub struct SupportForm {
    user_id: String,
    email: String,
    ticket: SupportTicket,
    screenshot: Option<Attachment>,
    errors: ErrorMap,
    general_error: Option<String>,
    is_submitting: bool,
    submitted: bool,
}

impl SupportForm {
    /// Start a fresh ticket draft for the given account.
    #[must_use]
    pub fn open(user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Apply an edit, filtering the contact number to at most
    /// [`PHONE_DIGITS`] digits, then eagerly clear that field's error.
    pub fn set_field(&mut self, field: TicketField, value: &str) {
        match field {
            TicketField::Subject => self.ticket.subject = value.to_string(),
            TicketField::Description => self.ticket.description = value.to_string(),
            TicketField::ContactNumber => {
                self.ticket.contact_number =
                    digits_only(value).chars().take(PHONE_DIGITS).collect();
            }
        }
        self.errors.clear_field(field.key());
        self.general_error = None;
    }

    /// Attach a screenshot, generating a fresh local preview for it.
    pub fn attach_screenshot(&mut self, file: FileUpload) -> Result<(), FormError> {
        self.attach_screenshot_with_preview(file, PreviewUrl::new())
    }

    /// Attach a screenshot with a caller-managed preview.
    ///
    /// A rejected file drops the passed preview, releasing it; on success
    /// the previous attachment's preview is released before the new one
    /// takes its place.
    pub fn attach_screenshot_with_preview(
        &mut self,
        file: FileUpload,
        preview: PreviewUrl,
    ) -> Result<(), FormError> {
        if let Err(err) = dash_validate::check_image(&file) {
            self.errors.insert("screenshot", err.to_string());
            drop(preview);
            return Err(FormError::Rejected(err));
        }

        if let Some(mut old) = self.screenshot.take() {
            old.preview.release();
        }
        self.screenshot = Some(Attachment { file, preview });
        self.errors.clear_field("screenshot");
        Ok(())
    }

    /// Drop the current screenshot and release its preview.
    pub fn remove_screenshot(&mut self) {
        if let Some(mut attachment) = self.screenshot.take() {
            attachment.preview.release();
        }
        self.errors.clear_field("screenshot");
    }

    fn run_validation(&mut self) -> bool {
        let mut errors = ErrorMap::new();
        errors.check(Field::Subject, &self.ticket.subject);
        errors.check(Field::Description, &self.ticket.description);
        errors.check(Field::ContactNumber, &self.ticket.contact_number);
        let valid = errors.is_empty();
        self.errors = errors;
        valid
    }

    /// Validate and send the ticket, uploading the screenshot first when one
    /// is attached.
    pub async fn submit(&mut self, api: &dyn Api) -> Result<(), FormError> {
        if self.is_submitting {
            return Err(FormError::InFlight);
        }
        if !self.run_validation() {
            return Err(FormError::Invalid);
        }

        self.is_submitting = true;
        self.general_error = None;

        let result = async {
            let screenshot_url = match &self.screenshot {
                Some(attachment) => api.upload_file(attachment.file.clone()).await?.url,
                None => String::new(),
            };
            let payload = SupportPayload {
                user_id: self.user_id.clone(),
                email: self.email.clone(),
                subject: self.ticket.subject.clone(),
                description: self.ticket.description.clone(),
                contact_number: self.ticket.contact_number.clone(),
                screenshot: screenshot_url,
            };
            api.submit_support(&payload).await
        }
        .await;
        self.is_submitting = false;

        match result {
            Ok(()) => {
                debug!(user_id = %self.user_id, "support request submitted");
                self.submitted = true;
                Ok(())
            }
            Err(err) => {
                let message =
                    err.user_message("Failed to submit support request. Please try again.");
                self.general_error = Some(message.clone());
                Err(FormError::Remote(message))
            }
        }
    }

    /// Fetch the account's past support requests, for the history panel.
    pub async fn history(&self, api: &dyn Api) -> Result<Vec<SupportRequestRecord>, FormError> {
        api.support_history(&self.user_id).await.map_err(|err| {
            let message =
                err.user_message("Failed to fetch support requests. Please try again.");
            FormError::Remote(message)
        })
    }

    /// Discard the draft (modal closed). Refused while a submit is in
    /// flight or after a success awaiting [`finish`](Self::finish); returns
    /// whether the close happened.
    pub fn close(&mut self) -> bool {
        if self.is_submitting || self.submitted {
            return false;
        }
        self.reset();
        true
    }

    /// Acknowledge a successful submit and reset for the next ticket.
    pub fn finish(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.ticket = SupportTicket::default();
        self.remove_screenshot();
        self.errors.clear_all();
        self.general_error = None;
        self.submitted = false;
    }

    #[must_use]
    pub fn ticket(&self) -> &SupportTicket {
        &self.ticket
    }

    /// Preview URL of the attached screenshot, if any.
    #[must_use]
    pub fn screenshot_preview(&self) -> Option<&str> {
        self.screenshot.as_ref().map(|a| a.preview.url())
    }

    #[inline]
    #[must_use]
    pub fn has_screenshot(&self) -> bool {
        self.screenshot.is_some()
    }

    #[inline]
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    #[inline]
    #[must_use]
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    #[must_use]
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    #[must_use]
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }
}
