//! Profile editor controller
//!
//! Owns the draft between load and save, applies the per-field input
//! filters, and runs the photo lifecycle. Save and photo operations are
//! independently single-flight: a save does not block an upload, but a
//! second save while one is outstanding is a no-op.

use crate::error::FormError;
use crate::error_map::ErrorMap;
use dash_client::{Api, SessionStore};
use dash_model::{FileUpload, ProfileDraft, SessionUser, ABOUT_MAX_CHARS, PHONE_DIGITS};
use dash_validate::{digits_only, Field};
use tracing::{debug, warn};

/// Editable fields of the profile form. Email is deliberately absent: it is
/// immutable post-load and never passes through [`ProfileForm::set_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Dob,
    Gender,
    Phone,
    About,
    Linkedin,
    Website,
    Instagram,
    Youtube,
}

impl ProfileField {
    fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Dob => "dob",
            Self::Gender => "gender",
            Self::Phone => "phone",
            Self::About => "about",
            Self::Linkedin => "linkedin",
            Self::Website => "website",
            Self::Instagram => "instagram",
            Self::Youtube => "youtube",
        }
    }
}

/// State of the profile editor: the resolved user, the working draft, and
/// the flags the UI renders from.
#[derive(Debug, Default)]
pub struct ProfileForm {
    user: Option<SessionUser>,
    draft: ProfileDraft,
    errors: ErrorMap,
    general_error: Option<String>,
    /// Whether the server already holds a profile for this user. Decides
    /// nothing on the wire (create and update share one endpoint) but the
    /// UI labels the action from it.
    profile_exists: bool,
    is_saving: bool,
    is_uploading_photo: bool,
    is_loading: bool,
}

impl ProfileForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the session, refresh the account record, and fetch the
    /// profile into the draft.
    ///
    /// Degrades rather than fails: if the account refresh errors the stored
    /// session record is used as-is, and if the profile fetch errors the
    /// draft starts from defaults. Only a missing session is fatal.
    pub async fn load(
        &mut self,
        api: &dyn Api,
        session: &dyn SessionStore,
    ) -> Result<(), FormError> {
        let stored = session.get().ok_or(FormError::NotLoggedIn)?;

        self.is_loading = true;
        let user = match api.get_me(&stored.id).await {
            Ok(me) => SessionUser {
                id: stored.id.clone(),
                user_id: me.user_id.unwrap_or_else(|| stored.user_id.clone()),
                email: me.email,
                created_at: me.created_at.unwrap_or_else(|| stored.created_at.clone()),
                profile_photo: stored.profile_photo.clone(),
            },
            Err(err) => {
                warn!(%err, "account refresh failed, using stored session");
                stored.clone()
            }
        };

        match api.get_profile(&user.user_id).await {
            Ok(Some(record)) => {
                self.profile_exists = true;
                self.draft = ProfileDraft::from_record(&record, &user.email);
            }
            Ok(None) => {
                self.profile_exists = false;
                self.draft = ProfileDraft::defaults_for(&user.email);
            }
            Err(err) => {
                warn!(%err, "profile fetch failed, starting from defaults");
                self.profile_exists = false;
                self.draft = ProfileDraft::defaults_for(&user.email);
            }
        }

        if let Some(photo) = &user.profile_photo {
            if self.draft.profile_photo.is_empty() {
                self.draft.profile_photo = photo.clone();
            }
        }

        self.user = Some(user);
        self.errors.clear_all();
        self.general_error = None;
        self.is_loading = false;
        Ok(())
    }

    /// Apply an edit with the field's input filter, then eagerly clear its
    /// error.
    ///
    /// Phone edits that would exceed [`PHONE_DIGITS`] digits are dropped
    /// whole; the about section is truncated at [`ABOUT_MAX_CHARS`]
    /// characters instead.
    pub fn set_field(&mut self, field: ProfileField, value: &str) {
        match field {
            ProfileField::Name => self.draft.name = value.to_string(),
            ProfileField::Dob => self.draft.dob = value.to_string(),
            ProfileField::Gender => self.draft.gender = value.to_string(),
            ProfileField::Phone => {
                let digits = digits_only(value);
                if digits.chars().count() > PHONE_DIGITS {
                    return;
                }
                self.draft.phone = digits;
            }
            ProfileField::About => {
                self.draft.about = value.chars().take(ABOUT_MAX_CHARS).collect();
            }
            ProfileField::Linkedin => self.draft.social.linkedin = value.to_string(),
            ProfileField::Website => self.draft.social.website = value.to_string(),
            ProfileField::Instagram => self.draft.social.instagram = value.to_string(),
            ProfileField::Youtube => self.draft.social.youtube = value.to_string(),
        }
        self.errors.clear_field(field.key());
        self.general_error = None;
    }

    fn run_validation(&mut self) -> bool {
        let mut errors = ErrorMap::new();
        errors.check(Field::Name, &self.draft.name);
        errors.check(Field::Gender, &self.draft.gender);
        errors.check(Field::Phone, &self.draft.phone);
        errors.check(Field::About, &self.draft.about);
        errors.check(Field::Linkedin, &self.draft.social.linkedin);
        errors.check(Field::Website, &self.draft.social.website);
        errors.check(Field::Instagram, &self.draft.social.instagram);
        errors.check(Field::Youtube, &self.draft.social.youtube);
        let valid = errors.is_empty();
        self.errors = errors;
        valid
    }

    fn require_user_id(&mut self) -> Result<String, FormError> {
        match self.user.as_ref().filter(|u| !u.user_id.is_empty()) {
            Some(user) => Ok(user.user_id.clone()),
            None => {
                let message = FormError::MissingUserId.to_string();
                self.general_error = Some(message);
                Err(FormError::MissingUserId)
            }
        }
    }

    /// Validate the whole draft and send it. The same call creates and
    /// updates; the server infers from existence.
    pub async fn save(&mut self, api: &dyn Api) -> Result<(), FormError> {
        if self.is_saving {
            return Err(FormError::InFlight);
        }
        if !self.run_validation() {
            return Err(FormError::Invalid);
        }
        let user_id = self.require_user_id()?;

        self.is_saving = true;
        self.general_error = None;

        let payload = self.draft.to_payload();
        let result = api.save_profile(&user_id, &payload).await;
        self.is_saving = false;

        match result {
            Ok(()) => {
                debug!(%user_id, "profile saved");
                self.profile_exists = true;
                Ok(())
            }
            Err(err) => {
                let message = err.user_message("Failed to save profile. Please try again.");
                self.general_error = Some(message.clone());
                Err(FormError::Remote(message))
            }
        }
    }

    /// Upload a photo and register it on the profile, then update the draft,
    /// the resolved user, and the cached session record.
    ///
    /// The file is checked locally first; a rejected file never starts the
    /// in-flight state.
    pub async fn upload_photo(
        &mut self,
        api: &dyn Api,
        session: &dyn SessionStore,
        file: FileUpload,
    ) -> Result<String, FormError> {
        if self.is_uploading_photo {
            return Err(FormError::InFlight);
        }
        dash_validate::check_image(&file)?;
        let user_id = self.require_user_id()?;

        self.is_uploading_photo = true;
        self.general_error = None;

        let result = async {
            let asset = api.upload_file(file).await?;
            api.set_profile_photo(&user_id, &asset.url).await?;
            Ok::<_, dash_client::ApiError>(asset.url)
        }
        .await;
        self.is_uploading_photo = false;

        match result {
            Ok(url) => {
                self.draft.profile_photo = url.clone();
                if let Some(user) = self.user.as_mut() {
                    user.profile_photo = Some(url.clone());
                }
                self.cache_session_photo(session, Some(url.clone()));
                Ok(url)
            }
            Err(err) => {
                let message = err.user_message("Failed to upload photo. Please try again.");
                self.general_error = Some(message.clone());
                Err(FormError::Remote(message))
            }
        }
    }

    /// Delete the photo server-side, then clear it locally. Local state is
    /// only touched after the server confirms; a failed delete leaves the
    /// photo in place.
    pub async fn remove_photo(
        &mut self,
        api: &dyn Api,
        session: &dyn SessionStore,
    ) -> Result<(), FormError> {
        if self.is_uploading_photo {
            return Err(FormError::InFlight);
        }
        let user_id = self.require_user_id()?;

        self.is_uploading_photo = true;
        self.general_error = None;

        let result = api.delete_profile_photo(&user_id).await;
        self.is_uploading_photo = false;

        match result {
            Ok(()) => {
                self.draft.profile_photo.clear();
                if let Some(user) = self.user.as_mut() {
                    user.profile_photo = None;
                }
                self.cache_session_photo(session, None);
                Ok(())
            }
            Err(err) => {
                let message = err.user_message("Failed to remove photo. Please try again.");
                self.general_error = Some(message.clone());
                Err(FormError::Remote(message))
            }
        }
    }

    /// Ask the server for the public share link.
    pub async fn share(&self, api: &dyn Api) -> Result<String, FormError> {
        let user = self
            .user
            .as_ref()
            .filter(|u| !u.user_id.is_empty())
            .ok_or(FormError::MissingUserId)?;
        api.share_profile(&user.user_id).await.map_err(|err| {
            let message =
                err.user_message("Failed to generate share link. Please try again.");
            FormError::Remote(message)
        })
    }

    fn cache_session_photo(&self, session: &dyn SessionStore, photo: Option<String>) {
        if let Some(mut stored) = session.get() {
            stored.profile_photo = photo;
            session.set(stored);
        }
    }

    #[must_use]
    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn profile_exists(&self) -> bool {
        self.profile_exists
    }

    #[inline]
    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    #[inline]
    #[must_use]
    pub fn is_uploading_photo(&self) -> bool {
        self.is_uploading_photo
    }

    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    #[must_use]
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    /// Characters left in the about section, for the live counter.
    #[inline]
    #[must_use]
    pub fn about_remaining(&self) -> usize {
        self.draft.about_remaining()
    }
}
