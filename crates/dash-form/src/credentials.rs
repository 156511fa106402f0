//! Login and signup forms
//!
//! Credential forms are the only ones that validate on blur: leaving a
//! field surfaces its error immediately, without waiting for submit.

use crate::error::FormError;
use crate::error_map::ErrorMap;
use dash_client::{Api, SessionStore};
use dash_model::{Credentials, SessionUser};
use dash_validate::Field;
use tracing::debug;

/// Editable fields on the credential forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Email,
    Password,
}

impl CredentialField {
    fn key(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// Message shown when the server rejects a signup because the address is
/// taken.
const DUPLICATE_EMAIL_MESSAGE: &str =
    "This email is already registered. Please use a different email or login.";

/// Login form: credentials + remember-me.
#[derive(Debug, Default)]
pub struct LoginForm {
    credentials: Credentials,
    remember_me: bool,
    errors: ErrorMap,
    general_error: Option<String>,
    is_loading: bool,
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the value and eagerly clear that field's error plus the
    /// general one.
    pub fn set_field(&mut self, field: CredentialField, value: &str) {
        match field {
            CredentialField::Email => self.credentials.email = value.to_string(),
            CredentialField::Password => self.credentials.password = value.to_string(),
        }
        self.errors.clear_field(field.key());
        self.general_error = None;
    }

    pub fn set_remember_me(&mut self, remember: bool) {
        self.remember_me = remember;
    }

    /// Validate a single field on focus loss.
    pub fn blur_field(&mut self, field: CredentialField) {
        let (rule, value) = match field {
            CredentialField::Email => (Field::Email, self.credentials.email.as_str()),
            CredentialField::Password => {
                (Field::LoginPassword, self.credentials.password.as_str())
            }
        };
        self.errors.clear_field(field.key());
        self.errors.check(rule, value);
    }

    /// Validate, dispatch, and persist the session on success.
    pub async fn submit(
        &mut self,
        api: &dyn Api,
        session: &dyn SessionStore,
    ) -> Result<SessionUser, FormError> {
        if self.is_loading {
            return Err(FormError::InFlight);
        }

        let mut errors = ErrorMap::new();
        errors.check(Field::Email, &self.credentials.email);
        errors.check(Field::LoginPassword, &self.credentials.password);
        if !errors.is_empty() {
            self.errors = errors;
            return Err(FormError::Invalid);
        }

        self.is_loading = true;
        self.errors.clear_all();
        self.general_error = None;

        let result = api
            .login(&self.credentials.email, &self.credentials.password)
            .await;
        self.is_loading = false;

        match result {
            Ok(auth) => {
                let user = SessionUser::from_auth(auth);
                debug!(user_id = %user.user_id, "login succeeded");
                session.set(user.clone());
                if self.remember_me {
                    session.set_remembered(true);
                }
                Ok(user)
            }
            Err(err) => {
                let message =
                    err.user_message("Invalid email or password. Please try again.");
                self.general_error = Some(message.clone());
                Err(FormError::Remote(message))
            }
        }
    }

    #[must_use]
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    #[must_use]
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }
}

/// Signup form: email + password with the stricter password rule.
///
/// A successful signup deliberately does not create a session; the flow
/// returns to login.
#[derive(Debug, Default)]
pub struct SignupForm {
    credentials: Credentials,
    errors: ErrorMap,
    general_error: Option<String>,
    is_loading: bool,
}

impl SignupForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: CredentialField, value: &str) {
        match field {
            CredentialField::Email => self.credentials.email = value.to_string(),
            CredentialField::Password => self.credentials.password = value.to_string(),
        }
        self.errors.clear_field(field.key());
        self.general_error = None;
    }

    pub fn blur_field(&mut self, field: CredentialField) {
        let (rule, value) = match field {
            CredentialField::Email => (Field::Email, self.credentials.email.as_str()),
            CredentialField::Password => {
                (Field::SignupPassword, self.credentials.password.as_str())
            }
        };
        self.errors.clear_field(field.key());
        self.errors.check(rule, value);
    }

    pub async fn submit(&mut self, api: &dyn Api) -> Result<(), FormError> {
        if self.is_loading {
            return Err(FormError::InFlight);
        }

        let mut errors = ErrorMap::new();
        errors.check(Field::Email, &self.credentials.email);
        errors.check(Field::SignupPassword, &self.credentials.password);
        if !errors.is_empty() {
            self.errors = errors;
            return Err(FormError::Invalid);
        }

        self.is_loading = true;
        self.errors.clear_all();
        self.general_error = None;

        let result = api
            .signup(&self.credentials.email, &self.credentials.password)
            .await;
        self.is_loading = false;

        match result {
            Ok(_) => {
                debug!(email = %self.credentials.email, "signup succeeded");
                Ok(())
            }
            Err(err) => {
                let message = err.user_message("Signup failed. Please try again.");
                if is_duplicate_email(&message) {
                    self.errors.insert("email", DUPLICATE_EMAIL_MESSAGE);
                } else {
                    self.general_error = Some(message.clone());
                }
                Err(FormError::Remote(message))
            }
        }
    }

    #[must_use]
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    #[must_use]
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }
}

fn is_duplicate_email(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("already exists")
        || lower.contains("duplicate")
        || lower.contains("already registered")
}
