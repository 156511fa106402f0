//! Field validation rules
//!
//! One rule per field kind, matching the dashboard's UI contract exactly,
//! including the intentionally loose social-media rules: a LinkedIn value
//! without "linkedin.com" passes unconditionally, and a YouTube value that
//! neither contains "youtube.com" nor starts with "@" is not validated at
//! all. Do not tighten these without a compatibility decision.

use crate::error::ValidationError;
use dash_model::{FileUpload, ABOUT_MAX_CHARS, PHONE_DIGITS};
use once_cell::sync::Lazy;
use regex::Regex;

/// MIME types accepted for profile photos and ticket screenshots.
pub const ALLOWED_IMAGE_TYPES: [&str; 4] =
    ["image/jpeg", "image/jpg", "image/png", "image/gif"];

/// Upload size cap: 5 MB.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

static LINKEDIN_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(www\.)?linkedin\.com/(in|company)/[\w-]+/?$")
        .expect("valid linkedin pattern")
});

static WEBSITE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^https?://(www\.)?[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_\+.~#?&//=]*)$",
    )
    .expect("valid website pattern")
});

static INSTAGRAM_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(www\.)?instagram\.com/[\w.-]+/?$")
        .expect("valid instagram pattern")
});

static INSTAGRAM_USERNAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.-]+$").expect("valid username pattern"));

static YOUTUBE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(www\.)?youtube\.com/(c|channel|@)[\w-]+/?$")
        .expect("valid youtube pattern")
});

static YOUTUBE_HANDLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@[\w-]+$").expect("valid handle pattern"));

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static CONTACT_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid contact pattern"));

/// A validatable field kind.
///
/// Passwords are two kinds on purpose: the login form only checks length,
/// the signup form additionally requires character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Gender,
    Phone,
    About,
    Linkedin,
    Website,
    Instagram,
    Youtube,
    Email,
    LoginPassword,
    SignupPassword,
    Subject,
    Description,
    ContactNumber,
}

impl Field {
    /// Key under which this field's error is stored in an error map.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Gender => "gender",
            Self::Phone => "phone",
            Self::About => "about",
            Self::Linkedin => "linkedin",
            Self::Website => "website",
            Self::Instagram => "instagram",
            Self::Youtube => "youtube",
            Self::Email => "email",
            Self::LoginPassword | Self::SignupPassword => "password",
            Self::Subject => "subject",
            Self::Description => "description",
            Self::ContactNumber => "contactNumber",
        }
    }
}

/// Validate a single field value.
///
/// Pure and deterministic; `Err` carries the exact user-facing message.
pub fn validate(field: Field, value: &str) -> Result<(), ValidationError> {
    match field {
        Field::Name => require(value, ValidationError::NameRequired),
        Field::Gender => require(value, ValidationError::GenderRequired),
        Field::Phone => phone(value),
        Field::About => about(value),
        Field::Linkedin => linkedin(value),
        Field::Website => website(value),
        Field::Instagram => instagram(value),
        Field::Youtube => youtube(value),
        Field::Email => email(value),
        Field::LoginPassword => login_password(value),
        Field::SignupPassword => signup_password(value),
        Field::Subject => subject(value),
        Field::Description => description(value),
        Field::ContactNumber => contact_number(value),
    }
}

/// Pre-validate an image before it goes anywhere near the upload endpoint.
pub fn check_image(upload: &FileUpload) -> Result<(), ValidationError> {
    if !ALLOWED_IMAGE_TYPES.contains(&upload.mime_type.as_str()) {
        return Err(ValidationError::UnsupportedImageType);
    }
    if upload.size() > MAX_IMAGE_BYTES {
        return Err(ValidationError::ImageTooLarge);
    }
    Ok(())
}

fn require(value: &str, err: ValidationError) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(err)
    } else {
        Ok(())
    }
}

fn phone(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::PhoneRequired)
    } else if value.chars().count() != PHONE_DIGITS {
        Err(ValidationError::PhoneLength)
    } else {
        Ok(())
    }
}

fn about(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::AboutRequired)
    } else if value.chars().count() > ABOUT_MAX_CHARS {
        Err(ValidationError::AboutTooLong)
    } else {
        Ok(())
    }
}

fn linkedin(value: &str) -> Result<(), ValidationError> {
    // Bare usernames pass unconditionally; only full URLs are checked.
    if value.contains("linkedin.com") && !LINKEDIN_URL.is_match(value) {
        return Err(ValidationError::LinkedinUrl);
    }
    Ok(())
}

fn website(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && !WEBSITE_URL.is_match(value) {
        return Err(ValidationError::WebsiteUrl);
    }
    Ok(())
}

fn instagram(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    if value.contains("instagram.com") {
        if !INSTAGRAM_URL.is_match(value) {
            return Err(ValidationError::InstagramUrl);
        }
    } else if !INSTAGRAM_USERNAME.is_match(value) {
        return Err(ValidationError::InstagramUsername);
    }
    Ok(())
}

fn youtube(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    if value.contains("youtube.com") {
        if !YOUTUBE_URL.is_match(value) {
            return Err(ValidationError::YoutubeUrl);
        }
    } else if value.starts_with('@') && !YOUTUBE_HANDLE.is_match(value) {
        return Err(ValidationError::YoutubeHandle);
    }
    // Other forms are accepted without validation.
    Ok(())
}

fn email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::EmailRequired)
    } else if !EMAIL.is_match(value) {
        Err(ValidationError::EmailFormat)
    } else {
        Ok(())
    }
}

fn login_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::PasswordRequired)
    } else if value.chars().count() < 6 {
        Err(ValidationError::PasswordTooShort)
    } else {
        Ok(())
    }
}

fn signup_password(value: &str) -> Result<(), ValidationError> {
    login_password(value)?;
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(ValidationError::PasswordNoLowercase);
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::PasswordNoUppercase);
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordNoDigit);
    }
    Ok(())
}

fn subject(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::SubjectRequired)
    } else if trimmed.chars().count() < 5 {
        Err(ValidationError::SubjectTooShort)
    } else if trimmed.chars().count() > 100 {
        Err(ValidationError::SubjectTooLong)
    } else {
        Ok(())
    }
}

fn description(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::DescriptionRequired)
    } else if trimmed.chars().count() < 10 {
        Err(ValidationError::DescriptionTooShort)
    } else if trimmed.chars().count() > 1000 {
        Err(ValidationError::DescriptionTooLong)
    } else {
        Ok(())
    }
}

fn contact_number(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::ContactRequired)
    } else if !CONTACT_NUMBER.is_match(value) {
        Err(ValidationError::ContactLength)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(field: Field, value: &str) {
        assert_eq!(validate(field, value), Ok(()), "expected {value:?} to pass");
    }

    fn fails(field: Field, value: &str, err: ValidationError) {
        assert_eq!(validate(field, value), Err(err), "for value {value:?}");
    }

    #[test]
    fn required_text_rejects_whitespace() {
        fails(Field::Name, "", ValidationError::NameRequired);
        fails(Field::Name, "   ", ValidationError::NameRequired);
        fails(Field::Gender, "", ValidationError::GenderRequired);
        ok(Field::Name, "Jo");
        ok(Field::Gender, "Other");
    }

    #[test]
    fn phone_must_be_exactly_ten_digits() {
        fails(Field::Phone, "", ValidationError::PhoneRequired);
        fails(Field::Phone, "12345", ValidationError::PhoneLength);
        ok(Field::Phone, "9876543210");
    }

    #[test]
    fn about_bounds() {
        fails(Field::About, "", ValidationError::AboutRequired);
        ok(Field::About, &"x".repeat(500));
        fails(Field::About, &"x".repeat(501), ValidationError::AboutTooLong);
    }

    #[test]
    fn linkedin_urls_checked_usernames_passed_through() {
        ok(Field::Linkedin, "");
        ok(Field::Linkedin, "jodoe");
        ok(Field::Linkedin, "https://www.linkedin.com/in/jo-doe");
        ok(Field::Linkedin, "http://linkedin.com/company/acme/");
        fails(
            Field::Linkedin,
            "https://linkedin.com/jo-doe",
            ValidationError::LinkedinUrl,
        );
        fails(
            Field::Linkedin,
            "linkedin.com/in/jo",
            ValidationError::LinkedinUrl,
        );
    }

    #[test]
    fn website_requires_scheme_and_tld() {
        ok(Field::Website, "");
        ok(Field::Website, "https://example.com");
        ok(Field::Website, "http://www.example.co.uk/path?x=1");
        fails(Field::Website, "example.com", ValidationError::WebsiteUrl);
        fails(Field::Website, "ftp://example.com", ValidationError::WebsiteUrl);
    }

    #[test]
    fn instagram_accepts_bare_usernames_and_canonical_urls() {
        ok(Field::Instagram, "myuser");
        ok(Field::Instagram, "my.user-name");
        ok(Field::Instagram, "https://instagram.com/myuser");
        ok(Field::Instagram, "https://www.instagram.com/my.user/");
        fails(
            Field::Instagram,
            "https://instagram.com/my user",
            ValidationError::InstagramUrl,
        );
        fails(Field::Instagram, "my user", ValidationError::InstagramUsername);
    }

    #[test]
    fn youtube_is_deliberately_loose() {
        ok(Field::Youtube, "");
        ok(Field::Youtube, "https://youtube.com/channelname");
        ok(Field::Youtube, "https://www.youtube.com/@jo-doe");
        ok(Field::Youtube, "@jo-doe");
        fails(Field::Youtube, "@jo doe", ValidationError::YoutubeHandle);
        fails(
            Field::Youtube,
            "https://youtube.com/watch?v=abc",
            ValidationError::YoutubeUrl,
        );
        // Neither a youtube.com URL nor an @handle: accepted unvalidated.
        ok(Field::Youtube, "just some text");
    }

    #[test]
    fn email_shape() {
        fails(Field::Email, "", ValidationError::EmailRequired);
        fails(Field::Email, "not-an-email", ValidationError::EmailFormat);
        fails(Field::Email, "a@b", ValidationError::EmailFormat);
        fails(Field::Email, "a b@c.de", ValidationError::EmailFormat);
        ok(Field::Email, "jo@example.com");
    }

    #[test]
    fn login_password_only_checks_length() {
        fails(Field::LoginPassword, "", ValidationError::PasswordRequired);
        fails(Field::LoginPassword, "abc12", ValidationError::PasswordTooShort);
        ok(Field::LoginPassword, "abc123");
    }

    #[test]
    fn signup_password_requires_character_classes() {
        ok(Field::SignupPassword, "Abc123");
        fails(
            Field::SignupPassword,
            "abc123",
            ValidationError::PasswordNoUppercase,
        );
        fails(
            Field::SignupPassword,
            "ABCDEF",
            ValidationError::PasswordNoLowercase,
        );
        fails(
            Field::SignupPassword,
            "Abcdef",
            ValidationError::PasswordNoDigit,
        );
        fails(
            Field::SignupPassword,
            "Ab1",
            ValidationError::PasswordTooShort,
        );
    }

    #[test]
    fn subject_and_description_trim_before_counting() {
        fails(Field::Subject, "  ", ValidationError::SubjectRequired);
        fails(Field::Subject, " hi  ", ValidationError::SubjectTooShort);
        ok(Field::Subject, "Page is broken");
        fails(
            Field::Subject,
            &"s".repeat(101),
            ValidationError::SubjectTooLong,
        );
        fails(Field::Description, "too short", ValidationError::DescriptionTooShort);
        ok(Field::Description, "This is long enough to pass.");
        fails(
            Field::Description,
            &"d".repeat(1001),
            ValidationError::DescriptionTooLong,
        );
    }

    #[test]
    fn contact_number_is_strictly_ten_digits() {
        fails(Field::ContactNumber, "", ValidationError::ContactRequired);
        fails(Field::ContactNumber, "12345", ValidationError::ContactLength);
        fails(Field::ContactNumber, "12345678901", ValidationError::ContactLength);
        ok(Field::ContactNumber, "0123456789");
    }

    #[test]
    fn image_check_gates_type_then_size() {
        use dash_model::FileUpload;

        let pdf = FileUpload::new("doc.pdf", "application/pdf", vec![0; 10]);
        assert_eq!(check_image(&pdf), Err(ValidationError::UnsupportedImageType));

        let big = FileUpload::new("big.jpg", "image/jpeg", vec![0; MAX_IMAGE_BYTES + 1]);
        assert_eq!(check_image(&big), Err(ValidationError::ImageTooLarge));

        let exact = FileUpload::new("ok.jpg", "image/jpeg", vec![0; MAX_IMAGE_BYTES]);
        assert_eq!(check_image(&exact), Ok(()));

        let gif = FileUpload::new("ok.gif", "image/gif", vec![0; 64]);
        assert_eq!(check_image(&gif), Ok(()));
    }

    #[test]
    fn password_field_kinds_share_an_error_map_key() {
        assert_eq!(Field::LoginPassword.key(), "password");
        assert_eq!(Field::SignupPassword.key(), "password");
        assert_eq!(Field::ContactNumber.key(), "contactNumber");
    }
}
