//! Validation failures
//!
//! Every variant carries the exact text shown to the user. The wording is
//! part of the UI contract and must not drift.

/// A field value failed one of the validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Gender is required")]
    GenderRequired,

    #[error("Phone number is required")]
    PhoneRequired,

    #[error("Phone number must be exactly 10 digits")]
    PhoneLength,

    #[error("About section is required")]
    AboutRequired,

    #[error("About section cannot exceed 500 characters")]
    AboutTooLong,

    #[error("Invalid LinkedIn URL format")]
    LinkedinUrl,

    #[error("Invalid website URL format (must start with http:// or https://)")]
    WebsiteUrl,

    #[error("Invalid Instagram URL format")]
    InstagramUrl,

    #[error("Invalid Instagram username format")]
    InstagramUsername,

    #[error("Invalid YouTube URL format")]
    YoutubeUrl,

    #[error("Invalid YouTube handle format")]
    YoutubeHandle,

    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    EmailFormat,

    #[error("Password is required")]
    PasswordRequired,

    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,

    #[error("Password must contain at least one lowercase letter")]
    PasswordNoLowercase,

    #[error("Password must contain at least one uppercase letter")]
    PasswordNoUppercase,

    #[error("Password must contain at least one number")]
    PasswordNoDigit,

    #[error("Subject is required")]
    SubjectRequired,

    #[error("Subject must be at least 5 characters")]
    SubjectTooShort,

    #[error("Subject cannot exceed 100 characters")]
    SubjectTooLong,

    #[error("Description is required")]
    DescriptionRequired,

    #[error("Description must be at least 10 characters")]
    DescriptionTooShort,

    #[error("Description cannot exceed 1000 characters")]
    DescriptionTooLong,

    #[error("Contact number is required")]
    ContactRequired,

    #[error("Contact number must be exactly 10 digits")]
    ContactLength,

    #[error("Only JPEG, PNG, and GIF images are allowed")]
    UnsupportedImageType,

    #[error("File size must be less than 5MB")]
    ImageTooLarge,
}
