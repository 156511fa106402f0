//! Input filters applied as the user types
//!
//! Filters normalize the value before it is stored; they never produce
//! errors. Validation proper runs later, on submit.

use dash_model::ABOUT_MAX_CHARS;

/// Strip everything but ASCII digits.
#[must_use]
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Characters left before the about section hits its cap. Saturates at zero.
#[inline]
#[must_use]
pub fn about_remaining(about: &str) -> usize {
    ABOUT_MAX_CHARS.saturating_sub(about.chars().count())
}
