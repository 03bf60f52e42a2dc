//! Client-side sign-in validation, mirroring the backend's rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::MIN_PASSWORD_LEN;
use crate::models::{FieldError, FieldErrors, SignInInput};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Whether a string looks like an email address.
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Validate the sign-in form.
///
/// The email is required and must look like an address; the password is
/// required and at least [`MIN_PASSWORD_LEN`] characters.
pub fn validate_sign_in(input: &SignInInput) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    let email = input.email.trim();
    if email.is_empty() {
        errors.insert(
            SignInInput::EMAIL,
            FieldError::new("Email is required", "required"),
        );
    } else if !is_email(email) {
        errors.insert(
            SignInInput::EMAIL,
            FieldError::new("Enter a valid email address", "invalid_string"),
        );
    }

    if input.password.is_empty() {
        errors.insert(
            SignInInput::PASSWORD,
            FieldError::new("Password is required", "required"),
        );
    } else if input.password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(
            SignInInput::PASSWORD,
            FieldError::new(
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
                "too_small",
            ),
        );
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
