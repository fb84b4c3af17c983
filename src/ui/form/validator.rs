//! Field validation rules.
//!
//! Every rule is a pure function of the field's current value. The error's
//! `Display` text is exactly what the form shows next to the input.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Shortest accepted password, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// `local@domain.tld` with no whitespace and a single `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// One named input of the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
}

impl Field {
    /// Fields in display (and focus) order.
    pub const ALL: [Field; 3] = [Field::Username, Field::Email, Field::Password];

    /// Label text used both for rendering and for lookups.
    pub fn label(self) -> &'static str {
        match self {
            Field::Username => "User Name",
            Field::Email => "Email Address",
            Field::Password => "Password",
        }
    }

    /// Whether editing alone is enough to surface this field's error.
    ///
    /// Email and password give feedback while typing; the user name only
    /// complains after it is left or a submit is attempted.
    pub fn reveals_on_change(self) -> bool {
        !matches!(self, Field::Username)
    }

    pub fn is_masked(self) -> bool {
        matches!(self, Field::Password)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("User name is required")]
    UsernameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Enter a valid email")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password should be of minimum 8 characters length")]
    PasswordTooShort,
}

/// Validate `value` against the rule for `field`.
pub fn validate(field: Field, value: &str) -> Result<(), FieldError> {
    match field {
        Field::Username => validate_username(value),
        Field::Email => validate_email(value),
        Field::Password => validate_password(value),
    }
}

fn validate_username(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::UsernameRequired);
    }
    Ok(())
}

fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !EMAIL_RE.is_match(value) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

fn validate_password(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::PasswordRequired);
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(FieldError::PasswordTooShort);
    }
    Ok(())
}
