//! Client-side validation rules for the sign-in form.
//!
//! Rules run in a fixed order: emptiness first, then email shape. An empty
//! email therefore reports `EmptyField`, never `InvalidEmailFormat`.

use std::sync::LazyLock;

use regex::Regex;

/// Local part, `@`, domain, `.`, tld. Nothing else is checked.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Why a submission was refused before reaching the backend.
///
/// The `Display` text is what the form shows under the fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Email or password is empty.
    #[error("both fields required")]
    EmptyField,
    /// Email does not look like `local@domain.tld`.
    #[error("enter a valid email")]
    InvalidEmailFormat,
}

/// Permissive email shape check (case-insensitive).
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(&email.to_lowercase())
}

/// Validates raw field contents. Values are not trimmed.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::EmptyField);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmailFormat);
    }
    Ok(())
}
