//! Field validation rules
//!
//! Each field kind selects its own rule chain; evaluation stops at the
//! first failing rule, so one field carries at most one error message.

use super::field::{FieldKind, FieldStatus, FormField};
use regex::Regex;
use std::sync::LazyLock;

/// Minimal email shape: something, an @, something, a dot, something.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email regex"));

pub const EMAIL_MESSAGE: &str = "Please enter valid email address";
pub const PASSWORD_MESSAGE: &str = "Please enter more than 8 characters containing \
    at least 1 uppercase, 1 lowercase, 1 number and 1 symbol.";
pub const CONFIRMATION_REQUIRED_MESSAGE: &str = "Password confirmation required";
pub const CONFIRMATION_MISMATCH_MESSAGE: &str = "Password does not match";

/// Validate a single field against the rules for its kind.
///
/// `password` is the current value of the primary password field, used by
/// the confirmation rule; the registry guarantees it exists whenever a
/// confirmation field is configured.
pub fn check(field: &FormField, password: Option<&str>) -> FieldStatus {
    match field.kind {
        FieldKind::PasswordConfirmation => {
            if field.value.trim().is_empty() {
                return FieldStatus::error(CONFIRMATION_REQUIRED_MESSAGE);
            }
            if password != Some(field.value.as_str()) {
                return FieldStatus::error(CONFIRMATION_MISMATCH_MESSAGE);
            }
            FieldStatus::Success
        }
        kind => {
            if field.value.trim().is_empty() {
                return FieldStatus::error(format!("{} cannot be blank", field.label));
            }
            match kind {
                FieldKind::Email if !EMAIL_RE.is_match(&field.value) => {
                    FieldStatus::error(EMAIL_MESSAGE)
                }
                FieldKind::Password if !password_is_strong(&field.value) => {
                    FieldStatus::error(PASSWORD_MESSAGE)
                }
                _ => FieldStatus::Success,
            }
        }
    }
}

/// Password strength: at least 8 characters with at least one lowercase
/// letter, one uppercase letter, one digit and one symbol (anything that
/// is not an ASCII letter or digit).
pub fn password_is_strong(value: &str) -> bool {
    value.chars().count() >= 8
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| !c.is_ascii_alphanumeric())
}
