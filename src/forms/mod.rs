//! Form definitions backing the site routes.

use std::borrow::Cow;

use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::domain::types::is_valid_email;

pub mod contact;
pub mod research;
pub mod subscribe;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Email is required")]
    MissingEmail,

    #[error("Invalid email address")]
    InvalidEmail,
}

/// Builds a validation error carrying a user-facing message.
pub(crate) fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Presence check shared by the plain text fields: blank after trimming fails.
pub(crate) fn require(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(field_error("required", message));
    }
    Ok(())
}

/// Presence first, then shape. A blank address reports only the presence
/// failure.
pub(crate) fn require_email(value: &str) -> Result<(), ValidationError> {
    require(value, "Email is required")?;
    if !is_valid_email(value) {
        return Err(field_error("email", "Invalid email address"));
    }
    Ok(())
}

/// Flattens `errors` into `(field, message)` pairs, falling back to the
/// error code when no message was attached.
pub(crate) fn field_messages(errors: &ValidationErrors) -> Vec<(String, String)> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect()
}
