//! Newsletter box in the footer of every page.

use chrono::Utc;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::contact::Subscription;
use crate::domain::types::EmailAddress;
use crate::forms::FormError;

/// Site-relative path, so a crafted form cannot bounce visitors elsewhere.
fn validate_return_to(value: &str) -> Result<(), ValidationError> {
    if is_local_path(value) {
        Ok(())
    } else {
        Err(ValidationError::new("return_to"))
    }
}

fn is_local_path(value: &str) -> bool {
    value.starts_with('/') && !value.starts_with("//") && !value.contains('\\')
}

fn default_return_to() -> String {
    "/".to_string()
}

#[derive(Debug, Deserialize, Validate)]
pub struct SubscribeForm {
    /// Checked when building the [`Subscription`], with the contact form's
    /// email rule.
    #[serde(default)]
    pub email: String,
    /// Page the form was posted from.
    #[serde(default = "default_return_to")]
    #[validate(custom(function = "validate_return_to"))]
    pub return_to: String,
}

impl SubscribeForm {
    /// Where to send the visitor afterwards; the site root when the posted
    /// value is not a local path.
    pub fn redirect_target(&self) -> &str {
        if is_local_path(&self.return_to) {
            &self.return_to
        } else {
            "/"
        }
    }
}

impl TryFrom<&SubscribeForm> for Subscription {
    type Error = FormError;

    fn try_from(form: &SubscribeForm) -> Result<Self, Self::Error> {
        form.validate()?;
        if form.email.trim().is_empty() {
            return Err(FormError::MissingEmail);
        }
        let email = EmailAddress::new(form.email.as_str()).map_err(|_| FormError::InvalidEmail)?;
        Ok(Subscription::new(email, Utc::now().naive_utc()))
    }
}
