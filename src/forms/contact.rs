//! The contact form: field values, validation rules and the error mapping
//! rendered next to each input.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::content::MESSAGE_PLACEHOLDER;
use crate::domain::contact::{ContactSubject, ContactSubmission};
use crate::domain::types::{
    ContactMessage, EmailAddress, PersonName, PhoneNumber, SubmissionId, sanitize_message,
};
use crate::forms::{field_error, field_messages, require, require_email};

fn validate_first_name(value: &str) -> Result<(), ValidationError> {
    require(value, "First name is required")
}

fn validate_last_name(value: &str) -> Result<(), ValidationError> {
    require(value, "Last name is required")
}

fn validate_email(value: &str) -> Result<(), ValidationError> {
    require_email(value)
}

fn validate_phone_number(value: &str) -> Result<(), ValidationError> {
    require(value, "Phone number is required")
}

/// Unchanged placeholder text counts as no message, and so does a message
/// that is nothing but markup.
fn validate_message(value: &str) -> Result<(), ValidationError> {
    require(value, "Message is required")?;
    if value == MESSAGE_PLACEHOLDER || sanitize_message(value).trim().is_empty() {
        return Err(field_error("required", "Message is required"));
    }
    Ok(())
}

/// Values posted by the contact form.
#[derive(Clone, Debug, Deserialize, Serialize, Validate, PartialEq, Eq)]
pub struct ContactForm {
    #[serde(default)]
    #[validate(custom(function = "validate_first_name"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(custom(function = "validate_last_name"))]
    pub last_name: String,
    #[serde(default)]
    #[validate(custom(function = "validate_email"))]
    pub email: String,
    #[serde(default)]
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,
    #[serde(default)]
    pub subject: ContactSubject,
    #[serde(default)]
    #[validate(custom(function = "validate_message"))]
    pub message: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            subject: ContactSubject::default(),
            message: MESSAGE_PLACEHOLDER.to_string(),
        }
    }
}

impl ContactForm {
    /// Runs every field rule and collects the failures. An empty result
    /// means the form may be submitted.
    pub fn errors(&self) -> ContactErrors {
        match self.validate() {
            Ok(()) => ContactErrors::default(),
            Err(errors) => field_messages(&errors)
                .into_iter()
                .filter_map(|(name, message)| {
                    ContactField::from_name(&name).map(|field| (field, message))
                })
                .collect(),
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Email => &mut self.email,
            ContactField::PhoneNumber => &mut self.phone_number,
            ContactField::Message => &mut self.message,
        }
    }
}

/// Text inputs of the contact form that carry a validation rule.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::PhoneNumber,
        ContactField::Message,
    ];

    /// Form input name of the field.
    pub const fn as_str(self) -> &'static str {
        match self {
            ContactField::FirstName => "first_name",
            ContactField::LastName => "last_name",
            ContactField::Email => "email",
            ContactField::PhoneNumber => "phone_number",
            ContactField::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

/// Field to message mapping produced by a validation pass.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ContactErrors(BTreeMap<ContactField, String>);

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: ContactField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drops the message for `field`, if any.
    pub fn clear(&mut self, field: ContactField) {
        self.0.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl FromIterator<(ContactField, String)> for ContactErrors {
    fn from_iter<I: IntoIterator<Item = (ContactField, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<&ContactForm> for ContactSubmission {
    type Error = ContactErrors;

    /// Validates `form` and lifts it into trusted value objects.
    fn try_from(form: &ContactForm) -> Result<Self, Self::Error> {
        let mut errors = form.errors();
        if !errors.is_empty() {
            return Err(errors);
        }

        let first_name = PersonName::new(form.first_name.as_str());
        let last_name = PersonName::new(form.last_name.as_str());
        let email = EmailAddress::new(form.email.as_str());
        let phone_number = PhoneNumber::new(form.phone_number.as_str());
        let message = ContactMessage::new(form.message.as_str());

        match (first_name, last_name, email, phone_number, message) {
            (Ok(first_name), Ok(last_name), Ok(email), Ok(phone_number), Ok(message)) => {
                Ok(ContactSubmission {
                    id: SubmissionId::new(),
                    first_name,
                    last_name,
                    email,
                    phone_number,
                    subject: form.subject,
                    message,
                    received_at: Utc::now().naive_utc(),
                })
            }
            (first_name, last_name, email, phone_number, message) => {
                if first_name.is_err() {
                    errors.insert(ContactField::FirstName, "First name is required");
                }
                if last_name.is_err() {
                    errors.insert(ContactField::LastName, "Last name is required");
                }
                if email.is_err() {
                    errors.insert(ContactField::Email, "Invalid email address");
                }
                if phone_number.is_err() {
                    errors.insert(ContactField::PhoneNumber, "Phone number is required");
                }
                if message.is_err() {
                    errors.insert(ContactField::Message, "Message is required");
                }
                Err(errors)
            }
        }
    }
}

/// Form values and the errors currently shown for them.
///
/// Errors come from the latest submit attempt. Editing a field drops that
/// field's message straight away; the field is not checked again until the
/// next submit.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub errors: ContactErrors,
}

impl ContactFormState {
    pub fn new(form: ContactForm) -> Self {
        Self {
            form,
            errors: ContactErrors::default(),
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.form.value_mut(field) = value.into();
        self.errors.clear(field);
    }

    pub fn set_subject(&mut self, subject: ContactSubject) {
        self.form.subject = subject;
    }

    /// Validates from scratch. On failure the new errors replace the old
    /// ones and are also returned.
    pub fn submit(&mut self) -> Result<ContactSubmission, ContactErrors> {
        match ContactSubmission::try_from(&self.form) {
            Ok(submission) => {
                self.errors = ContactErrors::default();
                Ok(submission)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            first_name: "Ada".to_string(),
            last_name: "X".to_string(),
            email: "a@b.com".to_string(),
            phone_number: "1".to_string(),
            subject: ContactSubject::GeneralInquiry,
            message: "hi".to_string(),
        }
    }

    #[test]
    fn complete_form_has_no_errors() {
        assert!(filled().errors().is_empty());
    }

    #[test]
    fn missing_first_name_is_the_only_error() {
        let form = ContactForm {
            first_name: String::new(),
            ..filled()
        };
        let errors = form.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(ContactField::FirstName),
            Some("First name is required")
        );
    }

    #[test]
    fn blank_values_count_as_missing() {
        let form = ContactForm {
            last_name: "   ".to_string(),
            phone_number: "\t".to_string(),
            ..filled()
        };
        let errors = form.errors();
        assert_eq!(errors.get(ContactField::LastName), Some("Last name is required"));
        assert_eq!(
            errors.get(ContactField::PhoneNumber),
            Some("Phone number is required")
        );
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn malformed_email_is_invalid() {
        let form = ContactForm {
            email: "not-an-email".to_string(),
            ..filled()
        };
        assert_eq!(
            form.errors().get(ContactField::Email),
            Some("Invalid email address")
        );
    }

    #[test]
    fn empty_email_reports_presence_not_format() {
        let form = ContactForm {
            email: String::new(),
            ..filled()
        };
        assert_eq!(form.errors().get(ContactField::Email), Some("Email is required"));
    }

    #[test]
    fn placeholder_message_is_rejected() {
        let form = ContactForm {
            message: MESSAGE_PLACEHOLDER.to_string(),
            ..filled()
        };
        assert_eq!(form.errors().get(ContactField::Message), Some("Message is required"));

        let blank = ContactForm {
            message: "  \n ".to_string(),
            ..filled()
        };
        assert_eq!(blank.errors().get(ContactField::Message), Some("Message is required"));
    }

    #[test]
    fn default_form_fails_every_rule() {
        let errors = ContactForm::default().errors();
        assert_eq!(errors.len(), ContactField::ALL.len());
        assert_eq!(ContactForm::default().subject, ContactSubject::GeneralInquiry);
    }

    #[test]
    fn subject_is_never_validated() {
        let form = ContactForm {
            subject: ContactSubject::Support,
            ..filled()
        };
        assert!(form.errors().is_empty());
    }

    #[test]
    fn errors_serialize_by_input_name() {
        let errors = ContactForm::default().errors();
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["first_name"], "First name is required");
        assert_eq!(json["phone_number"], "Phone number is required");
    }

    #[test]
    fn submission_carries_trimmed_values() {
        let form = ContactForm {
            first_name: "  Ada ".to_string(),
            email: "Ada@Example.com".to_string(),
            ..filled()
        };
        let submission = ContactSubmission::try_from(&form).unwrap();
        assert_eq!(submission.first_name.as_str(), "Ada");
        assert_eq!(submission.email.as_str(), "ada@example.com");
        assert_eq!(submission.subject, ContactSubject::GeneralInquiry);
    }

    #[test]
    fn markup_only_message_is_rejected() {
        let form = ContactForm {
            message: "<script>alert(1)</script>".to_string(),
            ..filled()
        };
        assert_eq!(form.errors().get(ContactField::Message), Some("Message is required"));
        let errors = ContactSubmission::try_from(&form).unwrap_err();
        assert_eq!(errors.get(ContactField::Message), Some("Message is required"));

        let mut state = ContactFormState::new(form);
        assert!(state.submit().is_err());
        assert_eq!(state.errors.get(ContactField::Message), Some("Message is required"));
    }

    #[test]
    fn submitted_message_is_stored_escaped() {
        let form = ContactForm {
            message: "Is a < b & c?".to_string(),
            ..filled()
        };
        assert!(form.errors().is_empty());
        let submission = ContactSubmission::try_from(&form).unwrap();
        assert_eq!(submission.message.as_str(), "Is a &lt; b &amp; c?");
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut state = ContactFormState::default();
        let errors = state.submit().unwrap_err();
        assert_eq!(errors.len(), 5);

        state.set_field(ContactField::FirstName, "");
        assert_eq!(state.errors.get(ContactField::FirstName), None);
        assert_eq!(state.errors.len(), 4);
        assert_eq!(state.errors.get(ContactField::LastName), Some("Last name is required"));
    }

    #[test]
    fn resubmitting_rebuilds_errors_from_scratch() {
        let mut state = ContactFormState::default();
        state.submit().unwrap_err();

        state.set_field(ContactField::FirstName, "Ada");
        state.set_field(ContactField::LastName, "Lovelace");
        state.set_field(ContactField::Email, "ada@example.com");
        state.set_field(ContactField::PhoneNumber, "+234 012 3456 789");
        state.set_subject(ContactSubject::Support);
        state.set_field(ContactField::Message, "Hello!");

        let submission = state.submit().unwrap();
        assert_eq!(submission.subject, ContactSubject::Support);
        assert!(state.errors.is_empty());

        state.set_field(ContactField::Email, "broken");
        let errors = state.submit().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(state.errors.get(ContactField::Email), Some("Invalid email address"));
    }

    #[test]
    fn field_names_round_trip() {
        for field in ContactField::ALL {
            assert_eq!(ContactField::from_name(field.as_str()), Some(field));
        }
        assert_eq!(ContactField::from_name("subject"), None);
    }
}
