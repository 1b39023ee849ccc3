//! "Apply below" form on the fund-research page.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::research::ResearchApplication;
use crate::domain::types::{EmailAddress, NonEmptyString, PersonName, PhoneNumber, SubmissionId};
use crate::forms::{field_messages, require, require_email};

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

fn validate_field(value: &str) -> Result<(), ValidationError> {
    require(value, "Field is required")
}

fn validate_categories(value: &str) -> Result<(), ValidationError> {
    require(value, "Category is required")
}

/// Label, input name and placeholder of one input; drives the template loop.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct FormFieldConfig {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_type: &'static str,
    pub required: bool,
}

pub const APPLICATION_FIELDS: &[FormFieldConfig] = &[
    FormFieldConfig {
        name: "first_name",
        label: "First Name",
        placeholder: "Enter your first name",
        input_type: "text",
        required: true,
    },
    FormFieldConfig {
        name: "last_name",
        label: "Last Name",
        placeholder: "Enter your last name",
        input_type: "text",
        required: true,
    },
    FormFieldConfig {
        name: "email",
        label: "Email",
        placeholder: "Enter your email",
        input_type: "email",
        required: true,
    },
    FormFieldConfig {
        name: "phone_number",
        label: "Phone Number",
        placeholder: "+234 012 3456 789",
        input_type: "text",
        required: true,
    },
    FormFieldConfig {
        name: "field",
        label: "Field - (Academic category)",
        placeholder: "Enter your field",
        input_type: "text",
        required: true,
    },
    FormFieldConfig {
        name: "categories",
        label: "Categories - (What type of research)",
        placeholder: "Enter your research category",
        input_type: "text",
        required: true,
    },
];

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate, PartialEq, Eq)]
pub struct ResearchApplicationForm {
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
    /// Academic field, e.g. "Computer Science".
    #[serde(default)]
    #[validate(custom(function = "validate_field"))]
    pub field: String,
    #[serde(default)]
    #[validate(custom(function = "validate_categories"))]
    pub categories: String,
}

/// Input name to message.
pub type ApplicationErrors = BTreeMap<String, String>;

impl ResearchApplicationForm {
    pub fn errors(&self) -> ApplicationErrors {
        match self.validate() {
            Ok(()) => ApplicationErrors::new(),
            Err(errors) => field_messages(&errors).into_iter().collect(),
        }
    }
}

impl TryFrom<&ResearchApplicationForm> for ResearchApplication {
    type Error = ApplicationErrors;

    fn try_from(form: &ResearchApplicationForm) -> Result<Self, Self::Error> {
        let errors = form.errors();
        if !errors.is_empty() {
            return Err(errors);
        }

        let invalid = |name: &str, message: &str| {
            ApplicationErrors::from([(name.to_string(), message.to_string())])
        };

        Ok(ResearchApplication {
            id: SubmissionId::new(),
            first_name: PersonName::new(form.first_name.as_str())
                .map_err(|_| invalid("first_name", "First name is required"))?,
            last_name: PersonName::new(form.last_name.as_str())
                .map_err(|_| invalid("last_name", "Last name is required"))?,
            email: EmailAddress::new(form.email.as_str())
                .map_err(|_| invalid("email", "Invalid email address"))?,
            phone_number: PhoneNumber::new(form.phone_number.as_str())
                .map_err(|_| invalid("phone_number", "Phone number is required"))?,
            field: NonEmptyString::new(form.field.as_str())
                .map_err(|_| invalid("field", "Field is required"))?,
            categories: NonEmptyString::new(form.categories.as_str())
                .map_err(|_| invalid("categories", "Category is required"))?,
            received_at: Utc::now().naive_utc(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ResearchApplicationForm {
        ResearchApplicationForm {
            first_name: "Kwame".to_string(),
            last_name: "Mensah".to_string(),
            email: "kwame@example.org".to_string(),
            phone_number: "+233 20 000 0000".to_string(),
            field: "Environmental Science".to_string(),
            categories: "Field study".to_string(),
        }
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = ResearchApplicationForm::default().errors();
        let names: Vec<_> = errors.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec!["categories", "email", "field", "first_name", "last_name", "phone_number"]
        );
        assert_eq!(errors["email"], "Email is required");
    }

    #[test]
    fn filled_form_becomes_an_application() {
        let application = ResearchApplication::try_from(&filled()).unwrap();
        assert_eq!(application.field.as_str(), "Environmental Science");
        assert_eq!(application.email.as_str(), "kwame@example.org");
    }

    #[test]
    fn bad_email_blocks_the_application() {
        let form = ResearchApplicationForm {
            email: "kwame.example.org".to_string(),
            ..filled()
        };
        let errors = ResearchApplication::try_from(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["email"], "Invalid email address");
    }

    #[test]
    fn every_configured_input_maps_to_a_rule() {
        let errors = ResearchApplicationForm::default().errors();
        for config in APPLICATION_FIELDS {
            assert!(errors.contains_key(config.name), "{}", config.name);
        }
    }
}
