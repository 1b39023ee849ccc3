use std::fmt::Display;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    ContactMessage, EmailAddress, PersonName, PhoneNumber, SubmissionId,
};

/// Topics a visitor can pick on the contact form.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ContactSubject {
    #[default]
    #[serde(rename = "General Inquiry")]
    GeneralInquiry,
    #[serde(rename = "Support")]
    Support,
}

impl ContactSubject {
    /// Every selectable subject in display order.
    pub const ALL: [ContactSubject; 2] = [ContactSubject::GeneralInquiry, ContactSubject::Support];

    pub const fn as_str(self) -> &'static str {
        match self {
            ContactSubject::GeneralInquiry => "General Inquiry",
            ContactSubject::Support => "Support",
        }
    }
}

impl Display for ContactSubject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A contact request that passed validation.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ContactSubmission {
    pub id: SubmissionId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub phone_number: PhoneNumber,
    pub subject: ContactSubject,
    pub message: ContactMessage,
    pub received_at: NaiveDateTime,
}

/// A newsletter sign-up from the footer form.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Subscription {
    pub id: SubmissionId,
    pub email: EmailAddress,
    pub received_at: NaiveDateTime,
}

impl Subscription {
    #[must_use]
    pub fn new(email: EmailAddress, received_at: NaiveDateTime) -> Self {
        Self {
            id: SubmissionId::new(),
            email,
            received_at,
        }
    }
}
