use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{EmailAddress, NonEmptyString, PersonName, PhoneNumber, SubmissionId};

/// Application to have a research project funded and staffed.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ResearchApplication {
    pub id: SubmissionId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub phone_number: PhoneNumber,
    /// Academic field.
    pub field: NonEmptyString,
    /// Kind of research requested.
    pub categories: NonEmptyString,
    pub received_at: NaiveDateTime,
}
