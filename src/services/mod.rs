//! Page services: gather what a template needs and run form submissions.
//!
//! Services know nothing about Actix; routes translate their errors into
//! flash messages, redirects and status codes.

use thiserror::Error;

use crate::forms::contact::ContactErrors;
use crate::forms::research::ApplicationErrors;
use crate::repository::errors::RepositoryError;

pub mod api;
pub mod blog;
pub mod contact;
pub mod main;
pub mod research;
pub mod subscribe;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("form error: {0}")]
    Form(String),

    #[error("contact form has {} invalid field(s)", .0.len())]
    ContactValidation(ContactErrors),

    #[error("research application has {} invalid field(s)", .0.len())]
    ApplicationValidation(ApplicationErrors),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
