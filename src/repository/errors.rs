use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Delivery error: {0}")]
    DeliveryError(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
