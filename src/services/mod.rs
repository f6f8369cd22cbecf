use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod customer;

/// Client-facing error taxonomy produced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Customer not found")]
    NotFound,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid sort field: {0}")]
    InvalidSortField(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ConstraintViolation(message) => ServiceError::Conflict(message),
            RepositoryError::ValidationError(message) => ServiceError::Validation(message),
            RepositoryError::DatabaseError(message)
            | RepositoryError::ConnectionError(message)
            | RepositoryError::Unexpected(message) => ServiceError::Internal(message),
        }
    }
}
