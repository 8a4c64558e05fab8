//! Error type shared by the job use cases

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::errors::DomainError;

/// Common error type for job use cases
/// (create, get, list, update, delete operations)
#[derive(Debug, Error)]
pub enum JobUseCaseError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for JobUseCaseError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // Clause builders reject caller input, not the store
            RepositoryError::Query(e) => JobUseCaseError::BadRequest(e.to_string()),
            other => JobUseCaseError::Repository(other),
        }
    }
}
