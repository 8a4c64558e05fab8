use async_trait::async_trait;
use thiserror::Error;

use crate::application::dto::{JobFilterRequest, UpdateJobRequest};
use crate::domain::entities::{Job, NewJob};
use crate::domain::value_objects::JobId;
use super::sql::QueryBuildError;
#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid query: {0}")]
    Query(#[from] QueryBuildError),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Port for job persistence operations.
///
/// Every method issues exactly one statement. `update` and `delete` report a
/// missing row as `Ok(None)`; turning that into an error is the caller's call.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Insert a job and return it with its assigned id
    async fn insert(&self, job: &NewJob) -> Result<Job, RepositoryError>;

    /// Find job by ID
    async fn find_by_id(&self, id: JobId) -> Result<Option<Job>, RepositoryError>;

    /// All jobs matching the filter, ordered by title
    async fn find_all(&self, filter: &JobFilterRequest) -> Result<Vec<Job>, RepositoryError>;

    /// Apply a partial update and return the updated row
    async fn update(
        &self,
        id: JobId,
        changes: &UpdateJobRequest,
    ) -> Result<Option<Job>, RepositoryError>;

    /// Delete a job and return the deleted row
    async fn delete(&self, id: JobId) -> Result<Option<Job>, RepositoryError>;
}
