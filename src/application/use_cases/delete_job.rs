use std::sync::Arc;

use tracing::info;

use crate::application::dto::JobDto;
use crate::application::errors::JobUseCaseError;
use crate::application::ports::JobRepository;
use crate::domain::value_objects::JobId;

/// Use case: Delete a job. A missing row yields `Ok(None)`.
pub struct DeleteJobUseCase {
    job_repo: Arc<dyn JobRepository>,
}

impl DeleteJobUseCase {
    pub fn new(job_repo: Arc<dyn JobRepository>) -> Self {
        Self { job_repo }
    }

    pub async fn execute(&self, id: JobId) -> Result<Option<JobDto>, JobUseCaseError> {
        let deleted = self.job_repo.delete(id).await?;
        if deleted.is_some() {
            info!(job_id = %id, "job_deleted");
        }

        Ok(deleted.map(JobDto::from))
    }
}
