use std::sync::Arc;

use crate::application::dto::JobDto;
use crate::application::errors::JobUseCaseError;
use crate::application::ports::JobRepository;
use crate::domain::value_objects::JobId;

/// Use case: Fetch a single job
pub struct GetJobUseCase {
    job_repo: Arc<dyn JobRepository>,
}

impl GetJobUseCase {
    pub fn new(job_repo: Arc<dyn JobRepository>) -> Self {
        Self { job_repo }
    }

    pub async fn execute(&self, id: JobId) -> Result<JobDto, JobUseCaseError> {
        self.job_repo
            .find_by_id(id)
            .await?
            .map(JobDto::from)
            .ok_or_else(|| JobUseCaseError::NotFound(format!("No job: {}", id)))
    }
}
