use std::sync::Arc;

use tracing::debug;

use crate::application::dto::{JobDto, JobFilterRequest};
use crate::application::errors::JobUseCaseError;
use crate::application::ports::JobRepository;

/// Use case: List jobs, optionally filtered
pub struct ListJobsUseCase {
    job_repo: Arc<dyn JobRepository>,
}

impl ListJobsUseCase {
    pub fn new(job_repo: Arc<dyn JobRepository>) -> Self {
        Self { job_repo }
    }

    pub async fn execute(
        &self,
        filter: &JobFilterRequest,
    ) -> Result<Vec<JobDto>, JobUseCaseError> {
        let jobs = self.job_repo.find_all(filter).await?;
        debug!(count = jobs.len(), filtered = !filter.is_empty(), "jobs listed");

        Ok(jobs.into_iter().map(JobDto::from).collect())
    }
}
