use std::sync::Arc;

use tracing::info;

use crate::application::dto::{JobDto, UpdateJobRequest};
use crate::application::errors::JobUseCaseError;
use crate::application::ports::JobRepository;
use crate::domain::entities::{validate_equity, validate_salary, validate_title};
use crate::domain::value_objects::JobId;

/// Use case: Partially update a job.
///
/// Only `title`, `salary` and `equity` are mutable. A missing row yields
/// `Ok(None)`.
pub struct UpdateJobUseCase {
    job_repo: Arc<dyn JobRepository>,
}

impl UpdateJobUseCase {
    pub fn new(job_repo: Arc<dyn JobRepository>) -> Self {
        Self { job_repo }
    }

    pub async fn execute(
        &self,
        id: JobId,
        changes: UpdateJobRequest,
    ) -> Result<Option<JobDto>, JobUseCaseError> {
        if let Some(title) = &changes.title {
            validate_title(title)?;
        }
        if let Some(Some(salary)) = changes.salary {
            validate_salary(salary)?;
        }
        if let Some(Some(equity)) = changes.equity {
            validate_equity(equity)?;
        }

        let updated = self.job_repo.update(id, &changes).await?;
        if updated.is_some() {
            info!(job_id = %id, "job_updated");
        }

        Ok(updated.map(JobDto::from))
    }
}
