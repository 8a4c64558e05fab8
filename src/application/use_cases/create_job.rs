use std::sync::Arc;

use tracing::info;

use crate::application::dto::{CreateJobRequest, JobDto};
use crate::application::errors::JobUseCaseError;
use crate::application::ports::{JobRepository, ReferenceChecker, SqlValue};
use crate::domain::entities::NewJob;
use crate::domain::value_objects::CompanyHandle;

const COMPANIES_TABLE: &str = "companies";
const COMPANY_HANDLE_COLUMN: &str = "handle";

/// Use case: Create a job for an existing company
pub struct CreateJobUseCase {
    job_repo: Arc<dyn JobRepository>,
    reference_checker: Arc<dyn ReferenceChecker>,
}

impl CreateJobUseCase {
    pub fn new(
        job_repo: Arc<dyn JobRepository>,
        reference_checker: Arc<dyn ReferenceChecker>,
    ) -> Self {
        Self {
            job_repo,
            reference_checker,
        }
    }

    /// Execute create workflow
    pub async fn execute(&self, request: CreateJobRequest) -> Result<JobDto, JobUseCaseError> {
        // 1. The referenced company must exist
        let handle_value = SqlValue::from(request.company_handle.as_str());
        let company_exists = self
            .reference_checker
            .exists(COMPANIES_TABLE, COMPANY_HANDLE_COLUMN, &handle_value)
            .await?;
        if !company_exists {
            return Err(JobUseCaseError::BadRequest(format!(
                "No company with handle {}",
                request.company_handle
            )));
        }

        // 2. Domain validation
        let company_handle = CompanyHandle::new(request.company_handle)?;
        let new_job = NewJob::new(
            request.title,
            request.salary,
            request.equity,
            company_handle,
        )?;

        // 3. Insert
        let job = self.job_repo.insert(&new_job).await?;
        info!(job_id = %job.id(), company = %job.company_handle(), "job_created");

        Ok(job.into())
    }
}
