mod create_job;
mod delete_job;
mod get_job;
mod list_jobs;
mod update_job;

pub use create_job::CreateJobUseCase;
pub use delete_job::DeleteJobUseCase;
pub use get_job::GetJobUseCase;
pub use list_jobs::ListJobsUseCase;
pub use update_job::UpdateJobUseCase;
