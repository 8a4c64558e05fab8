pub mod health;
pub mod jobs;

pub use health::{health_handler, readiness_handler};
pub use jobs::{
    create_job_handler, delete_job_handler, get_job_handler, list_jobs_handler,
    update_job_handler,
};
