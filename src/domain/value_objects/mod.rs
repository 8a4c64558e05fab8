mod company_handle;
mod job_id;

pub use company_handle::{CompanyHandle, MAX_HANDLE_LENGTH};
pub use job_id::JobId;
