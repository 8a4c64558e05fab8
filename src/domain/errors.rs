use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Invalid job ID: {0}")]
    InvalidJobId(String),

    #[error("Invalid job title: {0}")]
    InvalidTitle(String),

    #[error("Invalid salary: {0}")]
    InvalidSalary(i32),

    #[error("Invalid equity: {0} (must be between 0 and 1)")]
    InvalidEquity(f64),

    #[error("Invalid company handle: {0}")]
    InvalidCompanyHandle(String),
}
