mod job_repository;
mod reference_checker;
mod sql;

pub use job_repository::{JobRepository, RepositoryError};
pub use reference_checker::ReferenceChecker;
pub use sql::{QueryBuildError, SqlValue};

#[cfg(test)]
pub use job_repository::MockJobRepository;
#[cfg(test)]
pub use reference_checker::MockReferenceChecker;
