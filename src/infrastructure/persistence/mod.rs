mod postgres_job_repository;
mod postgres_reference_checker;
mod query_builder;

pub use postgres_job_repository::PostgresJobRepository;
pub use postgres_reference_checker::PostgresReferenceChecker;
pub use crate::application::ports::{QueryBuildError, SqlValue};
pub use query_builder::{FilterColumn, FilterColumns, QueryBuilder, SqlFragment, UpdateColumns};
