use async_trait::async_trait;

use crate::application::ports::{RepositoryError, SqlValue};
#[cfg(test)]
use mockall::automock;

/// Point lookup used to validate a reference before writing a row
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReferenceChecker: Send + Sync {
    /// Whether `table` has a row whose `column` equals `value`.
    ///
    /// A falsy value answers `false` without touching the store.
    async fn exists(
        &self,
        table: &str,
        column: &str,
        value: &SqlValue,
    ) -> Result<bool, RepositoryError>;
}
