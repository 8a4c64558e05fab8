use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::query_builder::{bind_values, QueryBuilder};
use crate::application::ports::{ReferenceChecker, RepositoryError, SqlValue};

/// Existence lookups against arbitrary `table.column` pairs.
///
/// Table and column names are quoted identifiers supplied by code, never by
/// request input; only the value is bound.
pub struct PostgresReferenceChecker {
    pool: PgPool,
}

impl PostgresReferenceChecker {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReferenceChecker for PostgresReferenceChecker {
    async fn exists(
        &self,
        table: &str,
        column: &str,
        value: &SqlValue,
    ) -> Result<bool, RepositoryError> {
        if value.is_falsy() {
            return Ok(false);
        }

        let sql = format!(
            "SELECT 1 FROM {} WHERE {} = $1 LIMIT 1",
            QueryBuilder::quote_ident(table),
            QueryBuilder::quote_ident(column)
        );
        debug!(sql = %sql, "checking reference");

        let row = bind_values(sqlx::query_as::<_, (i32,)>(&sql), vec![value.clone()])
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }
}
