use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::query_builder::{
    bind_values, FilterColumn, FilterColumns, QueryBuilder, SqlFragment, UpdateColumns,
};
use crate::application::dto::{JobFilterRequest, UpdateJobRequest};
use crate::application::ports::{JobRepository, QueryBuildError, RepositoryError, SqlValue};
use crate::domain::entities::{Job, NewJob};
use crate::domain::value_objects::{CompanyHandle, JobId};

pub struct PostgresJobRepository {
    pool: PgPool,
}

impl PostgresJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PostgresJobRepository {
    async fn insert(&self, job: &NewJob) -> Result<Job, RepositoryError> {
        let sql = format!(
            "INSERT INTO jobs (title, salary, equity, company_handle) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {}",
            QueryBuilder::JOB_COLUMNS
        );

        let row = sqlx::query_as::<_, JobRow>(&sql)
            .bind(job.title())
            .bind(job.salary())
            .bind(job.equity())
            .bind(job.company_handle().as_str())
            .fetch_one(&self.pool)
            .await?;

        row.into_domain()
    }

    async fn find_by_id(&self, id: JobId) -> Result<Option<Job>, RepositoryError> {
        let sql = format!(
            "SELECT {} FROM jobs WHERE id = $1",
            QueryBuilder::JOB_COLUMNS
        );

        let row = sqlx::query_as::<_, JobRow>(&sql)
            .bind(id.as_i32())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(r) => Ok(Some(r.into_domain()?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self, filter: &JobFilterRequest) -> Result<Vec<Job>, RepositoryError> {
        let where_clause = job_filter_clause(filter)?;
        let sql = list_sql(&where_clause);
        debug!(sql = %sql, params = where_clause.values.len(), "listing jobs");

        let rows = bind_values(sqlx::query_as::<_, JobRow>(&sql), where_clause.values)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(|r| r.into_domain()).collect()
    }

    async fn update(
        &self,
        id: JobId,
        changes: &UpdateJobRequest,
    ) -> Result<Option<Job>, RepositoryError> {
        let set_clause = job_update_clause(changes)?;
        let sql = update_sql(&set_clause);
        debug!(sql = %sql, job_id = %id, "updating job");

        let row = bind_values(sqlx::query_as::<_, JobRow>(&sql), set_clause.values)
            .bind(id.as_i32())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(r) => Ok(Some(r.into_domain()?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: JobId) -> Result<Option<Job>, RepositoryError> {
        let sql = format!(
            "DELETE FROM jobs WHERE id = $1 RETURNING {}",
            QueryBuilder::JOB_COLUMNS
        );

        let row = sqlx::query_as::<_, JobRow>(&sql)
            .bind(id.as_i32())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(r) => Ok(Some(r.into_domain()?)),
            None => Ok(None),
        }
    }
}

/// `SELECT` for the job list; an empty fragment lists every job
pub(crate) fn list_sql(where_clause: &SqlFragment) -> String {
    if where_clause.is_empty() {
        return format!(
            "SELECT {} FROM jobs ORDER BY title",
            QueryBuilder::JOB_COLUMNS
        );
    }
    format!(
        "SELECT {} FROM jobs {} ORDER BY title",
        QueryBuilder::JOB_COLUMNS,
        where_clause.clause
    )
}

/// `UPDATE` with the id bound right after the `SET` values
pub(crate) fn update_sql(set_clause: &SqlFragment) -> String {
    format!(
        "UPDATE jobs SET {} WHERE id = ${} RETURNING {}",
        set_clause.clause,
        set_clause.next_placeholder(),
        QueryBuilder::JOB_COLUMNS
    )
}

/// `hasEquity` rewritten as a comparison against zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EquityFilter {
    pub operator: &'static str,
}

impl EquityFilter {
    /// `true` keeps jobs with positive equity, `false` jobs with exactly zero.
    /// An absent flag means no equity condition at all.
    pub fn from_flag(has_equity: Option<bool>) -> Option<Self> {
        has_equity.map(|flag| Self {
            operator: if flag { ">" } else { "=" },
        })
    }

    pub fn value(&self) -> SqlValue {
        SqlValue::Int(0)
    }
}

/// Translate list filters into a `WHERE` fragment.
///
/// Keys are emitted in a fixed order (`minSalary`, `hasEquity`, `title`) so the
/// placeholder numbering is stable for a given filter.
pub(crate) fn job_filter_clause(
    filter: &JobFilterRequest,
) -> Result<SqlFragment, QueryBuildError> {
    let mut columns = FilterColumns::from([
        ("minSalary", FilterColumn::new("salary", ">")),
        ("title", FilterColumn::new("title", "LIKE")),
    ]);
    let mut fields: Vec<(&str, SqlValue)> = Vec::with_capacity(3);

    if let Some(min_salary) = filter.min_salary {
        fields.push(("minSalary", SqlValue::from(min_salary)));
    }
    if let Some(equity) = EquityFilter::from_flag(filter.has_equity) {
        columns.insert("hasEquity", FilterColumn::new("equity", equity.operator));
        fields.push(("hasEquity", equity.value()));
    }
    if let Some(title) = &filter.title {
        fields.push(("title", SqlValue::from(title.as_str())));
    }

    QueryBuilder::filter_where(Some(fields.as_slice()), &columns)
}

/// Translate a partial update into a `SET` fragment (`title`, `salary`,
/// `equity` order). An explicit `null` clears the column.
pub(crate) fn job_update_clause(
    changes: &UpdateJobRequest,
) -> Result<SqlFragment, QueryBuildError> {
    let mut fields: Vec<(&str, SqlValue)> = Vec::with_capacity(3);

    if let Some(title) = &changes.title {
        fields.push(("title", SqlValue::from(title.as_str())));
    }
    if let Some(salary) = changes.salary {
        fields.push(("salary", SqlValue::from(salary)));
    }
    if let Some(equity) = changes.equity {
        fields.push(("equity", SqlValue::from(equity)));
    }

    QueryBuilder::partial_update(&fields, &UpdateColumns::new())
}

// Internal row mapping struct
#[derive(sqlx::FromRow)]
struct JobRow {
    id: i32,
    title: String,
    salary: Option<i32>,
    equity: Option<String>,
    company_handle: String,
}

impl JobRow {
    fn into_domain(self) -> Result<Job, RepositoryError> {
        let company_handle = CompanyHandle::new(self.company_handle)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        Ok(Job::reconstruct(
            JobId::new(self.id),
            self.title,
            self.salary,
            self.equity,
            company_handle,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equity_filter_from_flag() {
        assert_eq!(EquityFilter::from_flag(None), None);
        assert_eq!(
            EquityFilter::from_flag(Some(true)).map(|f| f.operator),
            Some(">")
        );
        assert_eq!(
            EquityFilter::from_flag(Some(false)).map(|f| f.operator),
            Some("=")
        );
        assert_eq!(
            EquityFilter::from_flag(Some(false)).map(|f| f.value()),
            Some(SqlValue::Int(0))
        );
    }

    #[test]
    fn test_filter_clause_empty_filter_has_no_where() {
        let fragment = job_filter_clause(&JobFilterRequest::default()).unwrap();

        assert!(fragment.is_empty());
        assert!(fragment.values.is_empty());
    }

    #[test]
    fn test_filter_clause_all_filters() {
        let filter = JobFilterRequest {
            min_salary: Some(1000),
            has_equity: Some(true),
            title: Some("%t1%".to_string()),
        };

        let fragment = job_filter_clause(&filter).unwrap();

        assert_eq!(
            fragment.clause,
            "WHERE (salary > $1 AND equity > $2 AND title LIKE $3)"
        );
        assert_eq!(
            fragment.values,
            vec![
                SqlValue::Int(1000),
                SqlValue::Int(0),
                SqlValue::Text("%t1%".to_string())
            ]
        );
    }

    #[test]
    fn test_filter_clause_has_equity_false_uses_equality() {
        let filter = JobFilterRequest {
            has_equity: Some(false),
            ..Default::default()
        };

        let fragment = job_filter_clause(&filter).unwrap();

        assert_eq!(fragment.clause, "WHERE (equity = $1)");
        assert_eq!(fragment.values, vec![SqlValue::Int(0)]);
    }

    #[test]
    fn test_filter_clause_title_is_passed_verbatim() {
        let filter = JobFilterRequest {
            title: Some("t1".to_string()),
            ..Default::default()
        };

        let fragment = job_filter_clause(&filter).unwrap();

        assert_eq!(fragment.clause, "WHERE (title LIKE $1)");
        assert_eq!(fragment.values, vec![SqlValue::Text("t1".to_string())]);
    }

    #[test]
    fn test_update_clause_orders_fields_and_keeps_nulls() {
        let changes = UpdateJobRequest {
            title: Some("new".to_string()),
            salary: Some(None),
            equity: Some(Some(0.5)),
        };

        let fragment = job_update_clause(&changes).unwrap();

        assert_eq!(fragment.clause, r#""title"=$1, "salary"=$2, "equity"=$3"#);
        assert_eq!(
            fragment.values,
            vec![
                SqlValue::Text("new".to_string()),
                SqlValue::Null,
                SqlValue::Float(0.5)
            ]
        );
        assert_eq!(fragment.next_placeholder(), 4);
    }

    #[test]
    fn test_update_sql_binds_id_after_set_values() {
        let changes = UpdateJobRequest {
            title: Some("new".to_string()),
            salary: Some(Some(1000)),
            ..Default::default()
        };

        let sql = update_sql(&job_update_clause(&changes).unwrap());

        assert_eq!(
            sql,
            format!(
                r#"UPDATE jobs SET "title"=$1, "salary"=$2 WHERE id = $3 RETURNING {}"#,
                QueryBuilder::JOB_COLUMNS
            )
        );
    }

    #[test]
    fn test_list_sql_without_filters_has_no_where() {
        let sql = list_sql(&job_filter_clause(&JobFilterRequest::default()).unwrap());

        assert_eq!(
            sql,
            format!(
                "SELECT {} FROM jobs ORDER BY title",
                QueryBuilder::JOB_COLUMNS
            )
        );
        assert!(!sql.contains("WHERE"));
    }

    #[test]
    fn test_list_sql_with_equity_filter() {
        let filter = JobFilterRequest {
            has_equity: Some(true),
            ..Default::default()
        };
        let fragment = job_filter_clause(&filter).unwrap();

        let sql = list_sql(&fragment);

        assert_eq!(
            sql,
            format!(
                "SELECT {} FROM jobs WHERE (equity > $1) ORDER BY title",
                QueryBuilder::JOB_COLUMNS
            )
        );
        assert_eq!(fragment.values, vec![SqlValue::Int(0)]);
    }

    #[test]
    fn test_update_clause_rejects_empty_changes() {
        let result = job_update_clause(&UpdateJobRequest::default());

        assert_eq!(result, Err(QueryBuildError::NoData));
    }

    #[test]
    fn test_job_row_into_domain() {
        let row = JobRow {
            id: 3,
            title: "t3".to_string(),
            salary: None,
            equity: Some("0.050".to_string()),
            company_handle: "c3".to_string(),
        };

        let job = row.into_domain().unwrap();

        assert_eq!(job.id(), JobId::new(3));
        assert_eq!(job.equity(), Some("0.050"));
        assert_eq!(job.company_handle().as_str(), "c3");
    }

    #[test]
    fn test_job_row_with_blank_handle_is_serialization_error() {
        let row = JobRow {
            id: 3,
            title: "t3".to_string(),
            salary: None,
            equity: None,
            company_handle: " ".to_string(),
        };

        assert!(matches!(
            row.into_domain(),
            Err(RepositoryError::SerializationError(_))
        ));
    }
}
