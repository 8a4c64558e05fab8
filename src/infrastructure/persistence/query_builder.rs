//! SQL fragment builders for partial updates and filters.
//!
//! Both builders turn an ordered list of `(logical field, value)` pairs into a
//! clause with positional placeholders (`$1`, `$2`, ...) plus the values in
//! placeholder order. Column mappers translate logical names into columns:
//!
//! - update mappers are optional per key: an unmapped key is used verbatim
//!   (quoted) as the column name;
//! - filter mappers are mandatory per key: an unmapped key is rejected.
//!
//! The asymmetry is intentional. Updates come from a closed request type whose
//! field names already match the table, while filters carry an operator that
//! only the mapper can supply.

use std::collections::HashMap;

use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

use crate::application::ports::{QueryBuildError, SqlValue};

/// A clause and the values its placeholders refer to, in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlFragment {
    pub clause: String,
    pub values: Vec<SqlValue>,
}

impl SqlFragment {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.clause.is_empty()
    }

    /// Placeholder number for a parameter appended after this fragment
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }
}

/// Filter mapper entry: SQL expression and comparison operator for one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterColumn<'a> {
    pub expression: &'a str,
    pub operator: &'a str,
}

impl<'a> FilterColumn<'a> {
    pub const fn new(expression: &'a str, operator: &'a str) -> Self {
        Self {
            expression,
            operator,
        }
    }
}

pub type UpdateColumns<'a> = HashMap<&'a str, &'a str>;
pub type FilterColumns<'a> = HashMap<&'a str, FilterColumn<'a>>;

/// Common SQL query fragments to reduce duplication and ensure consistency
pub struct QueryBuilder;

impl QueryBuilder {
    /// Columns returned for every job query
    pub const JOB_COLUMNS: &'static str =
        "id, title, salary, equity::text AS equity, company_handle";

    /// Build a `SET` body such as `"title"=$1, "salary"=$2`.
    ///
    /// Fails with [`QueryBuildError::NoData`] when `fields` is empty.
    pub fn partial_update(
        fields: &[(&str, SqlValue)],
        columns: &UpdateColumns<'_>,
    ) -> Result<SqlFragment, QueryBuildError> {
        if fields.is_empty() {
            return Err(QueryBuildError::NoData);
        }

        let clause = fields
            .iter()
            .enumerate()
            .map(|(idx, (key, _))| {
                let column = columns.get(key).copied().unwrap_or(*key);
                format!("{}=${}", Self::quote_ident(column), idx + 1)
            })
            .collect::<Vec<_>>()
            .join(", ");

        Ok(SqlFragment {
            clause,
            values: fields.iter().map(|(_, value)| value.clone()).collect(),
        })
    }

    /// Build a `WHERE (...)` clause joining one condition per key with `AND`.
    ///
    /// An absent or empty filter yields an empty fragment; callers omit the
    /// `WHERE` keyword entirely in that case.
    pub fn filter_where(
        filters: Option<&[(&str, SqlValue)]>,
        columns: &FilterColumns<'_>,
    ) -> Result<SqlFragment, QueryBuildError> {
        let filters = match filters {
            Some(filters) if !filters.is_empty() => filters,
            _ => return Ok(SqlFragment::empty()),
        };

        let mut conditions = Vec::with_capacity(filters.len());
        for (idx, (key, _)) in filters.iter().enumerate() {
            let column = columns
                .get(key)
                .ok_or_else(|| QueryBuildError::BadFilterKey(key.to_string()))?;
            conditions.push(format!(
                "{} {} ${}",
                column.expression,
                column.operator,
                idx + 1
            ));
        }

        Ok(SqlFragment {
            clause: format!("WHERE ({})", conditions.join(" AND ")),
            values: filters.iter().map(|(_, value)| value.clone()).collect(),
        })
    }

    /// Quote an identifier, doubling embedded quotes
    pub fn quote_ident(ident: &str) -> String {
        format!("\"{}\"", ident.replace('"', "\"\""))
    }
}

/// Bind builder values in placeholder order
pub(crate) fn bind_values<'q, O>(
    mut query: QueryAs<'q, Postgres, O, PgArguments>,
    values: Vec<SqlValue>,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for value in values {
        query = match value {
            // Sent as an INT8 NULL. Numeric and text columns accept it through
            // assignment casts; boolean columns do not.
            SqlValue::Null => query.bind(None::<i64>),
            SqlValue::Bool(b) => query.bind(b),
            SqlValue::Int(i) => query.bind(i),
            SqlValue::Float(f) => query.bind(f),
            SqlValue::Text(s) => query.bind(s),
        };
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_uses_logical_names_without_mapper() {
        let fields = [
            ("title", SqlValue::from("new title")),
            ("salary", SqlValue::from(1000)),
        ];

        let fragment = QueryBuilder::partial_update(&fields, &UpdateColumns::new()).unwrap();

        assert_eq!(fragment.clause, r#""title"=$1, "salary"=$2"#);
        assert_eq!(
            fragment.values,
            vec![SqlValue::Text("new title".to_string()), SqlValue::Int(1000)]
        );
    }

    #[test]
    fn test_partial_update_applies_column_mapper() {
        let fields = [
            ("firstName", SqlValue::from("Aliya")),
            ("age", SqlValue::from(32)),
        ];
        let columns = UpdateColumns::from([("firstName", "first_name")]);

        let fragment = QueryBuilder::partial_update(&fields, &columns).unwrap();

        assert_eq!(fragment.clause, r#""first_name"=$1, "age"=$2"#);
        assert_eq!(fragment.values.len(), 2);
    }

    #[test]
    fn test_partial_update_empty_is_no_data() {
        let result = QueryBuilder::partial_update(&[], &UpdateColumns::new());
        assert_eq!(result, Err(QueryBuildError::NoData));
    }

    #[test]
    fn test_partial_update_keeps_null_values() {
        let fields = [("salary", SqlValue::Null)];
        let fragment = QueryBuilder::partial_update(&fields, &UpdateColumns::new()).unwrap();

        assert_eq!(fragment.clause, r#""salary"=$1"#);
        assert_eq!(fragment.values, vec![SqlValue::Null]);
    }

    #[test]
    fn test_filter_where_single_key() {
        let filters = [("minSalary", SqlValue::from(1001))];
        let columns = FilterColumns::from([("minSalary", FilterColumn::new("salary", ">"))]);

        let fragment = QueryBuilder::filter_where(Some(filters.as_slice()), &columns).unwrap();

        assert_eq!(fragment.clause, "WHERE (salary > $1)");
        assert_eq!(fragment.values, vec![SqlValue::Int(1001)]);
    }

    #[test]
    fn test_filter_where_joins_conditions_without_trailing_and() {
        let filters = [
            ("minSalary", SqlValue::from(500)),
            ("title", SqlValue::from("title one")),
        ];
        let columns = FilterColumns::from([
            ("minSalary", FilterColumn::new("salary", ">")),
            ("title", FilterColumn::new("title", "LIKE")),
        ]);

        let fragment = QueryBuilder::filter_where(Some(filters.as_slice()), &columns).unwrap();

        assert_eq!(fragment.clause, "WHERE (salary > $1 AND title LIKE $2)");
        assert!(!fragment.clause.contains("AND )"));
    }

    #[test]
    fn test_filter_where_absent_or_empty_is_empty_fragment() {
        let columns = FilterColumns::new();

        let absent = QueryBuilder::filter_where(None, &columns).unwrap();
        let empty = QueryBuilder::filter_where(Some(&[][..]), &columns).unwrap();

        assert!(absent.is_empty());
        assert!(absent.values.is_empty());
        assert_eq!(empty, SqlFragment::empty());
    }

    #[test]
    fn test_filter_where_unmapped_key_is_rejected() {
        let filters = [("color", SqlValue::from("blue"))];
        let columns = FilterColumns::from([("title", FilterColumn::new("title", "LIKE"))]);

        let result = QueryBuilder::filter_where(Some(filters.as_slice()), &columns);

        assert_eq!(result, Err(QueryBuildError::BadFilterKey("color".to_string())));
    }

    #[test]
    fn test_next_placeholder_follows_values() {
        let fields = [("title", SqlValue::from("x"))];
        let fragment = QueryBuilder::partial_update(&fields, &UpdateColumns::new()).unwrap();

        assert_eq!(fragment.next_placeholder(), 2);
        assert_eq!(SqlFragment::empty().next_placeholder(), 1);
    }

    #[test]
    fn test_quote_ident_escapes_quotes() {
        assert_eq!(QueryBuilder::quote_ident("handle"), "\"handle\"");
        assert_eq!(QueryBuilder::quote_ident("we\"ird"), "\"we\"\"ird\"");
    }
}
