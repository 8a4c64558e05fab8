//! Property-based tests using proptest
//!
//! Invariants of the SQL fragment builders and the value objects that must
//! hold for any input.

use proptest::prelude::*;

use jobly::domain::value_objects::{CompanyHandle, JobId, MAX_HANDLE_LENGTH};
use jobly::infrastructure::persistence::{
    FilterColumn, FilterColumns, QueryBuildError, QueryBuilder, SqlValue, UpdateColumns,
};

/// Strategy for logical field names
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9_]{0,15}"
}

fn value_strategy() -> impl Strategy<Value = SqlValue> {
    prop_oneof![
        Just(SqlValue::Null),
        any::<bool>().prop_map(SqlValue::Bool),
        any::<i64>().prop_map(SqlValue::Int),
        (-1.0e6f64..1.0e6).prop_map(SqlValue::Float),
        "[ -~]{0,20}".prop_map(SqlValue::Text),
    ]
}

/// Distinct keys paired with values
fn fields_strategy(max: usize) -> impl Strategy<Value = Vec<(String, SqlValue)>> {
    prop::collection::btree_map(key_strategy(), value_strategy(), 1..max)
        .prop_map(|m| m.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_partial_update_values_follow_key_order(fields in fields_strategy(12)) {
        let pairs: Vec<(&str, SqlValue)> =
            fields.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();

        let fragment = QueryBuilder::partial_update(&pairs, &UpdateColumns::new()).unwrap();

        prop_assert_eq!(fragment.values.len(), fields.len());
        let expected: Vec<String> = fields
            .iter()
            .enumerate()
            .map(|(idx, (key, _))| format!("\"{}\"=${}", key, idx + 1))
            .collect();
        prop_assert_eq!(fragment.clause, expected.join(", "));
        let values: Vec<SqlValue> = fields.into_iter().map(|(_, v)| v).collect();
        prop_assert_eq!(fragment.values, values);
    }

    #[test]
    fn prop_filter_where_has_one_condition_per_key(fields in fields_strategy(12)) {
        let pairs: Vec<(&str, SqlValue)> =
            fields.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
        let columns: FilterColumns = fields
            .iter()
            .map(|(k, _)| (k.as_str(), FilterColumn::new(k.as_str(), "=")))
            .collect();

        let fragment = QueryBuilder::filter_where(Some(&pairs[..]), &columns).unwrap();

        prop_assert!(fragment.clause.starts_with("WHERE ("));
        prop_assert!(fragment.clause.ends_with(')'));
        prop_assert_eq!(fragment.clause.matches(" AND ").count(), fields.len() - 1);
        prop_assert_eq!(fragment.values.len(), fields.len());
        prop_assert_eq!(fragment.next_placeholder(), fields.len() + 1);
        for idx in 1..=fields.len() {
            let placeholder = format!("${}", idx);
            prop_assert!(fragment.clause.contains(&placeholder));
        }
    }

    #[test]
    fn prop_filter_where_rejects_unmapped_key(fields in fields_strategy(6)) {
        let pairs: Vec<(&str, SqlValue)> =
            fields.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
        // Map every key but the last
        let columns: FilterColumns = fields
            .iter()
            .take(fields.len() - 1)
            .map(|(k, _)| (k.as_str(), FilterColumn::new(k.as_str(), ">")))
            .collect();

        let result = QueryBuilder::filter_where(Some(&pairs[..]), &columns);

        let last = fields.last().map(|(k, _)| k.clone()).unwrap();
        prop_assert_eq!(result, Err(QueryBuildError::BadFilterKey(last)));
    }

    #[test]
    fn prop_quote_ident_round_trips(ident in "[ -~]{1,30}") {
        let quoted = QueryBuilder::quote_ident(&ident);

        prop_assert!(quoted.starts_with('"') && quoted.ends_with('"'));
        let inner = &quoted[1..quoted.len() - 1];
        prop_assert_eq!(inner.replace("\"\"", "\""), ident);
    }

    #[test]
    fn prop_job_id_parses_any_i32(id in any::<i32>()) {
        let parsed: JobId = id.to_string().parse().unwrap();
        prop_assert_eq!(parsed.as_i32(), id);
    }

    #[test]
    fn prop_job_id_rejects_non_numeric(s in "[a-zA-Z_]{1,10}") {
        prop_assert!(s.parse::<JobId>().is_err());
    }

    #[test]
    fn prop_company_handle_length_limit(handle in "[a-z0-9-]{1,40}") {
        let result = CompanyHandle::new(handle.clone());
        prop_assert_eq!(result.is_ok(), handle.len() <= MAX_HANDLE_LENGTH);
    }
}

#[test]
fn test_empty_inputs() {
    assert_eq!(
        QueryBuilder::partial_update(&[], &UpdateColumns::new()),
        Err(QueryBuildError::NoData)
    );

    let fragment = QueryBuilder::filter_where(None, &FilterColumns::new()).unwrap();
    assert!(fragment.is_empty());
    assert!(fragment.values.is_empty());
}
