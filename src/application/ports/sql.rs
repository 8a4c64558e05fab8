//! Values and build errors shared by the persistence ports and the SQL
//! builders behind them.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryBuildError {
    #[error("No data")]
    NoData,

    #[error("Bad filter key: {0}")]
    BadFilterKey(String),
}

/// Scalar bound to a positional parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// Bound as an INT8 NULL, so only valid for numeric or text columns
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SqlValue {
    /// Null, `false`, zero, NaN and the empty string are falsy
    pub fn is_falsy(&self) -> bool {
        match self {
            SqlValue::Null => true,
            SqlValue::Bool(b) => !b,
            SqlValue::Int(i) => *i == 0,
            SqlValue::Float(f) => *f == 0.0 || f.is_nan(),
            SqlValue::Text(s) => s.is_empty(),
        }
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(i64::from(value))
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SqlValue::Null)
    }
}
