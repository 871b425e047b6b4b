//! Core types for polysql

use crate::{PolysqlError, Result};

/// A database value as handed back by a connection
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// NULL value
    Null,
    /// 64-bit signed integer
    Int64(i64),
    /// UTF-8 string
    String(String),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Int64(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

/// A row from a query result
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Column values, in result column order
    pub values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Scan the value at `index` into a string.
    ///
    /// NULL cannot be scanned into a string and is reported as a query error,
    /// as is an index past the end of the row.
    pub fn scan_string(&self, index: usize) -> Result<String> {
        match self.values.get(index) {
            Some(Value::Null) => Err(PolysqlError::Query(format!(
                "converting NULL to string is unsupported (column {index})"
            ))),
            Some(value) => Ok(value.to_string()),
            None => Err(PolysqlError::Query(format!(
                "column index {index} out of range for row with {} columns",
                self.values.len()
            ))),
        }
    }
}

/// Query result
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryResult {
    /// Column names as reported by the engine
    pub columns: Vec<String>,
    /// Result rows
    pub rows: Vec<Row>,
}

impl QueryResult {
    /// Create a new empty query result
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a result from column names and raw rows.
    pub fn from_rows<S: Into<String>>(columns: Vec<S>, rows: Vec<Vec<Value>>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: rows.into_iter().map(Row::new).collect(),
        }
    }

    /// Column names in result order, exactly as the engine reported them
    pub fn column_names(&self) -> Vec<String> {
        self.columns.clone()
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Result of executing a statement that does not return rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatementResult {
    /// Rows affected
    pub affected_rows: u64,
}
