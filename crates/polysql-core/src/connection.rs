//! Connection trait consumed by the dispatch layer

use crate::{PolysqlError, QueryResult, Result, Row, StatementResult, Value};
use async_trait::async_trait;

/// A live session with a database engine.
///
/// Connections are owned by the CLI layer. Nothing in this crate opens,
/// closes or pools them; capabilities only issue statements on the handle
/// they are given, so blocking and timeouts are the owner's concern.
#[async_trait]
pub trait Connection: Send + Sync {
    /// Name of the registered driver this connection belongs to
    /// (e.g. "postgres", "ora", "sqlite3")
    fn driver_name(&self) -> &str;

    /// Execute a statement that does not return rows
    async fn execute(&self, sql: &str, params: &[Value]) -> Result<StatementResult>;

    /// Execute a query that returns rows
    async fn query(&self, sql: &str, params: &[Value]) -> Result<QueryResult>;

    /// Run a query expected to return a single row and return that row.
    ///
    /// Extra rows are ignored; an empty result is a `NotFound` error.
    async fn query_row(&self, sql: &str) -> Result<Row> {
        let result = self.query(sql, &[]).await?;
        result
            .rows
            .into_iter()
            .next()
            .ok_or_else(|| PolysqlError::NotFound("no rows in result set".to_string()))
    }
}
