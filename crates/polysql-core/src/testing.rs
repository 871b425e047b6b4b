//! In-memory connection for exercising drivers without an engine

use crate::{
    Connection, PolysqlError, QueryResult, Result, ServerError, StatementResult, Value,
};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Canned outcome for a statement
#[derive(Debug, Clone)]
pub enum StubResponse {
    Rows(QueryResult),
    Affected(u64),
    /// Engine error, wrapped with `PolysqlError::engine`
    Engine(ServerError),
    /// Plain query failure
    Failure(String),
}

/// Connection that answers statements from a table of canned responses and
/// records every statement it sees, in order.
///
/// Statements without a canned response fail with a query error, except
/// `execute` calls, which succeed with zero affected rows.
pub struct StubConnection {
    driver_name: String,
    responses: HashMap<String, StubResponse>,
    executed: Mutex<Vec<String>>,
}

impl StubConnection {
    pub fn new(driver_name: impl Into<String>) -> Self {
        Self {
            driver_name: driver_name.into(),
            responses: HashMap::new(),
            executed: Mutex::new(Vec::new()),
        }
    }

    /// Answer `sql` with `response`.
    pub fn respond(mut self, sql: impl Into<String>, response: StubResponse) -> Self {
        self.responses.insert(sql.into(), response);
        self
    }

    /// Answer `sql` with a single row holding `values`.
    pub fn respond_row(self, sql: impl Into<String>, values: Vec<Value>) -> Self {
        let columns: Vec<String> = (0..values.len()).map(|i| format!("col{i}")).collect();
        self.respond(sql, StubResponse::Rows(QueryResult::from_rows(columns, vec![values])))
    }

    /// Answer `sql` with a single string value.
    pub fn respond_scalar(self, sql: impl Into<String>, value: &str) -> Self {
        self.respond_row(sql, vec![Value::from(value)])
    }

    /// Statements seen so far, in order
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().clone()
    }

    fn record(&self, sql: &str) -> Option<StubResponse> {
        self.executed.lock().push(sql.to_string());
        self.responses.get(sql).cloned()
    }
}

#[async_trait]
impl Connection for StubConnection {
    fn driver_name(&self) -> &str {
        &self.driver_name
    }

    async fn execute(&self, sql: &str, _params: &[Value]) -> Result<StatementResult> {
        match self.record(sql) {
            None => Ok(StatementResult::default()),
            Some(StubResponse::Affected(affected_rows)) => Ok(StatementResult { affected_rows }),
            Some(StubResponse::Rows(result)) => Ok(StatementResult {
                affected_rows: result.row_count() as u64,
            }),
            Some(StubResponse::Engine(err)) => Err(PolysqlError::engine(err)),
            Some(StubResponse::Failure(message)) => Err(PolysqlError::Query(message)),
        }
    }

    async fn query(&self, sql: &str, _params: &[Value]) -> Result<QueryResult> {
        match self.record(sql) {
            None => Err(PolysqlError::Query(format!("unexpected statement: {sql}"))),
            Some(StubResponse::Rows(result)) => Ok(result),
            Some(StubResponse::Affected(_)) => Ok(QueryResult::empty()),
            Some(StubResponse::Engine(err)) => Err(PolysqlError::engine(err)),
            Some(StubResponse::Failure(message)) => Err(PolysqlError::Query(message)),
        }
    }
}
