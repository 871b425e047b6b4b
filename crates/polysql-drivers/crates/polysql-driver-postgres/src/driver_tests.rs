//! Unit tests for the PostgreSQL driver

use super::*;
use polysql_core::testing::StubConnection;
use polysql_core::{DriverRegistry, PolysqlError, QueryResult, ServerError};

fn registry() -> DriverRegistry {
    let registry = DriverRegistry::new();
    register(&registry);
    registry
}

#[test]
fn test_decode_sql_state() {
    let err = PolysqlError::engine(
        ServerError::new("relation \"users\" does not exist").with_sql_state("42P01"),
    );
    assert_eq!(
        decode_error(&err),
        ("42P01".to_string(), "relation \"users\" does not exist".to_string())
    );
}

#[test]
fn test_decode_without_sql_state() {
    let err = PolysqlError::Connection("connection refused".into());
    assert_eq!(
        decode_error(&err),
        (String::new(), "Connection error: connection refused".to_string())
    );
}

#[test]
fn test_password_error() {
    let bad_password = PolysqlError::engine(
        ServerError::new("password authentication failed for user \"bob\"").with_sql_state("28P01"),
    );
    assert!(is_password_error(&bad_password));

    let other = PolysqlError::engine(ServerError::new("no such role").with_sql_state("28000"));
    assert!(!is_password_error(&other));
    assert!(!is_password_error(&PolysqlError::Query("boom".into())));
}

#[test]
fn test_columns_and_process_use_generic_defaults() {
    let registry = registry();
    let driver = driver();
    assert!(driver.columns.is_none());
    assert!(driver.process.is_none());

    let result = QueryResult::from_rows(vec!["ID", "userName"], vec![]);
    assert_eq!(registry.columns(NAME, &result).unwrap(), vec!["ID", "userName"]);

    let processed = registry.process(NAME, "SELECT", "SELECT 1;").unwrap();
    assert_eq!(processed.sql, "SELECT 1;");
    assert!(processed.is_query);
}

#[tokio::test]
async fn test_version() {
    let registry = registry();
    let conn = StubConnection::new(NAME).respond_scalar("SHOW server_version", "16.2");
    assert_eq!(registry.version(&conn).await.unwrap(), "PostgreSQL 16.2");
}

#[tokio::test]
async fn test_user_falls_back_to_current_user() {
    let registry = registry();
    let conn = StubConnection::new(NAME).respond_scalar("SELECT current_user", "postgres");
    assert_eq!(registry.user(&conn).await.unwrap(), "postgres");
}

#[tokio::test]
async fn test_change_password() {
    let registry = registry();
    let conn = StubConnection::new(NAME);
    registry
        .change_password(&conn, "bob", "pa'ss", None)
        .await
        .unwrap();
    assert_eq!(conn.executed(), vec!["ALTER USER bob PASSWORD 'pa''ss'"]);
}
