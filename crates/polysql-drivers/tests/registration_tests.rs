#![cfg(all(feature = "oracle", feature = "postgres", feature = "mysql", feature = "sqlite", feature = "mssql"))]

//! Integration tests for startup registration and end-to-end dispatch
use polysql_core::statement::{DEFAULT_PREFIX_WORDS, find_prefix};
use polysql_core::testing::{StubConnection, StubResponse};
use polysql_core::{Driver, DriverRegistry, PolysqlError, QueryResult, ServerError};
use polysql_drivers::{DriversConfig, builtin_drivers, register_all, registry_with_defaults};
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_defaults_register_every_builtin() {
    init_tracing();
    let registry = registry_with_defaults();
    assert_eq!(
        registry.list(),
        vec!["mssql", "mysql", "ora", "postgres", "sqlite3"]
    );
    assert_eq!(registry.len(), builtin_drivers().len());
}

#[test]
fn test_disabled_drivers_are_skipped() {
    init_tracing();
    let registry = DriverRegistry::new();
    let config = DriversConfig::from_toml_str(r#"disabled = ["mssql", "not-a-driver"]"#).unwrap();

    let count = register_all(&registry, &config);
    assert_eq!(count, 4);
    assert!(!registry.has("mssql"));
    assert!(registry.has("ora"));
}

#[test]
fn test_host_override_replaces_builtin() {
    let registry = registry_with_defaults();
    registry.register("ora", Driver::new("Custom Oracle"));

    let driver = registry.lookup("ora").unwrap();
    assert_eq!(driver.display_name, Some("Custom Oracle"));
    assert!(driver.columns.is_none());

    let result = QueryResult::from_rows(vec!["USER_ID"], vec![]);
    assert_eq!(registry.columns("ora", &result).unwrap(), vec!["USER_ID"]);
}

#[test]
fn test_column_normalization_is_per_engine() {
    let registry = registry_with_defaults();
    let result = QueryResult::from_rows(vec!["USER_ID", "UserId", "1X"], vec![]);

    assert_eq!(
        registry.columns("ora", &result).unwrap(),
        vec!["user_id", "UserId", "1X"]
    );
    assert_eq!(
        registry.columns("postgres", &result).unwrap(),
        vec!["USER_ID", "UserId", "1X"]
    );
}

#[test]
fn test_prefix_and_process_round_trip() {
    let registry = registry_with_defaults();
    let sql = "-- fetch one\nSELECT 1 ;  ";
    let prefix = find_prefix(sql, DEFAULT_PREFIX_WORDS);
    assert_eq!(prefix, "SELECT 1");

    let oracle = registry.process("ora", &prefix, sql).unwrap();
    assert_eq!(oracle.sql, "-- fetch one\nSELECT 1");
    assert!(oracle.is_query);

    let postgres = registry.process("postgres", &prefix, sql).unwrap();
    assert_eq!(postgres.sql, sql);
    assert!(postgres.is_query);
}

#[test]
fn test_password_error_predicates_differ_per_engine() {
    let registry = registry_with_defaults();
    let oracle_denied = PolysqlError::engine(ServerError::new("ORA-01017: invalid username/password").with_code(1017));
    let mysql_denied = PolysqlError::engine(ServerError::new("Access denied").with_code(1045));

    assert!(registry.is_password_error("ora", &oracle_denied));
    assert!(!registry.is_password_error("ora", &mysql_denied));
    assert!(registry.is_password_error("mysql", &mysql_denied));
    assert!(!registry.is_password_error("sqlite3", &mysql_denied));
    assert!(!registry.is_password_error("unknown", &oracle_denied));
}

#[test]
fn test_wrap_error_per_engine() {
    let registry = registry_with_defaults();
    let err = PolysqlError::Query("ORA-00942: table or view does not exist".into());

    assert_eq!(
        registry.wrap_error("ora", &err).to_string(),
        "ora: ORA-00942: table or view does not exist"
    );
    assert_eq!(
        registry.wrap_error("unknown", &err).to_string(),
        "unknown: Query error: ORA-00942: table or view does not exist"
    );
}

#[tokio::test]
async fn test_version_dispatch_by_connection_driver() {
    let registry = registry_with_defaults();

    let oracle = StubConnection::new("ora").respond_scalar("SELECT version FROM V$INSTANCE", "21.3.0.0.0");
    assert_eq!(registry.version(&oracle).await.unwrap(), "Oracle 21.3.0.0.0");

    let unknown = StubConnection::new("cockroach").respond_scalar("SELECT version()", "CockroachDB v23.1");
    assert_eq!(registry.version(&unknown).await.unwrap(), "CockroachDB v23.1");
}

#[tokio::test]
async fn test_retry_on_password_error() {
    let registry = registry_with_defaults();
    let conn = StubConnection::new("postgres").respond(
        "SHOW server_version",
        StubResponse::Engine(
            ServerError::new("password authentication failed for user \"app\"")
                .with_sql_state("28P01"),
        ),
    );

    let err = registry.version(&conn).await.unwrap_err();
    assert!(registry.is_password_error("postgres", &err));
    assert_eq!(
        registry.decode_error("postgres", &err),
        (
            "28P01".to_string(),
            "password authentication failed for user \"app\"".to_string()
        )
    );
}
