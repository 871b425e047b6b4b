//! PostgreSQL driver descriptor

use futures::future::BoxFuture;
use polysql_core::statement::quote_literal;
use polysql_core::{Connection, Driver, DriverRegistry, PolysqlError, Result};

/// Registry name, matching the connection scheme
pub const NAME: &str = "postgres";

/// SQLSTATE `invalid_password`
const INVALID_PASSWORD: &str = "28P01";

/// Build the PostgreSQL driver descriptor
pub fn driver() -> Driver {
    Driver::new("PostgreSQL")
        .with_version(version)
        .with_change_password(change_password)
        .with_decode_error(decode_error)
        .with_is_password_error(is_password_error)
}

/// Register the PostgreSQL driver under [`NAME`]
pub fn register(registry: &DriverRegistry) {
    tracing::debug!(driver = NAME, "PostgreSQL driver initialized");
    registry.register(NAME, driver());
}

fn version(conn: &dyn Connection) -> BoxFuture<'_, Result<String>> {
    Box::pin(async move {
        let ver = conn
            .query_row("SHOW server_version")
            .await?
            .scan_string(0)?;
        Ok(format!("PostgreSQL {ver}"))
    })
}

fn change_password<'a>(
    conn: &'a dyn Connection,
    user: &'a str,
    new_password: &'a str,
    _old_password: Option<&'a str>,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let sql = format!("ALTER USER {user} PASSWORD {}", quote_literal(new_password));
        conn.execute(&sql, &[]).await?;
        Ok(())
    })
}

/// Decode a PostgreSQL error: the SQLSTATE is the code when the client
/// reported one.
pub fn decode_error(err: &PolysqlError) -> (String, String) {
    let code = err.sql_state().unwrap_or_default().to_string();
    (code, err.to_string())
}

/// Whether `err` carries SQLSTATE 28P01 (`invalid_password`).
pub fn is_password_error(err: &PolysqlError) -> bool {
    err.sql_state() == Some(INVALID_PASSWORD)
}
