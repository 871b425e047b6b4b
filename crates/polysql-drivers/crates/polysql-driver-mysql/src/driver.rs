//! MySQL driver descriptor

use futures::future::BoxFuture;
use polysql_core::statement::quote_literal;
use polysql_core::{Connection, Driver, DriverRegistry, PolysqlError, Result};

/// Registry name, matching the connection scheme
pub const NAME: &str = "mysql";

/// ER_ACCESS_DENIED_ERROR
const ACCESS_DENIED: i64 = 1045;

/// Build the MySQL driver descriptor
pub fn driver() -> Driver {
    Driver::new("MySQL")
        .with_version(version)
        .with_user(user)
        .with_change_password(change_password)
        .with_decode_error(decode_error)
        .with_is_password_error(is_password_error)
}

/// Register the MySQL driver under [`NAME`]
pub fn register(registry: &DriverRegistry) {
    tracing::debug!(driver = NAME, "MySQL driver initialized");
    registry.register(NAME, driver());
}

fn version(conn: &dyn Connection) -> BoxFuture<'_, Result<String>> {
    Box::pin(async move {
        let ver = conn.query_row("SELECT version()").await?.scan_string(0)?;
        Ok(format!("MySQL {ver}"))
    })
}

fn user(conn: &dyn Connection) -> BoxFuture<'_, Result<String>> {
    Box::pin(async move { conn.query_row("SELECT current_user()").await?.scan_string(0) })
}

fn change_password<'a>(
    conn: &'a dyn Connection,
    user: &'a str,
    new_password: &'a str,
    _old_password: Option<&'a str>,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let sql = format!("SET PASSWORD FOR {user} = {}", quote_literal(new_password));
        conn.execute(&sql, &[]).await?;
        Ok(())
    })
}

/// Decode a MySQL error: the server error number is the code.
pub fn decode_error(err: &PolysqlError) -> (String, String) {
    let code = err.numeric_code().map(|c| c.to_string()).unwrap_or_default();
    (code, err.to_string())
}

/// Whether `err` is error 1045 (access denied).
pub fn is_password_error(err: &PolysqlError) -> bool {
    err.numeric_code() == Some(ACCESS_DENIED)
}
