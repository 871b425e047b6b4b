//! MS SQL Server driver descriptor

use futures::future::BoxFuture;
use polysql_core::statement::quote_literal;
use polysql_core::{Connection, Driver, DriverRegistry, PolysqlError, Result};

/// Registry name, matching the connection scheme
pub const NAME: &str = "mssql";

/// Login failed for user
const LOGIN_FAILED: i64 = 18456;

/// Build the SQL Server driver descriptor
pub fn driver() -> Driver {
    Driver::new("MS SQL Server")
        .require_previous_password()
        .with_version(version)
        .with_user(user)
        .with_change_password(change_password)
        .with_decode_error(decode_error)
        .with_is_password_error(is_password_error)
}

/// Register the SQL Server driver under [`NAME`]
pub fn register(registry: &DriverRegistry) {
    tracing::debug!(driver = NAME, "MS SQL Server driver initialized");
    registry.register(NAME, driver());
}

fn version(conn: &dyn Connection) -> BoxFuture<'_, Result<String>> {
    Box::pin(async move {
        let row = conn
            .query_row(
                "SELECT SERVERPROPERTY('productversion'), SERVERPROPERTY('productlevel'), SERVERPROPERTY('edition')",
            )
            .await?;
        Ok(format!(
            "Microsoft SQL Server {}, {}, {}",
            row.scan_string(0)?,
            row.scan_string(1)?,
            row.scan_string(2)?
        ))
    })
}

fn user(conn: &dyn Connection) -> BoxFuture<'_, Result<String>> {
    Box::pin(async move { conn.query_row("SELECT suser_name()").await?.scan_string(0) })
}

fn change_password<'a>(
    conn: &'a dyn Connection,
    user: &'a str,
    new_password: &'a str,
    old_password: Option<&'a str>,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        let sql = format!(
            "ALTER LOGIN {user} WITH PASSWORD = {} OLD_PASSWORD = {}",
            quote_literal(new_password),
            quote_literal(old_password.unwrap_or_default())
        );
        conn.execute(&sql, &[]).await?;
        Ok(())
    })
}

/// Decode a SQL Server error: the error number is the code.
pub fn decode_error(err: &PolysqlError) -> (String, String) {
    let code = err.numeric_code().map(|c| c.to_string()).unwrap_or_default();
    (code, err.to_string())
}

/// Whether `err` is error 18456 (login failed).
pub fn is_password_error(err: &PolysqlError) -> bool {
    err.numeric_code() == Some(LOGIN_FAILED)
}
