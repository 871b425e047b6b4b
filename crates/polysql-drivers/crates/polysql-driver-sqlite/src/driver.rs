//! SQLite driver descriptor

use futures::future::BoxFuture;
use polysql_core::{Connection, Driver, DriverRegistry, PolysqlError, Result};

/// Registry name, matching the connection scheme
pub const NAME: &str = "sqlite3";

/// Build the SQLite driver descriptor
pub fn driver() -> Driver {
    Driver::new("SQLite")
        .with_version(version)
        .with_user(user)
        .with_change_password(change_password)
        .with_decode_error(decode_error)
}

/// Register the SQLite driver under [`NAME`]
pub fn register(registry: &DriverRegistry) {
    tracing::debug!(driver = NAME, "SQLite driver initialized");
    registry.register(NAME, driver());
}

fn version(conn: &dyn Connection) -> BoxFuture<'_, Result<String>> {
    Box::pin(async move {
        let ver = conn
            .query_row("SELECT sqlite_version()")
            .await?
            .scan_string(0)?;
        Ok(format!("SQLite3 {ver}"))
    })
}

fn user(_conn: &dyn Connection) -> BoxFuture<'_, Result<String>> {
    Box::pin(async { Ok(String::new()) })
}

fn change_password<'a>(
    _conn: &'a dyn Connection,
    _user: &'a str,
    _new_password: &'a str,
    _old_password: Option<&'a str>,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async {
        Err(PolysqlError::NotSupported(
            "SQLite databases do not have user passwords".to_string(),
        ))
    })
}

/// Decode a SQLite error: the extended result code is the code.
pub fn decode_error(err: &PolysqlError) -> (String, String) {
    let code = err.numeric_code().map(|c| c.to_string()).unwrap_or_default();
    (code, err.to_string())
}
