//! Oracle driver descriptor

use futures::future::BoxFuture;
use polysql_core::statement::{query_exec_type, trim_terminator};
use polysql_core::{Connection, Driver, DriverRegistry, PolysqlError, Processed, QueryResult, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Registry name, matching the connection scheme
pub const NAME: &str = "ora";

/// Marker that starts every Oracle error code in message text
const CODE_MARKER: &str = "ORA-";

/// ORA-01017: invalid username/password; logon denied
const INVALID_CREDENTIALS: i64 = 1017;

/// Identifiers Oracle reports for unquoted names
static ALL_CAPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][A-Z0-9_]+$").expect("valid identifier pattern")
});

/// Build the Oracle driver descriptor
pub fn driver() -> Driver {
    Driver::new("Oracle")
        .with_version(version)
        .with_user(user)
        .with_change_password(change_password)
        .with_decode_error(decode_error)
        .with_is_password_error(is_password_error)
        .with_columns(normalize_columns)
        .with_process(process)
}

/// Register the Oracle driver under [`NAME`]
pub fn register(registry: &DriverRegistry) {
    tracing::debug!(driver = NAME, "Oracle driver initialized");
    registry.register(NAME, driver());
}

fn version(conn: &dyn Connection) -> BoxFuture<'_, Result<String>> {
    Box::pin(async move {
        let ver = conn
            .query_row("SELECT version FROM V$INSTANCE")
            .await?
            .scan_string(0)?;
        Ok(format!("Oracle {ver}"))
    })
}

fn user(conn: &dyn Connection) -> BoxFuture<'_, Result<String>> {
    Box::pin(async move { conn.query_row("SELECT user FROM dual").await?.scan_string(0) })
}

fn change_password<'a>(
    conn: &'a dyn Connection,
    user: &'a str,
    new_password: &'a str,
    _old_password: Option<&'a str>,
) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move {
        // Oracle takes the password as an identifier, not a string literal
        conn.execute(&format!("ALTER USER {user} IDENTIFIED BY {new_password}"), &[])
            .await?;
        Ok(())
    })
}

/// Decode an Oracle error into `(code, message)`.
///
/// A structured numeric code wins and is rendered as `ORA-nnnnn`. The message
/// text is then scanned for the last `ORA-` marker: the text after the
/// following `:` becomes the message, and the marker up to that `:` serves as
/// the code when no structured code was available. Without a marker the code
/// stays empty and the message is the error's own text.
pub fn decode_error(err: &PolysqlError) -> (String, String) {
    let mut code = err
        .numeric_code()
        .map(|c| format!("ORA-{c:05}"))
        .unwrap_or_default();

    let text = err.to_string();
    let mut message = text.as_str();
    if let Some(start) = text.rfind(CODE_MARKER) {
        message = &text[start..];
        if let Some(colon) = message.find(':') {
            if code.is_empty() {
                code = message[..colon].trim().to_string();
            }
            message = &message[colon + 1..];
        }
    }

    (code, message.trim().to_string())
}

/// Whether `err` is ORA-01017 (invalid username/password).
pub fn is_password_error(err: &PolysqlError) -> bool {
    err.numeric_code() == Some(INVALID_CREDENTIALS)
}

/// Lower-case column names Oracle reported in its default upper case.
///
/// Names that are not plain upper-case identifiers (quoted mixed-case names,
/// names starting with a digit) are kept as they are.
pub fn normalize_columns(result: &QueryResult) -> Result<Vec<String>> {
    Ok(result
        .column_names()
        .into_iter()
        .map(|name| {
            if ALL_CAPS.is_match(&name) {
                name.to_lowercase()
            } else {
                name
            }
        })
        .collect())
}

/// Strip the trailing terminator Oracle rejects, then classify.
pub fn process(prefix: &str, sql: &str) -> Result<Processed> {
    let sql = trim_terminator(sql);
    let (kind, is_query) = query_exec_type(prefix, sql);
    Ok(Processed {
        kind,
        sql: sql.to_string(),
        is_query,
    })
}
