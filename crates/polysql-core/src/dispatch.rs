//! Dispatch layer: per-engine capability with a generic fallback
//!
//! Each operation resolves the descriptor registered for the engine name and
//! calls the matching capability if it is set, returning its result verbatim.
//! Otherwise the generic default defined in this module runs. Errors from
//! either path reach the caller unchanged.

use crate::statement::{query_exec_type, quote_literal};
use crate::{
    Connection, DriverError, DriverRegistry, PolysqlError, Processed, QueryResult, Result,
};

fn fallback(driver: &str, capability: &'static str) {
    tracing::debug!(driver = %driver, capability, "using generic default");
}

impl DriverRegistry {
    /// Server version string for the engine behind `conn`.
    #[tracing::instrument(skip(self, conn), fields(driver = conn.driver_name()))]
    pub async fn version(&self, conn: &dyn Connection) -> Result<String> {
        let name = conn.driver_name();
        match self.lookup(name).and_then(|d| d.version) {
            Some(version) => version(conn).await,
            None => {
                fallback(name, "version");
                default_version(conn).await
            }
        }
    }

    /// User the session behind `conn` is authenticated as.
    #[tracing::instrument(skip(self, conn), fields(driver = conn.driver_name()))]
    pub async fn user(&self, conn: &dyn Connection) -> Result<String> {
        let name = conn.driver_name();
        match self.lookup(name).and_then(|d| d.user) {
            Some(user) => user(conn).await,
            None => {
                fallback(name, "user");
                default_user(conn).await
            }
        }
    }

    /// Change `user`'s password.
    ///
    /// `user` and the passwords are spliced into engine DDL, not bound as
    /// parameters; callers must validate them first. Engines flagged with
    /// `require_previous_password` reject the request up front when
    /// `old_password` is missing or empty.
    #[tracing::instrument(skip(self, conn, new_password, old_password), fields(driver = conn.driver_name()))]
    pub async fn change_password(
        &self,
        conn: &dyn Connection,
        user: &str,
        new_password: &str,
        old_password: Option<&str>,
    ) -> Result<()> {
        let name = conn.driver_name();
        let driver = self.lookup(name);

        let requires_old = driver
            .as_ref()
            .is_some_and(|d| d.require_previous_password);
        if requires_old && old_password.is_none_or(str::is_empty) {
            return Err(PolysqlError::Configuration(format!(
                "driver {name} requires the previous password to change a password"
            )));
        }

        match driver.and_then(|d| d.change_password) {
            Some(change_password) => change_password(conn, user, new_password, old_password).await,
            None => {
                fallback(name, "change_password");
                default_change_password(conn, user, new_password).await
            }
        }
    }

    /// Decode `err` raised by driver `name` into a `(code, message)` pair.
    pub fn decode_error(&self, name: &str, err: &PolysqlError) -> (String, String) {
        match self.lookup(name).and_then(|d| d.decode_error) {
            Some(decode_error) => decode_error(err),
            None => {
                fallback(name, "decode_error");
                default_decode_error(err)
            }
        }
    }

    /// Decode `err` and pair it with the driver name for display.
    pub fn wrap_error(&self, name: &str, err: &PolysqlError) -> DriverError {
        let (code, message) = self.decode_error(name, err);
        DriverError {
            driver: name.to_string(),
            code,
            message,
        }
    }

    /// Whether `err` means the credentials were rejected, so the CLI can
    /// prompt for a password again instead of giving up.
    pub fn is_password_error(&self, name: &str, err: &PolysqlError) -> bool {
        match self.lookup(name).and_then(|d| d.is_password_error) {
            Some(is_password_error) => is_password_error(err),
            None => {
                fallback(name, "is_password_error");
                false
            }
        }
    }

    /// Column names of `result` as the driver wants them displayed.
    pub fn columns(&self, name: &str, result: &QueryResult) -> Result<Vec<String>> {
        match self.lookup(name).and_then(|d| d.columns) {
            Some(columns) => columns(result),
            None => {
                fallback(name, "columns");
                default_columns(result)
            }
        }
    }

    /// Rewrite and classify a statement before it is sent to the engine.
    pub fn process(&self, name: &str, prefix: &str, sql: &str) -> Result<Processed> {
        match self.lookup(name).and_then(|d| d.process) {
            Some(process) => process(prefix, sql),
            None => {
                fallback(name, "process");
                default_process(prefix, sql)
            }
        }
    }

    /// Whether driver `name` needs the current password to change it.
    pub fn require_previous_password(&self, name: &str) -> bool {
        self.lookup(name)
            .is_some_and(|d| d.require_previous_password)
    }
}

/// Generic version lookup: `SELECT version()`.
pub async fn default_version(conn: &dyn Connection) -> Result<String> {
    conn.query_row("SELECT version()").await?.scan_string(0)
}

/// Generic current-user lookup: `SELECT current_user`.
pub async fn default_user(conn: &dyn Connection) -> Result<String> {
    conn.query_row("SELECT current_user").await?.scan_string(0)
}

/// Generic password change: `ALTER USER <user> PASSWORD '<new>'`.
pub async fn default_change_password(
    conn: &dyn Connection,
    user: &str,
    new_password: &str,
) -> Result<()> {
    let sql = format!("ALTER USER {} PASSWORD {}", user, quote_literal(new_password));
    conn.execute(&sql, &[]).await?;
    Ok(())
}

/// Generic error decoding: no code, the error's own text as message.
pub fn default_decode_error(err: &PolysqlError) -> (String, String) {
    (String::new(), err.to_string())
}

/// Generic column names: passed through as reported.
pub fn default_columns(result: &QueryResult) -> Result<Vec<String>> {
    Ok(result.column_names())
}

/// Generic preprocessing: statement text unchanged, classified by its
/// leading keyword.
pub fn default_process(prefix: &str, sql: &str) -> Result<Processed> {
    let (kind, is_query) = query_exec_type(prefix, sql);
    Ok(Processed {
        kind,
        sql: sql.to_string(),
        is_query,
    })
}
