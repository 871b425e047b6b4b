//! Driver descriptor: the per-engine bundle of optional capabilities

use crate::{Connection, PolysqlError, QueryResult, Result};
use futures::future::BoxFuture;
use std::fmt;

/// Looks up the server version string.
pub type VersionFn = for<'a> fn(&'a dyn Connection) -> BoxFuture<'a, Result<String>>;

/// Looks up the user the session is authenticated as.
pub type UserFn = for<'a> fn(&'a dyn Connection) -> BoxFuture<'a, Result<String>>;

/// Changes a user's password: `(conn, user, new_password, old_password)`.
pub type ChangePasswordFn =
    for<'a> fn(&'a dyn Connection, &'a str, &'a str, Option<&'a str>) -> BoxFuture<'a, Result<()>>;

/// Decodes an error into a `(code, message)` pair.
pub type DecodeErrorFn = fn(&PolysqlError) -> (String, String);

/// Reports whether an error means the credentials were rejected or expired.
pub type IsPasswordErrorFn = fn(&PolysqlError) -> bool;

/// Normalizes the column names of a result set.
pub type ColumnsFn = fn(&QueryResult) -> Result<Vec<String>>;

/// Rewrites and classifies a statement: `(prefix, sql)`.
pub type ProcessFn = fn(&str, &str) -> Result<Processed>;

/// Outcome of statement preprocessing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    /// Short statement type label (e.g. "SELECT", "CREATE TABLE")
    pub kind: String,
    /// Statement text to send to the engine
    pub sql: String,
    /// Whether the statement produces a result set
    pub is_query: bool,
}

/// Per-engine driver descriptor.
///
/// Every capability is optional. An absent capability means the dispatch
/// layer uses its generic default; it is never an error. Descriptors are
/// plain values: build one with the `with_*` methods and hand it to the
/// registry.
#[derive(Clone, Default)]
pub struct Driver {
    /// Human-readable engine name (e.g. "Oracle")
    pub display_name: Option<&'static str>,
    /// The engine refuses a password change without the current password
    pub require_previous_password: bool,
    pub version: Option<VersionFn>,
    pub user: Option<UserFn>,
    pub change_password: Option<ChangePasswordFn>,
    pub decode_error: Option<DecodeErrorFn>,
    pub is_password_error: Option<IsPasswordErrorFn>,
    pub columns: Option<ColumnsFn>,
    pub process: Option<ProcessFn>,
}

impl Driver {
    pub fn new(display_name: &'static str) -> Self {
        Self {
            display_name: Some(display_name),
            ..Default::default()
        }
    }

    pub fn require_previous_password(mut self) -> Self {
        self.require_previous_password = true;
        self
    }

    pub fn with_version(mut self, f: VersionFn) -> Self {
        self.version = Some(f);
        self
    }

    pub fn with_user(mut self, f: UserFn) -> Self {
        self.user = Some(f);
        self
    }

    pub fn with_change_password(mut self, f: ChangePasswordFn) -> Self {
        self.change_password = Some(f);
        self
    }

    pub fn with_decode_error(mut self, f: DecodeErrorFn) -> Self {
        self.decode_error = Some(f);
        self
    }

    pub fn with_is_password_error(mut self, f: IsPasswordErrorFn) -> Self {
        self.is_password_error = Some(f);
        self
    }

    pub fn with_columns(mut self, f: ColumnsFn) -> Self {
        self.columns = Some(f);
        self
    }

    pub fn with_process(mut self, f: ProcessFn) -> Self {
        self.process = Some(f);
        self
    }

    /// Names of the capabilities this descriptor overrides
    pub fn capabilities(&self) -> Vec<&'static str> {
        [
            ("version", self.version.is_some()),
            ("user", self.user.is_some()),
            ("change_password", self.change_password.is_some()),
            ("decode_error", self.decode_error.is_some()),
            ("is_password_error", self.is_password_error.is_some()),
            ("columns", self.columns.is_some()),
            ("process", self.process.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }
}

impl fmt::Debug for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Driver")
            .field("display_name", &self.display_name)
            .field("require_previous_password", &self.require_previous_password)
            .field("capabilities", &self.capabilities())
            .finish()
    }
}
