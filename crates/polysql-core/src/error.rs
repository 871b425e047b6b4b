//! Error types for polysql
//!
//! Engine errors are opaque to the core. A connection wraps whatever its native
//! client produced in [`PolysqlError::Engine`], and adapters that want a
//! structured code ask for it through the narrow [`HasNumericCode`] and
//! [`HasSqlState`] interfaces instead of assuming a concrete type.

use std::fmt;
use thiserror::Error;

/// An error value that carries a numeric, engine-assigned code
/// (e.g. Oracle `1017`, MySQL `1045`).
pub trait HasNumericCode {
    fn numeric_code(&self) -> i64;
}

/// An error value that carries a five character SQLSTATE (e.g. `28P01`).
pub trait HasSqlState {
    fn sql_state(&self) -> &str;
}

/// Error produced by a native engine client.
///
/// Both accessors default to `None`, which sends error decoding down the
/// text-scanning path.
pub trait EngineError: std::error::Error + Send + Sync + 'static {
    fn as_numeric_code(&self) -> Option<&dyn HasNumericCode> {
        None
    }

    fn as_sql_state(&self) -> Option<&dyn HasSqlState> {
        None
    }
}

/// General purpose engine error for connection implementations that only
/// know a code and a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ServerError {
    pub code: Option<i64>,
    pub sql_state: Option<String>,
    pub message: String,
}

impl ServerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            sql_state: None,
            message: message.into(),
        }
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_sql_state(mut self, state: impl Into<String>) -> Self {
        self.sql_state = Some(state.into());
        self
    }
}

impl HasNumericCode for ServerError {
    fn numeric_code(&self) -> i64 {
        self.code.unwrap_or_default()
    }
}

impl HasSqlState for ServerError {
    fn sql_state(&self) -> &str {
        self.sql_state.as_deref().unwrap_or_default()
    }
}

impl EngineError for ServerError {
    fn as_numeric_code(&self) -> Option<&dyn HasNumericCode> {
        self.code.map(|_| self as &dyn HasNumericCode)
    }

    fn as_sql_state(&self) -> Option<&dyn HasSqlState> {
        self.sql_state.as_ref().map(|_| self as &dyn HasSqlState)
    }
}

/// Core error type for polysql operations
#[derive(Error, Debug)]
pub enum PolysqlError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Driver error: {0}")]
    Driver(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Error returned by the engine itself, passed through untouched.
    #[error("{0}")]
    Engine(Box<dyn EngineError>),

    #[error("{0}")]
    Other(String),
}

impl PolysqlError {
    /// Wrap a native engine error.
    pub fn engine(err: impl EngineError) -> Self {
        Self::Engine(Box::new(err))
    }

    /// Numeric code capability of the wrapped engine error, if it has one.
    pub fn as_numeric_code(&self) -> Option<&dyn HasNumericCode> {
        match self {
            Self::Engine(err) => err.as_numeric_code(),
            _ => None,
        }
    }

    /// SQLSTATE capability of the wrapped engine error, if it has one.
    pub fn as_sql_state(&self) -> Option<&dyn HasSqlState> {
        match self {
            Self::Engine(err) => err.as_sql_state(),
            _ => None,
        }
    }

    pub fn numeric_code(&self) -> Option<i64> {
        self.as_numeric_code().map(|c| c.numeric_code())
    }

    pub fn sql_state(&self) -> Option<&str> {
        self.as_sql_state().map(|s| s.sql_state())
    }
}

/// Result type alias for polysql operations
pub type Result<T> = std::result::Result<T, PolysqlError>;

/// An error decoded by the driver that produced it, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverError {
    pub driver: String,
    pub code: String,
    pub message: String,
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code.is_empty() {
            write!(f, "{}: {}", self.driver, self.message)
        } else {
            write!(f, "{}: {}: {}", self.driver, self.code, self.message)
        }
    }
}

impl std::error::Error for DriverError {}
