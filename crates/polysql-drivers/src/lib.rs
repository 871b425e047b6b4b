//! polysql drivers - compiled-in engine adapters
//!
//! Each adapter lives in its own crate behind a feature flag. This crate
//! enumerates the enabled ones and registers them, either into the
//! process-wide registry ([`init`]) or into a caller-owned one
//! ([`register_all`]).

#[cfg(feature = "mssql")]
pub use polysql_driver_mssql as mssql;
#[cfg(feature = "mysql")]
pub use polysql_driver_mysql as mysql;
#[cfg(feature = "oracle")]
pub use polysql_driver_oracle as oracle;
#[cfg(feature = "postgres")]
pub use polysql_driver_postgres as postgres;
#[cfg(feature = "sqlite")]
pub use polysql_driver_sqlite as sqlite;

mod config;
mod registry;

pub use config::DriversConfig;
pub use registry::{
    builtin_drivers, init, init_with, is_initialized, register_all, registry_with_defaults,
};

/// Re-export commonly used types from polysql-core
pub use polysql_core::{
    Connection, Driver, DriverError, DriverRegistry, PolysqlError, Processed, QueryResult, Result,
    lookup, register,
};
