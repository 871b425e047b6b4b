//! polysql core - driver registry and dispatch contract
//!
//! Every database engine the CLI supports is described by a [`Driver`]: a
//! bundle of optional capability functions (version and user lookup,
//! password changes, error decoding, column-name normalization, statement
//! preprocessing). This crate defines:
//!
//! - `Connection` - the query/exec surface capabilities run against
//! - `Driver` - the per-engine capability descriptor
//! - `DriverRegistry` - engine name to descriptor, plus the process-wide instance
//! - dispatch - per-engine capability or generic default
//! - statement classification by leading keyword

mod connection;
mod dispatch;
mod driver;
mod error;
mod registry;
pub mod statement;
mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;


pub use connection::*;
pub use dispatch::{
    default_change_password, default_columns, default_decode_error, default_process,
    default_user, default_version,
};
pub use driver::*;
pub use error::*;
pub use registry::*;
pub use types::*;
