//! MS SQL Server driver adapter for polysql
//!
//! SQL Server only lets a login change its own password when the current
//! password is supplied, so the descriptor sets `require_previous_password`.

mod driver;

#[cfg(test)]
mod driver_tests;

pub use driver::{NAME, decode_error, driver, is_password_error, register};
