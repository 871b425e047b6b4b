//! SQLite driver adapter for polysql
//!
//! SQLite has no user accounts, so user lookup reports an empty name and
//! password changes are refused.

mod driver;

#[cfg(test)]
mod driver_tests;

pub use driver::{NAME, decode_error, driver, register};
