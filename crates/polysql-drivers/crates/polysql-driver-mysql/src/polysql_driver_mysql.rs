//! MySQL driver adapter for polysql
//!
//! Also serves MariaDB, which shares the wire protocol and error numbers.

mod driver;

#[cfg(test)]
mod driver_tests;

pub use driver::{NAME, decode_error, driver, is_password_error, register};
