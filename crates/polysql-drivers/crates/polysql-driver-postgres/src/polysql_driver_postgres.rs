//! PostgreSQL driver adapter for polysql

mod driver;

#[cfg(test)]
mod driver_tests;

pub use driver::{NAME, decode_error, driver, is_password_error, register};
