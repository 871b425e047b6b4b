//! Oracle driver adapter for polysql
//!
//! Oracle reports unquoted identifiers in upper case, prefixes its error
//! messages with `ORA-nnnnn:` codes and rejects a trailing `;` on plain SQL
//! statements. This adapter smooths those over for the generic CLI loop.

mod driver;

#[cfg(test)]
mod driver_tests;

pub use driver::{NAME, decode_error, driver, is_password_error, normalize_columns, process, register};
