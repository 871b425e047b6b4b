//! Statement classification by leading keyword
//!
//! The CLI hands drivers a short upper-cased "prefix" of each statement (the
//! first few words, comments skipped). Classification decides from that
//! prefix whether the statement produces a result set and which short label
//! to show for it.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Number of words the CLI normally collects into a statement prefix
pub const DEFAULT_PREFIX_WORDS: usize = 6;

/// Leading verbs of statements that return rows
static QUERY_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "SELECT", "WITH", "VALUES", "TABLE", "SHOW", "DESC", "DESCRIBE", "EXPLAIN", "PRAGMA",
        "FETCH", "LIST", "HELP",
    ]
    .into_iter()
    .collect()
});

/// Statement verbs that do not return rows, including multi-word forms so the
/// longest match wins (`CREATE TABLE` over `CREATE`)
static EXEC_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // DML
        "INSERT",
        "UPDATE",
        "DELETE",
        "MERGE",
        "UPSERT",
        "REPLACE",
        "TRUNCATE",
        "TRUNCATE TABLE",
        "COPY",
        "LOAD",
        // DDL
        "CREATE",
        "CREATE TABLE",
        "CREATE TEMPORARY TABLE",
        "CREATE GLOBAL TEMPORARY TABLE",
        "CREATE VIEW",
        "CREATE MATERIALIZED VIEW",
        "CREATE OR REPLACE",
        "CREATE OR REPLACE VIEW",
        "CREATE OR REPLACE FUNCTION",
        "CREATE OR REPLACE PROCEDURE",
        "CREATE OR REPLACE PACKAGE",
        "CREATE OR REPLACE PACKAGE BODY",
        "CREATE OR REPLACE TRIGGER",
        "CREATE INDEX",
        "CREATE UNIQUE INDEX",
        "CREATE SEQUENCE",
        "CREATE SCHEMA",
        "CREATE DATABASE",
        "CREATE USER",
        "CREATE ROLE",
        "CREATE LOGIN",
        "CREATE FUNCTION",
        "CREATE PROCEDURE",
        "CREATE PACKAGE",
        "CREATE TRIGGER",
        "CREATE TYPE",
        "CREATE EXTENSION",
        "CREATE SYNONYM",
        "ALTER",
        "ALTER TABLE",
        "ALTER VIEW",
        "ALTER INDEX",
        "ALTER SEQUENCE",
        "ALTER SCHEMA",
        "ALTER DATABASE",
        "ALTER USER",
        "ALTER ROLE",
        "ALTER LOGIN",
        "ALTER SESSION",
        "ALTER SYSTEM",
        "DROP",
        "DROP TABLE",
        "DROP VIEW",
        "DROP MATERIALIZED VIEW",
        "DROP INDEX",
        "DROP SEQUENCE",
        "DROP SCHEMA",
        "DROP DATABASE",
        "DROP USER",
        "DROP ROLE",
        "DROP LOGIN",
        "DROP FUNCTION",
        "DROP PROCEDURE",
        "DROP PACKAGE",
        "DROP TRIGGER",
        "DROP TYPE",
        "DROP EXTENSION",
        "DROP SYNONYM",
        "RENAME",
        "COMMENT",
        "COMMENT ON",
        // DCL
        "GRANT",
        "REVOKE",
        // Transactions
        "BEGIN",
        "BEGIN TRANSACTION",
        "START TRANSACTION",
        "COMMIT",
        "ROLLBACK",
        "SAVEPOINT",
        "RELEASE",
        "RELEASE SAVEPOINT",
        "LOCK",
        "LOCK TABLE",
        // Session and maintenance
        "SET",
        "SET PASSWORD",
        "SET TRANSACTION",
        "USE",
        "ANALYZE",
        "VACUUM",
        "REINDEX",
        "ATTACH",
        "DETACH",
        "CALL",
        "EXEC",
        "EXECUTE",
        "DECLARE",
        "DO",
        "PURGE",
        "FLASHBACK",
    ]
    .into_iter()
    .collect()
});

/// Whether `verb` (upper case) introduces a row-returning statement
pub fn is_query_verb(verb: &str) -> bool {
    QUERY_VERBS.contains(verb)
}

/// Collect the first `n` words of `sql`, upper-cased and space separated.
///
/// Leading whitespace, `--` line comments and `/* */` block comments are
/// skipped; parentheses and commas separate words; scanning stops at the first
/// `;`.
pub fn find_prefix(sql: &str, n: usize) -> String {
    let mut words: Vec<String> = Vec::with_capacity(n);
    let mut current = String::new();
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        if words.len() >= n {
            break;
        }
        match c {
            '-' if chars.peek() == Some(&'-') => {
                flush_word(&mut words, &mut current);
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                flush_word(&mut words, &mut current);
                chars.next();
                while let Some(skipped) = chars.next() {
                    if skipped == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        break;
                    }
                }
            }
            ';' => break,
            c if c.is_whitespace() || c == '(' || c == ')' || c == ',' => {
                flush_word(&mut words, &mut current);
            }
            c => current.extend(c.to_uppercase()),
        }
    }
    flush_word(&mut words, &mut current);

    words.truncate(n);
    words.join(" ")
}

fn flush_word(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

/// Classify a statement from its prefix.
///
/// Returns the short type label and whether the statement is expected to
/// produce a result set. `sql` is only consulted for the forms whose kind
/// depends on the body (`PRAGMA x = y` assigns, `PRAGMA x` reads).
pub fn query_exec_type(prefix: &str, sql: &str) -> (String, bool) {
    let words: Vec<&str> = prefix.split_whitespace().collect();
    let Some(first) = words.first().copied() else {
        return ("EXEC".to_string(), false);
    };

    if is_query_verb(first) {
        return match first {
            "SELECT" if words.get(1) == Some(&"INTO") => ("SELECT INTO".to_string(), false),
            "PRAGMA" => (first.to_string(), !sql.contains('=')),
            _ => (first.to_string(), true),
        };
    }

    for len in (1..=words.len()).rev() {
        let candidate = words[..len].join(" ");
        if EXEC_VERBS.contains(candidate.as_str()) {
            return (candidate, false);
        }
    }

    (first.to_string(), false)
}

/// Quote `value` as a single-quoted SQL string literal, doubling embedded quotes.
///
/// Used by administrative statements that cannot take bind parameters.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Strip one trailing `;` together with the whitespace around it, plus any
/// leading whitespace.
pub fn trim_terminator(sql: &str) -> &str {
    let trimmed = sql.trim();
    trimmed.strip_suffix(';').map(str::trim_end).unwrap_or(trimmed)
}
