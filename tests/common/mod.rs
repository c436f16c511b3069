//! Shared helpers for recognizer integration tests

#![allow(dead_code)]

use sql_recognizer::{Flavor, Recognizer, Value};
use sqlparser::dialect::{Dialect, GenericDialect, MySqlDialect, PostgreSqlDialect, SQLiteDialect};
use sqlparser::parser::Parser;
use std::collections::BTreeMap;

fn dialect_for(flavor: Flavor) -> Box<dyn Dialect> {
    match flavor {
        Flavor::Generic => Box::new(GenericDialect {}),
        Flavor::MySql => Box::new(MySqlDialect {}),
        Flavor::Postgres => Box::new(PostgreSqlDialect {}),
        Flavor::Sqlite => Box::new(SQLiteDialect {}),
    }
}

/// Parses one statement and wraps it in its recognizer, panicking when the
/// statement is not recognizable DML.
pub fn recognize(sql: &str) -> Recognizer {
    recognize_with(sql, Flavor::Generic)
}

pub fn recognize_with(sql: &str, flavor: Flavor) -> Recognizer {
    try_recognize_with(sql, flavor).expect("statement should be recognizable")
}

pub fn try_recognize(sql: &str) -> Option<Recognizer> {
    try_recognize_with(sql, Flavor::Generic)
}

pub fn try_recognize_with(sql: &str, flavor: Flavor) -> Option<Recognizer> {
    let dialect = dialect_for(flavor);
    let statement = Parser::parse_sql(dialect.as_ref(), sql)
        .expect("sql should parse")
        .remove(0);
    Recognizer::from_statement(sql, statement, flavor)
}

/// Builds a parameters holder from (ordinal, bound values) entries.
pub fn holder(entries: &[(usize, Vec<Value>)]) -> BTreeMap<usize, Vec<Value>> {
    entries.iter().cloned().collect()
}
