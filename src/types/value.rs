//! Runtime value types for bound parameters and SQL literals
//!
//! Scalar value representation for everything a bind parameter or a literal
//! in a DML statement can carry. The downstream compensation layer persists
//! these alongside row images, so everything is serde-serializable.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A row of values, one per placeholder occurrence (WHERE projection) or one
/// per column (INSERT).
pub type Row = Vec<Value>;

/// Scalar value bound to a placeholder or extracted from a SQL literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    Decimal(Decimal),
    Str(String),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
    Uuid(Uuid),
    Bytea(Vec<u8>),
    Json(serde_json::Value),
}

impl Value {
    /// Returns true if this is the SQL NULL value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            Value::I64(i) => write!(f, "{i}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Decimal(d) => write!(f, "{d}"),
            Value::Str(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Value::Date(d) => write!(f, "'{d}'"),
            Value::Time(t) => write!(f, "'{t}'"),
            Value::Timestamp(ts) => write!(f, "'{ts}'"),
            Value::Uuid(u) => write!(f, "'{u}'"),
            Value::Bytea(b) => {
                write!(f, "X'")?;
                for byte in b {
                    write!(f, "{byte:02X}")?;
                }
                write!(f, "'")
            }
            Value::Json(j) => write!(f, "'{j}'"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::I64(i)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_strings_and_escapes() {
        assert_eq!(Value::Str("it's".into()).to_string(), "'it''s'");
        assert_eq!(Value::I64(42).to_string(), "42");
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Bool(true).to_string(), "TRUE");
    }

    #[test]
    fn bytea_renders_as_hex() {
        assert_eq!(Value::Bytea(vec![0xDE, 0xAD]).to_string(), "X'DEAD'");
    }
}
