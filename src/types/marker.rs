//! Value markers: how a value expression resolves
//!
//! A closed classification of value expressions. The compensation layer needs
//! concrete values, not SQL text, so every expression in an INSERT row or a
//! parameterized WHERE clause is reduced to exactly one of these tags.

use serde::{Deserialize, Serialize};
use sqlparser::ast::{Expr, UnaryOperator, Value as AstValue};
use std::str::FromStr;

use crate::types::value::Value;

/// Classification of a single value expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValueMarker {
    /// A SQL NULL literal.
    Null,
    /// A statically known scalar constant.
    Literal(Value),
    /// A bind-variable placeholder, carrying its textual identity as the
    /// parser produced it (`"?"`, `"$1"`, ...).
    Parameter(String),
    /// A function invocation whose value is only known at execution time,
    /// e.g. `NOW()`.
    Computed,
    /// Anything else: sub-select, arithmetic, column reference. Harmless as a
    /// non-key placeholder, fatal on a primary-key column.
    Unresolved,
}

impl ValueMarker {
    /// Classifies one expression. Total: never fails, the default arm is
    /// `Unresolved` and context (primary-key policy) decides whether that is
    /// an error.
    pub fn classify(expr: &Expr) -> ValueMarker {
        match expr {
            Expr::Value(v) => match &v.value {
                AstValue::Null => ValueMarker::Null,
                AstValue::Placeholder(name) => ValueMarker::Parameter(name.clone()),
                other => match literal_value(other) {
                    Some(value) => ValueMarker::Literal(value),
                    None => ValueMarker::Unresolved,
                },
            },
            // A signed numeric literal is still a constant.
            Expr::UnaryOp {
                op: UnaryOperator::Minus,
                expr: inner,
            } => match Self::classify(inner) {
                ValueMarker::Literal(value) => match negate(value) {
                    Some(value) => ValueMarker::Literal(value),
                    None => ValueMarker::Unresolved,
                },
                _ => ValueMarker::Unresolved,
            },
            Expr::UnaryOp {
                op: UnaryOperator::Plus,
                expr: inner,
            } => match Self::classify(inner) {
                marker @ ValueMarker::Literal(_) => marker,
                _ => ValueMarker::Unresolved,
            },
            Expr::Function(_) => ValueMarker::Computed,
            Expr::Nested(inner) => Self::classify(inner),
            _ => ValueMarker::Unresolved,
        }
    }
}

/// Converts a literal parser value into a runtime scalar. Returns `None` for
/// value kinds that are not plain scalar constants.
fn literal_value(value: &AstValue) -> Option<Value> {
    match value {
        AstValue::Number(text, _) => Some(parse_number(text)),
        AstValue::SingleQuotedString(s) | AstValue::DoubleQuotedString(s) => {
            Some(Value::Str(s.clone()))
        }
        AstValue::Boolean(b) => Some(Value::Bool(*b)),
        _ => None,
    }
}

/// Numbers keep as much precision as their textual form allows: integers fit
/// in I64, exact fractions in Decimal, everything else falls back to F64.
fn parse_number(text: &str) -> Value {
    if let Ok(i) = text.parse::<i64>() {
        return Value::I64(i);
    }
    if let Ok(d) = rust_decimal::Decimal::from_str(text) {
        return Value::Decimal(d);
    }
    match text.parse::<f64>() {
        Ok(f) => Value::F64(f),
        Err(_) => Value::Str(text.to_string()),
    }
}

fn negate(value: Value) -> Option<Value> {
    match value {
        Value::I64(i) => Some(Value::I64(-i)),
        Value::F64(f) => Some(Value::F64(-f)),
        Value::Decimal(d) => Some(Value::Decimal(-d)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlparser::dialect::GenericDialect;
    use sqlparser::parser::Parser;

    fn expr(sql: &str) -> Expr {
        let full = format!("SELECT {sql}");
        let statements = Parser::parse_sql(&GenericDialect {}, &full).unwrap();
        match statements.into_iter().next().unwrap() {
            sqlparser::ast::Statement::Query(query) => match *query.body {
                sqlparser::ast::SetExpr::Select(select) => match &select.projection[0] {
                    sqlparser::ast::SelectItem::UnnamedExpr(e) => e.clone(),
                    other => panic!("unexpected projection {other:?}"),
                },
                other => panic!("unexpected body {other:?}"),
            },
            other => panic!("unexpected statement {other:?}"),
        }
    }

    #[test]
    fn null_literal() {
        assert_eq!(ValueMarker::classify(&expr("NULL")), ValueMarker::Null);
    }

    #[test]
    fn scalar_constants() {
        assert_eq!(
            ValueMarker::classify(&expr("1")),
            ValueMarker::Literal(Value::I64(1))
        );
        assert_eq!(
            ValueMarker::classify(&expr("'a'")),
            ValueMarker::Literal(Value::Str("a".into()))
        );
        assert_eq!(
            ValueMarker::classify(&expr("TRUE")),
            ValueMarker::Literal(Value::Bool(true))
        );
        assert_eq!(
            ValueMarker::classify(&expr("-3")),
            ValueMarker::Literal(Value::I64(-3))
        );
    }

    #[test]
    fn placeholder_keeps_its_name() {
        assert_eq!(
            ValueMarker::classify(&expr("?")),
            ValueMarker::Parameter("?".into())
        );
    }

    #[test]
    fn function_invocation_is_computed() {
        assert_eq!(ValueMarker::classify(&expr("NOW()")), ValueMarker::Computed);
    }

    #[test]
    fn everything_else_is_unresolved() {
        assert_eq!(
            ValueMarker::classify(&expr("id + 1")),
            ValueMarker::Unresolved
        );
        assert_eq!(
            ValueMarker::classify(&expr("(SELECT 1)")),
            ValueMarker::Unresolved
        );
    }
}
