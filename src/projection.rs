//! WHERE-clause parameter projection
//!
//! Renders a WHERE clause as canonical dialect text while substituting
//! placeholder occurrences with runtime-bound values. The rendered text is
//! the same for every batch entry (placeholders always render as `?`); only
//! the returned value rows vary, which lets one textual clause serve an
//! arbitrary-size batch of concrete row lookups downstream.

use sqlparser::ast::{
    Expr, FunctionArg, FunctionArgExpr, FunctionArguments, LimitClause, Value as AstValue,
};

use crate::error::{Error, Result};
use crate::params::ParametersHolder;
use crate::types::Row;

/// Result of projecting a parameterized WHERE clause: the rendered condition
/// text plus one row of concrete values per batch entry, in placeholder
/// occurrence order.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereProjection {
    pub text: String,
    pub rows: Vec<Row>,
}

/// Renders a WHERE clause without substitution, in the renderer's canonical
/// form. Empty string when the clause is absent.
pub fn render_where(selection: Option<&Expr>) -> String {
    selection.map(ToString::to_string).unwrap_or_default()
}

/// Renders a WHERE clause with placeholder substitution.
///
/// Walks the clause's value leaves in textual left-to-right order,
/// maintaining a 1-based ordinal counter incremented once per placeholder
/// (`IN (?, ?)` and `BETWEEN ? AND ?` each contribute two). Every ordinal is
/// resolved against the holder; all bound lists must agree on length (the
/// batch cardinality), and row `r` of the output zips the `r`-th value of
/// each ordinal. An absent clause projects to empty text and a single empty
/// row (batch cardinality 1, vacuously).
pub fn project_where(
    selection: Option<&Expr>,
    holder: &dyn ParametersHolder,
) -> Result<WhereProjection> {
    let Some(expr) = selection else {
        return Ok(WhereProjection {
            text: String::new(),
            rows: vec![Row::new()],
        });
    };

    let mut rendered = expr.clone();
    let mut placeholders = Vec::new();
    uniform_placeholders(&mut rendered, &mut placeholders)?;

    if placeholders.is_empty() {
        return Ok(WhereProjection {
            text: rendered.to_string(),
            rows: Vec::new(),
        });
    }

    let mut lists: Vec<&[crate::types::Value]> = Vec::with_capacity(placeholders.len());
    for ordinal in 1..=placeholders.len() {
        let values = holder
            .get(ordinal)
            .ok_or(Error::MissingParameterBinding { ordinal })?;
        lists.push(values);
    }

    let cardinality = lists[0].len();
    for (index, list) in lists.iter().enumerate().skip(1) {
        if list.len() != cardinality {
            return Err(Error::ParameterBatchMismatch {
                ordinal: index + 1,
                expected: cardinality,
                found: list.len(),
            });
        }
    }

    tracing::debug!(
        placeholders = placeholders.len(),
        cardinality,
        "projected parameterized WHERE clause"
    );

    let rows = (0..cardinality)
        .map(|r| lists.iter().map(|list| list[r].clone()).collect())
        .collect();

    Ok(WhereProjection {
        text: rendered.to_string(),
        rows,
    })
}

/// Renders a query-level LIMIT/OFFSET clause as canonical text, or empty text
/// when absent. Limits are assumed literal; no parameter substitution.
pub fn render_limit(clause: Option<&LimitClause>) -> Result<String> {
    match clause {
        None => Ok(String::new()),
        Some(LimitClause::LimitOffset {
            limit,
            offset,
            limit_by,
        }) => {
            if !limit_by.is_empty() {
                return Err(Error::UnsupportedConstruct {
                    fragment: "LIMIT BY".to_string(),
                });
            }
            let mut parts = Vec::new();
            if let Some(limit) = limit {
                parts.push(format!("LIMIT {limit}"));
            }
            if let Some(offset) = offset {
                parts.push(offset.to_string());
            }
            Ok(parts.join(" "))
        }
        Some(LimitClause::OffsetCommaLimit { offset, limit }) => {
            Ok(format!("LIMIT {offset}, {limit}"))
        }
    }
}

/// Renders a bare row-limit expression (DELETE/UPDATE grammar) or empty text.
pub fn render_limit_expr(limit: Option<&Expr>) -> String {
    limit.map(|e| format!("LIMIT {e}")).unwrap_or_default()
}

/// Collects placeholder identities in textual order and rewrites each one to
/// the uniform `?` marker so positional styles (`$1`) render identically.
/// Constructs outside the canonicalizable subset fail with
/// [`Error::UnsupportedConstruct`].
fn uniform_placeholders(expr: &mut Expr, out: &mut Vec<String>) -> Result<()> {
    match expr {
        Expr::Value(v) => {
            if let AstValue::Placeholder(name) = &mut v.value {
                out.push(name.clone());
                *name = "?".to_string();
            }
            Ok(())
        }
        Expr::Identifier(_) | Expr::CompoundIdentifier(_) => Ok(()),
        Expr::BinaryOp { left, right, .. } => {
            uniform_placeholders(left, out)?;
            uniform_placeholders(right, out)
        }
        Expr::UnaryOp { expr: inner, .. } => uniform_placeholders(inner, out),
        Expr::Nested(inner) => uniform_placeholders(inner, out),
        Expr::IsNull(inner)
        | Expr::IsNotNull(inner)
        | Expr::IsTrue(inner)
        | Expr::IsNotTrue(inner)
        | Expr::IsFalse(inner)
        | Expr::IsNotFalse(inner) => uniform_placeholders(inner, out),
        Expr::IsDistinctFrom(a, b) | Expr::IsNotDistinctFrom(a, b) => {
            uniform_placeholders(a, out)?;
            uniform_placeholders(b, out)
        }
        Expr::InList { expr: inner, list, .. } => {
            uniform_placeholders(inner, out)?;
            for item in list {
                uniform_placeholders(item, out)?;
            }
            Ok(())
        }
        Expr::Between {
            expr: inner,
            low,
            high,
            ..
        } => {
            uniform_placeholders(inner, out)?;
            uniform_placeholders(low, out)?;
            uniform_placeholders(high, out)
        }
        Expr::Like {
            expr: inner,
            pattern,
            ..
        }
        | Expr::ILike {
            expr: inner,
            pattern,
            ..
        }
        | Expr::SimilarTo {
            expr: inner,
            pattern,
            ..
        } => {
            uniform_placeholders(inner, out)?;
            uniform_placeholders(pattern, out)
        }
        Expr::Cast { expr: inner, .. } => uniform_placeholders(inner, out),
        Expr::Tuple(items) => {
            for item in items {
                uniform_placeholders(item, out)?;
            }
            Ok(())
        }
        Expr::Function(func) => {
            if let FunctionArguments::List(list) = &mut func.args {
                for arg in &mut list.args {
                    match arg {
                        FunctionArg::Unnamed(FunctionArgExpr::Expr(e)) => {
                            uniform_placeholders(e, out)?;
                        }
                        FunctionArg::Named {
                            arg: FunctionArgExpr::Expr(e),
                            ..
                        }
                        | FunctionArg::ExprNamed {
                            arg: FunctionArgExpr::Expr(e),
                            ..
                        } => {
                            uniform_placeholders(e, out)?;
                        }
                        _ => {}
                    }
                }
            }
            Ok(())
        }
        other => Err(Error::UnsupportedConstruct {
            fragment: other.to_string(),
        }),
    }
}
