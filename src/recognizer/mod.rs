//! Statement recognizers
//!
//! One recognizer per DML statement kind, all wrapping an already-parsed
//! statement plus its original SQL text. A recognizer is stateless: it is
//! constructed for one recognition pass, queried, and discarded. Construction
//! never re-parses.

mod delete;
mod insert;
mod select_for_update;
mod update;

pub use delete::DeleteRecognizer;
pub use insert::InsertRecognizer;
pub use select_for_update::SelectForUpdateRecognizer;
pub use update::UpdateRecognizer;

use serde::{Deserialize, Serialize};
use sqlparser::ast::{
    Assignment, AssignmentTarget, ObjectName, ObjectNamePart, Statement, TableFactor,
    TableWithJoins,
};
use std::fmt;

use crate::error::{Error, Result};
use crate::flavor::Flavor;
use crate::params::ParametersHolder;
use crate::projection::WhereProjection;

/// The mutation kind of a recognized statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SqlType {
    Insert,
    Delete,
    Update,
    SelectForUpdate,
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SqlType::Insert => "INSERT",
            SqlType::Delete => "DELETE",
            SqlType::Update => "UPDATE",
            SqlType::SelectForUpdate => "SELECT FOR UPDATE",
        };
        write!(f, "{name}")
    }
}

/// A recognized DML statement, tagged by kind. Every variant exposes the
/// shared capability surface; INSERT and UPDATE extras are reachable through
/// [`Recognizer::as_insert`] and [`Recognizer::as_update`].
#[derive(Debug)]
pub enum Recognizer {
    Insert(InsertRecognizer),
    Delete(DeleteRecognizer),
    Update(UpdateRecognizer),
    SelectForUpdate(SelectForUpdateRecognizer),
}

impl Recognizer {
    /// Wraps a parsed statement in the recognizer for its kind. Returns
    /// `None` for statements outside the DML set and for SELECTs that are not
    /// marked FOR UPDATE, signaling the caller to skip compensation handling.
    pub fn from_statement(
        sql: impl Into<String>,
        statement: Statement,
        flavor: Flavor,
    ) -> Option<Recognizer> {
        let sql = sql.into();
        match statement {
            Statement::Insert(ast) => {
                Some(Recognizer::Insert(InsertRecognizer::new(sql, ast, flavor)))
            }
            Statement::Delete(ast) => {
                Some(Recognizer::Delete(DeleteRecognizer::new(sql, ast, flavor)))
            }
            Statement::Update(ast) => {
                Some(Recognizer::Update(UpdateRecognizer::new(sql, ast, flavor)))
            }
            Statement::Query(query) => SelectForUpdateRecognizer::new(sql, *query, flavor)
                .map(Recognizer::SelectForUpdate),
            _ => None,
        }
    }

    pub fn sql_type(&self) -> SqlType {
        match self {
            Recognizer::Insert(_) => SqlType::Insert,
            Recognizer::Delete(_) => SqlType::Delete,
            Recognizer::Update(_) => SqlType::Update,
            Recognizer::SelectForUpdate(_) => SqlType::SelectForUpdate,
        }
    }

    pub fn original_sql(&self) -> &str {
        match self {
            Recognizer::Insert(r) => r.original_sql(),
            Recognizer::Delete(r) => r.original_sql(),
            Recognizer::Update(r) => r.original_sql(),
            Recognizer::SelectForUpdate(r) => r.original_sql(),
        }
    }

    pub fn flavor(&self) -> Flavor {
        match self {
            Recognizer::Insert(r) => r.flavor(),
            Recognizer::Delete(r) => r.flavor(),
            Recognizer::Update(r) => r.flavor(),
            Recognizer::SelectForUpdate(r) => r.flavor(),
        }
    }

    /// The statement's table-source expression rendered alone, without the
    /// rest of the statement.
    pub fn table_name(&self) -> Result<String> {
        match self {
            Recognizer::Insert(r) => r.table_name(),
            Recognizer::Delete(r) => r.table_name(),
            Recognizer::Update(r) => r.table_name(),
            Recognizer::SelectForUpdate(r) => r.table_name(),
        }
    }

    pub fn table_alias(&self) -> Result<Option<String>> {
        match self {
            Recognizer::Insert(r) => Ok(r.table_alias()),
            Recognizer::Delete(r) => r.table_alias(),
            Recognizer::Update(r) => r.table_alias(),
            Recognizer::SelectForUpdate(r) => r.table_alias(),
        }
    }

    /// Canonical WHERE-condition text, empty when the statement has none.
    pub fn where_condition(&self) -> Result<String> {
        match self {
            Recognizer::Insert(_) => Ok(String::new()),
            Recognizer::Delete(r) => Ok(r.where_condition()),
            Recognizer::Update(r) => Ok(r.where_condition()),
            Recognizer::SelectForUpdate(r) => r.where_condition(),
        }
    }

    /// WHERE-condition text with placeholder substitution plus the per-batch
    /// value rows.
    pub fn where_condition_with(&self, holder: &dyn ParametersHolder) -> Result<WhereProjection> {
        match self {
            Recognizer::Insert(_) => crate::projection::project_where(None, holder),
            Recognizer::Delete(r) => r.where_condition_with(holder),
            Recognizer::Update(r) => r.where_condition_with(holder),
            Recognizer::SelectForUpdate(r) => r.where_condition_with(holder),
        }
    }

    /// Canonical row-limit text, empty when absent.
    pub fn limit_condition(&self) -> Result<String> {
        match self {
            Recognizer::Insert(_) => Ok(String::new()),
            Recognizer::Delete(r) => Ok(r.limit_condition()),
            Recognizer::Update(r) => Ok(r.limit_condition()),
            Recognizer::SelectForUpdate(r) => r.limit_condition(),
        }
    }

    pub fn as_insert(&self) -> Option<&InsertRecognizer> {
        match self {
            Recognizer::Insert(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_update(&self) -> Option<&UpdateRecognizer> {
        match self {
            Recognizer::Update(r) => Some(r),
            _ => None,
        }
    }
}

/// Extracts (table name, alias) from a single-table source. Joined sources
/// cannot be compensated row-by-row and are rejected.
pub(crate) fn single_table_parts(tables: &[TableWithJoins]) -> Result<(String, Option<String>)> {
    let [table] = tables else {
        return Err(Error::UnsupportedConstruct {
            fragment: tables
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        });
    };
    if !table.joins.is_empty() {
        return Err(Error::UnsupportedConstruct {
            fragment: table.to_string(),
        });
    }
    match &table.relation {
        TableFactor::Table { name, alias, .. } => Ok((
            name.to_string(),
            alias.as_ref().map(|a| a.name.value.clone()),
        )),
        other => Err(Error::UnsupportedConstruct {
            fragment: other.to_string(),
        }),
    }
}

/// Assignment target columns in declaration order, rendered raw (escaping
/// preserved). Tuple targets are not simple identifiers.
pub(crate) fn assignment_columns(assignments: &[Assignment]) -> Result<Vec<String>> {
    assignments
        .iter()
        .map(|assignment| match &assignment.target {
            AssignmentTarget::ColumnName(name) => Ok(name.to_string()),
            other => Err(Error::MalformedColumnExpression {
                fragment: other.to_string(),
            }),
        })
        .collect()
}

/// Same columns with identifier escaping stripped.
pub(crate) fn assignment_columns_simplified(assignments: &[Assignment]) -> Result<Vec<String>> {
    assignments
        .iter()
        .map(|assignment| match &assignment.target {
            AssignmentTarget::ColumnName(name) => Ok(object_name_simplified(name)),
            other => Err(Error::MalformedColumnExpression {
                fragment: other.to_string(),
            }),
        })
        .collect()
}

/// Renders an object name with quoting stripped from each part.
pub(crate) fn object_name_simplified(name: &ObjectName) -> String {
    name.0
        .iter()
        .map(|part| match part {
            ObjectNamePart::Identifier(ident) => ident.value.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(".")
}
