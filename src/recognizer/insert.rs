//! INSERT statement recognizer

use sqlparser::ast::{Insert, OnConflictAction, OnInsert, SetExpr, TableObject, Values};

use crate::error::{Error, Result};
use crate::flavor::Flavor;
use crate::recognizer::assignment_columns;
use crate::types::ValueMarker;

/// Recognizes `INSERT INTO <table> [(columns)] VALUES (...), (...)`.
#[derive(Debug)]
pub struct InsertRecognizer {
    sql: String,
    ast: Insert,
    flavor: Flavor,
}

impl InsertRecognizer {
    pub fn new(sql: String, ast: Insert, flavor: Flavor) -> Self {
        Self { sql, ast, flavor }
    }

    pub fn original_sql(&self) -> &str {
        &self.sql
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn table_name(&self) -> Result<String> {
        match &self.ast.table {
            TableObject::TableName(name) => Ok(name.to_string()),
            other => Err(Error::UnsupportedConstruct {
                fragment: other.to_string(),
            }),
        }
    }

    pub fn table_alias(&self) -> Option<String> {
        self.ast.table_alias.as_ref().map(|ident| ident.value.clone())
    }

    /// True when the statement declares no columns clause, meaning every
    /// table column is implied. Distinct from an explicit zero-column clause,
    /// which sqlparser rejects at parse time.
    pub fn columns_is_empty(&self) -> bool {
        self.ast.columns.is_empty()
    }

    /// Declared column names, raw (escaping preserved). `None` when the
    /// statement has no columns clause.
    pub fn insert_columns(&self) -> Option<Vec<String>> {
        if self.ast.columns.is_empty() {
            return None;
        }
        Some(self.ast.columns.iter().map(ToString::to_string).collect())
    }

    /// Declared column names with identifier escaping stripped.
    pub fn insert_columns_simplified(&self) -> Option<Vec<String>> {
        if self.ast.columns.is_empty() {
            return None;
        }
        Some(
            self.ast
                .columns
                .iter()
                .map(|ident| ident.value.clone())
                .collect(),
        )
    }

    /// Classifies every VALUES clause into a row of value markers.
    ///
    /// `primary_key_indices` lists the positions (within the declared column
    /// order) whose values the compensation layer must be able to resolve. A
    /// key position classifying [`ValueMarker::Unresolved`] fails the whole
    /// extraction; non-key positions keep `Unresolved` as a harmless
    /// cannot-determine placeholder.
    pub fn insert_rows(&self, primary_key_indices: &[usize]) -> Result<Vec<Vec<ValueMarker>>> {
        let values = self.values()?;
        let mut rows = Vec::with_capacity(values.rows.len());
        for clause in &values.rows {
            let mut row = Vec::with_capacity(clause.len());
            for (position, expr) in clause.iter().enumerate() {
                let marker = ValueMarker::classify(expr);
                if matches!(marker, ValueMarker::Unresolved)
                    && primary_key_indices.contains(&position)
                {
                    return Err(Error::UnresolvableKeyExpression {
                        fragment: expr.to_string(),
                    });
                }
                row.push(marker);
            }
            rows.push(row);
        }
        Ok(rows)
    }

    /// The textual content of each VALUES clause with the surrounding
    /// parentheses stripped. Degenerate clauses whose trimmed text is a
    /// single character or less are returned unchanged.
    pub fn raw_insert_values(&self) -> Result<Vec<String>> {
        let values = self.values()?;
        let mut lists = Vec::with_capacity(values.rows.len());
        for clause in &values.rows {
            let rendered = format!(
                "({})",
                clause
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            let mut text = rendered.trim().to_string();
            if text.len() > 1 {
                text = text[1..text.len() - 1].to_string();
            }
            lists.push(text);
        }
        Ok(lists)
    }

    /// Columns assigned by the duplicate-key-update clause, or empty when the
    /// clause is absent or the flavor has no such construct.
    pub fn duplicate_key_update(&self) -> Result<Vec<String>> {
        if !self.flavor.has_duplicate_key_update() {
            return Ok(Vec::new());
        }
        match &self.ast.on {
            None => Ok(Vec::new()),
            Some(OnInsert::DuplicateKeyUpdate(assignments)) => assignment_columns(assignments),
            Some(OnInsert::OnConflict(conflict)) => match &conflict.action {
                OnConflictAction::DoUpdate(update) => assignment_columns(&update.assignments),
                _ => Ok(Vec::new()),
            },
            Some(other) => Err(Error::UnsupportedConstruct {
                fragment: format!("{other:?}"),
            }),
        }
    }

    fn values(&self) -> Result<&Values> {
        let source = self.ast.source.as_ref().ok_or(Error::UnsupportedConstruct {
            fragment: self.sql.clone(),
        })?;
        match source.body.as_ref() {
            SetExpr::Values(values) => Ok(values),
            other => Err(Error::UnsupportedConstruct {
                fragment: other.to_string(),
            }),
        }
    }
}
