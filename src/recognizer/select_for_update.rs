//! SELECT ... FOR UPDATE statement recognizer
//!
//! A plain SELECT takes no row locks and needs no compensation, so the
//! recognizer is only constructible when the query carries an exclusive lock
//! clause.

use sqlparser::ast::{Expr, LockType, Query, Select, SetExpr};

use crate::error::{Error, Result};
use crate::flavor::Flavor;
use crate::params::ParametersHolder;
use crate::projection::{self, WhereProjection};
use crate::recognizer::single_table_parts;

/// Recognizes `SELECT ... FROM <table> [WHERE ...] [LIMIT ...] FOR UPDATE`.
#[derive(Debug)]
pub struct SelectForUpdateRecognizer {
    sql: String,
    ast: Query,
    flavor: Flavor,
}

impl SelectForUpdateRecognizer {
    /// Returns `None` unless the query is actually marked FOR UPDATE.
    pub fn new(sql: String, ast: Query, flavor: Flavor) -> Option<Self> {
        let exclusive = ast
            .locks
            .iter()
            .any(|lock| matches!(lock.lock_type, LockType::Update));
        exclusive.then_some(Self { sql, ast, flavor })
    }

    pub fn original_sql(&self) -> &str {
        &self.sql
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn table_name(&self) -> Result<String> {
        let select = self.select()?;
        single_table_parts(&select.from).map(|(name, _)| name)
    }

    pub fn table_alias(&self) -> Result<Option<String>> {
        let select = self.select()?;
        single_table_parts(&select.from).map(|(_, alias)| alias)
    }

    pub fn where_condition(&self) -> Result<String> {
        Ok(projection::render_where(self.selection()?))
    }

    pub fn where_condition_with(&self, holder: &dyn ParametersHolder) -> Result<WhereProjection> {
        projection::project_where(self.selection()?, holder)
    }

    pub fn limit_condition(&self) -> Result<String> {
        projection::render_limit(self.ast.limit_clause.as_ref())
    }

    fn selection(&self) -> Result<Option<&Expr>> {
        Ok(self.select()?.selection.as_ref())
    }

    /// The first (and only supported) query block.
    fn select(&self) -> Result<&Select> {
        match self.ast.body.as_ref() {
            SetExpr::Select(select) => Ok(select),
            other => Err(Error::UnsupportedConstruct {
                fragment: other.to_string(),
            }),
        }
    }
}
