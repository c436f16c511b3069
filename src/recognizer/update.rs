//! UPDATE statement recognizer

use sqlparser::ast::{Expr, Update};

use crate::error::Result;
use crate::flavor::Flavor;
use crate::params::ParametersHolder;
use crate::projection::{self, WhereProjection};
use crate::recognizer::{assignment_columns, assignment_columns_simplified, single_table_parts};
use crate::types::ValueMarker;

/// Recognizes `UPDATE <table> SET ... [WHERE ...] [LIMIT ...]`.
///
/// Beyond the shared surface it exposes the assignment list: the compensation
/// layer needs the updated columns to build the before/after row images.
#[derive(Debug)]
pub struct UpdateRecognizer {
    sql: String,
    ast: Update,
    flavor: Flavor,
}

impl UpdateRecognizer {
    pub fn new(sql: String, ast: Update, flavor: Flavor) -> Self {
        Self { sql, ast, flavor }
    }

    pub fn original_sql(&self) -> &str {
        &self.sql
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn table_name(&self) -> Result<String> {
        self.table_parts().map(|(name, _)| name)
    }

    pub fn table_alias(&self) -> Result<Option<String>> {
        self.table_parts().map(|(_, alias)| alias)
    }

    /// Assignment target columns, raw (escaping preserved).
    pub fn update_columns(&self) -> Result<Vec<String>> {
        assignment_columns(&self.ast.assignments)
    }

    /// Assignment target columns with identifier escaping stripped.
    pub fn update_columns_simplified(&self) -> Result<Vec<String>> {
        assignment_columns_simplified(&self.ast.assignments)
    }

    /// Classified assignment values, in assignment order.
    pub fn update_values(&self) -> Vec<ValueMarker> {
        self.ast
            .assignments
            .iter()
            .map(|assignment| ValueMarker::classify(&assignment.value))
            .collect()
    }

    pub fn where_condition(&self) -> String {
        projection::render_where(self.selection())
    }

    pub fn where_condition_with(&self, holder: &dyn ParametersHolder) -> Result<WhereProjection> {
        projection::project_where(self.selection(), holder)
    }

    pub fn limit_condition(&self) -> String {
        projection::render_limit_expr(self.ast.limit.as_ref())
    }

    fn selection(&self) -> Option<&Expr> {
        self.ast.selection.as_ref()
    }

    fn table_parts(&self) -> Result<(String, Option<String>)> {
        single_table_parts(std::slice::from_ref(&self.ast.table))
    }
}
