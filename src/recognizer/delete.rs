//! DELETE statement recognizer

use sqlparser::ast::{Delete, Expr, FromTable};

use crate::error::Result;
use crate::flavor::Flavor;
use crate::params::ParametersHolder;
use crate::projection::{self, WhereProjection};
use crate::recognizer::single_table_parts;

/// Recognizes `DELETE FROM <table> [WHERE ...] [LIMIT ...]`.
#[derive(Debug)]
pub struct DeleteRecognizer {
    sql: String,
    ast: Delete,
    flavor: Flavor,
}

impl DeleteRecognizer {
    pub fn new(sql: String, ast: Delete, flavor: Flavor) -> Self {
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
        let tables = match &self.ast.from {
            FromTable::WithFromKeyword(tables) | FromTable::WithoutKeyword(tables) => tables,
        };
        single_table_parts(tables)
    }
}
