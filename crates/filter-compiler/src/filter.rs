use crate::{compiler::FilterCompiler, sql::SqlFilterCompiler};
use filter_syntax::ast::expr::Expression;
use query_builder::{
    ast::expr::Expr,
    build::select::{FromState, SelectBuilder},
    dialect::Dialect,
    render::render_sql,
    value::Value,
};

/// A compiled WHERE predicate, possibly empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlFilter {
    pub expr: Option<Expr>,
}

impl SqlFilter {
    pub fn new() -> Self {
        SqlFilter { expr: None }
    }

    pub fn with_expr(expr: Expr) -> Self {
        SqlFilter { expr: Some(expr) }
    }

    pub fn from_expression(expr: &Expression) -> Self {
        SqlFilterCompiler::compile(expr)
    }

    pub fn is_empty(&self) -> bool {
        self.expr.is_none()
    }

    /// Adds the predicate to a query under construction. Without a predicate
    /// the builder is returned untouched.
    pub fn apply(&self, builder: SelectBuilder<FromState>) -> SelectBuilder<FromState> {
        match &self.expr {
            Some(expr) => builder.and_where(expr.clone()),
            None => builder,
        }
    }

    /// Render " WHERE ..." with its bound parameters, or an empty string if no expr.
    pub fn to_sql(&self, dialect: &dyn Dialect) -> (String, Vec<Value>) {
        match &self.expr {
            Some(expr) => {
                let (sql, params) = render_sql(expr, dialect);
                (format!(" WHERE {sql}"), params)
            }
            None => (String::new(), Vec::new()),
        }
    }
}

impl From<Option<Expr>> for SqlFilter {
    fn from(expr: Option<Expr>) -> Self {
        SqlFilter { expr }
    }
}
