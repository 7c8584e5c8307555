//! Compiles filter expression trees into parameterized SQL predicates.
//!
//! The compiler is total: sub-trees that cannot be expressed as a predicate
//! compile to `None` and are dropped from the enclosing conjunction or
//! disjunction. User supplied literals are always bound as parameters.

use filter_syntax::ast::expr::Expression;
use query_builder::ast::expr::Expr;

pub mod compiler;
pub mod filter;
pub mod literal;
pub mod sql;

pub use compiler::FilterCompiler;
pub use filter::SqlFilter;
pub use sql::SqlFilterCompiler;

/// Compiles a single expression tree.
pub fn compile(expr: &Expression) -> Option<Expr> {
    sql::compile_sql_expr(expr)
}

/// Compiles the (possibly absent) result of parsing a filter string.
/// An empty filter imposes no constraint.
pub fn where_clause(expr: Option<&Expression>) -> Option<Expr> {
    expr.and_then(compile)
}
