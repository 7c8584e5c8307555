use crate::{compiler::FilterCompiler, filter::SqlFilter, literal::integer_value};
use filter_syntax::ast::{expr::Expression, operator::BinaryOperator};
use query_builder::{
    ast::expr::{BinaryOperator as Comparator, Expr, RawExpr},
    error::QueryBuildError,
    value::Value,
};
use tracing::{debug, warn};

pub struct SqlFilterCompiler;

impl FilterCompiler for SqlFilterCompiler {
    type Filter = SqlFilter;

    fn compile(expr: &Expression) -> Self::Filter {
        match compile_sql_expr(expr) {
            Some(sql_expr) => SqlFilter::with_expr(sql_expr),
            None => SqlFilter::new(),
        }
    }
}

pub(crate) fn compile_sql_expr(expr: &Expression) -> Option<Expr> {
    match expr {
        Expression::Binary { operator, .. } if operator.is_logical() => {
            compile_logical_chain(*operator, expr)
        }

        Expression::Binary {
            operator,
            left,
            right,
        } => compile_comparison(*operator, left, right),

        Expression::Not { right } => compile_sql_expr(right).map(Expr::not),

        Expression::Identifier(name) => Some(Expr::column(name)),
        Expression::IntegerLiteral(raw) => Some(Expr::Value(integer_value(raw))),
        Expression::StringLiteral(text) => Some(Expr::Value(Value::String(text.clone()))),
        Expression::NullLiteral => raw(RawExpr::keyword("NULL")),
    }
}

/// Compiles a run of one logical operator without recursing down its spine.
///
/// The parser builds `a and b and c` as `((a and b) and c)`, so long chains
/// are deep left spines. The operands are collected with a loop and folded
/// left to right through [`combine_logical`].
fn compile_logical_chain(operator: BinaryOperator, expr: &Expression) -> Option<Expr> {
    let mut operands = Vec::new();
    let mut node = expr;
    while let Expression::Binary {
        operator: op,
        left,
        right,
    } = node
        && *op == operator
    {
        operands.push(&**right);
        node = &**left;
    }
    operands.push(node);

    let mut compiled = operands.into_iter().rev().map(compile_sql_expr);
    let first = compiled.next().flatten();
    compiled.fold(first, |acc, next| combine_logical(operator, acc, next))
}

/// Joins the compiled operands of `and`/`or`.
///
/// When only one side is expressible the other is dropped and the surviving
/// side stands for the whole node.
fn combine_logical(
    operator: BinaryOperator,
    left: Option<Expr>,
    right: Option<Expr>,
) -> Option<Expr> {
    let join = match operator {
        BinaryOperator::And => Expr::and,
        BinaryOperator::Or => Expr::or,
        _ => return None,
    };

    match (left, right) {
        (Some(l), Some(r)) => Some(join(l, r)),
        (Some(only), None) | (None, Some(only)) => {
            debug!("Dropping inexpressible operand of '{operator}'");
            Some(only)
        }
        (None, None) => {
            debug!("Both operands of '{operator}' are inexpressible");
            None
        }
    }
}

fn compile_comparison(
    operator: BinaryOperator,
    left: &Expression,
    right: &Expression,
) -> Option<Expr> {
    let comparator = comparator(operator)?;

    if let Some(leaf) = split_sides(comparator, left, right) {
        return Some(leaf);
    }

    // Anything other than `column <op> literal` is compared as two bound
    // sub-expressions.
    match (compile_sql_expr(left), compile_sql_expr(right)) {
        (Some(l), Some(r)) => {
            debug!("Compiling '{left} {operator} {right}' as a raw comparison");
            raw(RawExpr::comparison(l, comparator, r))
        }
        _ => {
            debug!("Dropping comparison '{left} {operator} {right}'");
            None
        }
    }
}

fn raw(built: Result<RawExpr, QueryBuildError>) -> Option<Expr> {
    match built {
        Ok(raw) => Some(Expr::Raw(raw)),
        Err(err) => {
            warn!("Dropping raw expression: {err}");
            None
        }
    }
}

/// Recognizes `column <op> literal`. `null` only pairs with `eq`/`ne`.
fn split_sides(comparator: Comparator, left: &Expression, right: &Expression) -> Option<Expr> {
    let Expression::Identifier(column) = left else {
        return None;
    };

    let value = match right {
        Expression::IntegerLiteral(raw) => integer_value(raw),
        Expression::StringLiteral(text) => Value::String(text.clone()),
        Expression::NullLiteral if matches!(comparator, Comparator::Eq | Comparator::NotEq) => {
            Value::Null
        }
        _ => return None,
    };

    Some(Expr::compare(
        Expr::column(column),
        comparator,
        Expr::Value(value),
    ))
}

fn comparator(operator: BinaryOperator) -> Option<Comparator> {
    match operator {
        BinaryOperator::Eq => Some(Comparator::Eq),
        BinaryOperator::Ne => Some(Comparator::NotEq),
        BinaryOperator::Gt => Some(Comparator::Gt),
        BinaryOperator::Ge => Some(Comparator::GtEq),
        BinaryOperator::Lt => Some(Comparator::Lt),
        BinaryOperator::Le => Some(Comparator::LtEq),
        BinaryOperator::And | BinaryOperator::Or => None,
    }
}
