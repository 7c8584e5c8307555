//! Defines the AST for SQL expressions and WHERE predicates.

use crate::{error::QueryBuildError, value::Value};

/// Marker replaced by one argument when a [`RawExpr`] is rendered.
pub const RAW_PLACEHOLDER: char = '?';

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column or table identifier, e.g., `users` or `users.id`.
    Identifier(Ident),

    /// A literal value. Always rendered as a bound parameter.
    Value(Value),

    /// A comparison, e.g., `column = 'value'`.
    BinaryOp(Box<BinaryOp>),

    /// Conjunction of the children, in order.
    And(Vec<Expr>),

    /// Disjunction of the children, in order.
    Or(Vec<Expr>),

    /// Logical negation.
    Not(Box<Expr>),

    /// A SQL template whose `?` markers are filled with rendered arguments,
    /// e.g. `? > ?` with two columns.
    Raw(RawExpr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>, // e.g., the 'users' in 'users.id', may itself be dotted
    pub name: String,              // e.g., the 'id' in 'users.id'
}

impl Ident {
    pub fn new(name: &str) -> Self {
        Ident {
            qualifier: None,
            name: name.to_string(),
        }
    }

    pub fn qualified(qualifier: &str, name: &str) -> Self {
        Ident {
            qualifier: Some(qualifier.to_string()),
            name: name.to_string(),
        }
    }

    /// Splits a dotted path on its last `.`: `users.id` becomes
    /// qualifier `users`, name `id`.
    pub fn from_path(path: &str) -> Self {
        match path.rsplit_once('.') {
            Some((qualifier, name)) if !qualifier.is_empty() && !name.is_empty() => {
                Ident::qualified(qualifier, name)
            }
            _ => Ident::new(path),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Eq,    // =
    NotEq, // <>
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Eq => "=",
            BinaryOperator::NotEq => "<>",
            BinaryOperator::Lt => "<",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::GtEq => ">=",
        }
    }

    /// The complementary comparison: `NOT (a op b)` == `a op.negate() b`.
    pub fn negate(&self) -> Self {
        match self {
            BinaryOperator::Eq => BinaryOperator::NotEq,
            BinaryOperator::NotEq => BinaryOperator::Eq,
            BinaryOperator::Lt => BinaryOperator::GtEq,
            BinaryOperator::LtEq => BinaryOperator::Gt,
            BinaryOperator::Gt => BinaryOperator::LtEq,
            BinaryOperator::GtEq => BinaryOperator::Lt,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawExpr {
    pub sql: String,
    pub args: Vec<Expr>,
}

impl RawExpr {
    /// Builds a raw template, checking that every `?` has an argument.
    pub fn new(sql: impl Into<String>, args: Vec<Expr>) -> Result<Self, QueryBuildError> {
        let sql = sql.into();
        let placeholders = sql.matches(RAW_PLACEHOLDER).count();
        if placeholders != args.len() {
            return Err(QueryBuildError::PlaceholderMismatch {
                sql,
                placeholders,
                args: args.len(),
            });
        }
        Ok(RawExpr { sql, args })
    }

    /// `<left> <op> <right>` with both sides bound as arguments.
    pub fn comparison(
        left: Expr,
        op: BinaryOperator,
        right: Expr,
    ) -> Result<Self, QueryBuildError> {
        let sql = format!("{RAW_PLACEHOLDER} {} {RAW_PLACEHOLDER}", op.symbol());
        RawExpr::new(sql, vec![left, right])
    }

    /// A bare SQL keyword such as `NULL`.
    pub fn keyword(keyword: &'static str) -> Result<Self, QueryBuildError> {
        RawExpr::new(keyword, Vec::new())
    }
}

impl Expr {
    /// Column reference; dotted paths become qualified identifiers.
    pub fn column(path: &str) -> Self {
        Expr::Identifier(Ident::from_path(path))
    }

    pub fn compare(left: Expr, op: BinaryOperator, right: Expr) -> Self {
        Expr::BinaryOp(Box::new(BinaryOp { left, op, right }))
    }

    /// `left AND right`, flattening nested conjunctions.
    ///
    /// A left conjunction is extended in place, so folding a chain of `n`
    /// operands costs `O(n)`.
    pub fn and(left: Expr, right: Expr) -> Self {
        let mut children = match left {
            Expr::And(inner) => inner,
            other => vec![other],
        };
        match right {
            Expr::And(inner) => children.extend(inner),
            other => children.push(other),
        }
        Expr::And(children)
    }

    /// `left OR right`, flattening nested disjunctions.
    pub fn or(left: Expr, right: Expr) -> Self {
        let mut children = match left {
            Expr::Or(inner) => inner,
            other => vec![other],
        };
        match right {
            Expr::Or(inner) => children.extend(inner),
            other => children.push(other),
        }
        Expr::Or(children)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: Expr) -> Self {
        Expr::Not(Box::new(inner))
    }

    pub fn raw(sql: impl Into<String>, args: Vec<Expr>) -> Result<Self, QueryBuildError> {
        RawExpr::new(sql, args).map(Expr::Raw)
    }

    /// Values bound by this expression, in render order.
    pub fn params(&self) -> Vec<&Value> {
        let mut out = Vec::new();
        self.collect_params(&mut out);
        out
    }

    fn collect_params<'a>(&'a self, out: &mut Vec<&'a Value>) {
        match self {
            Expr::Identifier(_) => {}
            Expr::Value(val) => out.push(val),
            Expr::BinaryOp(op) => {
                op.left.collect_params(out);
                // IS [NOT] NULL binds nothing
                let null_check = matches!(&op.right, Expr::Value(v) if v.is_null())
                    && matches!(op.op, BinaryOperator::Eq | BinaryOperator::NotEq);
                if !null_check {
                    op.right.collect_params(out);
                }
            }
            Expr::And(children) | Expr::Or(children) => {
                children.iter().for_each(|c| c.collect_params(out))
            }
            Expr::Not(inner) => inner.collect_params(out),
            Expr::Raw(raw) => raw.args.iter().for_each(|a| a.collect_params(out)),
        }
    }
}
