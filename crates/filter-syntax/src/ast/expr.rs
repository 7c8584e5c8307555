use crate::ast::operator::BinaryOperator;
use serde::{Deserialize, Serialize};
use std::{fmt, mem};

/// Filter expression tree.
///
/// The set of node kinds is closed; consumers are expected to match it
/// exhaustively. Trees are never mutated after the parser builds them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Binary {
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Not {
        right: Box<Expression>,
    },
    /// Field (column) reference
    Identifier(String),
    /// Raw digits, numeric kind is decided downstream
    IntegerLiteral(String),
    StringLiteral(String),
    NullLiteral,
}

impl Expression {
    pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn not(right: Expression) -> Self {
        Expression::Not {
            right: Box::new(right),
        }
    }

    pub fn identifier(name: &str) -> Self {
        Expression::Identifier(name.to_string())
    }

    pub fn integer(raw: &str) -> Self {
        Expression::IntegerLiteral(raw.to_string())
    }

    pub fn string(value: &str) -> Self {
        Expression::StringLiteral(value.to_string())
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            match node {
                Expression::Binary { left, right, .. } => {
                    pending.push(left);
                    pending.push(right);
                }
                Expression::Not { right } => pending.push(right),
                _ => {}
            }
        }
        count
    }

    /// Moves the direct children onto `out`, leaving `null` leaves behind.
    fn detach_children(&mut self, out: &mut Vec<Expression>) {
        match self {
            Expression::Binary { left, right, .. } => {
                out.push(mem::replace(&mut **left, Expression::NullLiteral));
                out.push(mem::replace(&mut **right, Expression::NullLiteral));
            }
            Expression::Not { right } => {
                out.push(mem::replace(&mut **right, Expression::NullLiteral));
            }
            _ => {}
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Binary { .. } => write!(f, "({self})"),
            _ => write!(f, "{self}"),
        }
    }
}

// Parsed `and`/`or` chains are left spines as deep as the chain is long, so
// subtrees are released from a worklist instead of by recursion.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Binary {
                operator,
                left,
                right,
            } => {
                left.fmt_operand(f)?;
                write!(f, " {operator} ")?;
                right.fmt_operand(f)
            }
            Expression::Not { right } => {
                write!(f, "not ")?;
                right.fmt_operand(f)
            }
            Expression::Identifier(name) => write!(f, "{name}"),
            Expression::IntegerLiteral(raw) => write!(f, "{raw}"),
            Expression::StringLiteral(value) => write!(f, "'{}'", value.replace('\'', "''")),
            Expression::NullLiteral => write!(f, "null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_display() {
        let expr = Expression::binary(
            BinaryOperator::And,
            Expression::binary(
                BinaryOperator::Eq,
                Expression::identifier("name"),
                Expression::string("O'Brien"),
            ),
            Expression::not(Expression::binary(
                BinaryOperator::Gt,
                Expression::identifier("age"),
                Expression::integer("18"),
            )),
        );

        assert_eq!(
            format!("{expr}"),
            "(name eq 'O''Brien') and not (age gt 18)"
        );
    }

    #[test]
    fn test_node_count() {
        let expr = Expression::not(Expression::binary(
            BinaryOperator::Eq,
            Expression::identifier("email"),
            Expression::NullLiteral,
        ));
        assert_eq!(expr.node_count(), 4);
    }

    #[test]
    fn test_long_spine_counts_and_drops() {
        let leaf = || {
            Expression::binary(
                BinaryOperator::Eq,
                Expression::identifier("n"),
                Expression::integer("1"),
            )
        };
        let chain = (1..50_000).fold(leaf(), |acc, _| {
            Expression::binary(BinaryOperator::And, acc, leaf())
        });

        assert_eq!(chain.node_count(), 50_000 * 3 + 49_999);
        drop(chain);
    }
}
