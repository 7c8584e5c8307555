use crate::{
    ast::{expr::Expression, operator::BinaryOperator},
    error::ParseError,
};
use pest::{Parser, iterators::Pair};
use pest_derive::Parser;
use tracing::trace;

#[derive(Parser)]
#[grammar = "filter.pest"]
pub struct FilterParser;

/// Parses a filter string into an expression tree.
///
/// An empty (or whitespace-only) filter is not an error: it yields `Ok(None)`,
/// meaning "no constraint".
pub fn parse(input: &str) -> Result<Option<Expression>, ParseError> {
    let filter = FilterParser::parse(Rule::filter, input)?
        .next()
        .ok_or(ParseError::Incomplete("filter"))?;

    let expr = filter
        .into_inner()
        .find(|pair| pair.as_rule() == Rule::or_expr)
        .map(build_expression)
        .transpose()?;

    trace!(
        input,
        nodes = expr.as_ref().map_or(0, Expression::node_count),
        "Parsed filter"
    );

    Ok(expr)
}

fn build_expression(pair: Pair<Rule>) -> Result<Expression, ParseError> {
    match pair.as_rule() {
        Rule::or_expr => build_chain(pair, BinaryOperator::Or),
        Rule::and_expr => build_chain(pair, BinaryOperator::And),
        Rule::not_expr => build_not(pair),
        Rule::comparison => build_comparison(pair),
        Rule::group => {
            let inner = pair
                .into_inner()
                .next()
                .ok_or(ParseError::Incomplete("grouped"))?;
            build_expression(inner)
        }
        Rule::identifier => Ok(Expression::Identifier(pair.as_str().to_string())),
        Rule::integer => Ok(Expression::IntegerLiteral(pair.as_str().to_string())),
        Rule::string => {
            // '' inside a quoted string is an escaped quote
            let raw = pair
                .into_inner()
                .next()
                .map(|inner| inner.as_str())
                .unwrap_or_default();
            Ok(Expression::StringLiteral(raw.replace("''", "'")))
        }
        Rule::kw_null => Ok(Expression::NullLiteral),
        _ => Err(unexpected(&pair)),
    }
}

/// Left-associative chain of `and` / `or` operands.
fn build_chain(pair: Pair<Rule>, operator: BinaryOperator) -> Result<Expression, ParseError> {
    let mut operands = pair
        .into_inner()
        .filter(|p| !matches!(p.as_rule(), Rule::kw_and | Rule::kw_or));

    let first = operands
        .next()
        .ok_or(ParseError::Incomplete(operator.keyword()))?;

    operands.try_fold(build_expression(first)?, |left, next| {
        Ok(Expression::binary(operator, left, build_expression(next)?))
    })
}

fn build_not(pair: Pair<Rule>) -> Result<Expression, ParseError> {
    let mut inner = pair.into_inner();
    let first = inner.next().ok_or(ParseError::Incomplete("not"))?;

    if first.as_rule() == Rule::kw_not {
        let operand = inner.next().ok_or(ParseError::Incomplete("not"))?;
        Ok(Expression::not(build_expression(operand)?))
    } else {
        build_expression(first)
    }
}

fn build_comparison(pair: Pair<Rule>) -> Result<Expression, ParseError> {
    let mut inner = pair.into_inner();
    let left = inner.next().ok_or(ParseError::Incomplete("comparison"))?;
    let left = build_expression(left)?;

    // A lone operand is a valid (if unusual) expression
    let Some(op) = inner.next() else {
        return Ok(left);
    };

    let operator = comparison_operator(&op)?;
    let right = inner.next().ok_or(ParseError::Incomplete("comparison"))?;

    Ok(Expression::binary(operator, left, build_expression(right)?))
}

fn comparison_operator(pair: &Pair<Rule>) -> Result<BinaryOperator, ParseError> {
    match pair.as_rule() {
        Rule::op_eq => Ok(BinaryOperator::Eq),
        Rule::op_ne => Ok(BinaryOperator::Ne),
        Rule::op_gt => Ok(BinaryOperator::Gt),
        Rule::op_ge => Ok(BinaryOperator::Ge),
        Rule::op_lt => Ok(BinaryOperator::Lt),
        Rule::op_le => Ok(BinaryOperator::Le),
        _ => Err(unexpected(pair)),
    }
}

fn unexpected(pair: &Pair<Rule>) -> ParseError {
    let (line, column) = pair.as_span().start_pos().line_col();
    ParseError::UnexpectedToken {
        token: pair.as_str().to_string(),
        line,
        column,
    }
}

#[cfg(test)]
mod tests;
