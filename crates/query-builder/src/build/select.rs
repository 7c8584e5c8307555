//! Typestate builder for `Select` statements.
//!
//! The marker type parameter tracks which clauses have been supplied, so a
//! `WHERE` can only be attached once the statement has a `FROM` table.

use crate::ast::{
    common::{OrderDir, TableRef},
    expr::Expr,
    select::{FromClause, OrderByExpr, Select},
};
use std::marker::PhantomData;

/// Nothing supplied yet.
#[derive(Debug, Default, Clone)]
pub struct InitialState;

/// Projection supplied; a table is required next.
#[derive(Debug, Default, Clone)]
pub struct SelectState;

/// Table supplied; filtering, ordering and paging may follow.
#[derive(Debug, Default, Clone)]
pub struct FromState;

#[derive(Debug, Clone)]
pub struct SelectBuilder<State> {
    ast: Select,
    _state: PhantomData<State>,
}

impl<State> SelectBuilder<State> {
    fn advance<Next>(self) -> SelectBuilder<Next> {
        SelectBuilder {
            ast: self.ast,
            _state: PhantomData,
        }
    }
}

impl SelectBuilder<InitialState> {
    pub fn new() -> Self {
        Self {
            ast: Select::default(),
            _state: PhantomData,
        }
    }

    /// Sets the projection. An empty list selects `*`.
    pub fn select(mut self, columns: Vec<Expr>) -> SelectBuilder<SelectState> {
        self.ast.columns = columns;
        self.advance()
    }
}

impl Default for SelectBuilder<InitialState> {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectBuilder<SelectState> {
    pub fn from(mut self, table: TableRef, alias: Option<&str>) -> SelectBuilder<FromState> {
        self.ast.from = Some(FromClause {
            table,
            alias: alias.map(str::to_string),
        });
        self.advance()
    }
}

impl SelectBuilder<FromState> {
    /// Replaces the predicate.
    pub fn where_clause(mut self, predicate: Expr) -> Self {
        self.ast.where_clause = Some(predicate);
        self
    }

    /// Conjoins `predicate` with the current one, if any.
    pub fn and_where(mut self, predicate: Expr) -> Self {
        self.ast.where_clause = Some(match self.ast.where_clause.take() {
            Some(existing) => Expr::and(existing, predicate),
            None => predicate,
        });
        self
    }

    pub fn order_by(mut self, expr: Expr, direction: Option<OrderDir>) -> Self {
        self.ast.order_by.push(OrderByExpr { expr, direction });
        self
    }

    pub fn limit(mut self, limit: Expr) -> Self {
        self.ast.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: Expr) -> Self {
        self.ast.offset = Some(offset);
        self
    }

    pub fn build(self) -> Select {
        self.ast
    }
}
