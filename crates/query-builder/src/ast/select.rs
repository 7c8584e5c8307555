use crate::ast::{
    common::{OrderDir, TableRef},
    expr::Expr,
};

/// `SELECT <columns> FROM <from> WHERE <where_clause> ORDER BY ... LIMIT ... OFFSET ...`
///
/// Every clause except the projection is optional; an empty projection
/// renders as `*`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Select {
    pub columns: Vec<Expr>,
    pub from: Option<FromClause>,
    pub where_clause: Option<Expr>,
    pub order_by: Vec<OrderByExpr>,
    pub limit: Option<Expr>,
    pub offset: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    pub table: TableRef,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub expr: Expr,
    /// `None` leaves the direction to the database default.
    pub direction: Option<OrderDir>,
}
