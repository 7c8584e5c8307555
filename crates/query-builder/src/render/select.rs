use crate::{
    ast::{
        common::TableRef,
        expr::Expr,
        select::{FromClause, OrderByExpr, Select},
    },
    render::{Render, Renderer},
};

impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("SELECT ");
        if self.columns.is_empty() {
            r.sql.push('*');
        } else {
            comma_separated(&self.columns, r);
        }

        if let Some(from) = &self.from {
            r.sql.push(' ');
            from.render(r);
        }

        optional_clause(" WHERE ", self.where_clause.as_ref(), r);

        if !self.order_by.is_empty() {
            r.sql.push_str(" ORDER BY ");
            comma_separated(&self.order_by, r);
        }

        optional_clause(" LIMIT ", self.limit.as_ref(), r);
        optional_clause(" OFFSET ", self.offset.as_ref(), r);
    }
}

fn optional_clause(keyword: &str, node: Option<&Expr>, r: &mut Renderer) {
    if let Some(node) = node {
        r.sql.push_str(keyword);
        node.render(r);
    }
}

fn comma_separated<T: Render>(items: &[T], r: &mut Renderer) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            r.sql.push_str(", ");
        }
        item.render(r);
    }
}

impl Render for TableRef {
    fn render(&self, r: &mut Renderer) {
        r.push_qualified(self.schema.as_deref(), &self.name);
    }
}

impl Render for FromClause {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("FROM ");
        self.table.render(r);
        if let Some(alias) = &self.alias {
            r.sql.push_str(" AS ");
            r.push_ident(alias);
        }
    }
}

impl Render for OrderByExpr {
    fn render(&self, r: &mut Renderer) {
        self.expr.render(r);
        if let Some(dir) = self.direction {
            r.sql.push(' ');
            r.sql.push_str(dir.keyword());
        }
    }
}
