use crate::{
    ast::expr::{BinaryOp, BinaryOperator, Expr, Ident, RAW_PLACEHOLDER, RawExpr},
    render::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Identifier(ident) => ident.render(r),
            Expr::Value(val) => r.add_param(val.clone()),
            Expr::BinaryOp(op) => op.render(r),
            Expr::And(children) => render_junction(children, " AND ", "1 = 1", r),
            Expr::Or(children) => {
                r.sql.push('(');
                render_junction(children, " OR ", "1 = 0", r);
                r.sql.push(')');
            }
            Expr::Not(inner) => render_not(inner, r),
            Expr::Raw(raw) => raw.render(r),
        }
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) {
        r.push_qualified(self.qualifier.as_deref(), &self.name);
    }
}

impl Render for BinaryOp {
    fn render(&self, r: &mut Renderer) {
        render_comparison(&self.left, self.op, &self.right, r);
    }
}

impl Render for RawExpr {
    fn render(&self, r: &mut Renderer) {
        let mut args = self.args.iter();
        for ch in self.sql.chars() {
            if ch != RAW_PLACEHOLDER {
                r.sql.push(ch);
                continue;
            }
            match args.next() {
                Some(arg) => render_operand(arg, r),
                None => r.sql.push(ch),
            }
        }
    }
}

/// `=`/`<>` against NULL become `IS NULL`/`IS NOT NULL` and bind nothing.
fn render_comparison(left: &Expr, op: BinaryOperator, right: &Expr, r: &mut Renderer) {
    render_operand(left, r);

    if let Expr::Value(val) = right
        && val.is_null()
    {
        match op {
            BinaryOperator::Eq => return r.sql.push_str(" IS NULL"),
            BinaryOperator::NotEq => return r.sql.push_str(" IS NOT NULL"),
            _ => {}
        }
    }

    r.sql.push(' ');
    r.sql.push_str(op.symbol());
    r.sql.push(' ');
    render_operand(right, r);
}

fn render_junction(children: &[Expr], separator: &str, empty: &str, r: &mut Renderer) {
    if children.is_empty() {
        r.sql.push_str(empty);
        return;
    }

    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            r.sql.push_str(separator);
        }
        match child {
            Expr::And(inner) if inner.len() > 1 => r.wrap_parens(child),
            _ => child.render(r),
        }
    }
}

/// A negated comparison is rendered as the complementary comparison.
fn render_not(inner: &Expr, r: &mut Renderer) {
    match inner {
        Expr::BinaryOp(op) => render_comparison(&op.left, op.op.negate(), &op.right, r),
        Expr::Or(_) => {
            r.sql.push_str("NOT ");
            inner.render(r);
        }
        _ => {
            r.sql.push_str("NOT ");
            r.wrap_parens(inner);
        }
    }
}

/// Renders an operand of a comparison or raw template.
fn render_operand(expr: &Expr, r: &mut Renderer) {
    if needs_parens(expr) {
        r.wrap_parens(expr);
    } else {
        expr.render(r);
    }
}

fn needs_parens(expr: &Expr) -> bool {
    match expr {
        Expr::And(children) => match children.as_slice() {
            [single] => needs_parens(single),
            _ => true,
        },
        Expr::Not(_) | Expr::BinaryOp(_) => true,
        Expr::Raw(raw) => !raw.args.is_empty(),
        Expr::Identifier(_) | Expr::Value(_) | Expr::Or(_) => false,
    }
}
