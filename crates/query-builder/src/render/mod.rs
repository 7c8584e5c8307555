//! Turns query ASTs into SQL text plus the values bound to its placeholders.

use crate::{dialect::Dialect, value::Value};

pub mod expr;
pub mod select;

pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// Output buffer for a single statement or fragment.
///
/// Placeholder numbering follows `params`, so fragments rendered into the
/// same `Renderer` share one parameter list.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<Value>,
    pub dialect: &'a dyn Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
        }
    }

    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    /// Binds `value` and writes its placeholder.
    pub fn add_param(&mut self, value: Value) {
        let placeholder = self.dialect.get_placeholder(self.params.len());
        self.sql.push_str(&placeholder);
        self.params.push(value);
    }

    pub fn push_ident(&mut self, ident: &str) {
        let quoted = self.dialect.quote_identifier(ident);
        self.sql.push_str(&quoted);
    }

    /// `qualifier.name`, each dot-separated segment quoted separately:
    /// `db.users` + `id` becomes `` `db`.`users`.`id` ``.
    pub fn push_qualified(&mut self, qualifier: Option<&str>, name: &str) {
        for segment in qualifier.into_iter().flat_map(|q| q.split('.')) {
            self.push_ident(segment);
            self.sql.push('.');
        }
        self.push_ident(name);
    }

    pub fn wrap_parens(&mut self, node: &dyn Render) {
        self.sql.push('(');
        node.render(self);
        self.sql.push(')');
    }
}

/// Renders a single node with a fresh renderer.
pub fn render_sql(node: &dyn Render, dialect: &dyn Dialect) -> (String, Vec<Value>) {
    let mut renderer = Renderer::new(dialect);
    node.render(&mut renderer);
    renderer.finish()
}
