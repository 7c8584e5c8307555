/// Wraps a [`Value`](crate::value::Value) as a bound expression.
#[macro_export]
macro_rules! value {
    ($val:expr) => {
        $crate::ast::expr::Expr::Value($val)
    };
}

/// `table_ref!("users")` or `table_ref!("public", "users")`.
#[macro_export]
macro_rules! table_ref {
    ($name:expr) => {
        $crate::ast::common::TableRef {
            schema: None,
            name: ($name).to_string(),
        }
    };
    ($schema:expr, $name:expr) => {
        $crate::ast::common::TableRef {
            schema: Some(($schema).to_string()),
            name: ($name).to_string(),
        }
    };
}

/// Column expression, optionally qualified: `ident!("id")`, `ident!("u", "id")`.
/// Unlike [`Expr::column`](crate::ast::expr::Expr::column), dots in the name
/// are kept as part of the identifier.
#[macro_export]
macro_rules! ident {
    ($name:expr) => {
        $crate::ast::expr::Expr::Identifier($crate::ast::expr::Ident::new($name))
    };
    ($qualifier:expr, $name:expr) => {
        $crate::ast::expr::Expr::Identifier($crate::ast::expr::Ident::qualified($qualifier, $name))
    };
}
