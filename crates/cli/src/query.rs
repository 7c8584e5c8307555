use crate::error::CliError;
use filter_compiler::SqlFilter;
use query_builder::{
    ast::common::TableRef, build::select::SelectBuilder, dialect::Dialect, render::render_sql,
    value::Value,
};
use serde::Serialize;
use tracing::{debug, info};

/// SQL text and the parameters bound to its placeholders, in order.
#[derive(Debug, Serialize, PartialEq)]
pub struct RenderedQuery {
    pub dialect: String,
    pub sql: String,
    pub params: Vec<Value>,
}

/// Parses and compiles `filter`, rendering either the bare WHERE clause or a
/// `SELECT *` over `table`.
pub fn render_filter(
    filter: &str,
    dialect: &dyn Dialect,
    table: Option<&str>,
) -> Result<RenderedQuery, CliError> {
    let tree = filter_syntax::parse(filter)?;
    let sql_filter = tree
        .as_ref()
        .map(SqlFilter::from_expression)
        .unwrap_or_default();

    if sql_filter.is_empty() {
        info!("Filter is empty; no predicate will be applied");
    }

    let (sql, params) = match table {
        Some(name) => {
            let builder = SelectBuilder::new()
                .select(vec![])
                .from(table_ref(name)?, None);
            render_sql(&sql_filter.apply(builder).build(), dialect)
        }
        None => {
            let (sql, params) = sql_filter.to_sql(dialect);
            (sql.trim_start().to_string(), params)
        }
    };

    debug!("Rendered {} SQL: {sql}", dialect.name());

    Ok(RenderedQuery {
        dialect: dialect.name(),
        sql,
        params,
    })
}

/// `schema.table` or `table`.
fn table_ref(name: &str) -> Result<TableRef, CliError> {
    let invalid = || CliError::InvalidTable(name.to_string());
    match name.split_once('.') {
        Some((schema, table)) if !schema.is_empty() && !table.is_empty() => Ok(TableRef {
            schema: Some(schema.to_string()),
            name: table.to_string(),
        }),
        Some(_) => Err(invalid()),
        None if name.trim().is_empty() => Err(invalid()),
        None => Ok(TableRef {
            schema: None,
            name: name.to_string(),
        }),
    }
}
