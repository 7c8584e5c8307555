use crate::{error::CliError, query::RenderedQuery};
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

pub fn print_query(query: &RenderedQuery) {
    println!("{}", format_query(query));
}

fn format_query(query: &RenderedQuery) -> String {
    let params = query
        .params
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{:<8} {}\n{:<8} {}\n{:<8} [{}]",
        "Dialect", query.dialect, "SQL", query.sql, "Params", params
    )
}
