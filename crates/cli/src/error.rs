use filter_syntax::error::ParseError;
use query_builder::error::QueryBuildError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to parse the filter: {0}")]
    FilterParse(#[from] ParseError),

    #[error("Failed to build the query: {0}")]
    QueryBuild(#[from] QueryBuildError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Invalid table name: '{0}'")]
    InvalidTable(String),
}
