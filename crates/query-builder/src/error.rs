use thiserror::Error;

/// Errors raised while assembling query ASTs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QueryBuildError {
    /// A raw template's `?` markers don't line up with its arguments.
    #[error("Raw expression '{sql}' has {placeholders} placeholder(s) but {args} argument(s)")]
    PlaceholderMismatch {
        sql: String,
        placeholders: usize,
        args: usize,
    },

    #[error("Unknown SQL dialect: {0}")]
    UnknownDialect(String),
}
