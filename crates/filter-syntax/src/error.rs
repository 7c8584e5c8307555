use crate::parser::Rule;
use pest::error::{Error as PestError, LineColLocation};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The input does not match the filter grammar.
    #[error("Syntax error at {line}:{column}: {message}")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
        /// The offending source line, for caret diagnostics.
        source_snippet: String,
    },

    #[error("Unexpected token '{token}' at {line}:{column}")]
    UnexpectedToken {
        token: String,
        line: usize,
        column: usize,
    },

    #[error("Incomplete {0} expression")]
    Incomplete(&'static str),
}

impl From<PestError<Rule>> for ParseError {
    fn from(err: PestError<Rule>) -> Self {
        let (line, column) = match err.line_col {
            LineColLocation::Pos(start) | LineColLocation::Span(start, _) => start,
        };

        ParseError::Syntax {
            message: err.variant.message().into_owned(),
            line,
            column,
            source_snippet: err.line().to_string(),
        }
    }
}

impl ParseError {
    /// The error message followed by the offending line with a caret under
    /// the reported column. Errors without a source location render as their
    /// message alone.
    pub fn format_error(&self) -> String {
        let ParseError::Syntax {
            column,
            source_snippet,
            ..
        } = self
        else {
            return self.to_string();
        };

        format!("{self}\n{source_snippet}\n{:>column$}", "^")
    }
}
