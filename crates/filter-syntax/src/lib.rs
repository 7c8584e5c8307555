pub mod ast;
pub mod error;
pub mod parser;

pub use ast::{expr::Expression, operator::BinaryOperator};
pub use error::ParseError;
pub use parser::parse;
