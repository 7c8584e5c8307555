pub mod expr;
pub mod operator;
