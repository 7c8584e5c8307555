use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Binary operators of the filter language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    And,
    Or,
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl BinaryOperator {
    /// `and` / `or`
    pub fn is_logical(&self) -> bool {
        matches!(self, BinaryOperator::And | BinaryOperator::Or)
    }

    pub fn is_comparison(&self) -> bool {
        !self.is_logical()
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            BinaryOperator::And => "and",
            BinaryOperator::Or => "or",
            BinaryOperator::Eq => "eq",
            BinaryOperator::Ne => "ne",
            BinaryOperator::Gt => "gt",
            BinaryOperator::Ge => "ge",
            BinaryOperator::Lt => "lt",
            BinaryOperator::Le => "le",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

impl FromStr for BinaryOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "and" => Ok(BinaryOperator::And),
            "or" => Ok(BinaryOperator::Or),
            "eq" => Ok(BinaryOperator::Eq),
            "ne" => Ok(BinaryOperator::Ne),
            "gt" => Ok(BinaryOperator::Gt),
            "ge" => Ok(BinaryOperator::Ge),
            "lt" => Ok(BinaryOperator::Lt),
            "le" => Ok(BinaryOperator::Le),
            other => Err(format!("Unknown operator: {other}")),
        }
    }
}
