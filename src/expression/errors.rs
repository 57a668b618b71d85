use thiserror::Error;

use crate::expression::ast::{Operator, Value};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Leaf {0} is not a positive integer")]
    NonPositiveLeaf(Value),
    #[error("Illegal operation {left} {operator} {right}")]
    InvalidOperation {
        operator: Operator,
        left: Value,
        right: Value,
    },
    #[error("Overflow in {left} {operator} {right}")]
    Overflow {
        operator: Operator,
        left: Value,
        right: Value,
    },
}
