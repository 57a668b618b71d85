use thiserror::Error;

use crate::expression::{ExpressionError, Value};
use crate::utils::UtilsError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Expression evaluation error: {0}")]
    ExpressionError(#[from] ExpressionError),
    #[error("Input error: {0}")]
    UtilsError(#[from] UtilsError),
    #[error("Expression uses {leaves:?}, which are not all available")]
    NotASubBag { leaves: Vec<Value> },
    #[error("Expression evaluates to {actual}, expected {expected}")]
    WrongValue { expected: Value, actual: Value },
}
