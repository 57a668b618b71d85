use thiserror::Error;

use crate::expression::Value;

/// Errors that can occur while reading a puzzle
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Input is empty, expected a target followed by numbers")]
    EmptyInput,
    #[error("Target must be an integer: {0}")]
    InvalidTarget(String),
    #[error("Target must be positive: {0}")]
    NonPositiveTarget(Value),
}
