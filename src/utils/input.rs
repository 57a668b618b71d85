use log::{debug, warn};

use crate::expression::Value;
use crate::utils::errors::UtilsError;

/// A target together with the numbers available to reach it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub target: Value,
    pub numbers: Vec<Value>,
}

/// Read a puzzle from whitespace separated text.
///
/// The first token is the target. Numbers follow until the end of the input
/// or the first token that is not an integer; anything after that is ignored.
///
/// # Errors
///
/// Returns an error if the input has no tokens or the first token is not an integer.
pub fn parse_input(text: &str) -> Result<Puzzle, UtilsError> {
    let mut tokens = text.split_whitespace();

    let first = tokens.next().ok_or(UtilsError::EmptyInput)?;
    let target = first
        .parse::<Value>()
        .map_err(|_| UtilsError::InvalidTarget(first.to_string()))?;

    let mut numbers = Vec::new();
    for token in tokens {
        match token.parse::<Value>() {
            Ok(number) => numbers.push(number),
            Err(_) => {
                warn!("Stopped reading numbers at non-numeric token '{}'", token);
                break;
            }
        }
    }

    debug!("Parsed target {} with numbers {:?}", target, numbers);
    Ok(Puzzle { target, numbers })
}
