use log::{debug, warn};

use crate::utils::errors::UtilsError;
use crate::utils::input::Puzzle;

/// # Errors
///
/// Returns an error if the target is not strictly positive.
///
/// Non-positive numbers are accepted: they can never appear in a solution,
/// so the search drops them on its own.
pub fn validate_puzzle(puzzle: &Puzzle) -> Result<(), UtilsError> {
    debug!("Validating puzzle: {:?}", puzzle);

    if puzzle.target <= 0 {
        warn!("Target {} is not positive", puzzle.target);
        return Err(UtilsError::NonPositiveTarget(puzzle.target));
    }

    if puzzle.numbers.is_empty() {
        warn!("No numbers given, nothing can reach {}", puzzle.target);
    }

    let ignored = puzzle.numbers.iter().filter(|&&n| n <= 0).count();
    if ignored > 0 {
        warn!("{} non-positive number(s) will never appear in a solution", ignored);
    }

    Ok(())
}
