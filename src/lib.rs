//! Countdown - A library for solving the Countdown numbers game
//!
//! Given a target and a multiset of positive integers, this library enumerates
//! every expression built with `+ - * /` over a selection of those integers
//! (each used at most once) that evaluates to the target. The search is lazy:
//! solutions are produced one at a time as they are consumed.

pub mod expression;
pub mod iterator;
pub mod lazy;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Evaluated, Expression, ExpressionError, Operator, Validator, Value, render};
pub use lazy::LazySeq;
pub use solver::{CountdownSolver, SolverConfig, SolverError, Strategy};
pub use utils::{Puzzle, UtilsError, parse_input, validate_puzzle};

/// Lazily enumerate every expression over `numbers` that evaluates to `target`
///
/// This is a convenience function that uses a default solver (optimized strategy).
///
/// # Examples
///
/// ```
/// use countdown::{render, solve};
///
/// let first: Vec<String> = solve(&[1, 3, 7, 10, 25, 50], 765)
///     .take(1)
///     .map(|expr| render(&expr))
///     .collect();
/// assert_eq!(first.len(), 1);
/// ```
pub fn solve(numbers: &[Value], target: Value) -> LazySeq<'static, Expression> {
    CountdownSolver::new().solve(numbers, target)
}

/// Read a puzzle (target first, then numbers) and collect all of its solutions
///
/// # Errors
///
/// This function will return an error if:
/// * The input is empty
/// * The first token is not an integer
/// * The target is not positive
///
/// # Examples
///
/// ```
/// use countdown::find_solutions;
///
/// match find_solutions("5 5") {
///     Ok(solutions) => assert_eq!(solutions.len(), 1),
///     Err(e) => panic!("Error: {}", e),
/// }
/// ```
pub fn find_solutions(input: &str) -> Result<Vec<Expression>, SolverError> {
    let puzzle = parse_input(input)?;
    validate_puzzle(&puzzle)?;

    let solver = CountdownSolver::new();
    Ok(solver.solve(&puzzle.numbers, puzzle.target).collect())
}
