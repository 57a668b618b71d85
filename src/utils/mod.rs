//! Sequence combinatorics and driver input handling

mod errors;
mod input;
mod partitions;
mod permutations;
mod subbags;
mod subsequences;
mod validation;

pub use errors::UtilsError;
pub use input::{Puzzle, parse_input};
pub use partitions::{non_empty_split, split};
pub use permutations::{interleave, permute};
pub use subbags::{is_sub_multiset, subbags};
pub use subsequences::subsequences;
pub use validation::validate_puzzle;
