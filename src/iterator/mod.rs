pub mod core;
pub mod generator;

pub use self::core::{exprs, results, results_with};
pub use generator::ExpressionGenerator;

#[cfg(test)]
mod tests;
