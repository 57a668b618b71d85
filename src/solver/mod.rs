pub mod constants;
mod core;
mod errors;

pub use self::core::{CountdownSolver, SolverConfig, Strategy};
pub use errors::SolverError;
