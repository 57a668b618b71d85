//! Expression trees, their legality rules, evaluation and rendering

mod ast;
mod display;
mod errors;
mod eval;
mod validate;

pub use ast::{Evaluated, Expression, Operator, Value};
pub use display::render;
pub use errors::ExpressionError;
pub use validate::Validator;
