use log::debug;

use crate::expression::ast::{Expression, Value};
use crate::expression::errors::ExpressionError;
use crate::expression::validate::Validator;

impl Expression {
    /// Evaluate under the naive rules, returning `None` for any illegal step.
    pub fn evaluate(&self) -> Option<Value> {
        match self.try_evaluate() {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Expression {} has no value: {}", self, e);
                None
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error when:
    /// - a leaf is zero or negative
    /// - an operator is applied where [`Validator::Naive`] forbids it
    /// - a result overflows [`Value`]
    pub fn try_evaluate(&self) -> Result<Value, ExpressionError> {
        match self {
            Expression::Leaf(n) if *n > 0 => Ok(*n),
            Expression::Leaf(n) => Err(ExpressionError::NonPositiveLeaf(*n)),
            Expression::Node(operator, l, r) => {
                let left = l.try_evaluate()?;
                let right = r.try_evaluate()?;
                if !Validator::Naive.accepts(*operator, left, right) {
                    return Err(ExpressionError::InvalidOperation {
                        operator: *operator,
                        left,
                        right,
                    });
                }
                operator
                    .apply(left, right)
                    .ok_or(ExpressionError::Overflow {
                        operator: *operator,
                        left,
                        right,
                    })
            }
        }
    }

    /// Leaf values from left to right
    pub fn leaves(&self) -> Vec<Value> {
        fn collect(expr: &Expression, out: &mut Vec<Value>) {
            match expr {
                Expression::Leaf(n) => out.push(*n),
                Expression::Node(_, l, r) => {
                    collect(l, out);
                    collect(r, out);
                }
            }
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }
}
