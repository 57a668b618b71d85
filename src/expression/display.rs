use std::fmt;

use crate::expression::ast::{Evaluated, Expression, Operator};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Nodes are always bracketed as operands, leaves never are.
        fn write_operand(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Leaf(_) => write!(f, "{}", expr),
                Expression::Node(..) => write!(f, "({})", expr),
            }
        }

        match self {
            Expression::Leaf(n) => write!(f, "{}", n),
            Expression::Node(operator, l, r) => {
                write_operand(f, l)?;
                write!(f, " {} ", operator)?;
                write_operand(f, r)
            }
        }
    }
}

impl fmt::Display for Evaluated {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.value)
    }
}

/// Infix form of `expr`, e.g. `(25 - 10) * (1 + 50)`
pub fn render(expr: &Expression) -> String {
    expr.to_string()
}
