use crate::expression::{Evaluated, Expression, Operator, Validator};

/// Builds the parent nodes that can join two operands
pub struct ExpressionGenerator;

impl ExpressionGenerator {
    /// One node per operator, with no legality check
    pub fn combine(left: &Expression, right: &Expression) -> Vec<Expression> {
        Operator::ALL
            .into_iter()
            .map(|op| Expression::node(op, left.clone(), right.clone()))
            .collect()
    }

    /// One node per operator that `validator` accepts for the two operand values,
    /// paired with its value.
    pub fn combine_evaluated(
        left: &Evaluated,
        right: &Evaluated,
        validator: Validator,
    ) -> Vec<Evaluated> {
        Operator::ALL
            .into_iter()
            .filter(|&op| validator.accepts(op, left.value, right.value))
            .filter_map(|op| {
                let value = op.apply(left.value, right.value)?;
                Some(Evaluated {
                    expression: Expression::node(
                        op,
                        left.expression.clone(),
                        right.expression.clone(),
                    ),
                    value,
                })
            })
            .collect()
    }
}
