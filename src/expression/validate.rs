use crate::expression::ast::{Operator, Value};

/// Rules deciding whether an operator may combine two evaluated operands.
///
/// Operands are always strictly positive here; positivity is enforced at the
/// leaves and preserved by every accepted operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validator {
    /// Only forbid non-positive and fractional results
    Naive,
    /// Also reject operand orders and identities that repeat an equivalent expression
    #[default]
    Canonical,
}

impl Validator {
    pub fn accepts(self, operator: Operator, left: Value, right: Value) -> bool {
        match self {
            Validator::Naive => match operator {
                Operator::Add | Operator::Mul => true,
                Operator::Sub => left > right,
                Operator::Div => divides(right, left),
            },
            Validator::Canonical => match operator {
                Operator::Add => left <= right,
                Operator::Sub => left > right,
                Operator::Mul => left != 1 && right != 1 && left <= right,
                Operator::Div => right != 1 && divides(right, left),
            },
        }
    }
}

#[inline]
fn divides(divisor: Value, dividend: Value) -> bool {
    dividend.checked_rem(divisor) == Some(0)
}

impl Operator {
    /// Compute `left op right`.
    ///
    /// Returns `None` when the result does not fit in [`Value`] or the
    /// division is by zero. Callers check a [`Validator`] first, which also
    /// guarantees that division is exact.
    pub fn apply(self, left: Value, right: Value) -> Option<Value> {
        match self {
            Operator::Add => left.checked_add(right),
            Operator::Sub => left.checked_sub(right),
            Operator::Mul => left.checked_mul(right),
            Operator::Div => left.checked_div(right),
        }
    }
}

#[cfg(test)]
mod tests_validator_tables {
    use super::{Validator, divides};
    use crate::expression::ast::Operator;

    #[test]
    fn test_divides() {
        assert!(divides(3, 9));
        assert!(!divides(2, 9));
        assert!(!divides(0, 9));
    }

    #[test]
    fn test_naive_rules() {
        let v = Validator::Naive;
        assert!(v.accepts(Operator::Add, 5, 3));
        assert!(v.accepts(Operator::Mul, 1, 3));
        assert!(v.accepts(Operator::Sub, 5, 3));
        assert!(!v.accepts(Operator::Sub, 3, 3));
        assert!(!v.accepts(Operator::Sub, 3, 5));
        assert!(v.accepts(Operator::Div, 6, 3));
        assert!(v.accepts(Operator::Div, 6, 1));
        assert!(!v.accepts(Operator::Div, 7, 3));
    }

    #[test]
    fn test_canonical_rules() {
        let v = Validator::Canonical;
        assert!(v.accepts(Operator::Add, 3, 5));
        assert!(v.accepts(Operator::Add, 4, 4));
        assert!(!v.accepts(Operator::Add, 5, 3));
        assert!(v.accepts(Operator::Sub, 5, 3));
        assert!(!v.accepts(Operator::Sub, 5, 5));
        assert!(v.accepts(Operator::Mul, 2, 3));
        assert!(!v.accepts(Operator::Mul, 3, 2));
        assert!(!v.accepts(Operator::Mul, 1, 3));
        assert!(!v.accepts(Operator::Mul, 3, 1));
        assert!(v.accepts(Operator::Div, 6, 3));
        assert!(!v.accepts(Operator::Div, 6, 1));
        assert!(!v.accepts(Operator::Div, 7, 2));
    }

    #[test]
    fn test_canonical_is_stricter_than_naive() {
        for op in Operator::ALL {
            for left in 1..=12 {
                for right in 1..=12 {
                    if Validator::Canonical.accepts(op, left, right) {
                        assert!(Validator::Naive.accepts(op, left, right));
                    }
                }
            }
        }
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(2, 3), Some(5));
        assert_eq!(Operator::Sub.apply(7, 3), Some(4));
        assert_eq!(Operator::Mul.apply(4, 3), Some(12));
        assert_eq!(Operator::Div.apply(12, 4), Some(3));
        assert_eq!(Operator::Mul.apply(i64::MAX, 2), None);
        assert_eq!(Operator::Div.apply(1, 0), None);
    }
}
