/// Integer type carried by leaves and evaluated subexpressions
pub type Value = i64;

/// The four binary operators of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Every operator, in the order the search tries them
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

/// A binary expression tree over the input numbers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Leaf(Value),
    Node(Operator, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn leaf(value: Value) -> Self {
        Expression::Leaf(value)
    }

    pub fn node(operator: Operator, left: Expression, right: Expression) -> Self {
        Expression::Node(operator, Box::new(left), Box::new(right))
    }
}

/// An expression paired with the value it is already known to evaluate to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluated {
    pub expression: Expression,
    pub value: Value,
}

impl Evaluated {
    pub fn leaf(value: Value) -> Self {
        Self {
            expression: Expression::Leaf(value),
            value,
        }
    }
}
