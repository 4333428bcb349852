use rust_decimal::Decimal;
use std::fmt;

/// Byte range of a node within the normalized expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn from_pest_span(span: pest::Span) -> Self {
        Self {
            start: span.start(),
            end: span.end(),
        }
    }

    /// Smallest span covering both `self` and `other`
    pub fn join(self, other: Span) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// The four binary operators an equation may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parsed equation
///
/// Binary nodes are already arranged by precedence: multiplication and
/// division bind tighter than addition and subtraction, and operators of equal
/// precedence associate to the left.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number {
        value: Decimal,
        span: Span,
    },
    Binary {
        left: Box<Expression>,
        op: Operator,
        right: Box<Expression>,
        span: Span,
    },
}

impl Expression {
    pub fn span(&self) -> Span {
        match self {
            Expression::Number { span, .. } | Expression::Binary { span, .. } => *span,
        }
    }

    pub fn binary(left: Expression, op: Operator, right: Expression) -> Self {
        let span = left.span().join(right.span());
        Expression::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
            span,
        }
    }
}

/// Fully parenthesized rendering, handy for checking precedence
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Number { value, .. } => write!(f, "{}", value),
            Expression::Binary {
                left, op, right, ..
            } => write!(f, "({} {} {})", left, op, right),
        }
    }
}
