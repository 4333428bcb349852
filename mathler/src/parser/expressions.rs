use crate::ast::{Expression, Operator, Span};
use crate::error::{EvalError, EvalErrorKind};
use crate::parser::Rule;
use pest::iterators::Pair;
use rust_decimal::Decimal;
use std::str::FromStr;

type OperandParser = fn(Pair<Rule>, &str) -> Result<Expression, EvalError>;

// sum = { product ~ (additive ~ product)* }
pub(crate) fn parse_sum(pair: Pair<Rule>, source: &str) -> Result<Expression, EvalError> {
    fold_left(pair, source, parse_product)
}

// product = { number ~ (multiplicative ~ number)* }
pub(crate) fn parse_product(pair: Pair<Rule>, source: &str) -> Result<Expression, EvalError> {
    fold_left(pair, source, parse_number)
}

/// Fold `operand (op operand)*` into a left-associative tree
fn fold_left(
    pair: Pair<Rule>,
    source: &str,
    operand: OperandParser,
) -> Result<Expression, EvalError> {
    let span = Span::from_pest_span(pair.as_span());
    let mut inner = pair.into_inner();

    let first = inner
        .next()
        .ok_or_else(|| malformed("missing operand", span, source))?;
    let mut expr = operand(first, source)?;

    while let Some(op_pair) = inner.next() {
        let op_span = Span::from_pest_span(op_pair.as_span());
        let op = Operator::from_symbol(op_pair.as_str())
            .ok_or_else(|| malformed("unknown operator", op_span, source))?;

        let right_pair = inner
            .next()
            .ok_or_else(|| malformed("operator without right operand", op_span, source))?;
        let right = operand(right_pair, source)?;

        expr = Expression::binary(expr, op, right);
    }

    Ok(expr)
}

fn parse_number(pair: Pair<Rule>, source: &str) -> Result<Expression, EvalError> {
    let span = Span::from_pest_span(pair.as_span());
    // Digit strings beyond Decimal's 28-29 significant digits fail here
    let value = Decimal::from_str(pair.as_str())
        .map_err(|_| EvalError::new(EvalErrorKind::Overflow, Some(span), source))?;
    Ok(Expression::Number { value, span })
}

fn malformed(message: &str, span: Span, source: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::Syntax(message.to_string()),
        Some(span),
        source,
    )
}
