use crate::ast::Expression;
use crate::error::EvalError;
use crate::evaluator::operations::{arithmetic_operation, Fraction};

/// Compute an equation tree exactly. Errors carry the span of the failing operation.
pub fn evaluate_expression(expr: &Expression, source: &str) -> Result<Fraction, EvalError> {
    match expr {
        Expression::Number { value, .. } => Ok(Fraction::integer(*value)),
        Expression::Binary {
            left,
            op,
            right,
            span,
        } => {
            let l = evaluate_expression(left, source)?;
            let r = evaluate_expression(right, source)?;
            arithmetic_operation(l, *op, r)
                .map_err(|kind| EvalError::new(kind, Some(*span), source))
        }
    }
}
