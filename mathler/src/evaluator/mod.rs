//! Safe evaluation of player equations
//!
//! Evaluates an expression by:
//! 1. Normalizing the `×` glyph to `*`
//! 2. Rejecting oversized input and characters outside the whitelist
//! 3. Parsing with the equation grammar (precedence and associativity)
//! 4. Computing the tree with exact fractions
//! 5. Truncating the final value toward zero

pub mod expression;
pub mod operations;

use crate::ast::Span;
use crate::error::{EvalError, EvalErrorKind};
use crate::parser::parse_equation;
use crate::{ResourceLimits, MULTIPLICATION_ALIAS};
use regex::Regex;
use std::sync::OnceLock;

/// Anything outside `[0-9+\-*/\s]`
const DISALLOWED_CHARACTER: &str = r"[^0-9+\-*/\s]";

fn disallowed_character() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(DISALLOWED_CHARACTER).expect("whitelist pattern is valid"))
}

/// Replace the `×` display glyph with `*`
pub fn normalize(expression: &str) -> String {
    expression.replace(MULTIPLICATION_ALIAS, "*")
}

/// Evaluate `expression` under the default [`ResourceLimits`].
///
/// ```
/// assert_eq!(mathler::evaluate("2+2"), Ok(4));
/// assert_eq!(mathler::evaluate("3×4"), Ok(12));
/// assert_eq!(mathler::evaluate("7/2"), Ok(3));
/// assert!(mathler::evaluate("6/0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<i64, EvalError> {
    evaluate_with_limits(expression, &ResourceLimits::default())
}

/// Evaluate `expression` to an integer, or report why it is uncomputable.
///
/// The character whitelist is checked before the parser ever sees the input,
/// so nothing but literals and the four operators can reach evaluation.
pub fn evaluate_with_limits(expression: &str, limits: &ResourceLimits) -> Result<i64, EvalError> {
    let normalized = normalize(expression);

    if normalized.len() > limits.max_expression_bytes {
        return Err(EvalError::new(
            EvalErrorKind::TooLong {
                limit: limits.max_expression_bytes,
                actual: normalized.len(),
            },
            None,
            normalized,
        ));
    }

    if normalized.trim().is_empty() {
        return Err(EvalError::new(EvalErrorKind::Empty, None, normalized));
    }

    if let Some(found) = disallowed_character().find(&normalized) {
        let c = found.as_str().chars().next().unwrap_or_default();
        let span = Span::new(found.start(), found.end());
        return Err(EvalError::new(
            EvalErrorKind::InvalidCharacter(c),
            Some(span),
            normalized,
        ));
    }

    let tree = parse_equation(&normalized)?;
    let value = expression::evaluate_expression(&tree, &normalized)?;

    // Truncation toward zero: 7/2 = 3, 0-7/2 = -3
    value
        .trunc_to_i64()
        .ok_or_else(|| EvalError::new(EvalErrorKind::Overflow, Some(tree.span()), normalized))
}
