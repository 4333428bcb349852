use crate::ast::{Expression, Span};
use crate::error::{EvalError, EvalErrorKind};
use pest::error::{ErrorVariant, InputLocation};
use pest::Parser;
use pest_derive::Parser;

pub mod expressions;

#[derive(Parser)]
#[grammar = "src/parser/equation.pest"]
pub struct EquationParser;

/// Parse a normalized expression into an [`Expression`] tree.
///
/// The input is expected to have passed through [`crate::normalize`]; a `×`
/// here is just an unexpected character.
pub fn parse_equation(normalized: &str) -> Result<Expression, EvalError> {
    let mut pairs = EquationParser::parse(Rule::equation, normalized)
        .map_err(|e| syntax_error(e, normalized))?;

    let equation = pairs.next().ok_or_else(|| {
        EvalError::new(
            EvalErrorKind::Syntax("no parse result".to_string()),
            None,
            normalized,
        )
    })?;

    let sum = equation
        .into_inner()
        .find(|pair| pair.as_rule() == Rule::sum)
        .ok_or_else(|| {
            EvalError::new(
                EvalErrorKind::Syntax("missing expression".to_string()),
                None,
                normalized,
            )
        })?;

    expressions::parse_sum(sum, normalized)
}

fn syntax_error(error: pest::error::Error<Rule>, source: &str) -> EvalError {
    let span = match error.location {
        InputLocation::Pos(pos) => Span::new(pos, pos),
        InputLocation::Span((start, end)) => Span::new(start, end),
    };

    EvalError::new(
        EvalErrorKind::Syntax(describe_expected(&error.variant)),
        Some(span),
        source,
    )
}

fn describe_expected(variant: &ErrorVariant<Rule>) -> String {
    match variant {
        ErrorVariant::ParsingError { positives, .. } => {
            let mut expected: Vec<&str> = Vec::new();
            for rule in positives {
                let what = match rule {
                    Rule::number => "a number",
                    Rule::additive | Rule::multiplicative => "an operator",
                    Rule::EOI => "end of expression",
                    _ => continue,
                };
                if !expected.contains(&what) {
                    expected.push(what);
                }
            }

            if expected.is_empty() {
                "unexpected input".to_string()
            } else {
                format!("expected {}", expected.join(" or "))
            }
        }
        ErrorVariant::CustomError { message } => message.clone(),
    }
}
