use crate::ast::Span;
use crate::error::EvalErrorKind;
use crate::{evaluate, evaluate_with_limits, normalize, ResourceLimits};

fn kind_of(expression: &str) -> EvalErrorKind {
    evaluate(expression).unwrap_err().kind
}

#[test]
fn test_simple_arithmetic() {
    assert_eq!(evaluate("2+2"), Ok(4));
    assert_eq!(evaluate("9-5"), Ok(4));
    assert_eq!(evaluate("6*7"), Ok(42));
    assert_eq!(evaluate("84/2"), Ok(42));
}

#[test]
fn test_multiplication_alias() {
    assert_eq!(normalize("3×4"), "3*4");
    assert_eq!(evaluate("3×4"), Ok(12));
    assert_eq!(evaluate("2×3×4"), Ok(24));
}

#[test]
fn test_precedence_and_associativity() {
    assert_eq!(evaluate("2+3*4"), Ok(14));
    assert_eq!(evaluate("2*3+4"), Ok(10));
    assert_eq!(evaluate("10-4-3"), Ok(3));
    assert_eq!(evaluate("100/10/5"), Ok(2));
    assert_eq!(evaluate("12-2*1+0"), Ok(10));
    assert_eq!(evaluate("20-12/4*2"), Ok(14));
}

#[test]
fn test_truncation_toward_zero() {
    assert_eq!(evaluate("7/2"), Ok(3));
    assert_eq!(evaluate("0-7/2"), Ok(-3));
    assert_eq!(evaluate("1-9/2"), Ok(-3));
    assert_eq!(evaluate("5/3+5/3"), Ok(3));
}

#[test]
fn test_intermediate_values_are_exact_fractions() {
    assert_eq!(evaluate("1/3*3"), Ok(1));
    assert_eq!(evaluate("1/3*30"), Ok(10));
    assert_eq!(evaluate("2/7*7/2"), Ok(1));
    assert_eq!(evaluate("3/2*2"), Ok(3));
    assert_eq!(evaluate("1/3+2/3"), Ok(1));
}

#[test]
fn test_whitespace_between_tokens() {
    assert_eq!(evaluate("2 + 2"), Ok(4));
    assert_eq!(evaluate(" 6\t*\t7 "), Ok(42));
    assert!(matches!(kind_of("12 34"), EvalErrorKind::Syntax(_)));
}

#[test]
fn test_leading_zeros() {
    assert_eq!(evaluate("007+1"), Ok(8));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(kind_of("6/0"), EvalErrorKind::DivisionByZero);
    assert_eq!(kind_of("6/0*0"), EvalErrorKind::DivisionByZero);

    let err = evaluate("1+6/0").unwrap_err();
    assert_eq!(err.span, Some(Span::new(2, 5)));
}

#[test]
fn test_malformed_sequences() {
    for expression in ["2+", "+2", "-2+4", "2++2", "2*/2", "*", "1 2"] {
        assert!(
            matches!(kind_of(expression), EvalErrorKind::Syntax(_)),
            "{} should be a syntax error",
            expression
        );
    }
}

#[test]
fn test_disallowed_characters() {
    assert_eq!(kind_of("2^2"), EvalErrorKind::InvalidCharacter('^'));
    assert_eq!(kind_of("(2+2)"), EvalErrorKind::InvalidCharacter('('));
    assert_eq!(kind_of("2a"), EvalErrorKind::InvalidCharacter('a'));
    assert_eq!(kind_of("2.5*2"), EvalErrorKind::InvalidCharacter('.'));
    assert_eq!(kind_of("2÷2"), EvalErrorKind::InvalidCharacter('÷'));

    let err = evaluate("2^2").unwrap_err();
    assert_eq!(err.span, Some(Span::new(1, 2)));
}

#[test]
fn test_code_is_never_executed() {
    for expression in [
        "process.exit(1)",
        "this.constructor",
        "2;3",
        "x=2",
        "1e3",
        "0x10",
    ] {
        assert!(evaluate(expression).is_err(), "{} must not compute", expression);
    }
}

#[test]
fn test_empty_input() {
    assert_eq!(kind_of(""), EvalErrorKind::Empty);
    assert_eq!(kind_of("   "), EvalErrorKind::Empty);
}

#[test]
fn test_overflow() {
    // Beyond i64 after truncation
    assert_eq!(kind_of("9999999999*9999999999"), EvalErrorKind::Overflow);
    // Beyond Decimal while computing
    assert_eq!(
        kind_of("9999999999*9999999999*9999999999"),
        EvalErrorKind::Overflow
    );
    // Literal too large to represent
    assert_eq!(
        kind_of("999999999999999999999999999999999"),
        EvalErrorKind::Overflow
    );
}

#[test]
fn test_negative_results() {
    assert_eq!(evaluate("1-10"), Ok(-9));
    assert_eq!(evaluate("0-2*3"), Ok(-6));
}

#[test]
fn test_expression_size_limit() {
    let limits = ResourceLimits {
        max_expression_bytes: 4,
    };
    assert_eq!(evaluate_with_limits("1+1", &limits), Ok(2));

    let err = evaluate_with_limits("1+1+1", &limits).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::TooLong {
            limit: 4,
            actual: 5
        }
    );
}

#[test]
fn test_default_limit_rejects_huge_input() {
    let huge = "1+".repeat(500) + "1";
    assert!(matches!(kind_of(&huge), EvalErrorKind::TooLong { .. }));
}

#[test]
fn test_error_keeps_normalized_expression() {
    let err = evaluate("3×4/0").unwrap_err();
    assert_eq!(err.expression, "3*4/0");
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
}
