use crate::ast::Span;
use crate::error::{EvalError, EvalErrorKind, MathlerError, PuzzleDefinitionError};
use crate::Failure;

#[test]
fn test_eval_error_display() {
    let err = EvalError::new(
        EvalErrorKind::InvalidCharacter('^'),
        Some(Span::new(1, 2)),
        "2^2",
    );
    assert_eq!(
        format!("{}", err),
        "Uncomputable: character '^' is not allowed at 1..2"
    );

    let err = EvalError::new(EvalErrorKind::Empty, None, "");
    assert_eq!(format!("{}", err), "Uncomputable: expression is empty");

    let err = EvalError::new(
        EvalErrorKind::TooLong {
            limit: 4,
            actual: 9,
        },
        None,
        "1+1+1+1+1",
    );
    assert!(err.message().contains("limit is 4"));
}

#[test]
fn test_mathler_error_display() {
    let empty = MathlerError::ConfigurationEmpty { skipped: vec![] };
    assert_eq!(format!("{}", empty), "No puzzles configured");

    let with_skipped = MathlerError::ConfigurationEmpty {
        skipped: vec![PuzzleDefinitionError::new("1:1:1", "too short")],
    };
    let display = format!("{}", with_skipped);
    assert!(display.contains("1 definition(s) skipped"));
    assert!(display.contains("Invalid puzzle definition '1:1:1': too short"));

    assert_eq!(
        format!("{}", MathlerError::InvalidEquationLength(0)),
        "Invalid equation length 0: must be at least 1"
    );
    assert_eq!(
        format!("{}", MathlerError::Config("missing file".to_string())),
        "Configuration error: missing file"
    );
}

#[test]
fn test_failure_display() {
    assert_eq!(Failure::Uncomputable.to_string(), "uncomputable equation");
    assert_eq!(Failure::ValueMismatch.to_string(), "wrong value");
}
