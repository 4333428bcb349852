use crate::ast::Span;
use std::fmt;

/// Why an expression could not be computed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Nothing but whitespace (or nothing at all)
    Empty,

    /// Expression is longer than the configured limit
    TooLong { limit: usize, actual: usize },

    /// Character outside digits, `+ - * /` and whitespace
    InvalidCharacter(char),

    /// Token sequence is not `number (operator number)*`
    Syntax(String),

    DivisionByZero,

    /// Intermediate or final value does not fit the numeric range
    Overflow,
}

/// An expression that cannot be computed
///
/// Carries the normalized expression and the offending byte range so callers
/// can point at the problem. Every `EvalError` means the same thing to the
/// scoring flow: the guess is uncomputable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
    pub expression: String,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, span: Option<Span>, expression: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            expression: expression.into(),
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            EvalErrorKind::Empty => "expression is empty".to_string(),
            EvalErrorKind::TooLong { limit, actual } => format!(
                "expression is {} bytes long, the limit is {} bytes",
                actual, limit
            ),
            EvalErrorKind::InvalidCharacter(c) => format!("character '{}' is not allowed", c),
            EvalErrorKind::Syntax(msg) => format!("malformed expression: {}", msg),
            EvalErrorKind::DivisionByZero => "division by zero".to_string(),
            EvalErrorKind::Overflow => "value out of range".to_string(),
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uncomputable: {}", self.message())?;
        if let Some(span) = &self.span {
            write!(f, " at {}..{}", span.start, span.end)?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

/// A puzzle definition that was skipped while loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleDefinitionError {
    pub definition: String,
    pub reason: String,
}

impl PuzzleDefinitionError {
    pub fn new(definition: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PuzzleDefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid puzzle definition '{}': {}",
            self.definition, self.reason
        )
    }
}

impl std::error::Error for PuzzleDefinitionError {}

/// Errors that prevent the engine from starting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathlerError {
    /// No valid puzzle survived loading
    ConfigurationEmpty {
        skipped: Vec<PuzzleDefinitionError>,
    },

    /// Equation length must be at least one slot
    InvalidEquationLength(usize),

    /// Configuration could not be read or decoded
    Config(String),
}

impl fmt::Display for MathlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathlerError::ConfigurationEmpty { skipped } => {
                write!(f, "No puzzles configured")?;
                if !skipped.is_empty() {
                    write!(f, " ({} definition(s) skipped)", skipped.len())?;
                    for (i, error) in skipped.iter().enumerate() {
                        write!(f, "\n  {}. {}", i + 1, error)?;
                    }
                }
                Ok(())
            }
            MathlerError::InvalidEquationLength(length) => {
                write!(f, "Invalid equation length {}: must be at least 1", length)
            }
            MathlerError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for MathlerError {}
