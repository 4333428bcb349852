//! # Mathler Engine
//!
//! **Scoring for equation puzzles**
//!
//! Mathler is a Wordle-style puzzle where the hidden word is an equation. The
//! player knows the value the equation must produce and guesses fixed-length
//! strings of digits and operators. Each guess is evaluated, compared with the
//! target value and, when it computes correctly, scored symbol by symbol
//! against the hidden solution.
//!
//! ## Quick Start
//!
//! ```rust
//! use mathler::{CharacterState, Engine, MathlerResult, PuzzleSet};
//!
//! fn main() -> MathlerResult<()> {
//!     let (puzzles, _skipped) = PuzzleSet::load(["10:12-2*1+0:1"], 8)?;
//!     let engine = Engine::new(puzzles);
//!
//!     let guess = ["1", "2", "-", "2", "*", "1", "+", "0"];
//!     let result = engine.check_guess(&guess, 10);
//!
//!     assert!(result.valid);
//!     assert!(result.solved);
//!     assert!(result.states.iter().all(|s| *s == CharacterState::Correct));
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Evaluation
//! [`evaluate`] accepts digits, `+ - * /`, whitespace and the `×` alias for
//! multiplication. Standard precedence applies, arithmetic is exact decimal,
//! and the final value is truncated toward zero (`7/2` is `3`). Anything that
//! cannot be computed is reported as an [`EvalError`].
//!
//! ### Scoring
//! [`score`] compares a guess with the solution in two passes: exact matches
//! first, then displaced matches claimed in guess order. A solution symbol is
//! consumed by at most one guess position.
//!
//! ### Checking
//! [`check_guess`] combines both and always returns a [`ScoreResult`] with one
//! state per slot, whether or not the guess was acceptable.

pub mod ast;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod limits;
pub mod parser;
pub mod puzzle;
pub mod response;
pub mod scorer;
pub mod symbol;

pub use ast::{Expression, Operator, Span};
pub use engine::{check_guess, Engine};
pub use error::{EvalError, EvalErrorKind, MathlerError, PuzzleDefinitionError};
pub use evaluator::{evaluate, evaluate_with_limits, normalize};
pub use limits::ResourceLimits;
pub use parser::parse_equation;
pub use puzzle::{Puzzle, PuzzleInfo, PuzzleSet, DEFAULT_EQUATION_LENGTH};
pub use response::{Failure, ScoreResult};
pub use scorer::score;
pub use symbol::{CharacterState, Symbol, MULTIPLICATION_ALIAS};

/// Result type for Mathler operations
pub type MathlerResult<T> = Result<T, MathlerError>;

#[cfg(test)]
mod tests;
