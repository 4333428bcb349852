use crate::symbol::CharacterState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a guess was not scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Failure {
    /// Wrong number of slots, or a slot that is not exactly one character
    InvalidGuess,
    /// No configured puzzle has the requested target value
    NoPuzzleForTarget,
    /// The guess does not compute to a number
    Uncomputable,
    /// The guess computes, but not to the target value
    ValueMismatch,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Failure::InvalidGuess => "invalid guess",
            Failure::NoPuzzleForTarget => "no puzzle for target",
            Failure::Uncomputable => "uncomputable equation",
            Failure::ValueMismatch => "wrong value",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of checking one guess
///
/// Always holds one state per slot, even when the guess was rejected, so every
/// response can be rendered the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub states: Vec<CharacterState>,
    pub valid: bool,
    pub solved: bool,
    pub calculated_value: Option<i64>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub failure: Option<Failure>,
}

impl ScoreResult {
    /// A rejected guess: all slots `Absent`, not valid, not solved
    pub fn rejected(
        equation_length: usize,
        failure: Failure,
        calculated_value: Option<i64>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            states: vec![CharacterState::Absent; equation_length],
            valid: false,
            solved: false,
            calculated_value,
            message: message.into(),
            failure: Some(failure),
        }
    }

    /// A scored guess. Solved when every state is `Correct`.
    pub fn scored(states: Vec<CharacterState>, calculated_value: i64) -> Self {
        let solved = crate::scorer::is_solved(&states);
        let message = if solved {
            "puzzle solved".to_string()
        } else {
            String::new()
        };

        Self {
            states,
            valid: true,
            solved,
            calculated_value: Some(calculated_value),
            message,
            failure: None,
        }
    }

    pub fn count(&self, state: CharacterState) -> usize {
        self.states.iter().filter(|s| **s == state).count()
    }
}
