use serde::{Deserialize, Serialize};
use std::fmt;

/// Display glyph accepted as an alias for `*`
pub const MULTIPLICATION_ALIAS: char = '×';

/// One slot of a guess or solution: a digit or an operator
///
/// The `×` alias is normalized to `*` on construction, so two symbols compare
/// equal whenever they mean the same thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(char);

impl Symbol {
    pub fn new(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '+' | '-' | '*' | '/' => Some(Symbol(c)),
            MULTIPLICATION_ALIAS => Some(Symbol('*')),
            _ => None,
        }
    }

    /// Parse a single-character slot. Empty or multi-character slots are rejected.
    pub fn from_slot(slot: &str) -> Option<Self> {
        let mut chars = slot.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Symbol::new(c),
            _ => None,
        }
    }

    /// Parse every character of `s`, failing on the first one outside the alphabet
    pub fn parse_all(s: &str) -> Option<Vec<Symbol>> {
        s.chars().map(Symbol::new).collect()
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Feedback for one position of a scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharacterState {
    /// Same symbol at the same position in the solution
    Correct,
    /// Symbol occurs at another, not yet claimed, position of the solution
    Present,
    /// No unclaimed occurrence of the symbol is left in the solution
    Absent,
}

impl fmt::Display for CharacterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterState::Correct => write!(f, "CORRECT"),
            CharacterState::Present => write!(f, "PRESENT"),
            CharacterState::Absent => write!(f, "ABSENT"),
        }
    }
}
