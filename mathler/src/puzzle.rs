//! Puzzle definitions and the read-only puzzle set
//!
//! Puzzles are configured as `"<targetValue>:<solution>:<difficulty>"`
//! strings, e.g. `"10:12-2*1+0:1"`. Solutions are trusted to compute to their
//! target; loading only checks their shape.

use crate::error::{MathlerError, PuzzleDefinitionError};
use crate::symbol::Symbol;
use crate::MathlerResult;
use serde::{Deserialize, Serialize};

/// Number of slots in a guess unless configured otherwise
pub const DEFAULT_EQUATION_LENGTH: usize = 8;

const DEFINITION_SEPARATOR: char = ':';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    target_value: i64,
    solution: Vec<Symbol>,
    difficulty: u32,
}

impl Puzzle {
    pub fn new(target_value: i64, solution: Vec<Symbol>, difficulty: u32) -> Self {
        Self {
            target_value,
            solution,
            difficulty,
        }
    }

    /// Parse one `"<targetValue>:<solution>:<difficulty>"` definition.
    pub fn from_definition(
        definition: &str,
        equation_length: usize,
    ) -> Result<Self, PuzzleDefinitionError> {
        let parts: Vec<&str> = definition.split(DEFINITION_SEPARATOR).collect();
        let [target, solution, difficulty] = parts.as_slice() else {
            return Err(PuzzleDefinitionError::new(
                definition,
                format!(
                    "expected 3 '{}'-separated parts, found {}",
                    DEFINITION_SEPARATOR,
                    parts.len()
                ),
            ));
        };

        let target_value = target.trim().parse::<i64>().map_err(|e| {
            PuzzleDefinitionError::new(definition, format!("invalid target value: {}", e))
        })?;

        let difficulty = difficulty.trim().parse::<u32>().map_err(|e| {
            PuzzleDefinitionError::new(definition, format!("invalid difficulty: {}", e))
        })?;

        let actual_length = solution.chars().count();
        if actual_length != equation_length {
            return Err(PuzzleDefinitionError::new(
                definition,
                format!(
                    "solution has {} symbols, expected {}",
                    actual_length, equation_length
                ),
            ));
        }

        let solution = Symbol::parse_all(solution).ok_or_else(|| {
            PuzzleDefinitionError::new(
                definition,
                "solution may only contain digits and + - * /",
            )
        })?;

        Ok(Self::new(target_value, solution, difficulty))
    }

    pub fn target_value(&self) -> i64 {
        self.target_value
    }

    pub fn solution(&self) -> &[Symbol] {
        &self.solution
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn solution_string(&self) -> String {
        self.solution.iter().map(|s| s.as_char()).collect()
    }

    /// Public view of this puzzle. Never includes the solution.
    pub fn info(&self) -> PuzzleInfo {
        PuzzleInfo {
            target_value: self.target_value,
            difficulty: self.difficulty,
            equation_length: self.solution.len(),
        }
    }
}

/// What a player is told about a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleInfo {
    pub target_value: i64,
    pub difficulty: u32,
    pub equation_length: usize,
}

/// Validated, non-empty, read-only collection of puzzles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSet {
    puzzles: Vec<Puzzle>,
    equation_length: usize,
}

impl PuzzleSet {
    /// Load puzzle definitions.
    ///
    /// Malformed definitions are skipped and returned alongside the set so the
    /// caller can report them. Ending up with no puzzles at all is an error.
    pub fn load<I, S>(
        definitions: I,
        equation_length: usize,
    ) -> MathlerResult<(Self, Vec<PuzzleDefinitionError>)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if equation_length == 0 {
            return Err(MathlerError::InvalidEquationLength(equation_length));
        }

        let mut puzzles = Vec::new();
        let mut skipped = Vec::new();

        for definition in definitions {
            match Puzzle::from_definition(definition.as_ref(), equation_length) {
                Ok(puzzle) => puzzles.push(puzzle),
                Err(e) => skipped.push(e),
            }
        }

        if puzzles.is_empty() {
            return Err(MathlerError::ConfigurationEmpty { skipped });
        }

        Ok((
            Self {
                puzzles,
                equation_length,
            },
            skipped,
        ))
    }

    /// Build a set from already constructed puzzles, which must all have
    /// `equation_length` symbols.
    pub fn from_puzzles(puzzles: Vec<Puzzle>, equation_length: usize) -> MathlerResult<Self> {
        if equation_length == 0 {
            return Err(MathlerError::InvalidEquationLength(equation_length));
        }

        let (puzzles, rejected): (Vec<Puzzle>, Vec<Puzzle>) = puzzles
            .into_iter()
            .partition(|p| p.solution.len() == equation_length);

        if puzzles.is_empty() {
            let skipped = rejected
                .iter()
                .map(|p| {
                    PuzzleDefinitionError::new(
                        format!(
                            "{}:{}:{}",
                            p.target_value,
                            p.solution_string(),
                            p.difficulty
                        ),
                        format!(
                            "solution has {} symbols, expected {}",
                            p.solution.len(),
                            equation_length
                        ),
                    )
                })
                .collect();
            return Err(MathlerError::ConfigurationEmpty { skipped });
        }

        Ok(Self {
            puzzles,
            equation_length,
        })
    }

    pub fn equation_length(&self) -> usize {
        self.equation_length
    }

    /// First puzzle whose target equals `target_value`
    pub fn find_by_target(&self, target_value: i64) -> Option<&Puzzle> {
        self.puzzles.iter().find(|p| p.target_value == target_value)
    }

    pub fn by_difficulty(&self, difficulty: u32) -> Vec<&Puzzle> {
        self.puzzles
            .iter()
            .filter(|p| p.difficulty == difficulty)
            .collect()
    }

    /// Distinct difficulties, ascending
    pub fn difficulties(&self) -> Vec<u32> {
        let mut difficulties: Vec<u32> = self.puzzles.iter().map(|p| p.difficulty).collect();
        difficulties.sort_unstable();
        difficulties.dedup();
        difficulties
    }

    /// First configured puzzle. Sets are never empty.
    pub fn first(&self) -> &Puzzle {
        &self.puzzles[0]
    }

    pub fn get(&self, index: usize) -> Option<&Puzzle> {
        self.puzzles.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Puzzle> {
        self.puzzles.iter()
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Always false: loading refuses to produce an empty set
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}
