use crate::evaluator::evaluate_with_limits;
use crate::puzzle::{PuzzleInfo, PuzzleSet};
use crate::response::{Failure, ScoreResult};
use crate::scorer::score;
use crate::symbol::Symbol;
use crate::{EvalError, ResourceLimits};

/// Check one guess against the puzzle whose target is `target_value`.
///
/// Never fails: every rejection is a [`ScoreResult`] with `valid == false`, a
/// [`Failure`] tag, a message and all slots `Absent`. The puzzle set is passed
/// in, so concurrent checks share nothing mutable.
pub fn check_guess<S: AsRef<str>>(
    guess: &[S],
    target_value: i64,
    puzzles: &PuzzleSet,
) -> ScoreResult {
    check_guess_with_limits(guess, target_value, puzzles, &ResourceLimits::default())
}

pub fn check_guess_with_limits<S: AsRef<str>>(
    guess: &[S],
    target_value: i64,
    puzzles: &PuzzleSet,
    limits: &ResourceLimits,
) -> ScoreResult {
    let length = puzzles.equation_length();

    let well_formed =
        guess.len() == length && guess.iter().all(|slot| slot.as_ref().chars().count() == 1);
    if !well_formed {
        return ScoreResult::rejected(
            length,
            Failure::InvalidGuess,
            None,
            format!(
                "guess must contain exactly {} single-character symbols",
                length
            ),
        );
    }

    let Some(puzzle) = puzzles.find_by_target(target_value) else {
        return ScoreResult::rejected(
            length,
            Failure::NoPuzzleForTarget,
            None,
            format!("no puzzle for target {}", target_value),
        );
    };

    let expression: String = guess.iter().map(|slot| slot.as_ref()).collect();
    let value = match evaluate_with_limits(&expression, limits) {
        Ok(value) => value,
        Err(e) => return uncomputable(length, &e.message()),
    };

    // Whitespace slots compute fine but have no counterpart in a solution
    let symbols: Option<Vec<Symbol>> = guess
        .iter()
        .map(|slot| Symbol::from_slot(slot.as_ref()))
        .collect();
    let Some(symbols) = symbols else {
        return uncomputable(length, "every slot must be a digit or an operator");
    };

    if value != target_value {
        return ScoreResult::rejected(
            length,
            Failure::ValueMismatch,
            Some(value),
            format!(
                "wrong value: equation gives {}, not {}",
                value, target_value
            ),
        );
    }

    ScoreResult::scored(score(&symbols, puzzle.solution()), value)
}

fn uncomputable(length: usize, reason: &str) -> ScoreResult {
    ScoreResult::rejected(
        length,
        Failure::Uncomputable,
        None,
        format!("uncomputable equation: {}", reason),
    )
}

/// Puzzle set plus the limits applied to incoming guesses.
///
/// Holds no per-request state; share it freely behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Engine {
    puzzles: PuzzleSet,
    limits: ResourceLimits,
}

impl Engine {
    pub fn new(puzzles: PuzzleSet) -> Self {
        Self::with_limits(puzzles, ResourceLimits::default())
    }

    /// Create an engine with custom resource limits
    pub fn with_limits(puzzles: PuzzleSet, limits: ResourceLimits) -> Self {
        Self { puzzles, limits }
    }

    pub fn puzzles(&self) -> &PuzzleSet {
        &self.puzzles
    }

    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    pub fn equation_length(&self) -> usize {
        self.puzzles.equation_length()
    }

    pub fn check_guess<S: AsRef<str>>(&self, guess: &[S], target_value: i64) -> ScoreResult {
        check_guess_with_limits(guess, target_value, &self.puzzles, &self.limits)
    }

    pub fn evaluate(&self, expression: &str) -> Result<i64, EvalError> {
        evaluate_with_limits(expression, &self.limits)
    }

    /// Pick any puzzle. `pick` receives the number of candidates and returns an
    /// index below it; out-of-range answers fall back to the first candidate.
    pub fn random_puzzle(&self, pick: impl FnOnce(usize) -> usize) -> PuzzleInfo {
        let index = pick(self.puzzles.len());
        self.puzzles
            .get(index)
            .unwrap_or_else(|| self.puzzles.first())
            .info()
    }

    /// Pick a puzzle of the given difficulty, or any puzzle if there is none.
    pub fn puzzle_by_difficulty(
        &self,
        difficulty: u32,
        pick: impl FnOnce(usize) -> usize,
    ) -> PuzzleInfo {
        let candidates = self.puzzles.by_difficulty(difficulty);
        if candidates.is_empty() {
            return self.random_puzzle(pick);
        }

        let index = pick(candidates.len());
        candidates
            .get(index)
            .unwrap_or(&candidates[0])
            .info()
    }
}
