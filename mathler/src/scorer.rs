//! Wordle-style feedback for equation guesses

use crate::symbol::{CharacterState, Symbol};

/// Score `guess` against `solution`, one state per position.
///
/// Exact matches are claimed first. Remaining guess positions then claim, in
/// ascending order, the first unclaimed occurrence of their symbol anywhere in
/// the solution. A solution position is claimed at most once, so a symbol
/// repeated in the guess more often than in the solution gets exactly as many
/// `Correct`/`Present` states as the solution has occurrences, earliest
/// positions first.
///
/// # Panics
///
/// Panics if the two sequences differ in length. Guess length is validated
/// before scoring, so a mismatch here is a caller bug.
pub fn score(guess: &[Symbol], solution: &[Symbol]) -> Vec<CharacterState> {
    assert_eq!(
        guess.len(),
        solution.len(),
        "guess and solution must have the same length"
    );

    let mut states = vec![CharacterState::Absent; guess.len()];
    let mut consumed = vec![false; solution.len()];
    let mut resolved = vec![false; guess.len()];

    for (i, (g, s)) in guess.iter().zip(solution).enumerate() {
        if g == s {
            states[i] = CharacterState::Correct;
            consumed[i] = true;
            resolved[i] = true;
        }
    }

    for (i, g) in guess.iter().enumerate() {
        if resolved[i] {
            continue;
        }

        let claim = solution
            .iter()
            .enumerate()
            .position(|(j, s)| !consumed[j] && s == g);

        if let Some(j) = claim {
            states[i] = CharacterState::Present;
            consumed[j] = true;
        }
    }

    states
}

/// True when every state is `Correct`. An empty sequence is not solved.
pub fn is_solved(states: &[CharacterState]) -> bool {
    !states.is_empty() && states.iter().all(|s| *s == CharacterState::Correct)
}
