use crate::formatter::Formatter;
use anyhow::{Context, Result};
use inquire::validator::Validation;
use inquire::{CustomUserError, Text};
use mathler::Engine;

/// Interactive game: pick a puzzle and prompt for guesses until solved or out of attempts.
///
/// Rejected guesses (wrong value, uncomputable) do not use up an attempt.
pub fn run_game(engine: &Engine, difficulty: Option<u32>, attempts: usize) -> Result<()> {
    let pick = |n: usize| rand::random_range(0..n);
    let puzzle = match difficulty {
        Some(d) => engine.puzzle_by_difficulty(d, pick),
        None => engine.random_puzzle(pick),
    };

    let length = puzzle.equation_length;
    println!(
        "Find the {}-symbol equation that equals {} (difficulty {}).",
        length, puzzle.target_value, puzzle.difficulty
    );
    println!("You have {} attempts.\n", attempts);

    let formatter = Formatter::new();
    let mut used = 0;

    while used < attempts {
        let input = Text::new(&format!("Guess {}/{}:", used + 1, attempts))
            .with_help_message("digits and + - * / (× works too)")
            .with_validator(move |input: &str| -> Result<Validation, CustomUserError> {
                let count = input.trim().chars().count();
                if count == length {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid(
                        format!("Enter exactly {} symbols ({} given)", length, count).into(),
                    ))
                }
            })
            .prompt()
            .context("Failed to read guess")?;

        let guess: Vec<String> = input.trim().chars().map(|c| c.to_string()).collect();
        let result = engine.check_guess(&guess, puzzle.target_value);

        if !result.valid {
            println!("  {}", result.message);
            continue;
        }

        used += 1;
        println!("  {}", formatter.format_feedback_line(&guess, &result.states));

        if result.solved {
            println!("\nSolved in {} attempt(s)!", used);
            return Ok(());
        }
    }

    if let Some(answer) = engine.puzzles().find_by_target(puzzle.target_value) {
        println!("\nOut of attempts. The equation was {}", answer.solution_string());
    }

    Ok(())
}
