use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, Row, Table};
use crossterm::style::Stylize;
use mathler::{CharacterState, PuzzleSet, ScoreResult};

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// Tiles for each slot plus a summary of the check
    pub fn format_score(&self, guess: &[String], result: &ScoreResult) -> String {
        let mut output = String::new();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.add_row(Row::from(
            guess
                .iter()
                .zip(&result.states)
                .map(|(slot, state)| state_cell(slot, *state))
                .collect::<Vec<_>>(),
        ));
        output.push_str(&table.to_string());
        output.push('\n');

        let states: Vec<String> = result.states.iter().map(|s| s.to_string()).collect();
        output.push_str(&format!("States: {}\n", states.join(" ")));

        if let Some(value) = result.calculated_value {
            output.push_str(&format!("Value:  {}\n", value));
        }

        let verdict = if result.solved {
            "solved"
        } else if result.valid {
            "valid"
        } else {
            "invalid"
        };
        output.push_str(&format!("Result: {}\n", verdict));

        if !result.message.is_empty() {
            output.push_str(&format!("{}\n", result.message));
        }

        output
    }

    pub fn format_score_raw(&self, result: &ScoreResult) -> String {
        serde_json::to_string(result).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
    }

    /// One line of coloured tiles for the interactive game
    pub fn format_feedback_line(&self, guess: &[String], states: &[CharacterState]) -> String {
        guess
            .iter()
            .zip(states)
            .map(|(slot, state)| {
                let tile = format!(" {} ", slot);
                match state {
                    CharacterState::Correct => tile.black().on_green().to_string(),
                    CharacterState::Present => tile.black().on_yellow().to_string(),
                    CharacterState::Absent => tile.white().on_dark_grey().to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Puzzle overview. Solutions are never shown.
    pub fn format_puzzles(&self, puzzles: &PuzzleSet) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new("Target").set_alignment(CellAlignment::Right),
            Cell::new("Difficulty").set_alignment(CellAlignment::Right),
        ]));

        for (i, puzzle) in puzzles.iter().enumerate() {
            table.add_row(Row::from(vec![
                Cell::new(i + 1).set_alignment(CellAlignment::Right),
                Cell::new(puzzle.target_value()).set_alignment(CellAlignment::Right),
                Cell::new(puzzle.difficulty()).set_alignment(CellAlignment::Right),
            ]));
        }

        format!(
            "{}\n{} puzzle(s), {} symbols per equation\n",
            table,
            puzzles.len(),
            puzzles.equation_length()
        )
    }
}

fn state_cell(slot: &str, state: CharacterState) -> Cell {
    let cell = Cell::new(slot).set_alignment(CellAlignment::Center);
    match state {
        CharacterState::Correct => cell.fg(Color::Black).bg(Color::Green),
        CharacterState::Present => cell.fg(Color::Black).bg(Color::Yellow),
        CharacterState::Absent => cell.fg(Color::White).bg(Color::DarkGrey),
    }
}
