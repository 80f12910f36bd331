//! Formatting utilities for terminal output

use crate::core::{Keyboard, QWERTY_ROWS, Verdict};
use crate::game::{Attempt, GameStatus, MAX_ATTEMPTS};
use colored::{ColoredString, Colorize};

/// Shareable summary: header line plus one emoji row per attempt
///
/// The header reads "Wordle 3/6" for a win and "Wordle X/6" for a loss.
#[must_use]
pub fn share_summary(attempts: &[Attempt], status: GameStatus) -> String {
    let score = match status {
        GameStatus::Won => attempts.len().to_string(),
        GameStatus::Lost | GameStatus::InProgress => "X".to_string(),
    };

    let mut summary = format!("Wordle {score}/{MAX_ATTEMPTS}\n");
    for attempt in attempts {
        summary.push('\n');
        summary.push_str(&attempt.feedback.to_emoji());
    }
    summary
}

/// Paint one letter tile according to its verdict
#[must_use]
pub fn letter_tile(letter: char, verdict: Option<Verdict>) -> ColoredString {
    let tile = format!(" {letter} ");
    match verdict {
        Some(Verdict::Correct) => tile.black().on_green().bold(),
        Some(Verdict::Present) => tile.black().on_yellow().bold(),
        Some(Verdict::Absent) => tile.white().on_bright_black(),
        None => tile.bold(),
    }
}

/// A scored guess as a row of colored tiles
#[must_use]
pub fn attempt_row(attempt: &Attempt) -> String {
    attempt
        .word
        .text()
        .chars()
        .zip(attempt.feedback.verdicts())
        .map(|(letter, &verdict)| letter_tile(letter, Some(verdict)).to_string())
        .collect()
}

/// The keyboard as three indented QWERTY rows
#[must_use]
pub fn keyboard_rows(keyboard: &Keyboard) -> Vec<String> {
    QWERTY_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|key| letter_tile(key as char, keyboard.state(key)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}
