//! Display functions for the line-based front end

use super::formatters::{attempt_row, keyboard_rows, share_summary};
use crate::game::{MAX_ATTEMPTS, Session, Transition};
use colored::Colorize;
use std::io::{self, Write};

/// Print every revealed row followed by the keyboard
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_board(out: &mut impl Write, session: &Session) -> io::Result<()> {
    writeln!(out)?;
    for (i, attempt) in session.attempts().iter().enumerate() {
        writeln!(
            out,
            "  {} {}",
            format!("{}.", i + 1).bright_black(),
            attempt_row(attempt)
        )?;
    }
    writeln!(out)?;
    for row in keyboard_rows(session.keyboard()) {
        writeln!(out, "  {row}")?;
    }
    writeln!(out)
}

/// Print the message for a game-ending transition
///
/// Does nothing for transitions that leave the game running.
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_outcome(out: &mut impl Write, transition: &Transition) -> io::Result<()> {
    match transition {
        Transition::Won { attempts_used, .. } => writeln!(
            out,
            "{}",
            format!(
                "Congratulations! You guessed the word in {attempts_used}/{MAX_ATTEMPTS} guesses!"
            )
            .green()
            .bold()
        ),
        Transition::Lost { secret, .. } => writeln!(
            out,
            "{} {}",
            "Nice try! The word was".red().bold(),
            secret.text().bright_yellow().bold()
        ),
        Transition::Ignored | Transition::Edited | Transition::Revealed(_) => Ok(()),
    }
}

/// Print the shareable emoji grid for a finished game
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_share(out: &mut impl Write, session: &Session) -> io::Result<()> {
    writeln!(out, "\n{}\n", share_summary(session.attempts(), session.status()))
}
