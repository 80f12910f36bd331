//! Simple line-based mode
//!
//! Text front end without a TUI: one guess per line.

use crate::core::WORD_LENGTH;
use crate::game::{GameStatus, InputEvent, MAX_ATTEMPTS, Session, Transition};
use crate::output::{print_board, print_outcome, print_share};
use std::io::{self, BufRead, Write};

/// Run the simple mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple(session: &mut Session) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(session, &mut stdin.lock(), &mut stdout.lock()).map_err(|e| e.to_string())
}

/// Drive `session` from line input until the game ends, input runs out, or
/// the player quits
///
/// # Errors
///
/// Returns an I/O error if reading or writing fails.
pub fn play_lines(
    session: &mut Session,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "\nGuess the five-letter word in {MAX_ATTEMPTS} tries.")?;
    writeln!(out, "Type a word and press Enter. 'quit' to exit.\n")?;

    while session.status() == GameStatus::InProgress {
        write!(
            out,
            "Guess {}/{MAX_ATTEMPTS}: ",
            session.attempts().len() + 1
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let line = line.trim();

        if matches!(line, "quit" | "q" | "exit") {
            writeln!(out, "\nBye!")?;
            return Ok(());
        }

        if line.len() != WORD_LENGTH || !line.chars().all(|c| c.is_ascii_alphabetic()) {
            writeln!(out, "Please enter exactly {WORD_LENGTH} letters.")?;
            continue;
        }

        let transition = submit_word(session, line);
        print_board(out, session)?;
        print_outcome(out, &transition)?;
    }

    print_share(out, session)
}

/// Clear any typed letters, type `word` and submit it
fn submit_word(session: &mut Session, word: &str) -> Transition {
    while session.handle(InputEvent::Backspace) == Transition::Edited {}
    for letter in word.chars() {
        session.handle(InputEvent::Letter(letter));
    }
    session.handle(InputEvent::Submit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn play(secret: &str, script: &str) -> (Session, String) {
        colored::control::set_override(false);
        let mut session = Session::new(Word::new(secret).unwrap());
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        play_lines(&mut session, &mut input, &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_game_prints_congratulations() {
        let (session, out) = play("SLATE", "teach\nslate\n");
        assert_eq!(session.status(), GameStatus::Won);
        assert!(out.contains("Congratulations! You guessed the word in 2/6 guesses!"));
        assert!(out.contains("Wordle 2/6"));
    }

    #[test]
    fn losing_game_reveals_secret() {
        let (session, out) = play(
            "SLATE",
            "teach\npoops\notter\nwhale\nmeans\nsmart\n",
        );
        assert_eq!(session.status(), GameStatus::Lost);
        assert!(out.contains("Nice try! The word was SLATE"));
        assert!(out.contains("Wordle X/6"));
    }

    #[test]
    fn invalid_lines_do_not_use_attempts() {
        let (session, out) = play("SLATE", "tea\ntoolong\nsl4te\n");
        assert!(session.attempts().is_empty());
        assert_eq!(out.matches("Please enter exactly 5 letters.").count(), 3);
    }

    #[test]
    fn quit_stops_early() {
        let (session, out) = play("SLATE", "teach\nquit\nslate\n");
        assert_eq!(session.attempts().len(), 1);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(out.contains("Bye!"));
    }

    #[test]
    fn submit_word_discards_stale_input() {
        let mut session = Session::new(Word::new("SLATE").unwrap());
        session.handle(InputEvent::Letter('X'));
        session.handle(InputEvent::Letter('Y'));

        let transition = submit_word(&mut session, "slate");
        assert!(matches!(transition, Transition::Won { .. }));
    }
}
