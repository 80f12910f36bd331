//! Wordle
//!
//! Guess a secret five-letter word in six tries, with per-letter feedback and
//! a keyboard that remembers the best result for every letter.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{InputEvent, Session, Transition};
//!
//! let mut session = Session::new(Word::new("slate").unwrap());
//! for c in "teach".chars() {
//!     session.handle(InputEvent::Letter(c));
//! }
//!
//! if let Transition::Revealed(attempt) = session.handle(InputEvent::Submit) {
//!     println!("{} {}", attempt.word, attempt.feedback.to_emoji());
//! }
//! ```

// Core domain types
pub mod core;

// Session state machine
pub mod game;

// Word list
pub mod wordlists;

// Line-based front end
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Log file setup
pub mod logging;
