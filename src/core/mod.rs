//! Core domain types for Wordle
//!
//! Words, guess scoring and the keyboard aggregate. Everything here is pure
//! and independent of any front end.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, Verdict};
pub use keyboard::{ALPHABET_SIZE, Keyboard, QWERTY_ROWS};
pub use word::{WORD_LENGTH, Word, WordError};
