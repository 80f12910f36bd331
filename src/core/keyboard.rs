//! Per-letter keyboard state
//!
//! Tracks the strongest verdict seen for each letter across every submitted
//! guess. A key only ever moves up the `Absent < Present < Correct` ladder;
//! letters that have never been guessed stay unknown (`None`).

use super::feedback::{Feedback, Verdict};
use super::word::{WORD_LENGTH, Word};

/// Number of letters tracked
pub const ALPHABET_SIZE: usize = 26;

/// On-screen keyboard layout, top row first
pub const QWERTY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Best verdict observed for each letter A-Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Keyboard {
    keys: [Option<Verdict>; ALPHABET_SIZE],
}

impl Keyboard {
    /// A keyboard with every key unknown
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keys: [None; ALPHABET_SIZE],
        }
    }

    /// Fold one scored guess into the keyboard
    ///
    /// Each key becomes the max of its current state and the verdict it just
    /// received. All five positions are applied before this returns.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Keyboard, Verdict, Word};
    ///
    /// let secret = Word::new("slate").unwrap();
    /// let guess = Word::new("teach").unwrap();
    ///
    /// let mut keyboard = Keyboard::new();
    /// keyboard.update(&guess, &Feedback::evaluate(&guess, &secret));
    ///
    /// assert_eq!(keyboard.state(b'A'), Some(Verdict::Correct));
    /// assert_eq!(keyboard.state(b'T'), Some(Verdict::Present));
    /// assert_eq!(keyboard.state(b'C'), Some(Verdict::Absent));
    /// assert_eq!(keyboard.state(b'Z'), None);
    /// ```
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) {
        for position in 0..WORD_LENGTH {
            let Some(index) = letter_index(guess.char_at(position)) else {
                continue;
            };
            let candidate = Some(feedback.verdict_at(position));
            // None orders below every Some, so an unknown key always takes the first result
            self.keys[index] = self.keys[index].max(candidate);
        }
    }

    /// Build the keyboard for a whole guess history
    #[must_use]
    pub fn from_history<'a, I>(history: I) -> Self
    where
        I: IntoIterator<Item = (&'a Word, &'a Feedback)>,
    {
        let mut keyboard = Self::new();
        for (guess, feedback) in history {
            keyboard.update(guess, feedback);
        }
        keyboard
    }

    /// Current state of a letter (either case); `None` if never guessed or
    /// not a letter
    #[must_use]
    pub fn state(&self, letter: u8) -> Option<Verdict> {
        letter_index(letter).and_then(|index| self.keys[index])
    }

    /// All 26 letters in alphabetical order with their state
    pub fn iter(&self) -> impl Iterator<Item = (u8, Option<Verdict>)> + '_ {
        (b'A'..=b'Z').zip(self.keys.iter().copied())
    }

    /// True if no key here is weaker than the same key in `earlier`
    #[must_use]
    pub fn dominates(&self, earlier: &Self) -> bool {
        self.keys
            .iter()
            .zip(earlier.keys.iter())
            .all(|(now, before)| now >= before)
    }
}

fn letter_index(letter: u8) -> Option<usize> {
    letter
        .is_ascii_alphabetic()
        .then(|| usize::from(letter.to_ascii_uppercase() - b'A'))
}
