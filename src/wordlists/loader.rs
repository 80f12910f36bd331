//! Word list helpers
//!
//! Converts the embedded list into `Word`s and picks secrets from it.

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Pick a secret uniformly at random
///
/// Returns `None` when the list is empty.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_game::wordlists::loader::{choose_secret, words_from_slice};
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// let mut rng = StdRng::seed_from_u64(7);
/// let secret = choose_secret(&words, &mut rng).unwrap();
/// assert!(words.contains(secret));
/// ```
pub fn choose_secret<'a, R: Rng + ?Sized>(words: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    words.choose(rng)
}
