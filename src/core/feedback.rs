//! Guess scoring
//!
//! Each guessed letter gets one of three verdicts:
//! - Absent: letter not in the secret (or every copy already accounted for)
//! - Present: letter in the secret, wrong position
//! - Correct: letter in the right position
//!
//! Verdicts are ordered `Absent < Present < Correct`, which is the order the
//! keyboard uses when keeping the strongest result per letter.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    /// Gray
    Absent,
    /// Yellow
    Present,
    /// Green
    Correct,
}

impl Verdict {
    /// Square emoji used in shareable results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }

    /// Single ASCII symbol: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => '-',
            Self::Present => 'Y',
            Self::Correct => 'G',
        }
    }
}

/// The five verdicts produced for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const SOLVED: Self = Self([Verdict::Correct; WORD_LENGTH]);

    /// Score `guess` against `secret`
    ///
    /// Duplicate letters follow standard Wordle rules: a letter is marked at
    /// most as many times as it occurs in the secret, and exact matches claim
    /// their copies before misplaced ones do.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and remove them from the pool
    /// 2. Second pass: mark Present from whatever the pool has left, else Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("teach").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &secret);
    ///
    /// use Verdict::*;
    /// assert_eq!(feedback.verdicts(), &[Present, Present, Correct, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let mut result = [Verdict::Absent; WORD_LENGTH];
        let mut remaining = secret.char_counts();

        // Allow: Index needed to compare guess[i] with secret[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == secret.char_at(i) {
                result[i] = Verdict::Correct;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count -= 1;
                }
            }
        }

        // Allow: Index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Verdict::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = Verdict::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Verdict at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn verdict_at(self, position: usize) -> Verdict {
        self.0[position]
    }

    /// True when every position is Correct
    #[must_use]
    pub fn is_solved(self) -> bool {
        self == Self::SOLVED
    }

    /// Number of positions with the given verdict
    #[must_use]
    pub fn count(self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in self.0 {
            write!(f, "{}", verdict.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    /// Parse a pattern like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(format!("Invalid feedback string: {s}"));
        }

        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        for (slot, ch) in verdicts.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => Verdict::Correct,
                'Y' | 'y' | '🟨' => Verdict::Present,
                '-' | '_' | '⬜' => Verdict::Absent,
                _ => return Err(format!("Invalid feedback string: {s}")),
            };
        }
        Ok(Self(verdicts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, Present};

    fn score(guess: &str, secret: &str) -> Feedback {
        Feedback::evaluate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn verdict_strength_ordering() {
        assert!(Absent < Present);
        assert!(Present < Correct);
        assert_eq!(Absent.max(Correct), Correct);
    }

    #[test]
    fn identical_words_are_solved() {
        for word in ["SLATE", "SPEED", "OTTER", "AAAAA", "TRYST"] {
            let feedback = score(word, word);
            assert_eq!(feedback, Feedback::SOLVED);
            assert!(feedback.is_solved());
        }
    }

    #[test]
    fn disjoint_letters_all_absent() {
        let feedback = score("CHUMP", "SLATE");
        assert_eq!(feedback.verdicts(), &[Absent; 5]);
        assert_eq!(feedback.count(Absent), 5);
        assert!(!feedback.is_solved());
    }

    #[test]
    fn slate_teach_example() {
        let feedback = score("TEACH", "SLATE");
        assert_eq!(
            feedback.verdicts(),
            &[Present, Present, Correct, Absent, Absent]
        );
    }

    #[test]
    fn duplicate_letters_both_misplaced() {
        // SPEED has two E's and neither lines up with ERASE, so each E in
        // the guess takes one copy
        let feedback = score("ERASE", "SPEED");
        assert_eq!(
            feedback.verdicts(),
            &[Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn duplicate_letters_limited_by_secret() {
        // Three E's guessed, two in the secret: the exact match takes one,
        // the first misplaced E takes the other, the last gets nothing
        let feedback = score("GEESE", "SPEED");
        assert_eq!(
            feedback.verdicts(),
            &[Absent, Present, Correct, Present, Absent]
        );
    }

    #[test]
    fn exact_match_claims_letter_before_misplaced() {
        // One O in the secret, matched in place; the earlier O gets nothing
        let feedback = score("OOZED", "MONEY");
        assert_eq!(
            feedback.verdicts(),
            &[Absent, Correct, Absent, Correct, Absent]
        );
    }

    #[test]
    fn repeated_guess_letter_with_single_copy() {
        // GLASS has two S's in place; the secret SLATE has one S
        let feedback = score("GLASS", "SLATE");
        assert_eq!(
            feedback.verdicts(),
            &[Absent, Correct, Correct, Present, Absent]
        );
    }

    #[test]
    fn marks_never_exceed_secret_occurrences() {
        let words = ["SLATE", "SPEED", "ERASE", "OTTER", "GLASS", "POOPS", "TRYST"];
        for guess in words {
            for secret in words {
                let guess_word = Word::new(guess).unwrap();
                let secret_word = Word::new(secret).unwrap();
                let feedback = Feedback::evaluate(&guess_word, &secret_word);
                let counts = secret_word.char_counts();

                for (&letter, &available) in &counts {
                    let marked = (0..5)
                        .filter(|&i| {
                            guess_word.char_at(i) == letter
                                && feedback.verdict_at(i) != Absent
                        })
                        .count();
                    assert!(
                        marked <= usize::from(available),
                        "{guess} vs {secret}: {marked} marks for {}",
                        letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn emoji_and_symbol_rendering() {
        let feedback = score("TEACH", "SLATE");
        assert_eq!(feedback.to_emoji(), "🟨🟨🟩⬜⬜");
        assert_eq!(feedback.to_string(), "YYG--");
    }

    #[test]
    fn parse_from_str() {
        let parsed: Feedback = "YYG--".parse().unwrap();
        assert_eq!(parsed, score("TEACH", "SLATE"));

        let emoji: Feedback = "🟨🟨🟩⬜⬜".parse().unwrap();
        assert_eq!(parsed, emoji);

        assert!("GGGG".parse::<Feedback>().is_err());
        assert!("GGXGG".parse::<Feedback>().is_err());
    }
}
