//! Game session state machine
//!
//! A `Session` owns the secret, the letters typed so far, the attempt log and
//! the keyboard. Front ends feed it one `InputEvent` at a time and redraw from
//! its accessors plus the returned `Transition`.

use crate::core::{Feedback, Keyboard, WORD_LENGTH, Word};
use crate::wordlists::loader::choose_secret;
use log::{debug, info};
use rand::Rng;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// A single keystroke delivered by the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Letter(char),
    Backspace,
    Submit,
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One submitted guess and its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub word: Word,
    pub feedback: Feedback,
}

/// Result of handling one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed
    Ignored,
    /// The typed letters changed
    Edited,
    /// A guess was scored and the game continues
    Revealed(Attempt),
    /// The guess matched the secret
    Won {
        attempt: Attempt,
        attempts_used: usize,
    },
    /// The last attempt missed
    Lost { attempt: Attempt, secret: Word },
}

/// A single game of Wordle
#[derive(Debug, Clone)]
pub struct Session {
    secret: Word,
    input: String,
    attempts: Vec<Attempt>,
    keyboard: Keyboard,
}

impl Session {
    /// Start a game with a known secret
    #[must_use]
    pub fn new(secret: Word) -> Self {
        debug!("new session, secret {secret}");
        Self {
            secret,
            input: String::with_capacity(WORD_LENGTH),
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            keyboard: Keyboard::new(),
        }
    }

    /// Start a game with a secret drawn uniformly from `words`
    ///
    /// Returns `None` if `words` is empty.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Option<Self> {
        choose_secret(words, rng).cloned().map(Self::new)
    }

    /// Apply one input event
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{GameStatus, InputEvent, Session, Transition};
    ///
    /// let mut session = Session::new(Word::new("slate").unwrap());
    /// for c in "slate".chars() {
    ///     session.handle(InputEvent::Letter(c));
    /// }
    /// let transition = session.handle(InputEvent::Submit);
    ///
    /// assert!(matches!(transition, Transition::Won { attempts_used: 1, .. }));
    /// assert_eq!(session.status(), GameStatus::Won);
    /// ```
    pub fn handle(&mut self, event: InputEvent) -> Transition {
        if self.status().is_over() {
            return Transition::Ignored;
        }

        match event {
            InputEvent::Letter(letter) => self.push_letter(letter),
            InputEvent::Backspace => self.pop_letter(),
            InputEvent::Submit => self.submit(),
        }
    }

    fn push_letter(&mut self, letter: char) -> Transition {
        if self.input.len() >= WORD_LENGTH || !letter.is_ascii_alphabetic() {
            return Transition::Ignored;
        }
        self.input.push(letter.to_ascii_uppercase());
        debug!("input: {}", self.input);
        Transition::Edited
    }

    fn pop_letter(&mut self) -> Transition {
        if self.input.pop().is_none() {
            return Transition::Ignored;
        }
        debug!("input: {}", self.input);
        Transition::Edited
    }

    /// # Panics
    /// Panics if the input buffer holds five characters that do not form a
    /// `Word`, which `push_letter` rules out.
    fn submit(&mut self) -> Transition {
        if self.input.len() < WORD_LENGTH {
            return Transition::Ignored;
        }

        let word = Word::new(std::mem::take(&mut self.input))
            .expect("input buffer only holds ASCII letters");
        let feedback = Feedback::evaluate(&word, &self.secret);

        let before = self.keyboard;
        self.keyboard.update(&word, &feedback);
        debug_assert!(self.keyboard.dominates(&before));

        let attempt = Attempt { word, feedback };
        self.attempts.push(attempt.clone());
        info!(
            "attempt {}/{MAX_ATTEMPTS}: {} {}",
            self.attempts.len(),
            attempt.word,
            attempt.feedback
        );

        match self.status() {
            GameStatus::Won => {
                info!("won in {}", self.attempts.len());
                Transition::Won {
                    attempt,
                    attempts_used: self.attempts.len(),
                }
            }
            GameStatus::Lost => {
                info!("lost, secret was {}", self.secret);
                Transition::Lost {
                    attempt,
                    secret: self.secret.clone(),
                }
            }
            GameStatus::InProgress => Transition::Revealed(attempt),
        }
    }

    /// Derived from the attempt log
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self
            .attempts
            .last()
            .is_some_and(|attempt| attempt.word == self.secret)
        {
            GameStatus::Won
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Letters typed for the next guess
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempts.len()
    }

    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// The secret, once the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.status().is_over().then_some(&self.secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(secret: &str) -> Session {
        Session::new(Word::new(secret).unwrap())
    }

    fn type_word(session: &mut Session, word: &str) {
        for c in word.chars() {
            session.handle(InputEvent::Letter(c));
        }
    }

    fn guess(session: &mut Session, word: &str) -> Transition {
        type_word(session, word);
        session.handle(InputEvent::Submit)
    }

    #[test]
    fn letters_append_up_to_five() {
        let mut s = session("SLATE");
        assert_eq!(s.handle(InputEvent::Letter('t')), Transition::Edited);
        type_word(&mut s, "each");
        assert_eq!(s.current_guess(), "TEACH");

        assert_eq!(s.handle(InputEvent::Letter('x')), Transition::Ignored);
        assert_eq!(s.current_guess(), "TEACH");
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut s = session("SLATE");
        assert_eq!(s.handle(InputEvent::Letter('3')), Transition::Ignored);
        assert_eq!(s.handle(InputEvent::Letter(' ')), Transition::Ignored);
        assert_eq!(s.handle(InputEvent::Letter('é')), Transition::Ignored);
        assert_eq!(s.current_guess(), "");
    }

    #[test]
    fn backspace_removes_last_letter() {
        let mut s = session("SLATE");
        type_word(&mut s, "TEA");
        assert_eq!(s.handle(InputEvent::Backspace), Transition::Edited);
        assert_eq!(s.current_guess(), "TE");
    }

    #[test]
    fn backspace_on_empty_is_ignored() {
        let mut s = session("SLATE");
        assert_eq!(s.handle(InputEvent::Backspace), Transition::Ignored);
        assert_eq!(s.current_guess(), "");
    }

    #[test]
    fn short_submit_is_noop() {
        let mut s = session("SLATE");
        type_word(&mut s, "TEA");
        assert_eq!(s.handle(InputEvent::Submit), Transition::Ignored);
        assert_eq!(s.current_guess(), "TEA");
        assert!(s.attempts().is_empty());
        assert_eq!(s.status(), GameStatus::InProgress);
    }

    #[test]
    fn submit_reveals_and_clears_input() {
        let mut s = session("SLATE");
        let transition = guess(&mut s, "TEACH");

        let Transition::Revealed(attempt) = transition else {
            panic!("expected a revealed row, got {transition:?}");
        };
        assert_eq!(attempt.word.text(), "TEACH");
        assert_eq!(attempt.feedback, "YYG--".parse::<Feedback>().unwrap());
        assert_eq!(s.current_guess(), "");
        assert_eq!(s.attempts().len(), 1);
        assert_eq!(s.attempts_remaining(), 5);
        assert_eq!(s.keyboard().state(b'A'), Some(Verdict::Correct));
        assert_eq!(s.revealed_secret(), None);
    }

    #[test]
    fn win_on_matching_guess() {
        let mut s = session("SLATE");
        guess(&mut s, "TEACH");
        let transition = guess(&mut s, "SLATE");

        assert!(matches!(
            transition,
            Transition::Won {
                attempts_used: 2,
                ..
            }
        ));
        assert_eq!(s.status(), GameStatus::Won);
        assert_eq!(s.revealed_secret().map(Word::text), Some("SLATE"));
    }

    #[test]
    fn win_on_sixth_attempt() {
        let mut s = session("SLATE");
        for word in ["TEACH", "POOPS", "OTTER", "WHALE", "MEANS"] {
            guess(&mut s, word);
        }
        let transition = guess(&mut s, "SLATE");
        assert!(matches!(
            transition,
            Transition::Won {
                attempts_used: 6,
                ..
            }
        ));
        assert_eq!(s.status(), GameStatus::Won);
    }

    #[test]
    fn loss_after_six_misses() {
        let mut s = session("SLATE");
        for word in ["TEACH", "POOPS", "OTTER", "WHALE", "MEANS"] {
            assert!(matches!(guess(&mut s, word), Transition::Revealed(_)));
        }
        let transition = guess(&mut s, "SMART");

        let Transition::Lost { attempt, secret } = transition else {
            panic!("expected a loss, got {transition:?}");
        };
        assert_eq!(attempt.word.text(), "SMART");
        assert_eq!(secret.text(), "SLATE");
        assert_eq!(s.status(), GameStatus::Lost);
        assert_eq!(s.attempts().len(), MAX_ATTEMPTS);
        assert_eq!(s.attempts_remaining(), 0);
    }

    #[test]
    fn terminal_states_absorb_events() {
        let mut won = session("SLATE");
        guess(&mut won, "SLATE");

        let mut lost = session("SLATE");
        for word in ["TEACH", "POOPS", "OTTER", "WHALE", "MEANS", "SMART"] {
            guess(&mut lost, word);
        }

        for s in [&mut won, &mut lost] {
            let status = s.status();
            let attempts = s.attempts().to_vec();
            let keyboard = *s.keyboard();

            for event in [
                InputEvent::Letter('A'),
                InputEvent::Backspace,
                InputEvent::Submit,
            ] {
                assert_eq!(s.handle(event), Transition::Ignored);
            }
            type_word(s, "GLASS");
            assert_eq!(s.handle(InputEvent::Submit), Transition::Ignored);

            assert_eq!(s.status(), status);
            assert_eq!(s.attempts(), attempts.as_slice());
            assert_eq!(s.keyboard(), &keyboard);
            assert_eq!(s.current_guess(), "");
        }
    }

    #[test]
    fn keyboard_matches_history_fold() {
        let mut s = session("OTTER");
        for word in ["TRYST", "WATER", "TEACH"] {
            guess(&mut s, word);
        }
        let expected = Keyboard::from_history(
            s.attempts()
                .iter()
                .map(|attempt| (&attempt.word, &attempt.feedback)),
        );
        assert_eq!(s.keyboard(), &expected);
    }

    #[test]
    fn non_dictionary_guesses_are_accepted() {
        let mut s = session("SLATE");
        assert!(matches!(guess(&mut s, "ZZZZZ"), Transition::Revealed(_)));
        assert_eq!(s.keyboard().state(b'Z'), Some(Verdict::Absent));
    }

    #[test]
    fn random_session_uses_list() {
        let words = vec![Word::new("OTTER").unwrap()];
        let mut rng = StdRng::seed_from_u64(9);
        let mut s = Session::random(&words, &mut rng).unwrap();
        assert!(matches!(guess(&mut s, "OTTER"), Transition::Won { .. }));

        assert!(Session::random(&[], &mut rng).is_none());
    }
}
