//! Game session
//!
//! The input state machine that ties scoring and the keyboard together.

mod session;

pub use session::{Attempt, GameStatus, InputEvent, MAX_ATTEMPTS, Session, Transition};
