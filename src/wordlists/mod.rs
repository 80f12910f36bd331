//! Word list for secret selection
//!
//! The game draws from a small fixed list embedded into the binary.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
