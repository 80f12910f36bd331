//! Terminal output formatting
//!
//! Colored tiles, keyboard rows and share text for the line-based front end.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_outcome, print_share};
