//! Interactive quiz module
//!
//! Provides a readline-based prompt that answers questions for the quiz
//! use case.

mod prompt;

pub use prompt::TerminalAnswerSource;
