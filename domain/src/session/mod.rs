//! Session domain
//!
//! A [`QuizSession`] tracks one user's progress through the question bank.
//! Sessions never share state; each owns its own answers.

pub mod entities;

pub use entities::{QuizSession, Stage};
