//! Application layer for friendtype
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::QuizConfig;
pub use ports::{
    answer_source::{AnswerSource, AnswerSourceError, ScriptedAnswers},
    progress::{NoProgress, QuizProgressNotifier},
};
pub use use_cases::run_quiz::{RunQuizError, RunQuizUseCase};
pub use use_cases::score_answers::{ScoreAnswersInput, ScoreAnswersUseCase};
