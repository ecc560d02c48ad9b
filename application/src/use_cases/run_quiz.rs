//! Run Quiz use case
//!
//! Drives a [`QuizSession`] from the intro screen to the result, pulling one
//! choice per question from an [`AnswerSource`].

use crate::config::QuizConfig;
use crate::ports::answer_source::{AnswerSource, AnswerSourceError};
use crate::ports::progress::{NoProgress, QuizProgressNotifier};
use friendtype_domain::{DomainError, OptionChoice, QuizResult, QuizSession, Stage};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while running a quiz
#[derive(Error, Debug)]
pub enum RunQuizError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Source(#[from] AnswerSourceError),
}

impl RunQuizError {
    /// Check if the user quit before the result
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunQuizError::Source(AnswerSourceError::Cancelled))
    }
}

/// Use case for running one quiz session
pub struct RunQuizUseCase {
    config: QuizConfig,
}

impl RunQuizUseCase {
    pub fn new(config: QuizConfig) -> Self {
        Self { config }
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute(&self, source: &mut dyn AnswerSource) -> Result<QuizResult, RunQuizError> {
        self.execute_with_progress(source, &NoProgress)
    }

    /// Execute the use case with progress callbacks
    pub fn execute_with_progress(
        &self,
        source: &mut dyn AnswerSource,
        progress: &dyn QuizProgressNotifier,
    ) -> Result<QuizResult, RunQuizError> {
        let mut session = self.config.new_session();
        let total = session.bank().count();

        info!("Starting quiz with {} questions", total);
        progress.on_intro(total);
        session.start()?;

        while let Stage::Question(index) = session.stage() {
            let choice = Self::ask(&session, index, total, source, progress)?;
            debug!("Question {} answered with {:?}", index + 1, choice);
            session.answer_choice(choice)?;
            progress.on_answer(index, choice);
        }

        let result = session
            .result()
            .cloned()
            .ok_or_else(|| DomainError::invalid("session finished without a result"))?;

        info!("Quiz finished: {}", result.code);
        progress.on_result(&result);
        Ok(result)
    }

    fn ask(
        session: &QuizSession,
        index: usize,
        total: usize,
        source: &mut dyn AnswerSource,
        progress: &dyn QuizProgressNotifier,
    ) -> Result<OptionChoice, RunQuizError> {
        let question = session.bank().get(index)?;
        progress.on_question(index, total, question);
        Ok(source.answer(index, total, question)?)
    }
}
