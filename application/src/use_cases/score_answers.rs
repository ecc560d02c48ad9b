//! Score Answers use case
//!
//! Scores a complete set of answers in one call, without stepping through a
//! session. Answers can be given as literal option texts or as positions.

use crate::config::QuizConfig;
use friendtype_domain::{AnswerSequence, DomainError, OptionChoice, QuizResult};
use tracing::debug;

/// Input for the ScoreAnswers use case
#[derive(Debug, Clone)]
pub enum ScoreAnswersInput {
    /// Literal option texts, one per question
    Texts(Vec<String>),
    /// Option A/B per question
    Choices(Vec<OptionChoice>),
}

/// Use case for scoring a finished answer list
pub struct ScoreAnswersUseCase {
    config: QuizConfig,
}

impl ScoreAnswersUseCase {
    pub fn new(config: QuizConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, input: ScoreAnswersInput) -> Result<QuizResult, DomainError> {
        let bank = self.config.bank();
        let answers: AnswerSequence = match input {
            ScoreAnswersInput::Texts(texts) => texts.into_iter().collect(),
            ScoreAnswersInput::Choices(choices) => {
                if choices.len() != bank.count() {
                    return Err(DomainError::invalid(format!(
                        "expected {} answers, got {}",
                        bank.count(),
                        choices.len()
                    )));
                }
                choices
                    .iter()
                    .enumerate()
                    .map(|(i, choice)| Ok(bank.get(i)?.option(*choice).to_string()))
                    .collect::<Result<Vec<_>, DomainError>>()?
                    .into_iter()
                    .collect()
            }
        };

        debug!("Scoring {} answers", answers.len());
        self.config
            .engine()
            .evaluate(&answers, bank, self.config.descriptions())
    }
}
