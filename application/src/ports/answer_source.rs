//! Answer source port for collecting the user's choices.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`AnswerSource`] - defined here in application layer
//! - **Adapter**: `TerminalAnswerSource` - implemented in presentation layer
//!
//! # Built-in Implementations
//!
//! - [`ScriptedAnswers`] - Replays a fixed list of choices (non-interactive runs, tests)

use friendtype_domain::{OptionChoice, Question};
use thiserror::Error;

/// Error type for answer collection.
///
/// These errors are failures to obtain an answer, not answers themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerSourceError {
    /// User quit before finishing (e.g., `/quit` or Ctrl+D).
    #[error("Quiz cancelled")]
    Cancelled,

    /// A scripted source ran out of choices.
    #[error("No answer supplied for question {}", .index + 1)]
    Exhausted { index: usize },

    /// Terminal read failure.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Port for obtaining the user's choice for one question.
///
/// Implementations only pick between the two options; turning the choice into
/// answer text and validating it is the session's job.
pub trait AnswerSource {
    /// Ask the question at zero-based `index` out of `total`.
    fn answer(
        &mut self,
        index: usize,
        total: usize,
        question: &Question,
    ) -> Result<OptionChoice, AnswerSourceError>;
}

/// Answer source that replays pre-supplied choices in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    choices: Vec<OptionChoice>,
}

impl ScriptedAnswers {
    pub fn new(choices: Vec<OptionChoice>) -> Self {
        Self { choices }
    }

    /// Parse choices from `1,2,1`, `a b a` or a compact `aba` / `121` string.
    pub fn parse(spec: &str) -> Result<Self, String> {
        let trimmed = spec.trim();
        let tokens: Vec<&str> = if trimmed.contains([',', ' ']) {
            trimmed
                .split([',', ' '])
                .filter(|t| !t.trim().is_empty())
                .collect()
        } else {
            trimmed
                .char_indices()
                .map(|(i, c)| &trimmed[i..i + c.len_utf8()])
                .collect()
        };

        let choices = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                OptionChoice::parse_token(token).ok_or_else(|| {
                    format!(
                        "Invalid choice {:?} at position {}. Use 1/2 or a/b",
                        token.trim(),
                        i + 1
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if choices.is_empty() {
            return Err("No choices given".to_string());
        }
        Ok(Self { choices })
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

impl AnswerSource for ScriptedAnswers {
    fn answer(
        &mut self,
        index: usize,
        _total: usize,
        _question: &Question,
    ) -> Result<OptionChoice, AnswerSourceError> {
        self.choices
            .get(index)
            .copied()
            .ok_or(AnswerSourceError::Exhausted { index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use friendtype_domain::QuestionBank;

    #[test]
    fn test_parse_comma_separated() {
        let s = ScriptedAnswers::parse("1,2, 1").unwrap();
        assert_eq!(
            s.choices,
            vec![OptionChoice::First, OptionChoice::Second, OptionChoice::First]
        );
    }

    #[test]
    fn test_parse_compact_letters() {
        let s = ScriptedAnswers::parse("abBA").unwrap();
        assert_eq!(s.len(), 4);
        assert_eq!(s.choices[2], OptionChoice::Second);
        assert_eq!(s.choices[3], OptionChoice::First);
    }

    #[test]
    fn test_parse_rejects_unknown_token() {
        let err = ScriptedAnswers::parse("1,3").unwrap_err();
        assert!(err.contains("position 2"));
        assert!(ScriptedAnswers::parse("").is_err());
        assert!(ScriptedAnswers::parse(" , ").is_err());
    }

    #[test]
    fn test_exhausted_when_out_of_choices() {
        let bank = QuestionBank::reference();
        let mut s = ScriptedAnswers::new(vec![OptionChoice::First]);
        let q = bank.get(0).unwrap();
        assert_eq!(s.answer(0, 10, q).unwrap(), OptionChoice::First);
        assert_eq!(
            s.answer(1, 10, q).unwrap_err(),
            AnswerSourceError::Exhausted { index: 1 }
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AnswerSourceError::Exhausted { index: 4 }.to_string(),
            "No answer supplied for question 5"
        );
        assert_eq!(AnswerSourceError::Cancelled.to_string(), "Quiz cancelled");
    }
}
