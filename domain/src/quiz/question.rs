//! Question value object

use super::axis::Axis;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Which of a question's two options was picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionChoice {
    First,
    Second,
}

impl OptionChoice {
    /// Zero-based position inside [`Question::options`]
    pub fn index(&self) -> usize {
        match self {
            OptionChoice::First => 0,
            OptionChoice::Second => 1,
        }
    }

    /// Accepts `1`/`2` and `a`/`b` (any case)
    pub fn parse_token(token: &str) -> Option<OptionChoice> {
        match token.trim().to_lowercase().as_str() {
            "1" | "a" => Some(OptionChoice::First),
            "2" | "b" => Some(OptionChoice::Second),
            _ => None,
        }
    }
}

/// A forced-choice question (Value Object)
///
/// Holds a prompt, exactly two answer texts and the axis the answer credits.
/// Answers are matched by text, so the two options must differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion")]
pub struct Question {
    prompt: String,
    options: [String; 2],
    axis: Axis,
}

#[derive(Deserialize)]
struct RawQuestion {
    prompt: String,
    options: [String; 2],
    axis: Axis,
}

impl TryFrom<RawQuestion> for Question {
    type Error = DomainError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        let [first, second] = raw.options;
        Question::new(raw.prompt, [first, second], raw.axis)
    }
}

impl Question {
    /// Create a new question, rejecting blank texts and identical options
    pub fn new(
        prompt: impl Into<String>,
        options: [impl Into<String>; 2],
        axis: Axis,
    ) -> Result<Self, DomainError> {
        let prompt = prompt.into();
        let [first, second] = options;
        let options = [first.into(), second.into()];

        if prompt.trim().is_empty() {
            return Err(DomainError::invalid("question prompt cannot be empty"));
        }
        if options.iter().any(|o| o.trim().is_empty()) {
            return Err(DomainError::invalid(format!(
                "question \"{}\" has an empty option",
                prompt
            )));
        }
        if options[0] == options[1] {
            return Err(DomainError::invalid(format!(
                "question \"{}\" has two identical options",
                prompt
            )));
        }

        Ok(Self {
            prompt,
            options,
            axis,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String; 2] {
        &self.options
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Text of the given option
    pub fn option(&self, choice: OptionChoice) -> &str {
        &self.options[choice.index()]
    }

    /// Identify which option an answer text refers to, by exact string match
    pub fn choice_for(&self, answer: &str) -> Option<OptionChoice> {
        if answer == self.options[0] {
            Some(OptionChoice::First)
        } else if answer == self.options[1] {
            Some(OptionChoice::Second)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new("Likes parties?", ["Yes", "No"], Axis::EI).unwrap()
    }

    #[test]
    fn test_question_creation() {
        let q = sample();
        assert_eq!(q.prompt(), "Likes parties?");
        assert_eq!(q.option(OptionChoice::First), "Yes");
        assert_eq!(q.option(OptionChoice::Second), "No");
        assert_eq!(q.axis(), Axis::EI);
    }

    #[test]
    fn test_empty_prompt_rejected() {
        let err = Question::new("  ", ["a", "b"], Axis::SN).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_identical_options_rejected() {
        assert!(Question::new("Q", ["same", "same"], Axis::TF).is_err());
        assert!(Question::new("Q", ["", "b"], Axis::TF).is_err());
    }

    #[test]
    fn test_choice_for_matches_exact_text() {
        let q = sample();
        assert_eq!(q.choice_for("Yes"), Some(OptionChoice::First));
        assert_eq!(q.choice_for("No"), Some(OptionChoice::Second));
        assert_eq!(q.choice_for("yes"), None);
        assert_eq!(q.choice_for("Yes "), None);
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(OptionChoice::parse_token("1"), Some(OptionChoice::First));
        assert_eq!(OptionChoice::parse_token(" B "), Some(OptionChoice::Second));
        assert_eq!(OptionChoice::parse_token("3"), None);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Question = serde_json::from_str(
            r#"{"prompt":"Q","options":["a","b"],"axis":"J/P"}"#,
        )
        .unwrap();
        assert_eq!(ok.axis(), Axis::JP);

        let bad = serde_json::from_str::<Question>(
            r#"{"prompt":"Q","options":["a","a"],"axis":"J/P"}"#,
        );
        assert!(bad.is_err());
    }
}
