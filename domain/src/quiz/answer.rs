//! Answer value objects

use serde::{Deserialize, Serialize};

/// The literal text of the option a user selected
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answer(String);

impl Answer {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Answer::new(s)
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer(s)
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered answers, one per question, in question order
///
/// Append-only: an answer is never changed once recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSequence {
    answers: Vec<Answer>,
}

impl AnswerSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the answer for the next unanswered question
    pub fn push(&mut self, answer: impl Into<Answer>) {
        self.answers.push(answer.into());
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Answer> {
        self.answers.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter()
    }
}

impl<A: Into<Answer>> FromIterator<A> for AnswerSequence {
    fn from_iter<T: IntoIterator<Item = A>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().map(Into::into).collect(),
        }
    }
}
