//! Question bank entity

use super::axis::Axis;
use super::question::Question;
use crate::core::error::DomainError;
use serde::Serialize;

/// An ordered, immutable set of questions
///
/// Built once at startup and shared read-only. The question count is whatever
/// the bank was built with; nothing else in the crate assumes ten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Create a bank from questions in presentation order
    pub fn new(questions: Vec<Question>) -> Result<Self, DomainError> {
        if questions.is_empty() {
            return Err(DomainError::invalid("question bank cannot be empty"));
        }
        Ok(Self { questions })
    }

    /// Look up a question by zero-based index
    pub fn get(&self, index: usize) -> Result<&Question, DomainError> {
        self.questions.get(index).ok_or(DomainError::OutOfRange {
            index,
            count: self.questions.len(),
        })
    }

    /// Number of questions in the bank
    pub fn count(&self) -> usize {
        self.questions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Number of questions per axis, in type-code axis order
    pub fn axis_counts(&self) -> [(Axis, usize); 4] {
        Axis::ALL.map(|axis| {
            let n = self.questions.iter().filter(|q| q.axis() == axis).count();
            (axis, n)
        })
    }

    /// Axes on which a split answer is possible (even, non-zero count)
    pub fn tie_prone_axes(&self) -> Vec<Axis> {
        self.axis_counts()
            .into_iter()
            .filter(|(_, n)| *n > 0 && n % 2 == 0)
            .map(|(axis, _)| axis)
            .collect()
    }

    /// Axes no question measures; these always resolve by tie-break
    pub fn uncovered_axes(&self) -> Vec<Axis> {
        self.axis_counts()
            .into_iter()
            .filter(|(_, n)| *n == 0)
            .map(|(axis, _)| axis)
            .collect()
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
