//! Quiz configuration container.
//!
//! [`QuizConfig`] bundles the immutable data every quiz run needs: the
//! question bank, the description table, and the tie-break policy. Bank and
//! table are behind `Arc` so every session shares one copy.

use friendtype_domain::{
    QuestionBank, QuizSession, ResultDescriptions, ScoringEngine, TieBreak,
};
use std::sync::Arc;

/// Configuration container handed to use cases.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    bank: Arc<QuestionBank>,
    descriptions: Arc<ResultDescriptions>,
    tie_break: TieBreak,
}

impl Default for QuizConfig {
    /// Built-in questions and descriptions with the default tie-break
    fn default() -> Self {
        Self::new(QuestionBank::reference(), ResultDescriptions::reference())
    }
}

impl QuizConfig {
    pub fn new(bank: QuestionBank, descriptions: ResultDescriptions) -> Self {
        Self {
            bank: Arc::new(bank),
            descriptions: Arc::new(descriptions),
            tie_break: TieBreak::default(),
        }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    // ==================== Accessors ====================

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn descriptions(&self) -> &ResultDescriptions {
        &self.descriptions
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    pub fn engine(&self) -> ScoringEngine {
        ScoringEngine::new(self.tie_break)
    }

    // ==================== Factories ====================

    /// Fresh session sharing this config's bank and table
    pub fn new_session(&self) -> QuizSession {
        QuizSession::new(
            Arc::clone(&self.bank),
            Arc::clone(&self.descriptions),
            self.engine(),
        )
    }
}
