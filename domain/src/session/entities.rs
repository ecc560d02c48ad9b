//! Quiz session entity

use crate::core::error::DomainError;
use crate::quiz::{
    AnswerSequence, OptionChoice, Question, QuestionBank, QuizResult, ResultDescriptions,
    ScoringEngine,
};
use std::sync::Arc;

/// Screen a session is currently on, derived from its step counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Step 0: nothing asked yet
    Intro,
    /// Steps `1..=count`: showing the question at this zero-based index
    Question(usize),
    /// Step `count + 1`: result computed and cached
    Result,
}

/// One run through the quiz (Entity)
///
/// Owns its answers and a step counter. The step starts at 0, `start` moves it
/// to 1, each accepted answer adds one, and the answer to the last question
/// moves it to `count + 1`, at which point the result is computed once and
/// kept for the rest of the session.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    descriptions: Arc<ResultDescriptions>,
    engine: ScoringEngine,
    step: usize,
    answers: AnswerSequence,
    result: Option<QuizResult>,
}

impl QuizSession {
    pub fn new(
        bank: Arc<QuestionBank>,
        descriptions: Arc<ResultDescriptions>,
        engine: ScoringEngine,
    ) -> Self {
        Self {
            bank,
            descriptions,
            engine,
            step: 0,
            answers: AnswerSequence::new(),
            result: None,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn stage(&self) -> Stage {
        if self.step == 0 {
            Stage::Intro
        } else if self.step <= self.bank.count() {
            Stage::Question(self.step - 1)
        } else {
            Stage::Result
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn answers(&self) -> &AnswerSequence {
        &self.answers
    }

    /// Cached result, present only at [`Stage::Result`]
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    /// Leave the intro screen
    pub fn start(&mut self) -> Result<Stage, DomainError> {
        if self.stage() != Stage::Intro {
            return Err(DomainError::invalid(format!(
                "session already started (step {})",
                self.step
            )));
        }
        self.step = 1;
        Ok(self.stage())
    }

    /// Question to render at the current step
    pub fn current_question(&self) -> Option<&Question> {
        match self.stage() {
            Stage::Question(index) => self.bank.get(index).ok(),
            _ => None,
        }
    }

    /// Record the answer text for the current question
    ///
    /// The text must equal one of the current question's options; otherwise
    /// the session is left unchanged.
    pub fn answer(&mut self, text: &str) -> Result<Stage, DomainError> {
        let Stage::Question(index) = self.stage() else {
            return Err(DomainError::invalid(format!(
                "no question is awaiting an answer (step {})",
                self.step
            )));
        };

        let question = self.bank.get(index)?;
        if question.choice_for(text).is_none() {
            return Err(DomainError::invalid(format!(
                "{:?} is not an option of question {}",
                text,
                index + 1
            )));
        }

        if index + 1 == self.bank.count() {
            let mut completed = self.answers.clone();
            completed.push(text);
            let result = self
                .engine
                .evaluate(&completed, &self.bank, &self.descriptions)?;
            self.answers = completed;
            self.result = Some(result);
        } else {
            self.answers.push(text);
        }

        self.step += 1;
        Ok(self.stage())
    }

    /// Record option A or B of the current question
    pub fn answer_choice(&mut self, choice: OptionChoice) -> Result<Stage, DomainError> {
        let text = self
            .current_question()
            .map(|q| q.option(choice).to_string())
            .ok_or_else(|| {
                DomainError::invalid(format!(
                    "no question is awaiting an answer (step {})",
                    self.step
                ))
            })?;
        self.answer(&text)
    }

    /// Discard answers and result and return to the intro screen
    pub fn reset(&mut self) {
        self.step = 0;
        self.answers = AnswerSequence::new();
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::TieBreak;

    fn session() -> QuizSession {
        QuizSession::new(
            Arc::new(QuestionBank::reference()),
            Arc::new(ResultDescriptions::reference()),
            ScoringEngine::new(TieBreak::Second),
        )
    }

    #[test]
    fn test_new_session_is_at_intro() {
        let s = session();
        assert_eq!(s.step(), 0);
        assert_eq!(s.stage(), Stage::Intro);
        assert!(s.current_question().is_none());
        assert!(s.result().is_none());
    }

    #[test]
    fn test_start_moves_to_first_question() {
        let mut s = session();
        assert_eq!(s.start().unwrap(), Stage::Question(0));
        assert_eq!(s.step(), 1);
        assert!(s.start().is_err());
    }

    #[test]
    fn test_answer_before_start_is_rejected() {
        let mut s = session();
        assert!(s.answer_choice(OptionChoice::First).is_err());
        assert_eq!(s.step(), 0);
    }

    #[test]
    fn test_steps_advance_to_result() {
        let mut s = session();
        s.start().unwrap();
        let count = s.bank().count();
        for i in 0..count {
            assert_eq!(s.stage(), Stage::Question(i));
            assert_eq!(s.step(), i + 1);
            s.answer_choice(OptionChoice::First).unwrap();
        }
        assert_eq!(s.step(), count + 1);
        assert_eq!(s.stage(), Stage::Result);
        assert_eq!(s.answers().len(), count);

        let result = s.result().unwrap();
        assert_eq!(result.code.to_string(), "ESTJ");
        assert_eq!(result.description, "엄격한 관리자");
    }

    #[test]
    fn test_answer_after_result_is_rejected_and_result_kept() {
        let mut s = session();
        s.start().unwrap();
        while let Stage::Question(_) = s.stage() {
            s.answer_choice(OptionChoice::Second).unwrap();
        }
        let before = s.result().cloned();
        assert!(s.answer_choice(OptionChoice::First).is_err());
        assert_eq!(s.result().cloned(), before);
        assert_eq!(s.result().unwrap().code.to_string(), "INFP");
    }

    #[test]
    fn test_wrong_text_leaves_session_unchanged() {
        let mut s = session();
        s.start().unwrap();
        let err = s.answer("잘 모르겠어요").unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(s.step(), 1);
        assert!(s.answers().is_empty());
    }

    #[test]
    fn test_answer_by_text() {
        let mut s = session();
        s.start().unwrap();
        let text = s.current_question().unwrap().options()[1].clone();
        assert_eq!(s.answer(&text).unwrap(), Stage::Question(1));
        assert_eq!(s.answers().get(0).unwrap().as_str(), text);
    }

    #[test]
    fn test_reset_returns_to_intro() {
        let mut s = session();
        s.start().unwrap();
        while let Stage::Question(_) = s.stage() {
            s.answer_choice(OptionChoice::First).unwrap();
        }
        s.reset();
        assert_eq!(s.stage(), Stage::Intro);
        assert!(s.answers().is_empty());
        assert!(s.result().is_none());
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = session();
        let b = session();
        a.start().unwrap();
        a.answer_choice(OptionChoice::First).unwrap();
        assert_eq!(a.answers().len(), 1);
        assert!(b.answers().is_empty());
        assert_eq!(b.step(), 0);
    }

    #[test]
    fn test_missing_description_fails_last_answer() {
        let mut s = QuizSession::new(
            Arc::new(QuestionBank::reference()),
            Arc::new(ResultDescriptions::default()),
            ScoringEngine::default(),
        );
        s.start().unwrap();
        let count = s.bank().count();
        for _ in 0..count - 1 {
            s.answer_choice(OptionChoice::First).unwrap();
        }
        let err = s.answer_choice(OptionChoice::First).unwrap_err();
        assert_eq!(err, DomainError::UnknownType("ESTJ".to_string()));
        assert_eq!(s.stage(), Stage::Question(count - 1));
        assert!(s.result().is_none());
    }
}
