//! Scoring engine
//!
//! Maps a complete answer sequence onto a [`TypeCode`]. Each answer credits the
//! first letter of its question's axis when it matches the first option text
//! and the second letter when it matches the second. The letter with the
//! strictly larger count wins each axis; equal counts are settled by the
//! configured [`TieBreak`].

use super::answer::AnswerSequence;
use super::bank::QuestionBank;
use super::description::ResultDescriptions;
use super::question::OptionChoice;
use super::tally::{TieBreak, TraitTally};
use super::type_code::TypeCode;
use crate::core::error::DomainError;
use serde::Serialize;

/// Outcome of a completed quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    pub code: TypeCode,
    pub description: String,
    pub tally: TraitTally,
}

/// Pure scoring over a question bank
///
/// Holds only the tie-break policy, so scoring the same answers twice always
/// yields the same code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringEngine {
    tie_break: TieBreak,
}

impl ScoringEngine {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Count letters for a complete answer sequence
    pub fn tally(
        &self,
        answers: &AnswerSequence,
        bank: &QuestionBank,
    ) -> Result<TraitTally, DomainError> {
        if answers.len() != bank.count() {
            return Err(DomainError::invalid(format!(
                "expected {} answers, got {}",
                bank.count(),
                answers.len()
            )));
        }

        let mut tally = TraitTally::new();
        for (index, answer) in answers.iter().enumerate() {
            let question = bank.get(index)?;
            let choice = question.choice_for(answer.as_str()).ok_or_else(|| {
                DomainError::invalid(format!(
                    "answer {} ({:?}) matches neither option of question {}",
                    index + 1,
                    answer.as_str(),
                    index + 1
                ))
            })?;

            let (first, second) = question.axis().letters();
            tally.increment(match choice {
                OptionChoice::First => first,
                OptionChoice::Second => second,
            });
        }
        Ok(tally)
    }

    /// Compute the type code for a complete answer sequence
    pub fn score(
        &self,
        answers: &AnswerSequence,
        bank: &QuestionBank,
    ) -> Result<TypeCode, DomainError> {
        Ok(self.tally(answers, bank)?.type_code(self.tie_break))
    }

    /// Score and resolve the description in one step
    pub fn evaluate(
        &self,
        answers: &AnswerSequence,
        bank: &QuestionBank,
        descriptions: &ResultDescriptions,
    ) -> Result<QuizResult, DomainError> {
        let tally = self.tally(answers, bank)?;
        let code = tally.type_code(self.tie_break);
        let description = descriptions.describe(code)?.to_string();
        Ok(QuizResult {
            code,
            description,
            tally,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::axis::{Axis, Letter};
    use crate::quiz::question::Question;

    fn answers_by_choice(bank: &QuestionBank, pick: impl Fn(usize) -> OptionChoice) -> AnswerSequence {
        bank.iter()
            .enumerate()
            .map(|(i, q)| q.option(pick(i)).to_string())
            .collect()
    }

    #[test]
    fn test_all_first_options_is_estj() {
        let bank = QuestionBank::reference();
        let answers = answers_by_choice(&bank, |_| OptionChoice::First);
        let engine = ScoringEngine::default();

        let tally = engine.tally(&answers, &bank).unwrap();
        assert_eq!(tally.count(Letter::E), 2);
        assert_eq!(tally.count(Letter::I), 0);
        assert_eq!(tally.count(Letter::S), 3);
        assert_eq!(tally.count(Letter::T), 2);
        assert_eq!(tally.count(Letter::J), 3);
        assert_eq!(engine.score(&answers, &bank).unwrap().to_string(), "ESTJ");
    }

    #[test]
    fn test_all_second_options_is_infp() {
        let bank = QuestionBank::reference();
        let answers = answers_by_choice(&bank, |_| OptionChoice::Second);
        let code = ScoringEngine::default().score(&answers, &bank).unwrap();
        assert_eq!(code.to_string(), "INFP");
    }

    #[test]
    fn test_alternating_pattern_on_reference_set() {
        // First option on questions 1,3,5,7,9; second on 2,4,6,8,10.
        // E=1 I=1 (tie -> I), S=2 N=1, T=2 F=0, J=0 P=3.
        let bank = QuestionBank::reference();
        let answers = answers_by_choice(&bank, |i| {
            if i % 2 == 0 {
                OptionChoice::First
            } else {
                OptionChoice::Second
            }
        });
        let engine = ScoringEngine::default();
        let tally = engine.tally(&answers, &bank).unwrap();
        assert!(tally.is_tied(Axis::EI));
        assert_eq!(tally.count(Letter::S), 2);
        assert_eq!(tally.count(Letter::N), 1);
        assert_eq!(tally.count(Letter::P), 3);
        assert_eq!(engine.score(&answers, &bank).unwrap().to_string(), "ISTP");

        let first_on_tie = ScoringEngine::new(TieBreak::First);
        assert_eq!(first_on_tie.score(&answers, &bank).unwrap().to_string(), "ESTP");
    }

    #[test]
    fn test_score_is_idempotent() {
        let bank = QuestionBank::reference();
        let answers = answers_by_choice(&bank, |i| {
            if i % 3 == 0 {
                OptionChoice::Second
            } else {
                OptionChoice::First
            }
        });
        let engine = ScoringEngine::default();
        let first = engine.score(&answers, &bank).unwrap();
        let second = engine.score(&answers, &bank).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_answer_combination_yields_valid_code() {
        let bank = QuestionBank::reference();
        let engine = ScoringEngine::default();
        for mask in 0u32..(1 << bank.count()) {
            let answers = answers_by_choice(&bank, |i| {
                if mask & (1 << i) == 0 {
                    OptionChoice::First
                } else {
                    OptionChoice::Second
                }
            });
            let tally = engine.tally(&answers, &bank).unwrap();
            for (axis, n) in bank.axis_counts() {
                assert_eq!(tally.axis_total(axis), n);
            }
            let code = tally.type_code(engine.tie_break());
            let text = code.to_string();
            assert_eq!(text.len(), 4);
            for axis in Axis::ALL {
                assert_eq!(code.letter(axis).axis(), axis);
            }
        }
    }

    #[test]
    fn test_length_mismatch_is_invalid_input() {
        let bank = QuestionBank::reference();
        let mut answers = AnswerSequence::new();
        answers.push(bank.get(0).unwrap().option(OptionChoice::First));
        let err = ScoringEngine::default().score(&answers, &bank).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("expected 10 answers, got 1"));
    }

    #[test]
    fn test_unknown_answer_text_is_invalid_input() {
        let bank = QuestionBank::reference();
        let mut answers = answers_by_choice(&bank, |_| OptionChoice::First);
        answers = answers
            .iter()
            .enumerate()
            .map(|(i, a)| if i == 4 { "아마도".to_string() } else { a.to_string() })
            .collect();
        let err = ScoringEngine::default().score(&answers, &bank).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("question 5"));
    }

    #[test]
    fn test_even_axis_tie_uses_policy() {
        let bank = QuestionBank::new(vec![
            Question::new("a", ["a1", "a2"], Axis::TF).unwrap(),
            Question::new("b", ["b1", "b2"], Axis::TF).unwrap(),
        ])
        .unwrap();
        let answers: AnswerSequence = ["a1", "b2"].into_iter().collect();

        let second = ScoringEngine::new(TieBreak::Second).score(&answers, &bank).unwrap();
        assert_eq!(second.letter(Axis::TF), Letter::F);
        // Axes without questions are ties as well.
        assert_eq!(second.to_string(), "INFP");

        let first = ScoringEngine::new(TieBreak::First).score(&answers, &bank).unwrap();
        assert_eq!(first.to_string(), "ESTJ");
    }

    #[test]
    fn test_evaluate_attaches_description() {
        let bank = QuestionBank::reference();
        let answers = answers_by_choice(&bank, |_| OptionChoice::First);
        let result = ScoringEngine::default()
            .evaluate(&answers, &bank, &ResultDescriptions::reference())
            .unwrap();
        assert_eq!(result.code.to_string(), "ESTJ");
        assert_eq!(result.description, "엄격한 관리자");
    }

    #[test]
    fn test_evaluate_fails_on_missing_description() {
        let bank = QuestionBank::reference();
        let answers = answers_by_choice(&bank, |_| OptionChoice::Second);
        let err = ScoringEngine::default()
            .evaluate(&answers, &bank, &ResultDescriptions::default())
            .unwrap_err();
        assert_eq!(err, DomainError::UnknownType("INFP".to_string()));
    }
}
