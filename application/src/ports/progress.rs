//! Progress notification port
//!
//! Defines the interface for reporting progress while a quiz runs.

use friendtype_domain::{OptionChoice, Question, QuizResult};

/// Callback for progress updates during a quiz
///
/// Implementations live in the presentation layer and render the intro,
/// the stepper, and the result screen.
pub trait QuizProgressNotifier {
    /// Called once before the first question
    fn on_intro(&self, total_questions: usize);

    /// Called before a question is asked
    fn on_question(&self, index: usize, total: usize, question: &Question);

    /// Called after an answer has been recorded
    fn on_answer(&self, _index: usize, _choice: OptionChoice) {}

    /// Called once when the result is ready
    fn on_result(&self, _result: &QuizResult) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl QuizProgressNotifier for NoProgress {
    fn on_intro(&self, _total_questions: usize) {}
    fn on_question(&self, _index: usize, _total: usize, _question: &Question) {}
}
