//! Progress reporting while the quiz runs

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use friendtype_application::QuizProgressNotifier;
use friendtype_domain::{OptionChoice, Question, QuizResult};

/// Renders the intro screen and a dot stepper above each question
pub struct ConsoleProgress;

impl ConsoleProgress {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizProgressNotifier for ConsoleProgress {
    fn on_intro(&self, total_questions: usize) {
        println!();
        println!("{}", ConsoleFormatter::intro(total_questions));
    }

    fn on_question(&self, index: usize, total: usize, _question: &Question) {
        println!();
        println!("{}", ConsoleFormatter::stepper(index, total).cyan());
    }

    fn on_result(&self, _result: &QuizResult) {
        println!();
    }
}

/// Simple text-based progress (no colors or stepper)
pub struct SimpleProgress;

impl QuizProgressNotifier for SimpleProgress {
    fn on_intro(&self, total_questions: usize) {
        println!("-> {} questions", total_questions);
    }

    fn on_question(&self, index: usize, total: usize, _question: &Question) {
        println!("-> Question {}/{}", index + 1, total);
    }

    fn on_answer(&self, _index: usize, choice: OptionChoice) {
        println!("  v {}", choice.index() + 1);
    }

    fn on_result(&self, _result: &QuizResult) {
        println!();
    }
}
