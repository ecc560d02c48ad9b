//! Console output formatter for quiz results

use crate::config::ShareConfig;
use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use friendtype_domain::{Axis, Question, QuestionBank, QuizResult, ResultDescriptions};

const TITLE: &str = "친구가 보는 나의 MBTI";

/// Formats quiz screens and results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Intro screen shown before the first question
    pub fn intro(total_questions: usize) -> String {
        let mut output = Self::header(TITLE);
        output.push_str("\n\n");
        output.push_str("당신의 친구는 당신을 어떻게 볼까요?\n");
        output.push_str("친구의 시선으로 바라본 당신의 MBTI를 알아보세요!\n\n");
        output.push_str(&format!(
            "{}\n",
            format!(
                "{} questions. Answer with 1 or 2, /quit to stop.",
                total_questions
            )
            .dimmed()
        ));
        output
    }

    /// Dot stepper for the question at zero-based `index`
    ///
    /// ```text
    /// [●●●○○○○○○○] 3/10
    /// ```
    pub fn stepper(index: usize, total: usize) -> String {
        let done = (index + 1).min(total);
        format!(
            "[{}{}] {}/{}",
            "●".repeat(done),
            "○".repeat(total - done),
            done,
            total
        )
    }

    /// One question with its numbered options
    pub fn format_question(index: usize, question: &Question) -> String {
        let [first, second] = question.options();
        format!(
            "{} {}\n  {} {}\n  {} {}\n",
            format!("Q{}.", index + 1).cyan().bold(),
            question.prompt().bold(),
            "1)".yellow(),
            first,
            "2)".yellow(),
            second
        )
    }

    /// Format the complete result
    pub fn format(result: &QuizResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(TITLE));
        output.push('\n');

        output.push_str(&format!("\n{}\n\n", "당신의 MBTI는...".cyan().bold()));
        output.push_str(&format!(
            "  {}  {}\n",
            result.code.to_string().green().bold(),
            result.description
        ));

        output.push_str(&Self::section_header("Tally"));
        for axis in Axis::ALL {
            output.push_str(&Self::axis_line(result, axis));
            output.push('\n');
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(result: &QuizResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Type code only
    pub fn format_code(result: &QuizResult) -> String {
        result.code.to_string()
    }

    /// `<prefix> <CODE> (<description>) <suffix>`
    pub fn share_text(result: &QuizResult, share: &ShareConfig) -> String {
        let body = format!("{} ({})", result.code, result.description);
        [share.prefix.trim(), body.as_str(), share.suffix.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Numbered listing of a question bank
    pub fn format_question_list(bank: &QuestionBank) -> String {
        let mut output = String::new();
        for (i, question) in bank.iter().enumerate() {
            output.push_str(&format!(
                "{:>2}. [{}] {}\n      1) {}\n      2) {}\n",
                i + 1,
                question.axis().as_str().dimmed(),
                question.prompt(),
                question.options()[0],
                question.options()[1]
            ));
        }
        output
    }

    /// All type codes with their descriptions
    pub fn format_type_list(descriptions: &ResultDescriptions) -> String {
        descriptions
            .iter()
            .map(|(code, text)| format!("{}  {}\n", code.to_string().bold(), text))
            .collect()
    }

    /// `E/I  E 1 : 1 I  -> I (tie)`
    fn axis_line(result: &QuizResult, axis: Axis) -> String {
        let (first, second) = axis.letters();
        let winner = result.code.letter(axis);
        let mut line = format!(
            "  {}  {} {} : {} {}  -> {}",
            axis.as_str().dimmed(),
            first.as_char(),
            result.tally.count(first),
            result.tally.count(second),
            second.as_char(),
            winner.as_char().to_string().green()
        );
        if result.tally.is_tied(axis) {
            line.push_str(&format!(" {}", "(tie)".yellow()));
        }
        line
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(40);
        format!("{}\n  {}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(40).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &QuizResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &QuizResult) -> String {
        Self::format_json(result)
    }

    fn format_code(&self, result: &QuizResult) -> String {
        Self::format_code(result)
    }

    fn share_text(&self, result: &QuizResult, share: &ShareConfig) -> String {
        Self::share_text(result, share)
    }
}
