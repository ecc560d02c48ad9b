//! Output formatter trait

use crate::config::ShareConfig;
use friendtype_domain::{OutputFormat, QuizResult};

/// Trait for formatting quiz results
pub trait OutputFormatter {
    /// Format the complete result with the per-axis tally
    fn format(&self, result: &QuizResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &QuizResult) -> String;

    /// Format the type code only
    fn format_code(&self, result: &QuizResult) -> String;

    /// One-line text for sharing the result
    fn share_text(&self, result: &QuizResult, share: &ShareConfig) -> String;

    /// Dispatch on the configured output format
    fn render(&self, result: &QuizResult, format: OutputFormat, share: &ShareConfig) -> String {
        match format {
            OutputFormat::Full => self.format(result),
            OutputFormat::Code => self.format_code(result),
            OutputFormat::Json => self.format_json(result),
            OutputFormat::Share => self.share_text(result, share),
        }
    }
}
