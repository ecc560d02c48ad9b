//! Readline prompt that answers quiz questions from the terminal

use crate::output::console::ConsoleFormatter;
use friendtype_application::{AnswerSource, AnswerSourceError};
use friendtype_domain::{OptionChoice, Question};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// What a line typed at the prompt means
#[derive(Debug, Clone, PartialEq, Eq)]
enum PromptInput {
    Choice(OptionChoice),
    Quit,
    Help,
    Empty,
    Invalid(String),
}

/// Interactive answer source backed by rustyline
///
/// Accepts the option text itself, or `1`/`2` and `a`/`b` by position.
/// Invalid input re-prompts; `/quit` or Ctrl+D cancels the quiz.
pub struct TerminalAnswerSource {
    editor: DefaultEditor,
}

impl TerminalAnswerSource {
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    fn interpret(line: &str, question: &Question) -> PromptInput {
        let line = line.trim();
        if line.is_empty() {
            return PromptInput::Empty;
        }
        if line.starts_with('/') {
            return match line {
                "/quit" | "/exit" | "/q" => PromptInput::Quit,
                "/help" | "/h" | "/?" => PromptInput::Help,
                other => PromptInput::Invalid(format!("Unknown command: {}", other)),
            };
        }
        question
            .choice_for(line)
            .or_else(|| OptionChoice::parse_token(line))
            .map(PromptInput::Choice)
            .unwrap_or_else(|| {
                PromptInput::Invalid(format!("Please answer 1 or 2 (got {:?})", line))
            })
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  1, a            - Pick the first option");
        println!("  2, b            - Pick the second option");
        println!("  /help, /h, /?   - Show this help");
        println!("  /quit, /exit, /q - Stop the quiz");
        println!();
    }
}

impl AnswerSource for TerminalAnswerSource {
    fn answer(
        &mut self,
        index: usize,
        _total: usize,
        question: &Question,
    ) -> Result<OptionChoice, AnswerSourceError> {
        print!("{}", ConsoleFormatter::format_question(index, question));

        loop {
            match self.editor.readline("> ") {
                Ok(line) => match Self::interpret(&line, question) {
                    PromptInput::Choice(choice) => return Ok(choice),
                    PromptInput::Quit => return Err(AnswerSourceError::Cancelled),
                    PromptInput::Help => Self::print_help(),
                    PromptInput::Empty => continue,
                    PromptInput::Invalid(message) => println!("{}", message),
                },
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    return Err(AnswerSourceError::Cancelled);
                }
                Err(err) => return Err(AnswerSourceError::Io(err.to_string())),
            }
        }
    }
}
