//! CLI command definitions

use clap::{Parser, ValueEnum};
use friendtype_domain::{OutputFormat, TieBreak};
use std::path::PathBuf;

/// Output format for quiz results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Type code, description and per-axis tally
    Full,
    /// Only the four-letter type code
    Code,
    /// JSON output
    Json,
    /// One-line share text
    Share,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Full => OutputFormat::Full,
            OutputFormatArg::Code => OutputFormat::Code,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Share => OutputFormat::Share,
        }
    }
}

/// Letter that wins an axis when both counts are equal
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TieBreakArg {
    /// E, S, T or J
    First,
    /// I, N, F or P
    Second,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::First => TieBreak::First,
            TieBreakArg::Second => TieBreak::Second,
        }
    }
}

/// CLI arguments for friendtype
#[derive(Parser, Debug)]
#[command(name = "friendtype")]
#[command(author, version, about = "Answer ten questions about a friend and get their MBTI type")]
#[command(long_about = r#"
friendtype asks two-option questions about a friend and maps the answers onto
a four-letter MBTI type code with a short description.

Each question measures one axis (E/I, S/N, T/F, J/P). The letter picked more
often wins its axis; ties go to the configured tie-break letter.

Configuration files are loaded from (in priority order):
1. --config <path>                      Explicit config file
2. ./friendtype.toml                    Project-level config
3. ~/.config/friendtype/config.toml     Global config

Example:
  friendtype
  friendtype --answers ababababab -o share
  friendtype --bank my-questions.toml --tie-break first
"#)]
pub struct Cli {
    /// Answer non-interactively: `1,2,1,...`, `a b a ...` or `abab...`
    #[arg(short, long, value_name = "LIST", conflicts_with = "answer_text")]
    pub answers: Option<String>,

    /// Literal option text for each question, in order (repeatable)
    #[arg(long = "answer-text", value_name = "TEXT")]
    pub answer_text: Vec<String>,

    /// Question bank TOML file to use instead of the built-in questions
    #[arg(short, long, value_name = "PATH")]
    pub bank: Option<PathBuf>,

    /// Output format (default: from config, else full)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Which letter wins a tied axis (default: from config, else second)
    #[arg(long, value_enum)]
    pub tie_break: Option<TieBreakArg>,

    /// Print the question bank and exit
    #[arg(long)]
    pub list_questions: bool,

    /// Print all sixteen type codes with descriptions and exit
    #[arg(long)]
    pub list_types: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the intro and progress stepper
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
