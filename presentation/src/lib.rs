//! Presentation layer for friendtype
//!
//! This crate contains the CLI definition, output formatters,
//! progress rendering, and the interactive answer prompt.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormatArg, TieBreakArg};
pub use config::{OutputConfig, ShareConfig};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ConsoleProgress, SimpleProgress};
pub use quiz::TerminalAnswerSource;
