//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod quiz;
mod scoring;
mod share;

pub use output::FileOutputConfig;
pub use quiz::FileQuizConfig;
pub use scoring::FileScoringConfig;
pub use share::FileShareConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("quiz.bank cannot be an empty path")]
    EmptyBankPath,

    #[error("share.{0} cannot contain a line break")]
    MultilineShareText(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Question data settings
    pub quiz: FileQuizConfig,
    /// Scoring settings
    pub scoring: FileScoringConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Share text settings
    pub share: FileShareConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(path) = &self.quiz.bank
            && path.as_os_str().is_empty()
        {
            return Err(ConfigValidationError::EmptyBankPath);
        }

        if self.share.prefix.contains('\n') {
            return Err(ConfigValidationError::MultilineShareText("prefix"));
        }
        if self.share.suffix.contains('\n') {
            return Err(ConfigValidationError::MultilineShareText("suffix"));
        }

        Ok(())
    }
}
