//! Presentation-level configuration
//!
//! Configuration for output formatting and share text.

use friendtype_domain::{DEFAULT_SHARE_PREFIX, DEFAULT_SHARE_SUFFIX, OutputFormat};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show the intro and stepper while answering
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            color: true,
            show_progress: true,
        }
    }
}

/// Text placed around the type code in share output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareConfig {
    pub prefix: String,
    pub suffix: String,
}

impl ShareConfig {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SHARE_PREFIX, DEFAULT_SHARE_SUFFIX)
    }
}
