//! Output format value object

use serde::{Deserialize, Serialize};

/// How a finished quiz result is rendered
///
/// This is a domain concept shared by the config file and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Type code, description and per-axis tally (default)
    #[default]
    Full,
    /// Only the four-letter type code
    Code,
    /// JSON output
    Json,
    /// One-line share text
    Share,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Full => "full",
            OutputFormat::Code => "code",
            OutputFormat::Json => "json",
            OutputFormat::Share => "share",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full() {
        assert_eq!(OutputFormat::default(), OutputFormat::Full);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Share).unwrap();
        assert_eq!(json, "\"share\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"code\"").unwrap();
        assert_eq!(format, OutputFormat::Code);
    }
}
