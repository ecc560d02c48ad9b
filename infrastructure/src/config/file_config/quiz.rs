//! Quiz data configuration from TOML (`[quiz]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw quiz configuration from TOML
///
/// ```toml
/// [quiz]
/// bank = "questions/team.toml"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Question bank file; the built-in set is used when unset
    pub bank: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_path_deserialize() {
        let toml_str = r#"
[quiz]
bank = "custom.toml"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.quiz.bank, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_bank_defaults_to_none() {
        assert!(FileQuizConfig::default().bank.is_none());
    }
}
