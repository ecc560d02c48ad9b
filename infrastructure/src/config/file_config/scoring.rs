//! Scoring configuration from TOML (`[scoring]` section)

use friendtype_domain::TieBreak;
use serde::{Deserialize, Serialize};

/// Raw scoring configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileScoringConfig {
    /// Letter that wins an axis on equal counts: "first" or "second"
    pub tie_break: TieBreak,
}
