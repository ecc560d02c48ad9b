//! Share text configuration from TOML (`[share]` section)

use friendtype_domain::{DEFAULT_SHARE_PREFIX, DEFAULT_SHARE_SUFFIX};
use serde::{Deserialize, Serialize};

/// Raw share configuration from TOML
///
/// Share text is rendered as `"<prefix> <CODE> (<description>) <suffix>"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileShareConfig {
    pub prefix: String,
    pub suffix: String,
}

impl Default for FileShareConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_SHARE_PREFIX.to_string(),
            suffix: DEFAULT_SHARE_SUFFIX.to_string(),
        }
    }
}
