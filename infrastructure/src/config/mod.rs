//! Configuration file loading for friendtype
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./friendtype.toml` or `./.friendtype.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/friendtype/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOutputConfig, FileQuizConfig, FileScoringConfig,
    FileShareConfig,
};
pub use loader::ConfigLoader;
