//! Configuration value objects for the domain layer
//!
//! Shared by the config file loader and the CLI so both agree on
//! the accepted spellings.

mod output_format;
mod share;

pub use output_format::OutputFormat;
pub use share::{DEFAULT_SHARE_PREFIX, DEFAULT_SHARE_SUFFIX};
