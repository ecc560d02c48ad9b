//! Infrastructure layer for friendtype
//!
//! This crate contains file-backed adapters: configuration file loading
//! and custom question bank loading.

pub mod bank;
pub mod config;

// Re-export commonly used types
pub use bank::{BankLoadError, LoadedBank, QuestionBankLoader};
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileQuizConfig,
    FileScoringConfig, FileShareConfig,
};
