//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question index {index} is out of range (bank has {count} questions)")]
    OutOfRange { index: usize, count: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No description configured for type code {0}")]
    UnknownType(String),
}

impl DomainError {
    /// Build an `InvalidInput` error from anything displayable
    pub fn invalid(message: impl Into<String>) -> Self {
        DomainError::InvalidInput(message.into())
    }

    /// Check if this error was caused by a caller passing bad data
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, DomainError::InvalidInput(_))
    }
}
