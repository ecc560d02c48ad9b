//! Question bank file loading
//!
//! Lets a quiz run on a custom question set instead of the built-in one.

mod loader;

pub use loader::{BankLoadError, LoadedBank, QuestionBankLoader};
