//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that presentation adapters must implement.

pub mod answer_source;
pub mod progress;
