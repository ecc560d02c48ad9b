//! Domain layer for friendtype
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question bank
//!
//! An ordered, immutable list of forced-choice questions. Every question has
//! two option texts and measures one axis (E/I, S/N, T/F or J/P).
//!
//! ## Scoring
//!
//! Answers are tallied per letter and each axis is won by the letter with the
//! strictly larger count. Ties follow a [`TieBreak`] policy that defaults to
//! the second letter (I, N, F, P).
//!
//! ## Session
//!
//! A step counter over the bank: 0 is the intro, `1..=count` are questions,
//! and `count + 1` is the cached result.

pub mod config;
pub mod core;
pub mod quiz;
pub mod session;

// Re-export commonly used types
pub use config::{DEFAULT_SHARE_PREFIX, DEFAULT_SHARE_SUFFIX, OutputFormat};
pub use core::error::DomainError;
pub use quiz::{
    Answer, AnswerSequence, Axis, Letter, OptionChoice, Question, QuestionBank, QuizResult,
    ResultDescriptions, ScoringEngine, TieBreak, TraitTally, TypeCode,
};
pub use session::{QuizSession, Stage};
