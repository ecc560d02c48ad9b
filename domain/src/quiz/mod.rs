//! Quiz domain
//!
//! Question data and the scoring rule that turns answers into a type code.
//!
//! # Scoring flow
//!
//! ```text
//!  AnswerSequence ──┐
//!                   ├─> TraitTally ──(TieBreak)──> TypeCode ──> ResultDescriptions
//!  QuestionBank ────┘    E I S N T F J P            "ISTP"       "만능 재주꾼"
//! ```
//!
//! # Example
//!
//! ```
//! use friendtype_domain::quiz::{AnswerSequence, OptionChoice, QuestionBank, ScoringEngine};
//!
//! let bank = QuestionBank::reference();
//! let answers: AnswerSequence = bank
//!     .iter()
//!     .map(|q| q.option(OptionChoice::First).to_string())
//!     .collect();
//!
//! let code = ScoringEngine::default().score(&answers, &bank).unwrap();
//! assert_eq!(code.to_string(), "ESTJ");
//! ```

pub mod answer;
pub mod axis;
pub mod bank;
pub mod description;
pub mod question;
mod reference;
pub mod scoring;
pub mod tally;
pub mod type_code;

pub use answer::{Answer, AnswerSequence};
pub use axis::{Axis, Letter};
pub use bank::QuestionBank;
pub use description::ResultDescriptions;
pub use question::{OptionChoice, Question};
pub use scoring::{QuizResult, ScoringEngine};
pub use tally::{TieBreak, TraitTally};
pub use type_code::TypeCode;
