//! Question bank file loader
//!
//! Reads a TOML file of questions and (optionally) a description table:
//!
//! ```toml
//! [[questions]]
//! prompt = "Does your friend enjoy parties?"
//! options = ["Yes, always", "Not really"]
//! axis = "E/I"
//!
//! [descriptions]
//! ISTJ = "The inspector"
//! # ... all 16 codes
//! ```
//!
//! Without a `[descriptions]` table the built-in one is used.

use friendtype_domain::{DomainError, Question, QuestionBank, ResultDescriptions, TypeCode};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while loading a question bank file
#[derive(Debug, Error)]
pub enum BankLoadError {
    #[error("Could not read question bank {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid question bank {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Description table has an invalid type code key: {0}")]
    UnknownTypeKey(String),

    #[error("Description table is missing type codes: {}", .0.join(", "))]
    IncompleteDescriptions(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct BankFile {
    questions: Vec<Question>,
    #[serde(default)]
    descriptions: Option<BTreeMap<String, String>>,
}

/// Question data ready to hand to the application layer
#[derive(Debug, Clone)]
pub struct LoadedBank {
    pub bank: QuestionBank,
    pub descriptions: ResultDescriptions,
}

/// Loader for question bank files
pub struct QuestionBankLoader;

impl QuestionBankLoader {
    /// Read and validate a bank file
    pub fn load(path: &Path) -> Result<LoadedBank, BankLoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| BankLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let loaded = Self::parse(&text).map_err(|e| match e {
            BankLoadError::Parse { source, .. } => BankLoadError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        info!(
            "Loaded {} questions from {}",
            loaded.bank.count(),
            path.display()
        );
        Ok(loaded)
    }

    /// Parse bank file contents
    pub fn parse(text: &str) -> Result<LoadedBank, BankLoadError> {
        let file: BankFile = toml::from_str(text).map_err(|source| BankLoadError::Parse {
            path: PathBuf::new(),
            source,
        })?;

        let bank = QuestionBank::new(file.questions)?;
        let descriptions = match file.descriptions {
            Some(entries) => Self::descriptions_from(entries)?,
            None => ResultDescriptions::reference(),
        };

        for axis in bank.uncovered_axes() {
            warn!("No question measures {}; it always resolves by tie-break", axis);
        }
        for axis in bank.tie_prone_axes() {
            info!("Axis {} has an even number of questions; ties are possible", axis);
        }

        Ok(LoadedBank { bank, descriptions })
    }

    fn descriptions_from(
        entries: BTreeMap<String, String>,
    ) -> Result<ResultDescriptions, BankLoadError> {
        let entries = entries
            .into_iter()
            .map(|(key, text)| {
                key.parse::<TypeCode>()
                    .map(|code| (code, text))
                    .map_err(|_| BankLoadError::UnknownTypeKey(key))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let table = ResultDescriptions::from_entries(entries);
        let missing = table.missing_codes();
        if !missing.is_empty() {
            return Err(BankLoadError::IncompleteDescriptions(
                missing.iter().map(ToString::to_string).collect(),
            ));
        }
        Ok(table)
    }
}
