//! Result description table

use super::type_code::TypeCode;
use crate::core::error::DomainError;
use serde::Serialize;
use std::collections::BTreeMap;

/// Display text for each type code
///
/// The table is expected to cover all 16 codes. [`missing_codes`] reports any
/// gaps so loaders can refuse an incomplete table at startup, and
/// [`describe`] still checks every lookup.
///
/// [`missing_codes`]: ResultDescriptions::missing_codes
/// [`describe`]: ResultDescriptions::describe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultDescriptions {
    entries: BTreeMap<TypeCode, String>,
}

impl ResultDescriptions {
    /// Build a table from arbitrary entries without a coverage check
    pub fn from_entries(entries: impl IntoIterator<Item = (TypeCode, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Description for a code, or `UnknownType` when the table has no entry
    pub fn describe(&self, code: TypeCode) -> Result<&str, DomainError> {
        self.entries
            .get(&code)
            .map(String::as_str)
            .ok_or_else(|| DomainError::UnknownType(code.to_string()))
    }

    /// Codes with no entry, in [`TypeCode::all`] order
    pub fn missing_codes(&self) -> Vec<TypeCode> {
        TypeCode::all()
            .filter(|code| !self.entries.contains_key(code))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeCode, &str)> {
        self.entries.iter().map(|(code, text)| (*code, text.as_str()))
    }
}
