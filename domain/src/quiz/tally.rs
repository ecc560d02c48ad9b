//! Trait tally and tie-break policy

use super::axis::{Axis, Letter};
use super::type_code::TypeCode;
use serde::{Deserialize, Serialize};

/// Which letter wins when both letters of an axis have equal counts
///
/// `Second` reproduces the strict "greater than" rule: the first letter only
/// wins with a strictly larger count, so ties resolve to I, N, F or P.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Ties resolve to E, S, T, J
    First,
    /// Ties resolve to I, N, F, P
    #[default]
    Second,
}

impl TieBreak {
    pub fn as_str(&self) -> &'static str {
        match self {
            TieBreak::First => "first",
            TieBreak::Second => "second",
        }
    }
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(TieBreak::First),
            "second" => Ok(TieBreak::Second),
            other => Err(format!("Unknown tie-break: {}. Valid: first, second", other)),
        }
    }
}

/// Count of answers that favored each of the eight letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraitTally {
    counts: [usize; 8],
}

impl TraitTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, letter: Letter) {
        self.counts[letter.index()] += 1;
    }

    pub fn count(&self, letter: Letter) -> usize {
        self.counts[letter.index()]
    }

    /// Number of answered questions on an axis
    pub fn axis_total(&self, axis: Axis) -> usize {
        let (first, second) = axis.letters();
        self.count(first) + self.count(second)
    }

    /// Pick the winning letter of an axis
    pub fn resolve(&self, axis: Axis, tie_break: TieBreak) -> Letter {
        let (first, second) = axis.letters();
        let (a, b) = (self.count(first), self.count(second));
        if a > b {
            first
        } else if b > a {
            second
        } else {
            match tie_break {
                TieBreak::First => first,
                TieBreak::Second => second,
            }
        }
    }

    /// True when both letters of the axis have the same count
    pub fn is_tied(&self, axis: Axis) -> bool {
        let (first, second) = axis.letters();
        self.count(first) == self.count(second)
    }

    /// Resolve every axis and concatenate in code order
    pub fn type_code(&self, tie_break: TieBreak) -> TypeCode {
        TypeCode::from_axis_letters(Axis::ALL.map(|axis| self.resolve(axis, tie_break)))
    }
}

impl Serialize for TraitTally {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(Letter::ALL.len()))?;
        for letter in Letter::ALL {
            map.serialize_entry(&letter.as_char(), &self.count(letter))?;
        }
        map.end()
    }
}
