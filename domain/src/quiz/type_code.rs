//! Four-letter type code value object

use super::axis::{Axis, Letter};
use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A four-letter personality type code such as `ESTJ`
///
/// Holds exactly one letter per axis, in the fixed order E/I, S/N, T/F, J/P.
/// The constructor enforces that, so every `TypeCode` value is one of the 16
/// valid codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeCode([Letter; 4]);

impl TypeCode {
    /// Build a code from one letter per axis
    pub fn new(letters: [Letter; 4]) -> Result<Self, DomainError> {
        for (axis, letter) in Axis::ALL.iter().zip(letters.iter()) {
            if letter.axis() != *axis {
                return Err(DomainError::invalid(format!(
                    "letter {} cannot stand in the {} position",
                    letter, axis
                )));
            }
        }
        Ok(Self(letters))
    }

    /// Letters already resolved per axis, in [`Axis::ALL`] order
    pub(crate) fn from_axis_letters(letters: [Letter; 4]) -> Self {
        debug_assert!(
            Axis::ALL
                .iter()
                .zip(letters.iter())
                .all(|(axis, letter)| letter.axis() == *axis)
        );
        Self(letters)
    }

    /// All 16 codes, ordered by axis then first-letter-before-second
    pub fn all() -> impl Iterator<Item = TypeCode> {
        (0u8..16).map(|bits| {
            let letters = Axis::ALL.map(|axis| {
                let (first, second) = axis.letters();
                if bits & (0b1000 >> axis.position()) == 0 {
                    first
                } else {
                    second
                }
            });
            TypeCode(letters)
        })
    }

    pub fn letters(&self) -> [Letter; 4] {
        self.0
    }

    /// Letter chosen on the given axis
    pub fn letter(&self, axis: Axis) -> Letter {
        self.0[axis.position()]
    }
}

impl std::fmt::Display for TypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in &self.0 {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for TypeCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let chars: Vec<char> = trimmed.chars().collect();
        if chars.len() != 4 {
            return Err(DomainError::invalid(format!(
                "type code must have 4 letters: {:?}",
                trimmed
            )));
        }

        let mut letters = [Letter::E; 4];
        for (slot, c) in letters.iter_mut().zip(chars) {
            *slot = Letter::from_char(c).ok_or_else(|| {
                DomainError::invalid(format!("unknown letter {:?} in type code {:?}", c, trimmed))
            })?;
        }
        TypeCode::new(letters)
    }
}

impl Serialize for TypeCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TypeCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_and_display() {
        let code: TypeCode = "estj".parse().unwrap();
        assert_eq!(code.to_string(), "ESTJ");
        assert_eq!(code.letter(Axis::TF), Letter::T);
    }

    #[test]
    fn test_parse_rejects_bad_codes() {
        assert!("EST".parse::<TypeCode>().is_err());
        assert!("ESTJX".parse::<TypeCode>().is_err());
        assert!("SETJ".parse::<TypeCode>().is_err());
        assert!("EXTJ".parse::<TypeCode>().is_err());
    }

    #[test]
    fn test_new_rejects_letter_in_wrong_position() {
        let result = TypeCode::new([Letter::I, Letter::T, Letter::N, Letter::P]);
        assert!(result.is_err());
    }

    #[test]
    fn test_all_yields_sixteen_distinct_codes() {
        let codes: HashSet<String> = TypeCode::all().map(|c| c.to_string()).collect();
        assert_eq!(codes.len(), 16);
        assert!(codes.contains("ESTJ"));
        assert!(codes.contains("INFP"));
        assert_eq!(TypeCode::all().next().unwrap().to_string(), "ESTJ");
        assert_eq!(TypeCode::all().last().unwrap().to_string(), "INFP");
    }

    #[test]
    fn test_every_code_has_one_letter_per_axis() {
        for code in TypeCode::all() {
            for axis in Axis::ALL {
                assert_eq!(code.letter(axis).axis(), axis);
            }
        }
    }

    #[test]
    fn test_serde_as_string() {
        let code: TypeCode = "INTP".parse().unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"INTP\"");
        let back: TypeCode = serde_json::from_str("\"INTP\"").unwrap();
        assert_eq!(back, code);
    }
}
