//! Axis and letter value objects
//!
//! An [`Axis`] is one of the four dichotomies a question measures. Each axis
//! owns an ordered pair of [`Letter`]s; the first letter is credited when the
//! user picks a question's first option, the second letter otherwise.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the eight personality letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Letter {
    /// All letters, grouped by axis in type-code order.
    pub const ALL: [Letter; 8] = [
        Letter::E,
        Letter::I,
        Letter::S,
        Letter::N,
        Letter::T,
        Letter::F,
        Letter::J,
        Letter::P,
    ];

    pub fn as_char(&self) -> char {
        match self {
            Letter::E => 'E',
            Letter::I => 'I',
            Letter::S => 'S',
            Letter::N => 'N',
            Letter::T => 'T',
            Letter::F => 'F',
            Letter::J => 'J',
            Letter::P => 'P',
        }
    }

    /// Parse a letter, accepting lower case
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'E' => Some(Letter::E),
            'I' => Some(Letter::I),
            'S' => Some(Letter::S),
            'N' => Some(Letter::N),
            'T' => Some(Letter::T),
            'F' => Some(Letter::F),
            'J' => Some(Letter::J),
            'P' => Some(Letter::P),
            _ => None,
        }
    }

    /// The axis this letter belongs to
    pub fn axis(&self) -> Axis {
        match self {
            Letter::E | Letter::I => Axis::EI,
            Letter::S | Letter::N => Axis::SN,
            Letter::T | Letter::F => Axis::TF,
            Letter::J | Letter::P => Axis::JP,
        }
    }

    /// Dense index in `0..8`, matching the order of [`Letter::ALL`]
    pub(crate) fn index(&self) -> usize {
        match self {
            Letter::E => 0,
            Letter::I => 1,
            Letter::S => 2,
            Letter::N => 3,
            Letter::T => 4,
            Letter::F => 5,
            Letter::J => 6,
            Letter::P => 7,
        }
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A personality dichotomy measured by a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Extraversion / Introversion
    EI,
    /// Sensing / Intuition
    SN,
    /// Thinking / Feeling
    TF,
    /// Judging / Perceiving
    JP,
}

impl Axis {
    /// Axes in the order their letters appear in a type code.
    pub const ALL: [Axis; 4] = [Axis::EI, Axis::SN, Axis::TF, Axis::JP];

    /// The fixed (first, second) letter pair for this axis
    pub fn letters(&self) -> (Letter, Letter) {
        match self {
            Axis::EI => (Letter::E, Letter::I),
            Axis::SN => (Letter::S, Letter::N),
            Axis::TF => (Letter::T, Letter::F),
            Axis::JP => (Letter::J, Letter::P),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::EI => "E/I",
            Axis::SN => "S/N",
            Axis::TF => "T/F",
            Axis::JP => "J/P",
        }
    }

    /// Position of this axis inside a type code
    pub fn position(&self) -> usize {
        match self {
            Axis::EI => 0,
            Axis::SN => 1,
            Axis::TF => 2,
            Axis::JP => 3,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "E/I" | "EI" => Ok(Axis::EI),
            "S/N" | "SN" => Ok(Axis::SN),
            "T/F" | "TF" => Ok(Axis::TF),
            "J/P" | "JP" => Ok(Axis::JP),
            other => Err(format!(
                "Unknown axis: {}. Valid: E/I, S/N, T/F, J/P",
                other
            )),
        }
    }
}

impl Serialize for Axis {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Axis {
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

    #[test]
    fn test_axis_letter_pairs() {
        assert_eq!(Axis::EI.letters(), (Letter::E, Letter::I));
        assert_eq!(Axis::SN.letters(), (Letter::S, Letter::N));
        assert_eq!(Axis::TF.letters(), (Letter::T, Letter::F));
        assert_eq!(Axis::JP.letters(), (Letter::J, Letter::P));
    }

    #[test]
    fn test_every_letter_belongs_to_its_axis_pair() {
        for letter in Letter::ALL {
            let (first, second) = letter.axis().letters();
            assert!(letter == first || letter == second);
        }
    }

    #[test]
    fn test_letter_index_matches_all_order() {
        for (i, letter) in Letter::ALL.iter().enumerate() {
            assert_eq!(letter.index(), i);
        }
    }

    #[test]
    fn test_axis_parse() {
        assert_eq!("E/I".parse::<Axis>().unwrap(), Axis::EI);
        assert_eq!("sn".parse::<Axis>().unwrap(), Axis::SN);
        assert_eq!(" T/F ".parse::<Axis>().unwrap(), Axis::TF);
        assert!("X/Y".parse::<Axis>().is_err());
    }

    #[test]
    fn test_axis_serde_uses_slash_form() {
        let json = serde_json::to_string(&Axis::JP).unwrap();
        assert_eq!(json, "\"J/P\"");
        let axis: Axis = serde_json::from_str("\"S/N\"").unwrap();
        assert_eq!(axis, Axis::SN);
    }

    #[test]
    fn test_axis_positions_follow_code_order() {
        for (i, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.position(), i);
        }
    }

    #[test]
    fn test_letter_from_char() {
        assert_eq!(Letter::from_char('e'), Some(Letter::E));
        assert_eq!(Letter::from_char('P'), Some(Letter::P));
        assert_eq!(Letter::from_char('X'), None);
    }
}
