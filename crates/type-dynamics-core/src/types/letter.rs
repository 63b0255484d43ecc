//! Preference letters and the dichotomy table.
//!
//! The eight letters partition into four opposite pairs (E/I, S/N, T/F, J/P).
//! The pairing is exposed as [`Letter::opposite`], which is involutive:
//! `l.opposite().opposite() == l` for every letter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight preference letters used to build a type code.
///
/// Letters come in four opposite pairs, one pair per [`Dichotomy`]:
/// - **E**xtraversion / **I**ntroversion (attitude)
/// - **S**ensing / i**N**tuition (information intake)
/// - **T**hinking / **F**eeling (decision basis)
/// - **J**udging / **P**erceiving (lifestyle)
///
/// # Performance
/// All methods are O(1) match expressions with no allocations.
///
/// # Example
/// ```rust
/// use type_dynamics_core::types::Letter;
///
/// assert_eq!(Letter::E.opposite(), Letter::I);
/// assert_eq!(Letter::N.opposite().opposite(), Letter::N);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    /// Extraversion (attitude dichotomy)
    E,
    /// Introversion (attitude dichotomy)
    I,
    /// Sensing (perceiving dichotomy)
    S,
    /// iNtuition (perceiving dichotomy)
    N,
    /// Thinking (judging dichotomy)
    T,
    /// Feeling (judging dichotomy)
    F,
    /// Judging (lifestyle dichotomy)
    J,
    /// Perceiving (lifestyle dichotomy)
    P,
}

impl Letter {
    /// Returns the opposite letter within the same dichotomy.
    ///
    /// The mapping is involutive: `l.opposite().opposite() == l`.
    ///
    /// # Example
    /// ```rust
    /// use type_dynamics_core::types::Letter;
    ///
    /// assert_eq!(Letter::T.opposite(), Letter::F);
    /// assert_eq!(Letter::J.opposite(), Letter::P);
    /// ```
    #[inline]
    pub fn opposite(&self) -> Letter {
        match self {
            Self::E => Self::I,
            Self::I => Self::E,
            Self::S => Self::N,
            Self::N => Self::S,
            Self::T => Self::F,
            Self::F => Self::T,
            Self::J => Self::P,
            Self::P => Self::J,
        }
    }

    /// Returns the dichotomy this letter belongs to.
    #[inline]
    pub fn dichotomy(&self) -> Dichotomy {
        match self {
            Self::E | Self::I => Dichotomy::Attitude,
            Self::S | Self::N => Dichotomy::Perceiving,
            Self::T | Self::F => Dichotomy::Judging,
            Self::J | Self::P => Dichotomy::Lifestyle,
        }
    }

    /// Returns true if this letter names a cognitive function (S, N, T, F).
    ///
    /// Attitude (E/I) and lifestyle (J/P) letters orient functions but are
    /// not functions themselves.
    #[inline]
    pub fn is_function(&self) -> bool {
        matches!(self, Self::S | Self::N | Self::T | Self::F)
    }

    /// Returns the uppercase character for this letter.
    #[inline]
    pub fn as_char(&self) -> char {
        match self {
            Self::E => 'E',
            Self::I => 'I',
            Self::S => 'S',
            Self::N => 'N',
            Self::T => 'T',
            Self::F => 'F',
            Self::J => 'J',
            Self::P => 'P',
        }
    }

    /// Parses a single character (case-insensitive) into a letter.
    ///
    /// # Returns
    /// `None` if the character is not one of the eight preference letters.
    #[inline]
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'E' => Some(Self::E),
            'I' => Some(Self::I),
            'S' => Some(Self::S),
            'N' => Some(Self::N),
            'T' => Some(Self::T),
            'F' => Some(Self::F),
            'J' => Some(Self::J),
            'P' => Some(Self::P),
            _ => None,
        }
    }

    /// Returns all eight letters in canonical order (E, I, S, N, T, F, J, P).
    #[inline]
    pub fn all() -> [Letter; 8] {
        [
            Self::E,
            Self::I,
            Self::S,
            Self::N,
            Self::T,
            Self::F,
            Self::J,
            Self::P,
        ]
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Letter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Letter::from_char(c)
                .ok_or_else(|| format!("Invalid preference letter: '{}'", c)),
            _ => Err(format!(
                "Expected a single preference letter, got: '{}'",
                s
            )),
        }
    }
}

/// One of the four opposite-letter pairs partitioning a preference.
///
/// Each dichotomy owns a fixed position in a four-letter type code and
/// exactly two letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dichotomy {
    /// E/I — orientation toward the outer or inner world. Code position 0.
    Attitude,
    /// S/N — information intake. Code position 1.
    Perceiving,
    /// T/F — decision basis. Code position 2.
    Judging,
    /// J/P — which function kind is expressed outwardly. Code position 3.
    Lifestyle,
}

impl Dichotomy {
    /// Returns the two letters of this dichotomy in canonical order.
    #[inline]
    pub fn letters(&self) -> (Letter, Letter) {
        match self {
            Self::Attitude => (Letter::E, Letter::I),
            Self::Perceiving => (Letter::S, Letter::N),
            Self::Judging => (Letter::T, Letter::F),
            Self::Lifestyle => (Letter::J, Letter::P),
        }
    }

    /// Returns this dichotomy's fixed position within a type code.
    #[inline]
    pub fn position(&self) -> usize {
        match self {
            Self::Attitude => 0,
            Self::Perceiving => 1,
            Self::Judging => 2,
            Self::Lifestyle => 3,
        }
    }

    /// Returns the dichotomy owning a given code position.
    ///
    /// # Returns
    /// `None` for positions outside `0..4`.
    #[inline]
    pub fn at_position(position: usize) -> Option<Dichotomy> {
        match position {
            0 => Some(Self::Attitude),
            1 => Some(Self::Perceiving),
            2 => Some(Self::Judging),
            3 => Some(Self::Lifestyle),
            _ => None,
        }
    }

    /// Returns all four dichotomies in code-position order.
    #[inline]
    pub fn all() -> [Dichotomy; 4] {
        [
            Self::Attitude,
            Self::Perceiving,
            Self::Judging,
            Self::Lifestyle,
        ]
    }
}

impl fmt::Display for Dichotomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.letters();
        write!(f, "{}/{}", a, b)
    }
}
