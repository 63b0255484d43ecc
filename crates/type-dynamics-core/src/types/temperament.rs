//! Temperament and rational/irrational classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TypeDynamicsError};

use super::letter::Letter;

/// One of the four temperament groupings.
///
/// A pure function of two letters of the code, independent of the function
/// stack: sensing types split on lifestyle, intuitive types split on
/// decision basis.
///
/// # Example
/// ```rust
/// use type_dynamics_core::types::{Letter, Temperament};
///
/// let t = Temperament::classify(Letter::S, Letter::T, Letter::J).unwrap();
/// assert_eq!(t, Temperament::Guardian);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Temperament {
    /// Sensing + judging lifestyle (S_J)
    Guardian,
    /// Sensing + perceiving lifestyle (S_P)
    Artisan,
    /// Intuitive + feeling (NF__)
    Idealist,
    /// Intuitive + thinking (NT__)
    Rational,
}

impl Temperament {
    /// Classifies from the perceiving, judging, and lifestyle letters.
    ///
    /// Total for letters drawn from a validated code:
    /// - (S, J lifestyle) → Guardian
    /// - (S, P lifestyle) → Artisan
    /// - (N, F judging)   → Idealist
    /// - (N, T judging)   → Rational
    ///
    /// # Errors
    /// [`TypeDynamicsError::Derivation`] if the letters do not come from
    /// their expected dichotomies. Unreachable downstream of a validated
    /// [`TypeCode`](super::TypeCode).
    pub fn classify(
        perceiving: Letter,
        judging: Letter,
        lifestyle: Letter,
    ) -> Result<Temperament> {
        match (perceiving, judging, lifestyle) {
            (Letter::S, _, Letter::J) => Ok(Self::Guardian),
            (Letter::S, _, Letter::P) => Ok(Self::Artisan),
            (Letter::N, Letter::F, _) => Ok(Self::Idealist),
            (Letter::N, Letter::T, _) => Ok(Self::Rational),
            (p, j, l) => Err(TypeDynamicsError::Derivation(format!(
                "temperament undefined for letters ({}, {}, {})",
                p, j, l
            ))),
        }
    }

    /// Returns a short description of this temperament's defining letters.
    #[inline]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Guardian => "Sensing with a judging lifestyle",
            Self::Artisan => "Sensing with a perceiving lifestyle",
            Self::Idealist => "Intuitive with a feeling decision basis",
            Self::Rational => "Intuitive with a thinking decision basis",
        }
    }

    /// Returns all four temperaments in canonical order.
    #[inline]
    pub fn all() -> [Temperament; 4] {
        [Self::Guardian, Self::Artisan, Self::Idealist, Self::Rational]
    }
}

impl fmt::Display for Temperament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guardian => write!(f, "Guardian"),
            Self::Artisan => write!(f, "Artisan"),
            Self::Idealist => write!(f, "Idealist"),
            Self::Rational => write!(f, "Rational"),
        }
    }
}

impl FromStr for Temperament {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "guardian" => Ok(Self::Guardian),
            "artisan" => Ok(Self::Artisan),
            "idealist" => Ok(Self::Idealist),
            "rational" => Ok(Self::Rational),
            _ => Err(format!(
                "Invalid temperament: '{}'. Valid values: guardian, artisan, idealist, rational",
                s
            )),
        }
    }
}

/// Rational/irrational orientation toward the outer world.
///
/// "Rational" is the domain sense — judging-led — and "irrational" is
/// perceiving-led; neither is the everyday meaning. A pure function of the
/// lifestyle letter: J → rational, P → irrational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ratio {
    /// Judging-led orientation (lifestyle J)
    Rational,
    /// Perceiving-led orientation (lifestyle P)
    Irrational,
}

impl Ratio {
    /// Classifies from the lifestyle letter.
    ///
    /// # Errors
    /// [`TypeDynamicsError::Derivation`] if the letter is not J or P.
    pub fn from_lifestyle(lifestyle: Letter) -> Result<Ratio> {
        match lifestyle {
            Letter::J => Ok(Self::Rational),
            Letter::P => Ok(Self::Irrational),
            other => Err(TypeDynamicsError::Derivation(format!(
                "ratio undefined for lifestyle letter {}",
                other
            ))),
        }
    }

    /// The complementary label.
    #[inline]
    pub fn negation(&self) -> Ratio {
        match self {
            Self::Rational => Self::Irrational,
            Self::Irrational => Self::Rational,
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rational => write!(f, "rational"),
            Self::Irrational => write!(f, "irrational"),
        }
    }
}
