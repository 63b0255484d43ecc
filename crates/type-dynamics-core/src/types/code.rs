//! Validated four-letter type codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CodeErrorKind, Result, TypeDynamicsError};

use super::letter::{Dichotomy, Letter};

/// A validated four-letter personality-type code (e.g. `INTP`, `ESFJ`).
///
/// Each position is owned by a fixed dichotomy:
///
/// | Position | Dichotomy | Letters |
/// |----------|-----------|---------|
/// | 0        | Attitude  | E, I    |
/// | 1        | Perceiving| S, N    |
/// | 2        | Judging   | T, F    |
/// | 3        | Lifestyle | J, P    |
///
/// There are exactly 16 valid codes. A `TypeCode` can only be obtained
/// through validated parsing, so holding one guarantees the positional
/// invariant; it is immutable thereafter.
///
/// # Example
/// ```rust
/// use type_dynamics_core::types::{Letter, TypeCode};
///
/// let code: TypeCode = "INTP".parse().unwrap();
/// assert_eq!(code.attitude(), Letter::I);
/// assert_eq!(code.perceiving_letter(), Letter::N);
/// assert!(code.is_introvert());
/// assert!("XNTP".parse::<TypeCode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeCode {
    letters: [Letter; 4],
}

impl TypeCode {
    /// Parses and validates a candidate code.
    ///
    /// Parsing is case-insensitive ("intp" and "INTP" are the same code);
    /// everything else is strict. No coercion is attempted.
    ///
    /// # Errors
    /// [`TypeDynamicsError::InvalidTypeCode`] if the input is not exactly
    /// four characters, contains a non-preference character, or places a
    /// letter at a position owned by a different dichotomy.
    pub fn parse(input: &str) -> Result<TypeCode> {
        let invalid = |kind: CodeErrorKind| TypeDynamicsError::InvalidTypeCode {
            input: input.to_string(),
            kind,
        };

        let chars: Vec<char> = input.chars().collect();
        if chars.len() != 4 {
            return Err(invalid(CodeErrorKind::WrongLength {
                actual: chars.len(),
            }));
        }

        let mut letters = [Letter::E; 4];
        for (position, &c) in chars.iter().enumerate() {
            let letter = Letter::from_char(c).ok_or_else(|| {
                invalid(CodeErrorKind::UnknownLetter { position, found: c })
            })?;

            // at_position is total over 0..4, checked above
            let expected = Dichotomy::at_position(position)
                .expect("position bounded by length check");
            if letter.dichotomy() != expected {
                return Err(invalid(CodeErrorKind::WrongDichotomy {
                    position,
                    found: letter.as_char(),
                    expected,
                }));
            }
            letters[position] = letter;
        }

        Ok(TypeCode { letters })
    }

    /// Returns the four letters in positional order.
    #[inline]
    pub fn letters(&self) -> [Letter; 4] {
        self.letters
    }

    /// The attitude letter at position 0 (E or I).
    #[inline]
    pub fn attitude(&self) -> Letter {
        self.letters[0]
    }

    /// The information-intake letter at position 1 (S or N).
    #[inline]
    pub fn perceiving_letter(&self) -> Letter {
        self.letters[1]
    }

    /// The decision-basis letter at position 2 (T or F).
    #[inline]
    pub fn judging_letter(&self) -> Letter {
        self.letters[2]
    }

    /// The lifestyle letter at position 3 (J or P).
    #[inline]
    pub fn lifestyle(&self) -> Letter {
        self.letters[3]
    }

    /// True if the attitude letter is I.
    #[inline]
    pub fn is_introvert(&self) -> bool {
        self.attitude() == Letter::I
    }

    /// True if the attitude letter is E.
    #[inline]
    pub fn is_extravert(&self) -> bool {
        self.attitude() == Letter::E
    }

    /// True if the information-intake letter is S.
    #[inline]
    pub fn is_sensing(&self) -> bool {
        self.perceiving_letter() == Letter::S
    }

    /// True if the information-intake letter is N.
    #[inline]
    pub fn is_intuitive(&self) -> bool {
        self.perceiving_letter() == Letter::N
    }

    /// True if the decision-basis letter is T.
    #[inline]
    pub fn is_thinking(&self) -> bool {
        self.judging_letter() == Letter::T
    }

    /// True if the decision-basis letter is F.
    #[inline]
    pub fn is_feeling(&self) -> bool {
        self.judging_letter() == Letter::F
    }

    /// True if the lifestyle letter is J.
    #[inline]
    pub fn is_judging_lifestyle(&self) -> bool {
        self.lifestyle() == Letter::J
    }

    /// True if the lifestyle letter is P.
    #[inline]
    pub fn is_perceiving_lifestyle(&self) -> bool {
        self.lifestyle() == Letter::P
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl FromStr for TypeCode {
    type Err = TypeDynamicsError;

    fn from_str(s: &str) -> Result<Self> {
        TypeCode::parse(s)
    }
}

impl TryFrom<String> for TypeCode {
    type Error = TypeDynamicsError;

    fn try_from(value: String) -> Result<Self> {
        TypeCode::parse(&value)
    }
}

impl From<TypeCode> for String {
    fn from(code: TypeCode) -> Self {
        code.to_string()
    }
}
