//! Oriented cognitive functions and the four-entry function stack.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, TypeDynamicsError};

use super::letter::Letter;

/// A cognitive function letter paired with an orientation letter.
///
/// The function slot always holds one of {S, N, T, F}; the orientation slot
/// always holds E or I. Displayed in the conventional compact form:
/// function letter uppercase, orientation lowercase (`Te`, `Ni`, `Fi`).
///
/// For the dominant, auxiliary, and inferior stack entries the orientation
/// is a fully resolved attitude. The tertiary entry is different: its
/// orientation slot carries the code's raw attitude letter, left unresolved.
/// Type-dynamics theory does not settle the tertiary's attitude, and that
/// ambiguity is kept observable here instead of being papered over. See
/// [`FunctionStack::tertiary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionPair {
    /// Orientation letter (E or I)
    pub orientation: Letter,
    /// Function letter (S, N, T, or F)
    pub function: Letter,
}

impl FunctionPair {
    /// Creates an oriented function, validating both slots.
    ///
    /// # Errors
    /// [`TypeDynamicsError::Derivation`] if `orientation` is not E/I or
    /// `function` is not one of S/N/T/F. Only derivation code builds these,
    /// so a failure here signals an engine bug, not bad caller input.
    pub fn new(orientation: Letter, function: Letter) -> Result<FunctionPair> {
        if !matches!(orientation, Letter::E | Letter::I) {
            return Err(TypeDynamicsError::Derivation(format!(
                "orientation slot must be E or I, got {}",
                orientation
            )));
        }
        if !function.is_function() {
            return Err(TypeDynamicsError::Derivation(format!(
                "function slot must be one of S/N/T/F, got {}",
                function
            )));
        }
        Ok(FunctionPair {
            orientation,
            function,
        })
    }

    /// True if this function is extraverted.
    #[inline]
    pub fn is_extraverted(&self) -> bool {
        self.orientation == Letter::E
    }

    /// True if this function is introverted.
    #[inline]
    pub fn is_introverted(&self) -> bool {
        self.orientation == Letter::I
    }
}

impl fmt::Display for FunctionPair {
    /// Formats as the conventional two-character form, e.g. `Ni`, `Te`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.function.as_char(),
            self.orientation.as_char().to_ascii_lowercase()
        )
    }
}

/// The ordered four-function cognitive stack of a type.
///
/// Entries are ordered by developmental priority: dominant, auxiliary,
/// tertiary, inferior. Across the four entries each function letter
/// (S, N, T, F) appears exactly once, the dominant and auxiliary use
/// opposite attitudes, and the inferior mirrors the dominant through the
/// dichotomy table in both slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionStack {
    /// Leading function; the type's primary mode.
    pub dominant: FunctionPair,
    /// Supporting function; opposite attitude from the dominant.
    pub auxiliary: FunctionPair,
    /// Third function. Its orientation slot holds the code's raw attitude
    /// letter rather than a resolved attitude — the one asymmetric entry.
    pub tertiary: FunctionPair,
    /// Least-developed function; the dominant's full opposite.
    pub inferior: FunctionPair,
}

impl FunctionStack {
    /// Returns the four function letters in stack order.
    #[inline]
    pub fn function_letters(&self) -> [Letter; 4] {
        [
            self.dominant.function,
            self.auxiliary.function,
            self.tertiary.function,
            self.inferior.function,
        ]
    }

    /// Returns the entries in stack order.
    #[inline]
    pub fn entries(&self) -> [FunctionPair; 4] {
        [self.dominant, self.auxiliary, self.tertiary, self.inferior]
    }

    /// True if the four function letters are exactly {S, N, T, F}.
    pub fn is_complete(&self) -> bool {
        let letters = self.function_letters();
        [Letter::S, Letter::N, Letter::T, Letter::F]
            .iter()
            .all(|l| letters.contains(l))
    }
}

impl fmt::Display for FunctionStack {
    /// Formats as the space-separated stack, e.g. `Ni Te Fi Se`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.dominant, self.auxiliary, self.tertiary, self.inferior
        )
    }
}
