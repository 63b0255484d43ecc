//! Type dynamics calculator.
//!
//! Derives the four-function cognitive stack from a code's letters. The
//! derivation proceeds in fixed steps:
//!
//! 1. The lifestyle letter names which middle function is expressed
//!    outwardly: P → the perceiving letter, J → the judging letter
//!    ([`extraverted_function`]).
//! 2. The other middle letter is expressed inwardly
//!    ([`introverted_function`]).
//! 3. The dominant is selected by an explicit four-case table over
//!    (lifestyle, attitude) ([`dominant`]).
//! 4. The auxiliary is the remaining middle letter with the opposite
//!    attitude from the dominant ([`auxiliary`]).
//! 5. The tertiary opposes the auxiliary's function; its orientation slot
//!    carries the code's raw attitude letter, deliberately unresolved
//!    ([`tertiary`]).
//! 6. The inferior opposes the dominant in both slots ([`inferior`]).
//!
//! Every function is pure and total over letters drawn from a validated
//! code; anything else fails with a derivation error rather than producing
//! a partial stack.

use crate::error::{Result, TypeDynamicsError};
use crate::types::{FunctionPair, Letter};


/// The middle-function letter expressed toward the outer world.
///
/// Lifestyle P names the perceiving letter, J the judging letter.
///
/// # Errors
/// [`TypeDynamicsError::Derivation`] if `lifestyle` is not J or P.
pub fn extraverted_function(
    lifestyle: Letter,
    perceiving: Letter,
    judging: Letter,
) -> Result<Letter> {
    match lifestyle {
        Letter::P => Ok(perceiving),
        Letter::J => Ok(judging),
        other => Err(TypeDynamicsError::Derivation(format!(
            "lifestyle letter must be J or P, got {}",
            other
        ))),
    }
}

/// The middle-function letter expressed toward the inner world — whichever
/// of the two middle letters is not the extraverted one.
pub fn introverted_function(
    lifestyle: Letter,
    perceiving: Letter,
    judging: Letter,
) -> Result<Letter> {
    match extraverted_function(lifestyle, perceiving, judging)? {
        l if l == perceiving => Ok(judging),
        _ => Ok(perceiving),
    }
}

/// Selects the dominant function.
///
/// The four-case table over (lifestyle, attitude) is authoritative:
///
/// | lifestyle | attitude | dominant                      |
/// |-----------|----------|-------------------------------|
/// | P         | I        | perceiving letter, introverted |
/// | J         | E        | judging letter, extraverted    |
/// | P         | E        | perceiving letter, extraverted |
/// | J         | I        | judging letter, introverted    |
///
/// In every case the dominant's orientation equals the code's attitude
/// letter and its function letter is the outwardly expressed middle letter.
///
/// # Errors
/// [`TypeDynamicsError::Derivation`] if the letters do not come from their
/// expected dichotomies.
pub fn dominant(
    attitude: Letter,
    lifestyle: Letter,
    perceiving: Letter,
    judging: Letter,
) -> Result<FunctionPair> {
    match (lifestyle, attitude) {
        (Letter::P, Letter::I) => FunctionPair::new(Letter::I, perceiving),
        (Letter::J, Letter::E) => FunctionPair::new(Letter::E, judging),
        (Letter::P, Letter::E) => FunctionPair::new(Letter::E, perceiving),
        (Letter::J, Letter::I) => FunctionPair::new(Letter::I, judging),
        (l, a) => Err(TypeDynamicsError::Derivation(format!(
            "dominant undefined for lifestyle {} with attitude {}",
            l, a
        ))),
    }
}

/// The auxiliary function: the middle letter the dominant did not use,
/// with the opposite attitude from the dominant.
pub fn auxiliary(
    dominant: FunctionPair,
    perceiving: Letter,
    judging: Letter,
) -> Result<FunctionPair> {
    let function = if dominant.function == perceiving {
        judging
    } else if dominant.function == judging {
        perceiving
    } else {
        return Err(TypeDynamicsError::Derivation(format!(
            "dominant function {} is neither middle letter ({}, {})",
            dominant.function, perceiving, judging
        )));
    };
    FunctionPair::new(dominant.orientation.opposite(), function)
}

/// The tertiary function: the dichotomy-table opposite of the auxiliary's
/// function letter.
///
/// The orientation slot is filled with the code's raw attitude letter, not
/// a resolved attitude. The theory leaves the tertiary's attitude open and
/// this entry keeps that ambiguity observable.
pub fn tertiary(auxiliary: FunctionPair, attitude: Letter) -> Result<FunctionPair> {
    FunctionPair::new(attitude, auxiliary.function.opposite())
}

/// The inferior function: the dominant mirrored through the dichotomy
/// table in both slots.
pub fn inferior(dominant: FunctionPair) -> Result<FunctionPair> {
    FunctionPair::new(dominant.orientation.opposite(), dominant.function.opposite())
}
