//! Domain types for the derivation engine.
//!
//! # Module Structure
//! - `letter`: preference letters and the dichotomy table
//! - `code`: validated four-letter type codes
//! - `function`: oriented cognitive functions and the function stack
//! - `temperament`: temperament and rational/irrational classification

mod code;
mod function;
mod letter;
mod temperament;

#[cfg(test)]
mod tests_code;
#[cfg(test)]
mod tests_function;
#[cfg(test)]
mod tests_letter;
#[cfg(test)]
mod tests_temperament;

pub use code::TypeCode;
pub use function::{FunctionPair, FunctionStack};
pub use letter::{Dichotomy, Letter};
pub use temperament::{Ratio, Temperament};
