//! # type-dynamics-core
//!
//! Pure derivation engine mapping a four-letter personality-type code to
//! its structural derivatives: preference predicates, the four-function
//! cognitive stack (dominant, auxiliary, tertiary, inferior), and a
//! temperament label.
//!
//! The engine is a fixed directed acyclic graph of named derivation rules.
//! Each rule declares the attributes it reads; a resolution pass evaluates
//! every rule at most once in dependency order and returns an immutable
//! name→value profile. There is no I/O, no shared mutable state, and no
//! configuration — one input code in, one profile out, in constant time.
//!
//! # Quick Start
//! ```rust
//! use type_dynamics_core::{derive_profile, resolver::attr, Temperament, TypeCode};
//!
//! let code: TypeCode = "INTP".parse()?;
//! let profile = derive_profile(&code)?;
//!
//! let stack = profile.function_stack()?;
//! assert_eq!(stack.dominant.to_string(), "Ni");
//! assert_eq!(stack.auxiliary.to_string(), "Te");
//! assert_eq!(profile.temperament()?, Temperament::Rational);
//! assert!(profile.flag(attr::PREFERS_IRRATIONAL)?);
//! # Ok::<(), type_dynamics_core::TypeDynamicsError>(())
//! ```
//!
//! # Architecture
//! ```text
//! "INTP" ──parse──▶ TypeCode ──resolve──▶ AttributeProfile
//!                               │
//!                    RuleGraph::builtin()
//!                    letters → predicates → dynamics → stack
//!                                         → ratio, temperament
//! ```
//!
//! Invalid input is rejected at the [`TypeCode`] boundary; rule-graph
//! configuration defects are caught when a graph is built; internal
//! inconsistencies surface as derivation errors. Nothing is swallowed and
//! nothing is retryable — the computation is deterministic.

pub mod dynamics;
pub mod error;
pub mod resolver;
pub mod types;

pub use error::{CodeErrorKind, Result, TypeDynamicsError};
pub use resolver::{AttributeProfile, AttributeValue, Rule, RuleGraph};
pub use types::{Dichotomy, FunctionPair, FunctionStack, Letter, Ratio, Temperament, TypeCode};

/// Derives the full attribute profile for a validated type code.
///
/// The single public entry point: resolves every attribute of the builtin
/// rule graph for `code`. Pure and deterministic; concurrent calls need no
/// coordination.
///
/// # Errors
/// [`TypeDynamicsError::Derivation`] on an internal consistency violation —
/// unreachable for a validated code, and a defect signal if it ever occurs.
///
/// # Example
/// ```rust
/// use type_dynamics_core::{derive_profile, TypeCode};
///
/// let profile = derive_profile(&"ESTJ".parse::<TypeCode>()?)?;
/// assert_eq!(profile.function_stack()?.to_string(), "Te Si Ne Fi");
/// # Ok::<(), type_dynamics_core::TypeDynamicsError>(())
/// ```
pub fn derive_profile(code: &TypeCode) -> Result<AttributeProfile> {
    RuleGraph::builtin().resolve(code)
}
