//! Error types for type-dynamics-core.
//!
//! All fallible operations in this crate return [`Result`]. The error
//! surface is small and deliberate:
//!
//! - [`TypeDynamicsError::InvalidTypeCode`] — malformed caller input
//! - [`TypeDynamicsError::DuplicateRule`], [`TypeDynamicsError::UnknownDependency`],
//!   [`TypeDynamicsError::CyclicRuleGraph`] — rule-graph configuration
//!   defects, detected when the graph is built and independent of any input
//! - [`TypeDynamicsError::UnknownAttribute`] — a caller asked a graph for an
//!   attribute no rule produces
//! - [`TypeDynamicsError::Derivation`] — an internal consistency violation;
//!   unreachable for valid input and a programming-defect signal, never
//!   recovered silently
//!
//! The computation is pure and deterministic, so no error is retryable:
//! any failure on valid input indicates a logic defect, not a transient
//! condition.

use thiserror::Error;

use crate::types::Dichotomy;


/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TypeDynamicsError>;

/// Why a candidate type code was rejected.
///
/// Carried inside [`TypeDynamicsError::InvalidTypeCode`] so callers can
/// report the exact defect rather than a generic parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeErrorKind {
    /// The input was not exactly four characters long.
    #[error("expected 4 letters, got {actual}")]
    WrongLength {
        /// Number of characters actually supplied
        actual: usize,
    },

    /// A character was not one of the eight preference letters.
    #[error("'{found}' at position {position} is not a preference letter")]
    UnknownLetter {
        /// Zero-based position of the offending character
        position: usize,
        /// The character found there
        found: char,
    },

    /// A valid letter appeared at a position owned by a different dichotomy.
    ///
    /// # When This Occurs
    ///
    /// - "TNTP": 'T' is a judging letter but position 0 expects E or I
    /// - "EJTP": 'J' is a lifestyle letter but position 1 expects S or N
    #[error("'{found}' at position {position} must come from the {expected} pair")]
    WrongDichotomy {
        /// Zero-based position of the offending letter
        position: usize,
        /// The letter found there, as a character
        found: char,
        /// The dichotomy that owns this position
        expected: Dichotomy,
    },
}

/// Unified error type for the derivation engine.
#[derive(Debug, Error)]
pub enum TypeDynamicsError {
    /// Malformed type code supplied by the caller.
    ///
    /// Wrong length, or a letter not drawn from the correct positional
    /// pair. There is no coercion: the caller must fix the input.
    #[error("invalid type code {input:?}: {kind}")]
    InvalidTypeCode {
        /// The rejected input, verbatim
        input: String,
        /// The specific defect
        kind: CodeErrorKind,
    },

    /// Two rules in a graph were registered under the same name.
    #[error("duplicate rule name: '{name}'")]
    DuplicateRule {
        /// The colliding rule name
        name: String,
    },

    /// A rule declared a dependency on a name no rule produces.
    #[error("rule '{rule}' depends on unknown attribute '{dependency}'")]
    UnknownDependency {
        /// The rule declaring the dependency
        rule: String,
        /// The unresolvable name
        dependency: String,
    },

    /// The rule graph contains a dependency cycle.
    ///
    /// Detected when the graph is constructed, before any input is
    /// resolved. Lists the rules left unordered by the topological sort;
    /// every cycle passes through at least one of them.
    #[error("rule graph contains a cycle among: {}", unresolved.join(", "))]
    CyclicRuleGraph {
        /// Rule names that could not be topologically ordered
        unresolved: Vec<String>,
    },

    /// A requested attribute is not produced by any rule in the graph.
    #[error("unknown attribute: '{name}'")]
    UnknownAttribute {
        /// The requested name
        name: String,
    },

    /// Internal consistency violation during derivation.
    ///
    /// # When This Occurs
    ///
    /// - A rule reads a dependency that was not computed first
    /// - A dependency holds a value of an unexpected kind
    /// - Mutually exclusive predicates agree (e.g. a code claiming to be
    ///   both extraverted and introverted)
    ///
    /// Unreachable for a validated code and a well-formed graph. These
    /// errors indicate bugs and should be investigated, never retried.
    #[error("derivation error: {0}")]
    Derivation(String),
}

impl TypeDynamicsError {
    /// Returns true if this error is a rule-graph configuration defect
    /// (as opposed to bad input or an internal derivation failure).
    #[inline]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::DuplicateRule { .. }
                | Self::UnknownDependency { .. }
                | Self::CyclicRuleGraph { .. }
        )
    }

    /// Returns true if this error indicates a bug in the engine itself
    /// rather than anything the caller did.
    #[inline]
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Derivation(_))
    }
}
