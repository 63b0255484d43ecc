//! Resolved attribute values and the profile they live in.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Result, TypeDynamicsError};
use crate::types::{FunctionPair, FunctionStack, Letter, Ratio, Temperament};

use super::attr;

/// A single resolved attribute value.
///
/// The union over every value kind a rule can produce. All variants are
/// `Copy`; a profile is a flat map of these. Serializes untagged, so a
/// profile renders as plain letters, booleans, and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// A single preference letter.
    Letter(Letter),
    /// A boolean predicate.
    Flag(bool),
    /// An oriented cognitive function.
    Function(FunctionPair),
    /// A temperament label.
    Temperament(Temperament),
    /// A rational/irrational label.
    Ratio(Ratio),
}

impl AttributeValue {
    /// The kind of this value, for diagnostics.
    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Letter(_) => "letter",
            Self::Flag(_) => "flag",
            Self::Function(_) => "function",
            Self::Temperament(_) => "temperament",
            Self::Ratio(_) => "ratio",
        }
    }

    /// Returns the letter if this is a letter value.
    #[inline]
    pub fn as_letter(&self) -> Option<Letter> {
        match self {
            Self::Letter(l) => Some(*l),
            _ => None,
        }
    }

    /// Returns the flag if this is a boolean value.
    #[inline]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the oriented function if this is a function value.
    #[inline]
    pub fn as_function(&self) -> Option<FunctionPair> {
        match self {
            Self::Function(p) => Some(*p),
            _ => None,
        }
    }

    /// Returns the temperament if this is a temperament value.
    #[inline]
    pub fn as_temperament(&self) -> Option<Temperament> {
        match self {
            Self::Temperament(t) => Some(*t),
            _ => None,
        }
    }

    /// Returns the ratio label if this is a ratio value.
    #[inline]
    pub fn as_ratio(&self) -> Option<Ratio> {
        match self {
            Self::Ratio(r) => Some(*r),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(l) => write!(f, "{}", l),
            Self::Flag(b) => write!(f, "{}", b),
            Self::Function(p) => write!(f, "{}", p),
            Self::Temperament(t) => write!(f, "{}", t),
            Self::Ratio(r) => write!(f, "{}", r),
        }
    }
}

/// The immutable name→value mapping produced by one resolution pass.
///
/// A profile has no identity beyond the code that produced it and holds no
/// shared state; it is plain data owned by the caller and safe to read from
/// any thread.
///
/// Typed getters ([`letter`](Self::letter), [`flag`](Self::flag),
/// [`function`](Self::function)) treat a missing or wrong-kind attribute as
/// a [`TypeDynamicsError::Derivation`], since for the builtin graph that
/// can only mean an engine bug. Use [`get`](Self::get) for optional access.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeProfile {
    values: BTreeMap<&'static str, AttributeValue>,
}

impl AttributeProfile {
    pub(super) fn new(values: BTreeMap<&'static str, AttributeValue>) -> Self {
        Self { values }
    }

    /// Looks up an attribute by name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name)
    }

    /// True if the profile contains the named attribute.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of resolved attributes.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no attributes were resolved.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over attribute names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    /// Reads a letter-valued attribute.
    pub fn letter(&self, name: &str) -> Result<Letter> {
        self.typed(name, AttributeValue::as_letter, "letter")
    }

    /// Reads a boolean-valued attribute.
    pub fn flag(&self, name: &str) -> Result<bool> {
        self.typed(name, AttributeValue::as_flag, "flag")
    }

    /// Reads a function-valued attribute.
    pub fn function(&self, name: &str) -> Result<FunctionPair> {
        self.typed(name, AttributeValue::as_function, "function")
    }

    /// The temperament label of this profile.
    pub fn temperament(&self) -> Result<Temperament> {
        self.typed(attr::TEMPERAMENT, AttributeValue::as_temperament, "temperament")
    }

    /// The rational/irrational label of this profile.
    pub fn ratio(&self) -> Result<Ratio> {
        self.typed(attr::RATIO, AttributeValue::as_ratio, "ratio")
    }

    /// Assembles the four stack entries into a [`FunctionStack`].
    pub fn function_stack(&self) -> Result<FunctionStack> {
        Ok(FunctionStack {
            dominant: self.function(attr::DOMINANT)?,
            auxiliary: self.function(attr::AUXILIARY)?,
            tertiary: self.function(attr::TERTIARY)?,
            inferior: self.function(attr::INFERIOR)?,
        })
    }

    fn typed<T>(
        &self,
        name: &str,
        extract: impl Fn(&AttributeValue) -> Option<T>,
        expected: &'static str,
    ) -> Result<T> {
        let value = self.values.get(name).ok_or_else(|| {
            TypeDynamicsError::Derivation(format!("attribute '{}' was not resolved", name))
        })?;
        extract(value).ok_or_else(|| {
            TypeDynamicsError::Derivation(format!(
                "attribute '{}' holds a {} value, expected {}",
                name,
                value.kind(),
                expected
            ))
        })
    }
}
