//! Attribute graph resolver.
//!
//! A [`RuleGraph`] is a fixed set of named derivation rules, each declaring
//! which other attributes it reads and a pure function from those inputs to
//! a value. The graph is validated when it is built — duplicate names,
//! unknown dependencies, and cycles are configuration defects caught before
//! any input is resolved — and a topological order is fixed once.
//!
//! Within one resolution pass every rule runs at most once; dependents
//! share the memoized value. Evaluation order is any topological order, so
//! the eager [`resolve`](RuleGraph::resolve) and the lazy
//! [`resolve_only`](RuleGraph::resolve_only) produce identical values for
//! any attribute they both compute.
//!
//! # Module Structure
//! - `attr`: attribute-name constants for the builtin graph
//! - `profile`: resolved values and the profile map
//! - `rules`: the builtin rule set

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::error::{Result, TypeDynamicsError};
use crate::types::{FunctionPair, Letter, TypeCode};

pub mod attr;

mod profile;
mod rules;


pub use profile::{AttributeProfile, AttributeValue};

/// Signature of a rule's evaluation function.
pub type RuleFn = fn(&RuleContext<'_>) -> Result<AttributeValue>;

/// A named derivation rule.
///
/// `deps` lists the attribute names this rule reads through its
/// [`RuleContext`]; the resolver guarantees they are computed first.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Attribute name this rule produces.
    pub name: &'static str,
    /// Names of attributes this rule reads.
    pub deps: &'static [&'static str],
    /// Pure evaluation function.
    pub eval: RuleFn,
}

/// What a rule sees while evaluating: the input code and the attributes
/// already resolved in this pass.
///
/// The typed getters fail with a derivation error if a rule reaches for a
/// name it did not declare or that holds an unexpected kind — a defect
/// signal, not a recoverable condition.
pub struct RuleContext<'a> {
    code: &'a TypeCode,
    resolved: &'a BTreeMap<&'static str, AttributeValue>,
}

impl<'a> RuleContext<'a> {
    /// The input code being resolved.
    #[inline]
    pub fn code(&self) -> &TypeCode {
        self.code
    }

    /// Reads a previously resolved letter attribute.
    pub fn letter(&self, name: &str) -> Result<Letter> {
        self.value(name)?.as_letter().ok_or_else(|| {
            TypeDynamicsError::Derivation(format!("dependency '{}' is not a letter", name))
        })
    }

    /// Reads a previously resolved boolean attribute.
    pub fn flag(&self, name: &str) -> Result<bool> {
        self.value(name)?.as_flag().ok_or_else(|| {
            TypeDynamicsError::Derivation(format!("dependency '{}' is not a flag", name))
        })
    }

    /// Reads a previously resolved function attribute.
    pub fn function(&self, name: &str) -> Result<FunctionPair> {
        self.value(name)?.as_function().ok_or_else(|| {
            TypeDynamicsError::Derivation(format!("dependency '{}' is not a function", name))
        })
    }

    fn value(&self, name: &str) -> Result<&AttributeValue> {
        self.resolved.get(name).ok_or_else(|| {
            TypeDynamicsError::Derivation(format!(
                "dependency '{}' read before it was resolved",
                name
            ))
        })
    }
}

/// A validated, immutable set of derivation rules with a fixed
/// topological order.
#[derive(Debug, Clone)]
pub struct RuleGraph {
    rules: Vec<Rule>,
    index: HashMap<&'static str, usize>,
    /// Rule indices in dependency order.
    order: Vec<usize>,
}

impl RuleGraph {
    /// Builds and validates a rule graph.
    ///
    /// Validation is independent of any input and fails fast:
    ///
    /// # Errors
    /// - [`TypeDynamicsError::DuplicateRule`] if two rules share a name
    /// - [`TypeDynamicsError::UnknownDependency`] if a rule reads a name no
    ///   rule produces
    /// - [`TypeDynamicsError::CyclicRuleGraph`] if the dependencies are not
    ///   acyclic
    pub fn new(rules: Vec<Rule>) -> Result<RuleGraph> {
        let mut index = HashMap::with_capacity(rules.len());
        for (i, rule) in rules.iter().enumerate() {
            if index.insert(rule.name, i).is_some() {
                return Err(TypeDynamicsError::DuplicateRule {
                    name: rule.name.to_string(),
                });
            }
        }

        for rule in &rules {
            for dep in rule.deps {
                if !index.contains_key(dep) {
                    return Err(TypeDynamicsError::UnknownDependency {
                        rule: rule.name.to_string(),
                        dependency: dep.to_string(),
                    });
                }
            }
        }

        let order = topological_order(&rules, &index)?;

        Ok(RuleGraph {
            rules,
            index,
            order,
        })
    }

    /// The process-wide builtin graph of ~20 derivation rules.
    ///
    /// Built once on first use and never mutated; every resolution pass
    /// against it is independent, so concurrent callers need no
    /// coordination.
    pub fn builtin() -> &'static RuleGraph {
        static BUILTIN: OnceLock<RuleGraph> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            RuleGraph::new(rules::builtin_rules())
                .expect("builtin rule set is statically acyclic and closed")
        })
    }

    /// Number of rules in the graph.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if the graph has no rules.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// True if the graph produces the named attribute.
    #[inline]
    pub fn produces(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Eagerly resolves every attribute for one input code.
    ///
    /// Each rule runs exactly once, in topological order, against the
    /// values already computed in this pass.
    pub fn resolve(&self, code: &TypeCode) -> Result<AttributeProfile> {
        debug!(code = %code, rules = self.rules.len(), "resolving attribute graph");
        let mut resolved = BTreeMap::new();
        for &i in &self.order {
            self.evaluate(&self.rules[i], code, &mut resolved)?;
        }
        Ok(AttributeProfile::new(resolved))
    }

    /// Lazily resolves only the requested attributes and their transitive
    /// dependencies.
    ///
    /// Produces the same value for every computed attribute as
    /// [`resolve`](Self::resolve) would; attributes outside the requested
    /// closure are simply absent from the returned profile.
    ///
    /// # Errors
    /// [`TypeDynamicsError::UnknownAttribute`] if a requested name is not
    /// produced by this graph.
    pub fn resolve_only(&self, code: &TypeCode, names: &[&str]) -> Result<AttributeProfile> {
        // Transitive dependency closure over rule indices.
        let mut needed = vec![false; self.rules.len()];
        let mut pending = Vec::with_capacity(names.len());
        for name in names {
            let &i = self
                .index
                .get(name)
                .ok_or_else(|| TypeDynamicsError::UnknownAttribute {
                    name: name.to_string(),
                })?;
            pending.push(i);
        }
        while let Some(i) = pending.pop() {
            if needed[i] {
                continue;
            }
            needed[i] = true;
            for dep in self.rules[i].deps {
                // validated at construction
                pending.push(self.index[dep]);
            }
        }

        debug!(
            code = %code,
            requested = names.len(),
            closure = needed.iter().filter(|&&n| n).count(),
            "resolving attribute subset"
        );

        let mut resolved = BTreeMap::new();
        for &i in &self.order {
            if needed[i] {
                self.evaluate(&self.rules[i], code, &mut resolved)?;
            }
        }
        Ok(AttributeProfile::new(resolved))
    }

    fn evaluate(
        &self,
        rule: &Rule,
        code: &TypeCode,
        resolved: &mut BTreeMap<&'static str, AttributeValue>,
    ) -> Result<()> {
        let ctx = RuleContext { code, resolved };
        let value = (rule.eval)(&ctx)?;
        trace!(rule = rule.name, value = %value, "rule evaluated");
        if resolved.insert(rule.name, value).is_some() {
            return Err(TypeDynamicsError::Derivation(format!(
                "rule '{}' evaluated more than once in a pass",
                rule.name
            )));
        }
        Ok(())
    }
}

/// Kahn's algorithm over the declared dependencies.
///
/// Returns rule indices such that every rule appears after all of its
/// dependencies, or the set of rules trapped in cycles.
fn topological_order(
    rules: &[Rule],
    index: &HashMap<&'static str, usize>,
) -> Result<Vec<usize>> {
    let mut in_degree = vec![0usize; rules.len()];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); rules.len()];

    for (i, rule) in rules.iter().enumerate() {
        in_degree[i] = rule.deps.len();
        for dep in rule.deps {
            dependents[index[dep]].push(i);
        }
    }

    let mut queue: VecDeque<usize> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, &d)| d == 0)
        .map(|(i, _)| i)
        .collect();

    let mut order = Vec::with_capacity(rules.len());
    while let Some(i) = queue.pop_front() {
        order.push(i);
        for &dependent in &dependents[i] {
            in_degree[dependent] -= 1;
            if in_degree[dependent] == 0 {
                queue.push_back(dependent);
            }
        }
    }

    if order.len() != rules.len() {
        let unresolved = in_degree
            .iter()
            .enumerate()
            .filter(|(_, &d)| d > 0)
            .map(|(i, _)| rules[i].name.to_string())
            .collect();
        return Err(TypeDynamicsError::CyclicRuleGraph { unresolved });
    }
    Ok(order)
}
