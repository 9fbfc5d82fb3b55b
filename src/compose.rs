// Copyright 2025 Cowboy AI, LLC.

//! Capability composition: building aggregate interfaces by member union
//!
//! Composition flattens any number of capabilities into one aggregate
//! interface whose required members are the exact union, deduplicated by
//! member name. Capability refinement (e.g. the baryon component repeating
//! the matter component's members) is treated as flattening, never as
//! duplication. Two capabilities that disagree on a shared member's shape are
//! a definition-time error: the aggregate is never published.

use crate::capability::Capability;
use crate::errors::{CosmologyError, CosmologyResult};
use crate::member::MemberSpec;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A named union of capabilities, published as one contract
///
/// Aggregate interfaces are immutable once composed; concurrent reads are
/// safe without locking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateInterface {
    name: String,
    members: IndexMap<String, MemberSpec>,
    /// Names of the capabilities this aggregate was composed from, in
    /// composition order
    constituents: Vec<String>,
}

impl AggregateInterface {
    /// The aggregate's published name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Required members in first-declaration order
    pub fn members(&self) -> impl Iterator<Item = &MemberSpec> {
        self.members.values()
    }

    /// Look up a required member by name
    pub fn member(&self, name: &str) -> Option<&MemberSpec> {
        self.members.get(name)
    }

    /// Whether the aggregate requires a member with the given name
    pub fn requires(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Number of required members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the aggregate requires no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Names of the capabilities the aggregate was composed from
    pub fn constituents(&self) -> &[String] {
        &self.constituents
    }

    /// Whether every member required by `capability` is required by this
    /// aggregate with an identical shape
    pub fn includes(&self, capability: &Capability) -> bool {
        capability
            .members()
            .all(|m| self.members.get(&m.name).is_some_and(|own| own.agrees_with(m)))
    }
}

impl fmt::Display for AggregateInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} members)", self.name, self.members.len())
    }
}

/// Compose capabilities into an aggregate interface by member union
///
/// The input may contain capabilities that structurally include one another
/// (refinement); all transitively required members are flattened into one
/// set. No member is dropped, and no member is required twice under
/// different shapes.
///
/// # Errors
///
/// [`CosmologyError::MemberConflict`] if two capabilities declare the same
/// member name with differing kind or arity, and
/// [`CosmologyError::EmptyComposition`] if `capabilities` is empty. Both are
/// definition-time failures; a conflicting aggregate is never observable.
///
/// # Example
///
/// ```
/// use cosmology_api::{catalog, compose};
///
/// let cat = catalog::catalog();
/// let iface = compose("matter_and_baryons", &[cat.matter(), cat.baryon()]).unwrap();
/// assert_eq!(iface.len(), 4); // omega_m0, omega_m, omega_b0, omega_b
/// ```
pub fn compose(
    name: impl Into<String>,
    capabilities: &[&Capability],
) -> CosmologyResult<AggregateInterface> {
    let name = name.into();
    if capabilities.is_empty() {
        return Err(CosmologyError::EmptyComposition(name));
    }

    let mut members: IndexMap<String, MemberSpec> = IndexMap::new();
    // Which capability first declared each member, for conflict reporting.
    let mut declared_by: IndexMap<String, String> = IndexMap::new();
    let mut constituents = Vec::with_capacity(capabilities.len());

    for capability in capabilities {
        constituents.push(capability.name().to_string());
        for spec in capability.members() {
            match members.get(&spec.name) {
                None => {
                    declared_by.insert(spec.name.clone(), capability.name().to_string());
                    members.insert(spec.name.clone(), spec.clone());
                }
                Some(existing) if existing.agrees_with(spec) => {
                    // Refinement or plain overlap: identical shape, one entry.
                }
                Some(existing) => {
                    return Err(CosmologyError::MemberConflict {
                        member: spec.name.clone(),
                        first: declared_by
                            .get(&spec.name)
                            .cloned()
                            .unwrap_or_default(),
                        first_shape: existing.shape(),
                        second: capability.name().to_string(),
                        second_shape: spec.shape(),
                    });
                }
            }
        }
    }

    debug!(
        aggregate = %name,
        capabilities = capabilities.len(),
        members = members.len(),
        "composed aggregate interface"
    );

    Ok(AggregateInterface {
        name,
        members,
        constituents,
    })
}

/// Compose two already-composed aggregates into a new one
///
/// Union semantics are identical to [`compose`]; this exists so composition
/// can be chained, and is associative with it as member-sets.
pub fn merge(
    name: impl Into<String>,
    left: &AggregateInterface,
    right: &AggregateInterface,
) -> CosmologyResult<AggregateInterface> {
    let name = name.into();
    let mut members = left.members.clone();
    for spec in right.members.values() {
        match members.get(&spec.name) {
            None => {
                members.insert(spec.name.clone(), spec.clone());
            }
            Some(existing) if existing.agrees_with(spec) => {}
            Some(existing) => {
                return Err(CosmologyError::MemberConflict {
                    member: spec.name.clone(),
                    first: left.name.clone(),
                    first_shape: existing.shape(),
                    second: right.name.clone(),
                    second_shape: spec.shape(),
                });
            }
        }
    }
    let mut constituents = left.constituents.clone();
    constituents.extend(right.constituents.iter().cloned());
    Ok(AggregateInterface {
        name,
        members,
        constituents,
    })
}
