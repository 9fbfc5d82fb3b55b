// Copyright 2025 Cowboy AI, LLC.

//! Capability descriptors: minimal named structural interfaces
//!
//! A capability declares one or two related members — typically a present-day
//! property (zero-subscript convention, e.g. `omega_m0`) and a
//! redshift-dependent method with the same base name (`omega_m(z)`). A
//! capability never depends on another capability's implementation; it may
//! refine another capability, which means it structurally repeats the refined
//! capability's members in addition to its own.

use crate::member::{Arity, MemberSpec};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A minimal named structural interface
///
/// Capabilities are immutable once defined. The member set is ordered:
/// iteration yields members in declaration order.
///
/// # Example
///
/// ```
/// use cosmology_api::{Arity, Capability};
///
/// let matter = Capability::new("matter_component")
///     .with_property("omega_m0")
///     .with_method("omega_m", Arity::Unary);
/// assert_eq!(matter.members().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    name: String,
    members: IndexMap<String, MemberSpec>,
    refines: Vec<String>,
}

impl Capability {
    /// Create an empty capability with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Capability {
            name: name.into(),
            members: IndexMap::new(),
            refines: Vec::new(),
        }
    }

    /// Declare a required property member
    pub fn with_property(mut self, name: impl Into<String>) -> Self {
        let spec = MemberSpec::property(name);
        self.members.insert(spec.name.clone(), spec);
        self
    }

    /// Declare a required method member
    pub fn with_method(mut self, name: impl Into<String>, arity: Arity) -> Self {
        let spec = MemberSpec::method(name, arity);
        self.members.insert(spec.name.clone(), spec);
        self
    }

    /// Record that this capability refines another, and repeat the refined
    /// capability's members structurally.
    ///
    /// Refinement is interface-only: only the refined capability's member
    /// declarations are taken, never any behavior.
    pub fn refining(mut self, base: &Capability) -> Self {
        self.refines.push(base.name.clone());
        for (name, spec) in &base.members {
            self.members
                .entry(name.clone())
                .or_insert_with(|| spec.clone());
        }
        self
    }

    /// The capability's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of capabilities this one refines
    pub fn refines(&self) -> &[String] {
        &self.refines
    }

    /// Required members in declaration order
    pub fn members(&self) -> impl Iterator<Item = &MemberSpec> {
        self.members.values()
    }

    /// Look up a required member by name
    pub fn member(&self, name: &str) -> Option<&MemberSpec> {
        self.members.get(name)
    }

    /// Number of required members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the capability requires no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.name)?;
        for (i, member) in self.members.values().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{member}")?;
        }
        write!(f, "}}")
    }
}
