// Copyright 2025 Cowboy AI, LLC.

//! Dynamic member maps for foreign objects
//!
//! [`DynCosmology`] stands in for a value from a library that never declared
//! any of this crate's traits: an ordered name → member map carrying either
//! an attribute payload or a callable marker. It is the value the
//! conformance checker and the wrapper escape hatch operate on when no
//! compiled bound exists.

use crate::conformance::Shape;
use crate::member::{Arity, MemberKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A member exposed by a dynamic object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DynMember {
    /// An attribute with its payload
    Attr(Value),
    /// A callable member; only the declared arity is carried
    Method {
        /// Declared arity of the callable
        arity: Arity,
    },
}

impl DynMember {
    /// The member's kind
    pub fn kind(&self) -> MemberKind {
        match self {
            DynMember::Attr(_) => MemberKind::Property,
            DynMember::Method { .. } => MemberKind::Method,
        }
    }

    /// The attribute payload, if this member is an attribute
    pub fn value(&self) -> Option<&Value> {
        match self {
            DynMember::Attr(value) => Some(value),
            DynMember::Method { .. } => None,
        }
    }
}

/// A foreign object described by its member surface
///
/// Built by whoever holds the foreign value; read-only afterwards. This
/// crate never owns the object a `DynCosmology` describes.
///
/// # Example
///
/// ```
/// use cosmology_api::{Arity, DynCosmology};
/// use serde_json::json;
///
/// let cosmo = DynCosmology::named("my_library.Planck18")
///     .with_attr("omega_m0", json!(0.30966))
///     .with_method("omega_m", Arity::Unary);
/// assert_eq!(cosmo.get("omega_m0").and_then(|m| m.value()), Some(&json!(0.30966)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynCosmology {
    label: String,
    members: IndexMap<String, DynMember>,
}

impl DynCosmology {
    /// Create an empty dynamic object with a human-readable label
    pub fn named(label: impl Into<String>) -> Self {
        DynCosmology {
            label: label.into(),
            members: IndexMap::new(),
        }
    }

    /// The object's label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Add an attribute member
    pub fn with_attr(mut self, name: impl Into<String>, value: Value) -> Self {
        self.members.insert(name.into(), DynMember::Attr(value));
        self
    }

    /// Add a callable member
    pub fn with_method(mut self, name: impl Into<String>, arity: Arity) -> Self {
        self.members.insert(name.into(), DynMember::Method { arity });
        self
    }

    /// Look up a member by name
    pub fn get(&self, name: &str) -> Option<&DynMember> {
        self.members.get(name)
    }

    /// Iterate members in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DynMember)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of exposed members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the object exposes no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Value-level member access over a dynamic surface
///
/// [`Shape`] reports only kinds; delegation needs the members themselves.
/// Implemented by [`DynCosmology`]; foreign crates can implement it to let a
/// wrapper forward unrecognized lookups to their own objects.
pub trait MemberAccess: Shape {
    /// Look up a member by name
    fn member(&self, name: &str) -> Option<&DynMember>;
}

impl MemberAccess for DynCosmology {
    fn member(&self, name: &str) -> Option<&DynMember> {
        self.members.get(name)
    }
}

impl Shape for DynCosmology {
    fn member_kind(&self, name: &str) -> Option<MemberKind> {
        self.members.get(name).map(DynMember::kind)
    }

    fn member_names(&self) -> Vec<String> {
        self.members.keys().cloned().collect()
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

impl fmt::Display for DynCosmology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} members)", self.label, self.members.len())
    }
}
