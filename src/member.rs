// Copyright 2025 Cowboy AI, LLC.

//! Member descriptors: the unit of a capability's required surface

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a required member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberKind {
    /// A present-day attribute, read without arguments (e.g. `omega_m0`)
    Property,
    /// A callable member (e.g. `omega_m(z)`)
    Method,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberKind::Property => write!(f, "property"),
            MemberKind::Method => write!(f, "method"),
        }
    }
}

/// Declared arity of a method member
///
/// The two-redshift distance/volume/time families are modeled as a single
/// method taking one redshift and an optional second (`z[, z2]`), with the
/// omitted second meaning "between redshift zero and `z`". This keeps each
/// capability's member set a single stable name instead of a pair of
/// overloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arity {
    /// No arguments beyond the receiver
    Nullary,
    /// No required arguments plus one optional (e.g. a version string)
    NullaryOptional,
    /// One required redshift argument
    Unary,
    /// One required redshift argument plus an optional second
    UnaryOptional,
}

impl Arity {
    /// Number of required arguments
    pub fn required(&self) -> usize {
        match self {
            Arity::Nullary | Arity::NullaryOptional => 0,
            Arity::Unary | Arity::UnaryOptional => 1,
        }
    }

    /// Whether the member accepts an optional trailing argument
    pub fn has_optional(&self) -> bool {
        matches!(self, Arity::NullaryOptional | Arity::UnaryOptional)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Nullary => write!(f, "0"),
            Arity::NullaryOptional => write!(f, "0..1"),
            Arity::Unary => write!(f, "1"),
            Arity::UnaryOptional => write!(f, "1..2"),
        }
    }
}

/// A single required member of a capability
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberSpec {
    /// Member name as it appears on a conformant object
    pub name: String,
    /// Whether the member is a property or a method
    pub kind: MemberKind,
    /// Declared arity; [`Arity::Nullary`] for properties
    pub arity: Arity,
}

impl MemberSpec {
    /// Declare a property member
    pub fn property(name: impl Into<String>) -> Self {
        MemberSpec {
            name: name.into(),
            kind: MemberKind::Property,
            arity: Arity::Nullary,
        }
    }

    /// Declare a method member with the given arity
    pub fn method(name: impl Into<String>, arity: Arity) -> Self {
        MemberSpec {
            name: name.into(),
            kind: MemberKind::Method,
            arity,
        }
    }

    /// Render the member's shape (kind and, for methods, arity) for
    /// conflict reporting
    pub fn shape(&self) -> String {
        match self.kind {
            MemberKind::Property => "property".to_string(),
            MemberKind::Method => format!("method/{}", self.arity),
        }
    }

    /// Whether two specs declare the same shape under the same name.
    ///
    /// Used by the composition engine: identical re-declarations are
    /// refinement, anything else is a definition-time conflict.
    pub fn agrees_with(&self, other: &MemberSpec) -> bool {
        self.name == other.name && self.kind == other.kind && self.arity == other.arity
    }
}

impl fmt::Display for MemberSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MemberKind::Property => write!(f, "{}", self.name),
            MemberKind::Method => match self.arity {
                Arity::Nullary => write!(f, "{}()", self.name),
                Arity::NullaryOptional => write!(f, "{}([arg])", self.name),
                Arity::Unary => write!(f, "{}(z)", self.name),
                Arity::UnaryOptional => write!(f, "{}(z[, z2])", self.name),
            },
        }
    }
}
