// Copyright 2025 Cowboy AI, LLC.

//! Namespace protocol: constants, numeric functions, and version negotiation
//!
//! A conformant library advertises one [`CosmologyNamespace`] per backend:
//! constructed once, held for the lifetime of the process, never mutated. It
//! always exposes a constants sub-namespace (gravitational constant and
//! speed of light) and may expose a numeric-function namespace. API versions
//! are `YYYY.MM` strings; asking for a version an object does not support is
//! a reported error, not a silent fallback.

use crate::conformance::Shape;
use crate::errors::{CosmologyError, CosmologyResult};
use crate::member::{Arity, MemberKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The latest API revision this crate describes
pub const LATEST_API_VERSION: &str = "2026.08";

/// All API revisions this crate describes, oldest first
pub const SUPPORTED_API_VERSIONS: &[&str] = &["2023.03", LATEST_API_VERSION];

/// Resolve a requested API version against the supported set
///
/// `None` resolves to [`LATEST_API_VERSION`]. A malformed or unsupported
/// version string is [`CosmologyError::UnsupportedApiVersion`]: the caller
/// asked for something specific that cannot be honored, so the failure is
/// reported rather than defaulted.
///
/// # Example
///
/// ```
/// use cosmology_api::namespace::{negotiate, LATEST_API_VERSION};
///
/// assert_eq!(negotiate(None).unwrap(), LATEST_API_VERSION);
/// assert!(negotiate(Some("9999.99")).is_err());
/// ```
pub fn negotiate(requested: Option<&str>) -> CosmologyResult<&'static str> {
    let Some(requested) = requested else {
        return Ok(LATEST_API_VERSION);
    };
    if !well_formed(requested) {
        debug!(requested, "malformed API version string");
        return Err(CosmologyError::unsupported_version(
            requested,
            SUPPORTED_API_VERSIONS,
        ));
    }
    SUPPORTED_API_VERSIONS
        .iter()
        .find(|v| **v == requested)
        .copied()
        .ok_or_else(|| CosmologyError::unsupported_version(requested, SUPPORTED_API_VERSIONS))
}

// 'YYYY.MM' with a plausible month.
fn well_formed(version: &str) -> bool {
    let Some((year, month)) = version.split_once('.') else {
        return false;
    };
    year.len() == 4
        && month.len() == 2
        && year.chars().all(|c| c.is_ascii_digit())
        && month
            .parse::<u8>()
            .is_ok_and(|m| (1..=12).contains(&m))
}

/// The constants sub-namespace every conformant library must expose
///
/// Units follow the API standard: `G` in pc km² s⁻² M☉⁻¹, `c` in km s⁻¹.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantsNamespace {
    /// Gravitational constant
    pub g: f64,
    /// Speed of light
    pub c: f64,
}

impl ConstantsNamespace {
    /// Create a constants namespace from a backend's values
    pub fn new(g: f64, c: f64) -> Self {
        ConstantsNamespace { g, c }
    }
}

impl Shape for ConstantsNamespace {
    fn member_kind(&self, name: &str) -> Option<MemberKind> {
        match name {
            "G" | "c" => Some(MemberKind::Property),
            _ => None,
        }
    }

    fn member_names(&self) -> Vec<String> {
        vec!["G".to_string(), "c".to_string()]
    }

    fn describe(&self) -> String {
        "constants namespace".to_string()
    }
}

/// An optional numeric-function namespace (array-API style)
///
/// Some backends advertise their numeric functions alongside the constants;
/// the functions are opaque to this crate and carried as named members with
/// declared arities so the namespace stays conformance-checkable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericsNamespace {
    functions: IndexMap<String, Arity>,
}

impl NumericsNamespace {
    /// Create an empty numerics namespace
    pub fn new() -> Self {
        Self::default()
    }

    /// Advertise a numeric function
    pub fn with_function(mut self, name: impl Into<String>, arity: Arity) -> Self {
        self.functions.insert(name.into(), arity);
        self
    }

    /// Declared arity of a function, if advertised
    pub fn function(&self, name: &str) -> Option<Arity> {
        self.functions.get(name).copied()
    }

    /// Number of advertised functions
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether no functions are advertised
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl Shape for NumericsNamespace {
    fn member_kind(&self, name: &str) -> Option<MemberKind> {
        self.functions.get(name).map(|_| MemberKind::Method)
    }

    fn member_names(&self) -> Vec<String> {
        self.functions.keys().cloned().collect()
    }

    fn describe(&self) -> String {
        "numerics namespace".to_string()
    }
}

/// A library's top-level capability namespace
///
/// Constructed once per backend library and held immutably. The namespace is
/// itself conformance-checkable: it implements [`Shape`] and satisfies the
/// catalog's namespace capability, and its constants sub-namespace satisfies
/// the constants capability, recursively.
///
/// # Example
///
/// ```
/// use cosmology_api::namespace::{ConstantsNamespace, CosmologyNamespace};
/// use cosmology_api::{catalog, conforms};
///
/// let ns = CosmologyNamespace::new(ConstantsNamespace::new(6.674e-11, 299_792.458));
/// assert!(conforms(&ns, catalog::catalog().namespace_interface()));
/// assert!(conforms(ns.constants(), catalog::catalog().constants_interface()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CosmologyNamespace {
    constants: ConstantsNamespace,
    numerics: Option<NumericsNamespace>,
}

impl CosmologyNamespace {
    /// Create a namespace exposing only the constants sub-namespace
    pub fn new(constants: ConstantsNamespace) -> Self {
        CosmologyNamespace {
            constants,
            numerics: None,
        }
    }

    /// Attach a numeric-function namespace
    pub fn with_numerics(mut self, numerics: NumericsNamespace) -> Self {
        self.numerics = Some(numerics);
        self
    }

    /// The constants sub-namespace
    pub fn constants(&self) -> &ConstantsNamespace {
        &self.constants
    }

    /// The numeric-function namespace, if the backend advertises one
    pub fn numerics(&self) -> Option<&NumericsNamespace> {
        self.numerics.as_ref()
    }
}

impl Shape for CosmologyNamespace {
    fn member_kind(&self, name: &str) -> Option<MemberKind> {
        match name {
            "constants" => Some(MemberKind::Property),
            "numerics" if self.numerics.is_some() => Some(MemberKind::Property),
            _ => None,
        }
    }

    fn member_names(&self) -> Vec<String> {
        let mut names = vec!["constants".to_string()];
        if self.numerics.is_some() {
            names.push("numerics".to_string());
        }
        names
    }

    fn describe(&self) -> String {
        "cosmology namespace".to_string()
    }
}
