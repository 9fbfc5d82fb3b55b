// Copyright 2025 Cowboy AI, LLC.

//! The base cosmology trait: identity and namespace retrieval

use crate::array::CosmologyArray;
use crate::errors::CosmologyResult;
use crate::namespace::CosmologyNamespace;

/// The base contract every conformant cosmology object satisfies
///
/// `Array` is the numeric value type the backend returns; `Input` is the
/// redshift input type (commonly the same as `Array`, or `f64`).
pub trait Cosmology {
    /// Numeric value type returned by every physical-quantity member
    type Array: CosmologyArray;
    /// Redshift input type
    type Input;

    /// Human-friendly label for this cosmology instance, if set
    ///
    /// Useful for identifying the instance in logs, error messages, and
    /// plots; purely informational.
    fn name(&self) -> Option<&str>;

    /// The capability namespace of the library this object comes from
    ///
    /// `api_version` is a `YYYY.MM` revision string; `None` means the latest
    /// version the object supports.
    ///
    /// # Errors
    ///
    /// [`CosmologyError::UnsupportedApiVersion`](crate::CosmologyError::UnsupportedApiVersion)
    /// if the requested version is malformed or not supported. An
    /// unsupported request is never silently downgraded to a default
    /// namespace.
    fn cosmology_namespace(
        &self,
        api_version: Option<&str>,
    ) -> CosmologyResult<&CosmologyNamespace>;
}
