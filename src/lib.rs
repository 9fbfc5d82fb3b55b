// Copyright 2025 Cowboy AI, LLC.

//! # Cosmology API
//!
//! A capability-based structural interface standard for cosmology libraries:
//! independently-developed numeric/scientific libraries declare, compose,
//! and verify conformance to a shared set of named contracts without
//! requiring common inheritance.
//!
//! The crate provides:
//! - **Capability catalog**: dozens of minimal single-purpose capabilities
//!   (matter density, Hubble parameter, distance measures, ...), each one or
//!   two members
//! - **Composition engine**: union of capabilities into published aggregate
//!   interfaces, with member conflicts rejected at definition time
//! - **Conformance checker**: a non-throwing structural predicate over
//!   arbitrary foreign values
//! - **Namespace protocol**: constants and numeric-function namespaces with
//!   explicit API version negotiation
//! - **Wrapper adapters**: delegation components that re-expose a target
//!   interface over a foreign object
//!
//! ## Two layers of conformance
//!
//! Rust has no runtime attribute lookup, so the standard is expressed twice,
//! with different strengths:
//!
//! 1. The [`traits`] module is the compile-time layer: implementing
//!    [`traits::MatterComponent`] and friends *declares* conformance, and a
//!    bound like `C: StandardCosmology` is proof.
//! 2. The runtime layer ([`conforms`], [`Shape`]) checks the *shape* of
//!    values that never declared anything. It is presence-only — a weaker
//!    guarantee, for the same reasons shallow duck typing is — and it never
//!    panics or errors: a failed check is just `false`.
//!
//! Method bodies are deliberately absent throughout: this crate defines
//! contracts, and computing actual cosmological quantities belongs to the
//! implementing libraries.
//!
//! ## Example
//!
//! ```
//! use cosmology_api::{catalog, compose, conforms, Arity, DynCosmology};
//! use serde_json::json;
//!
//! let cat = catalog::catalog();
//!
//! // Compose an aggregate from two capabilities; baryon refines matter, so
//! // the union holds exactly four members.
//! let iface = compose("matter_and_baryons", &[cat.matter(), cat.baryon()]).unwrap();
//! assert_eq!(iface.len(), 4);
//!
//! // Check a foreign object structurally, no shared types required.
//! let cosmo = DynCosmology::named("some_library.Planck18")
//!     .with_attr("omega_m0", json!(0.30966))
//!     .with_method("omega_m", Arity::Unary)
//!     .with_attr("omega_b0", json!(0.04897))
//!     .with_method("omega_b", Arity::Unary);
//! assert!(conforms(&cosmo, &iface));
//! assert!(!conforms(&cosmo, cat.standard_cosmology_interface()));
//! ```

#![warn(missing_docs)]

mod array;
mod capability;
mod compose;
mod conformance;
mod dynamic;
mod errors;
mod member;
mod wrapper;

pub mod catalog;
pub mod namespace;
pub mod traits;

// Re-export core types
pub use array::{CosmologyArray, Dtype};
pub use capability::Capability;
pub use catalog::{catalog, Catalog};
pub use compose::{compose, merge, AggregateInterface};
pub use conformance::{conforms, conforms_capability, missing_members, Shape};
pub use dynamic::{DynCosmology, DynMember, MemberAccess};
pub use errors::{CosmologyError, CosmologyResult};
pub use member::{Arity, MemberKind, MemberSpec};
pub use namespace::{
    negotiate, ConstantsNamespace, CosmologyNamespace, NumericsNamespace, LATEST_API_VERSION,
    SUPPORTED_API_VERSIONS,
};
pub use wrapper::{CosmologyWrapper, StandardCosmologyWrapper};
