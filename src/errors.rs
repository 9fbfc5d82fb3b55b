// Copyright 2025 Cowboy AI, LLC.

//! Error types for interface definition, version negotiation, and delegation

use thiserror::Error;

/// Errors that can occur when defining interfaces or delegating through them
///
/// Conformance checking is deliberately absent from this taxonomy: a value
/// that fails a structural check is reported as a plain `false` from
/// [`conforms`](crate::conforms), never as an error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CosmologyError {
    /// Two composed capabilities disagree on a shared member's shape.
    ///
    /// This is a definition-time error: an aggregate interface with a member
    /// conflict is never published.
    #[error(
        "member conflict on `{member}`: `{first}` declares {first_shape}, `{second}` declares {second_shape}"
    )]
    MemberConflict {
        /// Name of the conflicting member
        member: String,
        /// Capability that declared the member first
        first: String,
        /// Shape declared by the first capability
        first_shape: String,
        /// Capability whose declaration conflicts
        second: String,
        /// Shape declared by the conflicting capability
        second_shape: String,
    },

    /// Composition was invoked with no capabilities
    #[error("cannot compose an aggregate interface `{0}` from zero capabilities")]
    EmptyComposition(String),

    /// A namespace was requested for an API version the object does not support
    #[error("unsupported API version `{requested}` (supported: {supported})")]
    UnsupportedApiVersion {
        /// Version string the caller asked for
        requested: String,
        /// Comma-separated list of versions the object supports
        supported: String,
    },

    /// A member was looked up that is absent from both the target interface
    /// and the wrapped object
    #[error("unknown member `{member}` on wrapper around `{wrapped}`")]
    UnknownMember {
        /// Name that was looked up
        member: String,
        /// Description of the wrapped object
        wrapped: String,
    },
}

/// Result type for interface operations
pub type CosmologyResult<T> = Result<T, CosmologyError>;

impl CosmologyError {
    /// Create an unknown-member error for a wrapper lookup
    pub fn unknown_member(member: impl Into<String>, wrapped: impl Into<String>) -> Self {
        CosmologyError::UnknownMember {
            member: member.into(),
            wrapped: wrapped.into(),
        }
    }

    /// Create an unsupported-version error from the requested string and the
    /// list of versions that would have been accepted
    pub fn unsupported_version(requested: impl Into<String>, supported: &[&str]) -> Self {
        CosmologyError::UnsupportedApiVersion {
            requested: requested.into(),
            supported: supported.join(", "),
        }
    }
}
