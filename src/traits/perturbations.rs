// Copyright 2025 Cowboy AI, LLC.

//! Perturbation capabilities
//!
//! Linear-theory growth of structure. This family stands apart from the
//! standard union: a background cosmology is complete without it, so
//! [`StandardCosmology`](super::StandardCosmology) does not require it.

use super::core::Cosmology;

/// The cosmology has a linear growth factor
pub trait GrowthFactor: Cosmology {
    /// Linear growth factor `D(z)`, normalized so `D(0) = 1`
    ///
    /// Scales the linear matter power spectrum between redshifts:
    /// `P(k, z) = D(z)² P(k, 0)`.
    fn growth_factor(&self, z: Self::Input) -> Self::Array;
}
