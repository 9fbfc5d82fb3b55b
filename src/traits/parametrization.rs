// Copyright 2025 Cowboy AI, LLC.

//! Parametrization capabilities: the Hubble parameter family and the
//! critical density

use super::core::Cosmology;

/// The cosmology can evaluate the Hubble parameter and derived scales
pub trait HubbleParameter: Cosmology {
    /// Hubble parameter at z = 0, in km s⁻¹ Mpc⁻¹
    fn h0(&self) -> Self::Array;

    /// Hubble distance in Mpc
    fn hubble_distance(&self) -> Self::Array;

    /// Hubble time in Gyr
    fn hubble_time(&self) -> Self::Array;

    /// Hubble parameter `H(z)` in km s⁻¹ Mpc⁻¹
    fn h(&self, z: Self::Input) -> Self::Array;

    /// Standardised Hubble function `E(z) = H(z) / H0`
    fn h_over_h0(&self, z: Self::Input) -> Self::Array;
}

/// The cosmology can evaluate the critical density
pub trait CriticalDensity: Cosmology {
    /// Critical density at z = 0, in M☉ Mpc⁻³
    fn critical_density0(&self) -> Self::Array;

    /// Redshift-dependent critical density, in M☉ Mpc⁻³
    fn critical_density(&self, z: Self::Input) -> Self::Array;
}
