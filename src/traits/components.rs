// Copyright 2025 Cowboy AI, LLC.

//! Component capabilities: density parameters of the universe's constituents
//!
//! Each component contributes a present-day density parameter (`*0`
//! convention) and a redshift-dependent method of the same base name.
//! Baryons and dark matter refine the matter component: implementing either
//! requires implementing matter as well, interface-only.

use super::core::Cosmology;

/// The cosmology contains a total density, `omega_tot`
pub trait TotalComponent: Cosmology {
    /// Total density divided by critical density at z = 0
    fn omega_tot0(&self) -> Self::Array;

    /// Redshift-dependent total density parameter, evaluated at `z` or, when
    /// `z2` is given, between `z` and `z2`
    fn omega_tot(&self, z: Self::Input, z2: Option<Self::Input>) -> Self::Array;
}

/// The cosmology contains global curvature, `omega_k`
pub trait CurvatureComponent: Cosmology {
    /// Effective curvature density divided by critical density at z = 0
    fn omega_k0(&self) -> Self::Array;

    /// Redshift-dependent curvature density parameter
    fn omega_k(&self, z: Self::Input) -> Self::Array;
}

/// The cosmology contains matter, `omega_m`
pub trait MatterComponent: Cosmology {
    /// Matter density divided by critical density at z = 0
    fn omega_m0(&self) -> Self::Array;

    /// Redshift-dependent non-relativistic matter density parameter
    ///
    /// Does not include neutrinos, even if non-relativistic at the redshift
    /// of interest; see `omega_nu`.
    fn omega_m(&self, z: Self::Input) -> Self::Array;
}

/// The cosmology contains baryons, `omega_b`; refines [`MatterComponent`]
pub trait BaryonComponent: MatterComponent {
    /// Baryon density divided by critical density at z = 0
    fn omega_b0(&self) -> Self::Array;

    /// Redshift-dependent baryon density parameter
    fn omega_b(&self, z: Self::Input) -> Self::Array;
}

/// The cosmology contains cold dark matter, `omega_dm`; refines
/// [`MatterComponent`]
pub trait DarkMatterComponent: MatterComponent {
    /// Dark matter density divided by critical density at z = 0
    fn omega_dm0(&self) -> Self::Array;

    /// Redshift-dependent dark matter density parameter
    ///
    /// Does not include neutrinos.
    fn omega_dm(&self, z: Self::Input) -> Self::Array;
}

/// The cosmology contains dark energy, `omega_de`
pub trait DarkEnergyComponent: Cosmology {
    /// Dark energy density divided by critical density at z = 0
    fn omega_de0(&self) -> Self::Array;

    /// Redshift-dependent dark energy density parameter
    fn omega_de(&self, z: Self::Input) -> Self::Array;
}

/// The cosmology contains neutrinos, `omega_nu`
pub trait NeutrinoComponent: Cosmology {
    /// Neutrino density divided by critical density at z = 0
    fn omega_nu0(&self) -> Self::Array;

    /// Effective number of neutrino species
    fn neff(&self) -> Self::Array;

    /// Neutrino masses in eV, one per species
    fn m_nu(&self) -> Vec<Self::Array>;

    /// Redshift-dependent neutrino density parameter
    fn omega_nu(&self, z: Self::Input) -> Self::Array;
}

/// The cosmology contains photons, `omega_gamma`
pub trait PhotonComponent: Cosmology {
    /// Photon density divided by critical density at z = 0
    fn omega_gamma0(&self) -> Self::Array;

    /// Redshift-dependent photon density parameter
    fn omega_gamma(&self, z: Self::Input) -> Self::Array;
}
