// Copyright 2025 Cowboy AI, LLC.

//! The standard cosmology: union of every published capability

use super::components::{
    BaryonComponent, CurvatureComponent, DarkEnergyComponent, DarkMatterComponent,
    NeutrinoComponent, PhotonComponent, TotalComponent,
};
use super::distances::DistanceMeasures;
use super::parametrization::{CriticalDensity, HubbleParameter};

/// The full standard (FLRW-like) cosmology contract
///
/// The compile-time counterpart of the catalog's `StandardCosmology`
/// aggregate interface: every component, parametrization, and distance
/// capability plus the base identity contract (implied through the component
/// supertraits). Blanket-implemented, so conformance is declared by
/// implementing the constituent traits, never by opting into this one.
pub trait StandardCosmology:
    TotalComponent
    + CurvatureComponent
    + BaryonComponent
    + DarkMatterComponent
    + DarkEnergyComponent
    + NeutrinoComponent
    + PhotonComponent
    + HubbleParameter
    + CriticalDensity
    + DistanceMeasures
{
}

impl<T> StandardCosmology for T where
    T: TotalComponent
        + CurvatureComponent
        + BaryonComponent
        + DarkMatterComponent
        + DarkEnergyComponent
        + NeutrinoComponent
        + PhotonComponent
        + HubbleParameter
        + CriticalDensity
        + DistanceMeasures
{
}
