// Copyright 2025 Cowboy AI, LLC.

//! The compiled trait layer
//!
//! One Rust trait per catalog capability, for libraries that *declare*
//! conformance. A bound like `C: StandardCosmology` is the strong,
//! compile-time guarantee; the runtime [`conforms`](crate::conforms) check is
//! the weaker structural one for foreign values. The two layers mirror each
//! other member for member.
//!
//! No trait here ships a default implementation of a physical quantity:
//! capabilities union required members only, and computing actual
//! cosmological values is the implementing library's responsibility.

pub mod components;
pub mod core;
pub mod distances;
pub mod parametrization;
pub mod perturbations;
pub mod standard;

pub use self::components::{
    BaryonComponent, CurvatureComponent, DarkEnergyComponent, DarkMatterComponent,
    MatterComponent, NeutrinoComponent, PhotonComponent, TotalComponent,
};
pub use self::core::Cosmology;
pub use self::distances::{
    Age, AngularDiameterDistance, CmbTemperature, ComovingDistances, DistanceMeasures,
    LookbackDistances, LuminosityDistance, ProperDistances, ScaleFactor,
};
pub use self::parametrization::{CriticalDensity, HubbleParameter};
pub use self::perturbations::GrowthFactor;
pub use self::standard::StandardCosmology;
