// Copyright 2025 Cowboy AI, LLC.

//! Wrapper adapters: re-exposing a conformant surface over a foreign object
//!
//! A wrapper owns exactly one reference to a wrapped object, `cosmo`. For
//! every member of its target aggregate interface it supplies its own
//! implementation — here a direct pass-through to the wrapped object's
//! same-named member; an adapting library can override individual methods to
//! re-derive values with incompatible shapes. Every *other* member is
//! reached through the explicit [`extra`](CosmologyWrapper::extra) escape
//! hatch rather than implicit interception of arbitrary member access, and a
//! name absent from both the target interface and the wrapped object is a
//! clear unknown-member error — delegation always terminates.

use crate::catalog::catalog;
use crate::compose::AggregateInterface;
use crate::conformance::Shape;
use crate::dynamic::{DynMember, MemberAccess};
use crate::errors::{CosmologyError, CosmologyResult};
use crate::member::MemberKind;
use crate::namespace::CosmologyNamespace;
use crate::traits::{
    Age, AngularDiameterDistance, BaryonComponent, CmbTemperature, ComovingDistances, Cosmology,
    CriticalDensity, CurvatureComponent, DarkEnergyComponent, DarkMatterComponent, GrowthFactor,
    HubbleParameter, LookbackDistances, LuminosityDistance, MatterComponent, NeutrinoComponent,
    PhotonComponent, ProperDistances, ScaleFactor, TotalComponent,
};

/// Adapter targeting the base `Cosmology` aggregate interface
///
/// # Example
///
/// ```
/// use cosmology_api::{catalog, conforms, CosmologyWrapper, DynCosmology};
/// use serde_json::json;
///
/// let foreign = DynCosmology::named("legacy")
///     .with_attr("distance_modulus_table", json!([42.1, 43.7]));
/// let wrapper = CosmologyWrapper::new(foreign);
/// assert!(conforms(&wrapper, catalog::catalog().cosmology_interface()));
/// assert!(wrapper.extra("distance_modulus_table").is_ok());
/// assert!(wrapper.extra("totally_unknown_field").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CosmologyWrapper<C> {
    /// The wrapped foreign object
    pub cosmo: C,
}

impl<C> CosmologyWrapper<C> {
    /// Wrap a foreign object
    pub fn new(cosmo: C) -> Self {
        CosmologyWrapper { cosmo }
    }

    /// The aggregate interface this wrapper presents
    pub fn target_interface() -> &'static AggregateInterface {
        catalog().cosmology_interface()
    }

    /// Give the wrapped object back
    pub fn into_inner(self) -> C {
        self.cosmo
    }
}

impl<C: MemberAccess> CosmologyWrapper<C> {
    /// Explicit forwarding for members outside the target interface
    ///
    /// # Errors
    ///
    /// [`CosmologyError::UnknownMember`] when the wrapped object does not
    /// expose the name either.
    pub fn extra(&self, name: &str) -> CosmologyResult<&DynMember> {
        self.cosmo
            .member(name)
            .ok_or_else(|| CosmologyError::unknown_member(name, self.cosmo.describe()))
    }
}

impl<C: Cosmology> Cosmology for CosmologyWrapper<C> {
    type Array = C::Array;
    type Input = C::Input;

    fn name(&self) -> Option<&str> {
        self.cosmo.name()
    }

    fn cosmology_namespace(
        &self,
        api_version: Option<&str>,
    ) -> CosmologyResult<&CosmologyNamespace> {
        self.cosmo.cosmology_namespace(api_version)
    }
}

impl<C: Shape> Shape for CosmologyWrapper<C> {
    fn member_kind(&self, name: &str) -> Option<MemberKind> {
        Self::target_interface()
            .member(name)
            .map(|spec| spec.kind)
            .or_else(|| self.cosmo.member_kind(name))
    }

    fn member_names(&self) -> Vec<String> {
        union_names(Self::target_interface(), &self.cosmo)
    }

    fn describe(&self) -> String {
        format!("CosmologyWrapper({})", self.cosmo.describe())
    }
}

/// Adapter targeting the `StandardCosmology` aggregate interface
///
/// Pass-through implementations of every capability trait are provided
/// whenever the wrapped object implements them, so a conformant object stays
/// conformant through the wrapper; an adapting library wraps this type (or
/// implements the missing traits on its own wrapper) to fill in gaps.
#[derive(Debug, Clone)]
pub struct StandardCosmologyWrapper<C> {
    /// The wrapped foreign object
    pub cosmo: C,
}

impl<C> StandardCosmologyWrapper<C> {
    /// Wrap a foreign object
    pub fn new(cosmo: C) -> Self {
        StandardCosmologyWrapper { cosmo }
    }

    /// The aggregate interface this wrapper presents
    pub fn target_interface() -> &'static AggregateInterface {
        catalog().standard_cosmology_interface()
    }

    /// Give the wrapped object back
    pub fn into_inner(self) -> C {
        self.cosmo
    }
}

impl<C: MemberAccess> StandardCosmologyWrapper<C> {
    /// Explicit forwarding for members outside the target interface
    ///
    /// # Errors
    ///
    /// [`CosmologyError::UnknownMember`] when the wrapped object does not
    /// expose the name either.
    pub fn extra(&self, name: &str) -> CosmologyResult<&DynMember> {
        self.cosmo
            .member(name)
            .ok_or_else(|| CosmologyError::unknown_member(name, self.cosmo.describe()))
    }
}

impl<C: Shape> Shape for StandardCosmologyWrapper<C> {
    fn member_kind(&self, name: &str) -> Option<MemberKind> {
        Self::target_interface()
            .member(name)
            .map(|spec| spec.kind)
            .or_else(|| self.cosmo.member_kind(name))
    }

    fn member_names(&self) -> Vec<String> {
        union_names(Self::target_interface(), &self.cosmo)
    }

    fn describe(&self) -> String {
        format!("StandardCosmologyWrapper({})", self.cosmo.describe())
    }
}

fn union_names(target: &AggregateInterface, cosmo: &(impl Shape + ?Sized)) -> Vec<String> {
    let mut names: Vec<String> = target.members().map(|m| m.name.clone()).collect();
    for name in cosmo.member_names() {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

impl<C: Cosmology> Cosmology for StandardCosmologyWrapper<C> {
    type Array = C::Array;
    type Input = C::Input;

    fn name(&self) -> Option<&str> {
        self.cosmo.name()
    }

    fn cosmology_namespace(
        &self,
        api_version: Option<&str>,
    ) -> CosmologyResult<&CosmologyNamespace> {
        self.cosmo.cosmology_namespace(api_version)
    }
}

impl<C: TotalComponent> TotalComponent for StandardCosmologyWrapper<C> {
    fn omega_tot0(&self) -> Self::Array {
        self.cosmo.omega_tot0()
    }

    fn omega_tot(&self, z: Self::Input, z2: Option<Self::Input>) -> Self::Array {
        self.cosmo.omega_tot(z, z2)
    }
}

impl<C: CurvatureComponent> CurvatureComponent for StandardCosmologyWrapper<C> {
    fn omega_k0(&self) -> Self::Array {
        self.cosmo.omega_k0()
    }

    fn omega_k(&self, z: Self::Input) -> Self::Array {
        self.cosmo.omega_k(z)
    }
}

impl<C: MatterComponent> MatterComponent for StandardCosmologyWrapper<C> {
    fn omega_m0(&self) -> Self::Array {
        self.cosmo.omega_m0()
    }

    fn omega_m(&self, z: Self::Input) -> Self::Array {
        self.cosmo.omega_m(z)
    }
}

impl<C: BaryonComponent> BaryonComponent for StandardCosmologyWrapper<C> {
    fn omega_b0(&self) -> Self::Array {
        self.cosmo.omega_b0()
    }

    fn omega_b(&self, z: Self::Input) -> Self::Array {
        self.cosmo.omega_b(z)
    }
}

impl<C: DarkMatterComponent> DarkMatterComponent for StandardCosmologyWrapper<C> {
    fn omega_dm0(&self) -> Self::Array {
        self.cosmo.omega_dm0()
    }

    fn omega_dm(&self, z: Self::Input) -> Self::Array {
        self.cosmo.omega_dm(z)
    }
}

impl<C: DarkEnergyComponent> DarkEnergyComponent for StandardCosmologyWrapper<C> {
    fn omega_de0(&self) -> Self::Array {
        self.cosmo.omega_de0()
    }

    fn omega_de(&self, z: Self::Input) -> Self::Array {
        self.cosmo.omega_de(z)
    }
}

impl<C: NeutrinoComponent> NeutrinoComponent for StandardCosmologyWrapper<C> {
    fn omega_nu0(&self) -> Self::Array {
        self.cosmo.omega_nu0()
    }

    fn neff(&self) -> Self::Array {
        self.cosmo.neff()
    }

    fn m_nu(&self) -> Vec<Self::Array> {
        self.cosmo.m_nu()
    }

    fn omega_nu(&self, z: Self::Input) -> Self::Array {
        self.cosmo.omega_nu(z)
    }
}

impl<C: PhotonComponent> PhotonComponent for StandardCosmologyWrapper<C> {
    fn omega_gamma0(&self) -> Self::Array {
        self.cosmo.omega_gamma0()
    }

    fn omega_gamma(&self, z: Self::Input) -> Self::Array {
        self.cosmo.omega_gamma(z)
    }
}

impl<C: HubbleParameter> HubbleParameter for StandardCosmologyWrapper<C> {
    fn h0(&self) -> Self::Array {
        self.cosmo.h0()
    }

    fn hubble_distance(&self) -> Self::Array {
        self.cosmo.hubble_distance()
    }

    fn hubble_time(&self) -> Self::Array {
        self.cosmo.hubble_time()
    }

    fn h(&self, z: Self::Input) -> Self::Array {
        self.cosmo.h(z)
    }

    fn h_over_h0(&self, z: Self::Input) -> Self::Array {
        self.cosmo.h_over_h0(z)
    }
}

impl<C: CriticalDensity> CriticalDensity for StandardCosmologyWrapper<C> {
    fn critical_density0(&self) -> Self::Array {
        self.cosmo.critical_density0()
    }

    fn critical_density(&self, z: Self::Input) -> Self::Array {
        self.cosmo.critical_density(z)
    }
}

impl<C: ScaleFactor> ScaleFactor for StandardCosmologyWrapper<C> {
    fn scale_factor0(&self) -> Self::Array {
        self.cosmo.scale_factor0()
    }

    fn scale_factor(&self, z: Self::Input) -> Self::Array {
        self.cosmo.scale_factor(z)
    }
}

impl<C: CmbTemperature> CmbTemperature for StandardCosmologyWrapper<C> {
    fn t_cmb0(&self) -> Self::Array {
        self.cosmo.t_cmb0()
    }

    fn t_cmb(&self, z: Self::Input) -> Self::Array {
        self.cosmo.t_cmb(z)
    }
}

impl<C: ComovingDistances> ComovingDistances for StandardCosmologyWrapper<C> {
    fn comoving_distance(&self, z: Self::Input, z2: Option<Self::Input>) -> Self::Array {
        self.cosmo.comoving_distance(z, z2)
    }

    fn inv_comoving_distance(&self, dc: Self::Input) -> Self::Array {
        self.cosmo.inv_comoving_distance(dc)
    }

    fn transverse_comoving_distance(
        &self,
        z: Self::Input,
        z2: Option<Self::Input>,
    ) -> Self::Array {
        self.cosmo.transverse_comoving_distance(z, z2)
    }

    fn comoving_volume(&self, z: Self::Input, z2: Option<Self::Input>) -> Self::Array {
        self.cosmo.comoving_volume(z, z2)
    }

    fn differential_comoving_volume(&self, z: Self::Input) -> Self::Array {
        self.cosmo.differential_comoving_volume(z)
    }
}

impl<C: ProperDistances> ProperDistances for StandardCosmologyWrapper<C> {
    fn proper_distance(&self, z: Self::Input, z2: Option<Self::Input>) -> Self::Array {
        self.cosmo.proper_distance(z, z2)
    }

    fn proper_time(&self, z: Self::Input, z2: Option<Self::Input>) -> Self::Array {
        self.cosmo.proper_time(z, z2)
    }
}

impl<C: LookbackDistances> LookbackDistances for StandardCosmologyWrapper<C> {
    fn lookback_distance(&self, z: Self::Input, z2: Option<Self::Input>) -> Self::Array {
        self.cosmo.lookback_distance(z, z2)
    }

    fn lookback_time(&self, z: Self::Input, z2: Option<Self::Input>) -> Self::Array {
        self.cosmo.lookback_time(z, z2)
    }
}

impl<C: Age> Age for StandardCosmologyWrapper<C> {
    fn age(&self, z: Self::Input) -> Self::Array {
        self.cosmo.age(z)
    }
}

impl<C: AngularDiameterDistance> AngularDiameterDistance for StandardCosmologyWrapper<C> {
    fn angular_diameter_distance(&self, z: Self::Input, z2: Option<Self::Input>) -> Self::Array {
        self.cosmo.angular_diameter_distance(z, z2)
    }
}

impl<C: LuminosityDistance> LuminosityDistance for StandardCosmologyWrapper<C> {
    fn luminosity_distance(&self, z: Self::Input, z2: Option<Self::Input>) -> Self::Array {
        self.cosmo.luminosity_distance(z, z2)
    }
}

// Outside the standard surface, but still forwarded when the wrapped
// backend carries it.
impl<C: GrowthFactor> GrowthFactor for StandardCosmologyWrapper<C> {
    fn growth_factor(&self, z: Self::Input) -> Self::Array {
        self.cosmo.growth_factor(z)
    }
}
