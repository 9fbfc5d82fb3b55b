// Copyright 2025 Cowboy AI, LLC.

//! Wrapper adapter tests: pass-through delegation, the explicit escape
//! hatch, and conformance of the wrapped surface.

use pretty_assertions::assert_eq;
use serde_json::json;

use cosmology_api::namespace::{ConstantsNamespace, CosmologyNamespace};
use cosmology_api::traits::{
    Age, AngularDiameterDistance, BaryonComponent, CmbTemperature, ComovingDistances, Cosmology,
    CriticalDensity, CurvatureComponent, DarkEnergyComponent, DarkMatterComponent, GrowthFactor,
    HubbleParameter, LookbackDistances, LuminosityDistance, MatterComponent, NeutrinoComponent,
    PhotonComponent, ProperDistances, ScaleFactor, StandardCosmology, TotalComponent,
};
use cosmology_api::{
    catalog, conforms, negotiate, Arity, CosmologyError, CosmologyResult, CosmologyWrapper,
    DynCosmology, MemberKind, Shape, StandardCosmologyWrapper,
};

/// A deliberately boring declared-conformant backend. Values are fixed
/// placeholders; the physics is the caller's business, not this crate's.
struct Fiducial {
    ns: CosmologyNamespace,
}

impl Fiducial {
    fn new() -> Self {
        Fiducial {
            ns: CosmologyNamespace::new(ConstantsNamespace::new(4.301e-3, 299_792.458)),
        }
    }
}

impl Cosmology for Fiducial {
    type Array = f64;
    type Input = f64;

    fn name(&self) -> Option<&str> {
        Some("fiducial")
    }

    fn cosmology_namespace(
        &self,
        api_version: Option<&str>,
    ) -> CosmologyResult<&CosmologyNamespace> {
        negotiate(api_version)?;
        Ok(&self.ns)
    }
}

impl TotalComponent for Fiducial {
    fn omega_tot0(&self) -> f64 {
        1.0
    }
    fn omega_tot(&self, _z: f64, _z2: Option<f64>) -> f64 {
        1.0
    }
}

impl CurvatureComponent for Fiducial {
    fn omega_k0(&self) -> f64 {
        0.0
    }
    fn omega_k(&self, _z: f64) -> f64 {
        0.0
    }
}

impl MatterComponent for Fiducial {
    fn omega_m0(&self) -> f64 {
        0.30966
    }
    fn omega_m(&self, _z: f64) -> f64 {
        0.30966
    }
}

impl BaryonComponent for Fiducial {
    fn omega_b0(&self) -> f64 {
        0.04897
    }
    fn omega_b(&self, _z: f64) -> f64 {
        0.04897
    }
}

impl DarkMatterComponent for Fiducial {
    fn omega_dm0(&self) -> f64 {
        0.26069
    }
    fn omega_dm(&self, _z: f64) -> f64 {
        0.26069
    }
}

impl DarkEnergyComponent for Fiducial {
    fn omega_de0(&self) -> f64 {
        0.68885
    }
    fn omega_de(&self, _z: f64) -> f64 {
        0.68885
    }
}

impl NeutrinoComponent for Fiducial {
    fn omega_nu0(&self) -> f64 {
        0.00144
    }
    fn neff(&self) -> f64 {
        3.046
    }
    fn m_nu(&self) -> Vec<f64> {
        vec![0.0, 0.0, 0.06]
    }
    fn omega_nu(&self, _z: f64) -> f64 {
        0.00144
    }
}

impl PhotonComponent for Fiducial {
    fn omega_gamma0(&self) -> f64 {
        5.4e-5
    }
    fn omega_gamma(&self, _z: f64) -> f64 {
        5.4e-5
    }
}

impl HubbleParameter for Fiducial {
    fn h0(&self) -> f64 {
        67.66
    }
    fn hubble_distance(&self) -> f64 {
        4431.0
    }
    fn hubble_time(&self) -> f64 {
        14.45
    }
    fn h(&self, _z: f64) -> f64 {
        67.66
    }
    fn h_over_h0(&self, _z: f64) -> f64 {
        1.0
    }
}

impl CriticalDensity for Fiducial {
    fn critical_density0(&self) -> f64 {
        1.27e11
    }
    fn critical_density(&self, _z: f64) -> f64 {
        1.27e11
    }
}

impl ScaleFactor for Fiducial {
    fn scale_factor0(&self) -> f64 {
        1.0
    }
    fn scale_factor(&self, z: f64) -> f64 {
        1.0 / (1.0 + z)
    }
}

impl CmbTemperature for Fiducial {
    fn t_cmb0(&self) -> f64 {
        2.7255
    }
    fn t_cmb(&self, z: f64) -> f64 {
        2.7255 * (1.0 + z)
    }
}

impl ComovingDistances for Fiducial {
    fn comoving_distance(&self, _z: f64, _z2: Option<f64>) -> f64 {
        0.0
    }
    fn inv_comoving_distance(&self, _dc: f64) -> f64 {
        0.0
    }
    fn transverse_comoving_distance(&self, _z: f64, _z2: Option<f64>) -> f64 {
        0.0
    }
    fn comoving_volume(&self, _z: f64, _z2: Option<f64>) -> f64 {
        0.0
    }
    fn differential_comoving_volume(&self, _z: f64) -> f64 {
        0.0
    }
}

impl ProperDistances for Fiducial {
    fn proper_distance(&self, _z: f64, _z2: Option<f64>) -> f64 {
        0.0
    }
    fn proper_time(&self, _z: f64, _z2: Option<f64>) -> f64 {
        0.0
    }
}

impl LookbackDistances for Fiducial {
    fn lookback_distance(&self, _z: f64, _z2: Option<f64>) -> f64 {
        0.0
    }
    fn lookback_time(&self, _z: f64, _z2: Option<f64>) -> f64 {
        0.0
    }
}

impl Age for Fiducial {
    fn age(&self, _z: f64) -> f64 {
        13.78
    }
}

impl AngularDiameterDistance for Fiducial {
    fn angular_diameter_distance(&self, _z: f64, _z2: Option<f64>) -> f64 {
        0.0
    }
}

impl LuminosityDistance for Fiducial {
    fn luminosity_distance(&self, _z: f64, _z2: Option<f64>) -> f64 {
        0.0
    }
}

impl GrowthFactor for Fiducial {
    fn growth_factor(&self, z: f64) -> f64 {
        1.0 / (1.0 + z)
    }
}

fn assert_standard<C: StandardCosmology>(_c: &C) {}

fn growth_of<C: StandardCosmology + GrowthFactor>(c: &C, z: C::Input) -> C::Array {
    c.growth_factor(z)
}

#[test]
fn declared_conformance_survives_the_wrapper() {
    let fiducial = Fiducial::new();
    assert_standard(&fiducial);

    let wrapper = StandardCosmologyWrapper::new(fiducial);
    // The blanket StandardCosmology impl applies to the wrapper too.
    assert_standard(&wrapper);

    assert_eq!(wrapper.name(), Some("fiducial"));
    assert_eq!(wrapper.omega_m0(), 0.30966);
    assert_eq!(wrapper.scale_factor(1.0), 0.5);
    assert_eq!(wrapper.t_cmb(1.0), 5.451);
    assert_eq!(wrapper.m_nu(), vec![0.0, 0.0, 0.06]);
    assert_eq!(wrapper.comoving_distance(0.5, Some(1.0)), 0.0);
}

#[test]
fn growth_factor_is_an_opt_in_extension() {
    // Perturbation theory stacks on top of the standard surface as an extra
    // bound; the standard union itself never requires it.
    let fiducial = Fiducial::new();
    assert_eq!(growth_of(&fiducial, 1.0), 0.5);
    assert_eq!(fiducial.growth_factor(0.0), 1.0);
    // The wrapper forwards it when the wrapped backend carries it.
    let wrapper = StandardCosmologyWrapper::new(fiducial);
    assert_eq!(wrapper.growth_factor(1.0), 0.5);
    assert!(!catalog::catalog()
        .standard_cosmology_interface()
        .requires("growth_factor"));
}

#[test]
fn wrapper_forwards_version_negotiation() {
    let wrapper = StandardCosmologyWrapper::new(Fiducial::new());
    assert!(wrapper.cosmology_namespace(None).is_ok());
    assert!(matches!(
        wrapper.cosmology_namespace(Some("9999.99")),
        Err(CosmologyError::UnsupportedApiVersion { .. })
    ));
}

fn foreign() -> DynCosmology {
    DynCosmology::named("legacy_lib.Cosmo")
        .with_attr("name", json!("legacy"))
        .with_method("cosmology_namespace", Arity::NullaryOptional)
        .with_attr("omega_m0", json!(0.27))
        .with_method("omega_m", Arity::Unary)
        .with_attr("survey_footprint", json!("south"))
}

#[test]
fn wrapper_conforms_when_members_jointly_cover_the_target() {
    let wrapper = CosmologyWrapper::new(foreign());
    assert!(conforms(
        &wrapper,
        CosmologyWrapper::<DynCosmology>::target_interface()
    ));
}

#[test]
fn delegation_is_transparent_for_non_interface_members() {
    let cosmo = foreign();
    let expected = cosmo.get("survey_footprint").cloned();
    let wrapper = CosmologyWrapper::new(cosmo);
    assert_eq!(wrapper.extra("survey_footprint").ok().cloned(), expected);
}

#[test]
fn unknown_member_is_a_clear_error_not_a_recursion() {
    let wrapper = StandardCosmologyWrapper::new(foreign());
    let err = wrapper.extra("totally_unknown_field").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown member `totally_unknown_field` on wrapper around `legacy_lib.Cosmo`"
    );
}

#[test]
fn standard_wrapper_reports_target_surface_plus_extras() {
    let wrapper = StandardCosmologyWrapper::new(foreign());

    // Target interface members are reported with their declared kinds.
    assert_eq!(wrapper.member_kind("omega_b0"), Some(MemberKind::Property));
    assert_eq!(wrapper.member_kind("age"), Some(MemberKind::Method));
    // The wrapped object's own members remain visible.
    assert_eq!(
        wrapper.member_kind("survey_footprint"),
        Some(MemberKind::Property)
    );
    assert_eq!(wrapper.member_kind("nope"), None);

    assert!(conforms(
        &wrapper,
        catalog::catalog().standard_cosmology_interface()
    ));
}

#[test]
fn into_inner_returns_the_wrapped_object() {
    let wrapper = CosmologyWrapper::new(foreign());
    let cosmo = wrapper.into_inner();
    assert_eq!(cosmo.label(), "legacy_lib.Cosmo");
}
