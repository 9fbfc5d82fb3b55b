// Copyright 2025 Cowboy AI, LLC.

//! Namespace protocol tests: constants, recursion, and version negotiation.

use pretty_assertions::assert_eq;
use test_case::test_case;

use cosmology_api::namespace::{
    negotiate, ConstantsNamespace, CosmologyNamespace, NumericsNamespace,
};
use cosmology_api::{
    catalog, conforms, Arity, CosmologyError, CosmologyResult, LATEST_API_VERSION,
    SUPPORTED_API_VERSIONS,
};

fn fiducial_namespace() -> CosmologyNamespace {
    CosmologyNamespace::new(ConstantsNamespace::new(6.674e-11, 299_792.458))
}

#[test]
fn namespace_conforms_recursively() {
    let cat = catalog::catalog();
    let ns = fiducial_namespace();

    assert!(conforms(&ns, cat.namespace_interface()));
    assert!(conforms(ns.constants(), cat.constants_interface()));
}

#[test]
fn constants_hold_backend_values() {
    let ns = fiducial_namespace();
    assert_eq!(ns.constants().g, 6.674e-11);
    assert_eq!(ns.constants().c, 299_792.458);
}

#[test]
fn numerics_namespace_is_optional_and_checkable() {
    let cat = catalog::catalog();
    let plain = fiducial_namespace();
    assert!(plain.numerics().is_none());

    let with_fns = fiducial_namespace().with_numerics(
        NumericsNamespace::new()
            .with_function("exp", Arity::Unary)
            .with_function("power", Arity::UnaryOptional),
    );
    // Still a conformant namespace; the extra member does not interfere.
    assert!(conforms(&with_fns, cat.namespace_interface()));
    assert_eq!(
        with_fns.numerics().and_then(|n| n.function("power")),
        Some(Arity::UnaryOptional)
    );
}

#[test]
fn latest_version_is_the_default() {
    assert_eq!(negotiate(None).unwrap(), LATEST_API_VERSION);
    assert_eq!(
        SUPPORTED_API_VERSIONS.last().copied(),
        Some(LATEST_API_VERSION)
    );
}

#[test]
fn every_supported_version_negotiates_to_itself() {
    for version in SUPPORTED_API_VERSIONS {
        assert_eq!(negotiate(Some(version)).unwrap(), *version);
    }
}

#[test_case("9999.99" ; "unknown future version")]
#[test_case("1999.01" ; "unknown past version")]
#[test_case("2026" ; "missing month")]
#[test_case("2026.8" ; "short month")]
#[test_case("2026.13" ; "impossible month")]
#[test_case("latest" ; "non numeric")]
#[test_case("" ; "empty string")]
fn bad_versions_are_reported_not_defaulted(requested: &str) {
    let err = negotiate(Some(requested)).unwrap_err();
    match err {
        CosmologyError::UnsupportedApiVersion {
            requested: r,
            supported,
        } => {
            assert_eq!(r, requested);
            assert!(supported.contains(LATEST_API_VERSION));
        }
        other => panic!("expected UnsupportedApiVersion, got {other:?}"),
    }
}

/// A conformant object must report an unsupported-version error from its
/// namespace entry point, never hand back a default namespace.
#[test]
fn conformant_object_rejects_unknown_version() {
    use cosmology_api::traits::Cosmology;

    struct Backend {
        ns: CosmologyNamespace,
    }

    impl Cosmology for Backend {
        type Array = f64;
        type Input = f64;

        fn name(&self) -> Option<&str> {
            Some("backend")
        }

        fn cosmology_namespace(
            &self,
            api_version: Option<&str>,
        ) -> CosmologyResult<&CosmologyNamespace> {
            negotiate(api_version)?;
            Ok(&self.ns)
        }
    }

    let backend = Backend {
        ns: fiducial_namespace(),
    };
    assert!(backend.cosmology_namespace(None).is_ok());
    assert!(backend
        .cosmology_namespace(Some(LATEST_API_VERSION))
        .is_ok());
    assert!(matches!(
        backend.cosmology_namespace(Some("9999.99")),
        Err(CosmologyError::UnsupportedApiVersion { .. })
    ));
}
