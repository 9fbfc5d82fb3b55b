// Copyright 2025 Cowboy AI, LLC.

//! Runtime structural conformance checking
//!
//! This is the crate's weaker, opt-in counterpart to the compiled trait
//! layer. A compiled bound like `C: StandardCosmology` is proof of
//! conformance; [`conforms`] instead inspects the runtime shape of a value
//! that may come from a library that never declared the interface. The check
//! is presence-only: a required method is satisfied by any callable member of
//! that name, without signature matching. That limitation is deliberate and
//! mirrors shallow duck typing.

use crate::capability::Capability;
use crate::compose::AggregateInterface;
use crate::member::{MemberKind, MemberSpec};
use tracing::trace;

/// Opt-in reflection over a value's member surface
///
/// Foreign values cannot be introspected in Rust without cooperation, so
/// conformance checking runs against this trait rather than against the value
/// directly. Implementations report which members a value exposes and
/// whether each is a property or a callable. Implementations must be
/// read-only: `conforms` may be called repeatedly and concurrently.
pub trait Shape {
    /// The kind of the named member, or `None` if the value does not expose
    /// it
    fn member_kind(&self, name: &str) -> Option<MemberKind>;

    /// Names of all exposed members, in a stable order
    fn member_names(&self) -> Vec<String>;

    /// A short human-readable description of the value, used in wrapper
    /// delegation errors
    fn describe(&self) -> String {
        "object".to_string()
    }
}

fn satisfies(value: &(impl Shape + ?Sized), spec: &MemberSpec) -> bool {
    match value.member_kind(&spec.name) {
        None => false,
        // Presence-only: a property requirement is met by any member of the
        // name, and a method requirement by any callable. Arity is not
        // verified.
        Some(MemberKind::Property) => spec.kind == MemberKind::Property,
        Some(MemberKind::Method) => true,
    }
}

/// Test whether a value structurally satisfies an aggregate interface
///
/// Returns `false` for any missing member; never panics and never errors —
/// conformance is a predicate for branching, not a validation step that
/// halts a pipeline. Nominal type relationships are irrelevant: only the
/// reported shape matters.
///
/// # Example
///
/// ```
/// use cosmology_api::{catalog, conforms, DynCosmology};
/// use serde_json::json;
///
/// let cat = catalog::catalog();
/// let minimal = DynCosmology::named("minimal")
///     .with_attr("name", json!(null))
///     .with_method("cosmology_namespace", cosmology_api::Arity::Unary);
/// assert!(conforms(&minimal, cat.cosmology_interface()));
/// assert!(!conforms(&minimal, cat.standard_cosmology_interface()));
/// ```
pub fn conforms(value: &(impl Shape + ?Sized), interface: &AggregateInterface) -> bool {
    for spec in interface.members() {
        if !satisfies(value, spec) {
            trace!(
                interface = interface.name(),
                member = %spec,
                "conformance miss"
            );
            return false;
        }
    }
    true
}

/// Test whether a value structurally satisfies a single capability
pub fn conforms_capability(value: &(impl Shape + ?Sized), capability: &Capability) -> bool {
    capability.members().all(|spec| satisfies(value, spec))
}

/// The members of `interface` that `value` does not satisfy
///
/// Diagnostic companion to [`conforms`]: useful for reporting what a
/// not-yet-conformant library is missing.
pub fn missing_members<'a>(
    value: &(impl Shape + ?Sized),
    interface: &'a AggregateInterface,
) -> Vec<&'a MemberSpec> {
    interface
        .members()
        .filter(|spec| !satisfies(value, *spec))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose;
    use crate::member::Arity;
    use std::collections::BTreeMap;

    // A hand-rolled Shape, to show the checker needs no cooperation from
    // this crate's own dynamic object model.
    struct Plain(BTreeMap<&'static str, MemberKind>);

    impl Shape for Plain {
        fn member_kind(&self, name: &str) -> Option<MemberKind> {
            self.0.get(name).copied()
        }
        fn member_names(&self) -> Vec<String> {
            self.0.keys().map(|k| k.to_string()).collect()
        }
    }

    fn matter_iface() -> AggregateInterface {
        let matter = Capability::new("matter_component")
            .with_property("omega_m0")
            .with_method("omega_m", Arity::Unary);
        compose("matter", &[&matter]).unwrap()
    }

    #[test]
    fn test_presence_satisfies() {
        let value = Plain(BTreeMap::from([
            ("omega_m0", MemberKind::Property),
            ("omega_m", MemberKind::Method),
        ]));
        assert!(conforms(&value, &matter_iface()));
    }

    #[test]
    fn test_missing_one_member_fails() {
        let value = Plain(BTreeMap::from([("omega_m0", MemberKind::Property)]));
        let iface = matter_iface();
        assert!(!conforms(&value, &iface));
        let missing = missing_members(&value, &iface);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].name, "omega_m");
    }

    #[test]
    fn test_callable_satisfies_property_requirement() {
        // Presence-only: a callable member of the right name satisfies even
        // a property requirement, matching hasattr-style duck typing.
        let value = Plain(BTreeMap::from([
            ("omega_m0", MemberKind::Method),
            ("omega_m", MemberKind::Method),
        ]));
        assert!(conforms(&value, &matter_iface()));
    }

    #[test]
    fn test_plain_attribute_fails_method_requirement() {
        let value = Plain(BTreeMap::from([
            ("omega_m0", MemberKind::Property),
            ("omega_m", MemberKind::Property),
        ]));
        assert!(!conforms(&value, &matter_iface()));
        let iface = matter_iface();
        let missing = missing_members(&value, &iface);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].name, "omega_m");
    }

    #[test]
    fn test_arity_not_verified() {
        // Shallow duck typing: presence of a callable is enough even though
        // the declared arity cannot be observed through Shape.
        let wide = Capability::new("wide").with_method("comoving_distance", Arity::UnaryOptional);
        let iface = compose("distances", &[&wide]).unwrap();
        let value = Plain(BTreeMap::from([("comoving_distance", MemberKind::Method)]));
        assert!(conforms(&value, &iface));
    }

    #[test]
    fn test_extra_members_ignored() {
        let value = Plain(BTreeMap::from([
            ("omega_m0", MemberKind::Property),
            ("omega_m", MemberKind::Method),
            ("favorite_color", MemberKind::Property),
        ]));
        assert!(conforms(&value, &matter_iface()));
    }
}
