// Copyright 2025 Cowboy AI, LLC.

//! The built-in capability catalog
//!
//! Every capability this crate publishes, grouped by family: components
//! (density parameters), parametrizations (Hubble and critical density),
//! distance measures, perturbations, the namespace capability, and the
//! identity capability. The catalog also carries the pre-composed aggregate
//! interfaces (`Cosmology`, `DistanceMeasures`, `StandardCosmology`).
//!
//! The catalog is process-wide and read-only: it is constructed fully on
//! first access and published through a `OnceLock`, so concurrent readers
//! need no synchronization discipline.
//!
//! Naming convention: present-day quantities carry a `0` suffix
//! (`omega_m0`), density parameters are `omega_*`, and the Hubble family
//! keeps its conventional capitalization (`H0`, `H`).

use crate::capability::Capability;
use crate::compose::{compose, AggregateInterface};
use crate::member::Arity;
use std::sync::OnceLock;

/// The full set of published capabilities and aggregate interfaces
///
/// Obtain the process-wide instance with [`catalog()`].
#[derive(Debug)]
pub struct Catalog {
    // Identity
    cosmology: Capability,

    // Components
    total: Capability,
    curvature: Capability,
    matter: Capability,
    baryon: Capability,
    dark_matter: Capability,
    dark_energy: Capability,
    neutrino: Capability,
    photon: Capability,

    // Parametrizations
    hubble: Capability,
    critical_density: Capability,

    // Distance measures
    scale_factor: Capability,
    cmb_temperature: Capability,
    comoving: Capability,
    proper: Capability,
    lookback: Capability,
    age: Capability,
    angular_diameter: Capability,
    luminosity: Capability,

    // Perturbations
    growth_factor: Capability,

    // Namespace
    namespace: Capability,
    constants_namespace: Capability,

    // Published aggregates
    cosmology_interface: AggregateInterface,
    distance_measures_interface: AggregateInterface,
    standard_cosmology_interface: AggregateInterface,
    namespace_interface: AggregateInterface,
    constants_interface: AggregateInterface,
}

impl Catalog {
    fn build() -> Self {
        let cosmology = Capability::new("cosmology")
            .with_property("name")
            .with_method("cosmology_namespace", Arity::NullaryOptional);

        let total = Capability::new("total_component")
            .with_property("omega_tot0")
            .with_method("omega_tot", Arity::UnaryOptional);
        let curvature = Capability::new("curvature_component")
            .with_property("omega_k0")
            .with_method("omega_k", Arity::Unary);
        let matter = Capability::new("matter_component")
            .with_property("omega_m0")
            .with_method("omega_m", Arity::Unary);
        let baryon = Capability::new("baryon_component")
            .with_property("omega_b0")
            .with_method("omega_b", Arity::Unary)
            .refining(&matter);
        let dark_matter = Capability::new("dark_matter_component")
            .with_property("omega_dm0")
            .with_method("omega_dm", Arity::Unary)
            .refining(&matter);
        let dark_energy = Capability::new("dark_energy_component")
            .with_property("omega_de0")
            .with_method("omega_de", Arity::Unary);
        let neutrino = Capability::new("neutrino_component")
            .with_property("omega_nu0")
            .with_property("neff")
            .with_property("m_nu")
            .with_method("omega_nu", Arity::Unary);
        let photon = Capability::new("photon_component")
            .with_property("omega_gamma0")
            .with_method("omega_gamma", Arity::Unary);

        let hubble = Capability::new("hubble_parameter")
            .with_property("H0")
            .with_property("hubble_distance")
            .with_property("hubble_time")
            .with_method("H", Arity::Unary)
            .with_method("h_over_h0", Arity::Unary);
        let critical_density = Capability::new("critical_density")
            .with_property("critical_density0")
            .with_method("critical_density", Arity::Unary);

        let scale_factor = Capability::new("scale_factor")
            .with_property("scale_factor0")
            .with_method("scale_factor", Arity::Unary);
        let cmb_temperature = Capability::new("cmb_temperature")
            .with_property("t_cmb0")
            .with_method("t_cmb", Arity::Unary);
        let comoving = Capability::new("comoving_distance_measures")
            .with_method("comoving_distance", Arity::UnaryOptional)
            .with_method("transverse_comoving_distance", Arity::UnaryOptional)
            .with_method("comoving_volume", Arity::UnaryOptional)
            .with_method("differential_comoving_volume", Arity::Unary)
            .with_method("inv_comoving_distance", Arity::Unary);
        let proper = Capability::new("proper_distance_measures")
            .with_method("proper_distance", Arity::UnaryOptional)
            .with_method("proper_time", Arity::UnaryOptional);
        let lookback = Capability::new("lookback_distance_measures")
            .with_method("lookback_distance", Arity::UnaryOptional)
            .with_method("lookback_time", Arity::UnaryOptional);
        let age = Capability::new("age").with_method("age", Arity::Unary);
        let angular_diameter = Capability::new("angular_diameter_distance")
            .with_method("angular_diameter_distance", Arity::UnaryOptional);
        let luminosity = Capability::new("luminosity_distance")
            .with_method("luminosity_distance", Arity::UnaryOptional);

        let growth_factor =
            Capability::new("growth_factor").with_method("growth_factor", Arity::Unary);

        let namespace = Capability::new("cosmology_namespace").with_property("constants");
        let constants_namespace = Capability::new("constants_namespace")
            .with_property("G")
            .with_property("c");

        let cosmology_interface =
            compose("Cosmology", &[&cosmology]).expect("base interface is conflict-free");

        let distance_measures_interface = compose(
            "DistanceMeasures",
            &[
                &scale_factor,
                &cmb_temperature,
                &comoving,
                &proper,
                &lookback,
                &age,
                &angular_diameter,
                &luminosity,
            ],
        )
        .expect("distance measures are conflict-free");

        let standard_cosmology_interface = compose(
            "StandardCosmology",
            &[
                &neutrino,
                &baryon,
                &photon,
                &dark_matter,
                &matter,
                &dark_energy,
                &curvature,
                &total,
                &hubble,
                &critical_density,
                &scale_factor,
                &cmb_temperature,
                &comoving,
                &proper,
                &lookback,
                &age,
                &angular_diameter,
                &luminosity,
                &cosmology,
            ],
        )
        .expect("standard cosmology is conflict-free");

        let namespace_interface =
            compose("CosmologyNamespace", &[&namespace]).expect("namespace is conflict-free");
        let constants_interface = compose("CosmologyConstantsNamespace", &[&constants_namespace])
            .expect("constants namespace is conflict-free");

        Catalog {
            cosmology,
            total,
            curvature,
            matter,
            baryon,
            dark_matter,
            dark_energy,
            neutrino,
            photon,
            hubble,
            critical_density,
            scale_factor,
            cmb_temperature,
            comoving,
            proper,
            lookback,
            age,
            angular_diameter,
            luminosity,
            growth_factor,
            namespace,
            constants_namespace,
            cosmology_interface,
            distance_measures_interface,
            standard_cosmology_interface,
            namespace_interface,
            constants_interface,
        }
    }

    /// Identity capability: `name` and `cosmology_namespace`
    pub fn cosmology(&self) -> &Capability {
        &self.cosmology
    }

    /// Total density component: `omega_tot0`, `omega_tot(z[, z2])`
    pub fn total(&self) -> &Capability {
        &self.total
    }

    /// Curvature component: `omega_k0`, `omega_k(z)`
    pub fn curvature(&self) -> &Capability {
        &self.curvature
    }

    /// Matter component: `omega_m0`, `omega_m(z)`
    pub fn matter(&self) -> &Capability {
        &self.matter
    }

    /// Baryon component; refines the matter component
    pub fn baryon(&self) -> &Capability {
        &self.baryon
    }

    /// Dark-matter component; refines the matter component
    pub fn dark_matter(&self) -> &Capability {
        &self.dark_matter
    }

    /// Dark-energy component: `omega_de0`, `omega_de(z)`
    pub fn dark_energy(&self) -> &Capability {
        &self.dark_energy
    }

    /// Neutrino component: `omega_nu0`, `neff`, `m_nu`, `omega_nu(z)`
    pub fn neutrino(&self) -> &Capability {
        &self.neutrino
    }

    /// Photon component: `omega_gamma0`, `omega_gamma(z)`
    pub fn photon(&self) -> &Capability {
        &self.photon
    }

    /// Hubble parametrization: `H0`, `hubble_distance`, `hubble_time`,
    /// `H(z)`, `h_over_h0(z)`
    pub fn hubble(&self) -> &Capability {
        &self.hubble
    }

    /// Critical density: `critical_density0`, `critical_density(z)`
    pub fn critical_density(&self) -> &Capability {
        &self.critical_density
    }

    /// Scale factor: `scale_factor0`, `scale_factor(z)`
    pub fn scale_factor(&self) -> &Capability {
        &self.scale_factor
    }

    /// CMB temperature: `t_cmb0`, `t_cmb(z)`
    pub fn cmb_temperature(&self) -> &Capability {
        &self.cmb_temperature
    }

    /// Comoving distance measures, including the inverse lookup
    pub fn comoving(&self) -> &Capability {
        &self.comoving
    }

    /// Proper distance and proper time
    pub fn proper(&self) -> &Capability {
        &self.proper
    }

    /// Lookback distance and lookback time
    pub fn lookback(&self) -> &Capability {
        &self.lookback
    }

    /// Age of the universe at a redshift
    pub fn age(&self) -> &Capability {
        &self.age
    }

    /// Angular diameter distance
    pub fn angular_diameter(&self) -> &Capability {
        &self.angular_diameter
    }

    /// Luminosity distance
    pub fn luminosity(&self) -> &Capability {
        &self.luminosity
    }

    /// Linear growth factor `D(z)`; not part of the standard union
    pub fn growth_factor(&self) -> &Capability {
        &self.growth_factor
    }

    /// Namespace capability: exposes `constants`
    pub fn namespace(&self) -> &Capability {
        &self.namespace
    }

    /// Constants sub-namespace capability: exposes `G` and `c`
    pub fn constants_namespace(&self) -> &Capability {
        &self.constants_namespace
    }

    /// The base `Cosmology` aggregate interface
    pub fn cosmology_interface(&self) -> &AggregateInterface {
        &self.cosmology_interface
    }

    /// The `DistanceMeasures` aggregate interface
    pub fn distance_measures_interface(&self) -> &AggregateInterface {
        &self.distance_measures_interface
    }

    /// The `StandardCosmology` aggregate interface: the union of every
    /// component, parametrization, and distance family plus the identity
    /// capability
    pub fn standard_cosmology_interface(&self) -> &AggregateInterface {
        &self.standard_cosmology_interface
    }

    /// The namespace aggregate interface
    pub fn namespace_interface(&self) -> &AggregateInterface {
        &self.namespace_interface
    }

    /// The constants sub-namespace aggregate interface
    pub fn constants_interface(&self) -> &AggregateInterface {
        &self.constants_interface
    }

    /// All capabilities, in family order
    pub fn capabilities(&self) -> Vec<&Capability> {
        vec![
            &self.cosmology,
            &self.total,
            &self.curvature,
            &self.matter,
            &self.baryon,
            &self.dark_matter,
            &self.dark_energy,
            &self.neutrino,
            &self.photon,
            &self.hubble,
            &self.critical_density,
            &self.scale_factor,
            &self.cmb_temperature,
            &self.comoving,
            &self.proper,
            &self.lookback,
            &self.age,
            &self.angular_diameter,
            &self.luminosity,
            &self.growth_factor,
            &self.namespace,
            &self.constants_namespace,
        ]
    }

    /// Look up a capability by name
    pub fn by_name(&self, name: &str) -> Option<&Capability> {
        self.capabilities()
            .into_iter()
            .find(|c| c.name() == name)
    }
}

/// The process-wide capability catalog
///
/// Constructed fully on first call; every later call observes the same
/// immutable instance.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(Catalog::build)
}
