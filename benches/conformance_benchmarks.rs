// Copyright 2025 Cowboy AI, LLC.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;

use cosmology_api::{catalog, compose, conforms, Arity, DynCosmology, MemberKind};

fn full_surface() -> DynCosmology {
    let cat = catalog::catalog();
    let mut cosmo = DynCosmology::named("bench_full");
    for spec in cat.standard_cosmology_interface().members() {
        cosmo = match spec.kind {
            MemberKind::Property => cosmo.with_attr(&spec.name, json!(0.0)),
            MemberKind::Method => cosmo.with_method(&spec.name, spec.arity),
        };
    }
    cosmo
}

fn benchmark_conforms(c: &mut Criterion) {
    let cat = catalog::catalog();
    let full = full_surface();
    let minimal = DynCosmology::named("bench_minimal")
        .with_attr("name", json!(null))
        .with_method("cosmology_namespace", Arity::NullaryOptional);

    let mut group = c.benchmark_group("conforms");
    group.bench_with_input(
        BenchmarkId::new("standard", "full surface"),
        &full,
        |b, cosmo| b.iter(|| conforms(black_box(cosmo), cat.standard_cosmology_interface())),
    );
    group.bench_with_input(
        BenchmarkId::new("standard", "early miss"),
        &minimal,
        |b, cosmo| b.iter(|| conforms(black_box(cosmo), cat.standard_cosmology_interface())),
    );
    group.bench_with_input(BenchmarkId::new("base", "minimal"), &minimal, |b, cosmo| {
        b.iter(|| conforms(black_box(cosmo), cat.cosmology_interface()))
    });
    group.finish();
}

fn benchmark_compose(c: &mut Criterion) {
    let cat = catalog::catalog();
    let capabilities = cat.capabilities();

    c.bench_function("compose/standard union", |b| {
        b.iter(|| compose("bench", black_box(&capabilities[..19])).unwrap())
    });
}

criterion_group!(benches, benchmark_conforms, benchmark_compose);
criterion_main!(benches);
