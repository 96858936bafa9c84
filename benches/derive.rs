//! Benchmarks for token derivation.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use swatch::parser::parse_hues;
use swatch::scale::{derive, MixMode};
use swatch::shadow::{shadows, static_shadows, ShadowParams};
use swatch::{generate, BuiltinHues, GenerateOptions};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn bench_parsing(c: &mut Criterion) {
    let source = fs::read_to_string(fixtures_dir().join("brand.hues.md")).unwrap();

    c.bench_function("parse_hues", |b| {
        b.iter(|| parse_hues(black_box(&source)).unwrap())
    });
}

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");
    let red = BuiltinHues::get("red").unwrap();

    group.bench_function("deferred", |b| {
        b.iter(|| derive(black_box(&red), MixMode::Deferred).unwrap())
    });

    group.bench_function("resolved", |b| {
        b.iter(|| derive(black_box(&red), MixMode::Resolved).unwrap())
    });

    group.finish();
}

fn bench_shadows(c: &mut Criterion) {
    let table = shadows(&ShadowParams::light(), &ShadowParams::dark());

    c.bench_function("static_shadows", |b| {
        b.iter(|| static_shadows(black_box(&table)))
    });
}

fn bench_generate(c: &mut Criterion) {
    let sets = BuiltinHues::all();
    let options = GenerateOptions::default();

    c.bench_function("generate_builtins", |b| {
        b.iter(|| generate(black_box(&sets), &options).unwrap())
    });
}

criterion_group!(benches, bench_parsing, bench_derive, bench_shadows, bench_generate);
criterion_main!(benches);
