
use config_generator::{generate_profile, SETTINGS};
use criterion::{criterion_group, criterion_main, Criterion};
use dayzcfg::{ConfigDocument, ConfigFile};

fn document(profile: &str) -> ConfigDocument {
    ConfigDocument::from_files(
        ConfigFile::from_text("bench.DayZProfile", profile),
        ConfigFile::from_text("dayz.cfg", SETTINGS),
    )
}

fn mutation_benchmarks(c: &mut Criterion) {
    let small = generate_profile(50);
    let large = generate_profile(1_000);

    let mut group = c.benchmark_group("mutation");

    group.bench_function("set_player_name", |b| {
        let mut doc = document(&small);
        b.iter(|| doc.set_player_name("Survivor"))
    });

    group.bench_function("serialize_small", |b| {
        let doc = document(&small);
        b.iter(|| doc.serialize_profile())
    });

    group.bench_function("serialize_large", |b| {
        let doc = document(&large);
        b.iter(|| doc.serialize_profile())
    });

    // Round-trip: parse -> mutate -> serialize -> parse
    group.bench_function("round_trip", |b| {
        b.iter(|| {
            let mut doc = document(&small);
            doc.set_player_name("Survivor").unwrap();
            let output = doc.serialize_profile();
            ConfigFile::from_text("bench.DayZProfile", &output)
        })
    });

    group.finish();
}

criterion_group!(benches, mutation_benchmarks);
criterion_main!(benches);
