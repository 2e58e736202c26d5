//! Benchmarks for bulk calculations across pool sizes.
//!
//! Run with:
//!   cargo bench --package vgc_calc --bench bulk_calc

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vgc_calc::{
    run_bulk, BaseStats, BulkOptions, BulkRequest, EvSpread, Move, NatureId, PokemonBuild, Type,
};

const DEFENDERS: &[(&str, [u16; 6], &[Type])] = &[
    ("Incineroar", [95, 115, 90, 80, 90, 60], &[Type::Fire, Type::Dark]),
    ("Rillaboom", [100, 125, 90, 60, 70, 85], &[Type::Grass]),
    ("Amoonguss", [114, 85, 70, 85, 80, 30], &[Type::Grass, Type::Poison]),
    ("Flutter Mane", [55, 55, 55, 135, 135, 135], &[Type::Ghost, Type::Fairy]),
    ("Urshifu", [100, 130, 100, 63, 60, 97], &[Type::Fighting, Type::Water]),
    ("Tornadus", [79, 115, 70, 125, 80, 111], &[Type::Flying]),
    ("Iron Hands", [154, 140, 108, 50, 68, 50], &[Type::Fighting, Type::Electric]),
    ("Landorus", [89, 145, 90, 105, 80, 91], &[Type::Ground, Type::Flying]),
];

fn request() -> BulkRequest {
    let attacker = PokemonBuild::builder(
        "Garchomp",
        BaseStats::from([108, 130, 95, 80, 85, 102]),
        &[Type::Dragon, Type::Ground],
    )
    .nature(NatureId::Jolly)
    .evs(EvSpread::new([4, 252, 0, 0, 0, 252]).expect("valid evs"))
    .build()
    .expect("valid build");

    let moves = vec![
        Move::physical("Earthquake", Type::Ground, 100).expect("valid move"),
        Move::physical("Dragon Claw", Type::Dragon, 80).expect("valid move"),
        Move::physical("Rock Slide", Type::Rock, 75).expect("valid move"),
        Move::physical("Poison Jab", Type::Poison, 80).expect("valid move"),
    ];

    let defenders = DEFENDERS
        .iter()
        .map(|&(name, base, types)| {
            PokemonBuild::builder(name, BaseStats::from(base), types)
                .evs(EvSpread::new([252, 0, 4, 0, 252, 0]).expect("valid evs"))
                .build()
                .expect("valid build")
        })
        .collect();

    BulkRequest::new(attacker, moves, defenders)
}

fn bench_bulk(c: &mut Criterion) {
    let request = request();
    let calcs = (request.defenders.len() * request.moves.len() * request.scenarios.len()) as u64;

    let mut group = c.benchmark_group("bulk_calc");
    group.throughput(Throughput::Elements(calcs));

    for threads in [1usize, 2, 4] {
        let options = BulkOptions {
            threads: Some(threads),
        };
        group.bench_with_input(BenchmarkId::new("threads", threads), &options, |b, options| {
            b.iter(|| run_bulk(&request, options))
        });
    }
    group.bench_function("global_pool", |b| {
        b.iter(|| run_bulk(&request, &BulkOptions::default()))
    });

    group.finish();
}

criterion_group!(benches, bench_bulk);
criterion_main!(benches);
