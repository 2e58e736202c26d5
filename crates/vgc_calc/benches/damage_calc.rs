//! Benchmarks for the damage calculation pipeline.
//!
//! Run with:
//!   cargo bench --package vgc_calc --bench damage_calc

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vgc_calc::analysis::repeated_hit_survival;
use vgc_calc::{
    calculate_damage, BaseStats, DamageModifiers, EvSpread, ItemId, Move, NatureId,
    PokemonBuild, Type,
};

/// Garchomp (Jolly, 252 Atk / 252 Spe) using Earthquake into Tyranitar.
fn setup_singles() -> (PokemonBuild, PokemonBuild, Move) {
    let garchomp = PokemonBuild::builder(
        "Garchomp",
        BaseStats::from([108, 130, 95, 80, 85, 102]),
        &[Type::Dragon, Type::Ground],
    )
    .nature(NatureId::Jolly)
    .evs(EvSpread::new([4, 252, 0, 0, 0, 252]).expect("valid evs"))
    .item(Some(ItemId::LifeOrb))
    .build()
    .expect("valid build");

    let tyranitar = PokemonBuild::builder(
        "Tyranitar",
        BaseStats::from([100, 134, 110, 95, 100, 61]),
        &[Type::Rock, Type::Dark],
    )
    .nature(NatureId::Careful)
    .evs(EvSpread::new([252, 0, 128, 0, 128, 0]).expect("valid evs"))
    .build()
    .expect("valid build");

    let earthquake = Move::physical("Earthquake", Type::Ground, 100).expect("valid move");
    (garchomp, tyranitar, earthquake)
}

fn bench_single_damage_calc(c: &mut Criterion) {
    let (attacker, defender, mv) = setup_singles();
    let mods = DamageModifiers::default();

    c.bench_function("damage_calc_single", |b| {
        b.iter(|| {
            calculate_damage(
                black_box(&attacker),
                black_box(&defender),
                black_box(&mv),
                black_box(&mods),
            )
        })
    });
}

fn bench_damage_calc_with_crit(c: &mut Criterion) {
    let (attacker, defender, mv) = setup_singles();
    let plain = DamageModifiers::default();
    let crit = DamageModifiers::default().with_crit();

    let mut group = c.benchmark_group("damage_calc_crit");

    group.bench_function("non_crit", |b| {
        b.iter(|| calculate_damage(&attacker, &defender, &mv, black_box(&plain)))
    });

    group.bench_function("crit", |b| {
        b.iter(|| calculate_damage(&attacker, &defender, &mv, black_box(&crit)))
    });

    group.finish();
}

fn bench_damage_calc_throughput(c: &mut Criterion) {
    let (attacker, defender, mv) = setup_singles();
    let mods = DamageModifiers::default();

    let mut group = c.benchmark_group("damage_calc_throughput");

    for batch_size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*batch_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            batch_size,
            |b, &size| {
                b.iter(|| {
                    for _ in 0..size {
                        let _ = calculate_damage(&attacker, &defender, &mv, &mods);
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_survival(c: &mut Criterion) {
    let (attacker, defender, mv) = setup_singles();
    let result = calculate_damage(&attacker, &defender, &mv, &DamageModifiers::default())
        .expect("calculation succeeds");

    let mut group = c.benchmark_group("survival");
    for hits in [2u8, 3] {
        group.bench_with_input(BenchmarkId::from_parameter(hits), &hits, |b, &hits| {
            b.iter(|| repeated_hit_survival(black_box(&result.rolls), hits, result.defender_hp))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_damage_calc,
    bench_damage_calc_with_crit,
    bench_damage_calc_throughput,
    bench_survival,
);

criterion_main!(benches);
